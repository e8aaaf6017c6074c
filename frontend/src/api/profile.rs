use reqwest::{
    multipart::{Form, Part},
    Method,
};

use super::{
    client::{path_segment, ApiClient},
    error::ApiError,
    types::{
        AvatarResponse, DocumentUpload, EmployeeDocument, FileUpload, MessageResponse, Profile,
        ProfileUpdate,
    },
};

fn file_part(file: &FileUpload) -> Result<Part, ApiError> {
    let part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
    match &file.mime_type {
        Some(mime) => part
            .mime_str(mime)
            .map_err(|e| ApiError::validation(format!("Invalid file type: {}", e))),
        None => Ok(part),
    }
}

impl ApiClient {
    pub async fn get_my_profile(&self) -> Result<Profile, ApiError> {
        self.call(
            Method::GET,
            "/auth/profile/me",
            |req| req,
            "Failed to load profile",
        )
        .await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        self.call(
            Method::PUT,
            "/auth/profile/update",
            |req| req.json(update),
            "Failed to update profile",
        )
        .await
    }

    pub async fn upload_avatar(&self, file: &FileUpload) -> Result<AvatarResponse, ApiError> {
        let form = Form::new().part("avatar", file_part(file)?);
        self.call(
            Method::POST,
            "/auth/profile/avatar",
            |req| req.multipart(form),
            "Failed to upload avatar",
        )
        .await
    }

    pub async fn list_documents(&self) -> Result<Vec<EmployeeDocument>, ApiError> {
        self.call(
            Method::GET,
            "/auth/profile/documents",
            |req| req,
            "Failed to load documents",
        )
        .await
    }

    pub async fn upload_document(
        &self,
        upload: &DocumentUpload,
    ) -> Result<EmployeeDocument, ApiError> {
        let form = Form::new()
            .text("document_name", upload.document_name.clone())
            .text("document_type", upload.document_type.clone())
            .part("file", file_part(&upload.file)?);
        self.call(
            Method::POST,
            "/auth/profile/documents",
            |req| req.multipart(form),
            "Failed to upload document",
        )
        .await
    }

    pub async fn delete_document(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.call(
            Method::DELETE,
            &format!("/auth/profile/documents/{}", path_segment(id)),
            |req| req,
            "Failed to delete document",
        )
        .await
    }

    pub async fn download_document(&self, id: &str) -> Result<Vec<u8>, ApiError> {
        self.call_bytes(
            Method::GET,
            &format!("/auth/profile/documents/{}/download", path_segment(id)),
            |req| req,
            "Failed to download document",
        )
        .await
    }
}
