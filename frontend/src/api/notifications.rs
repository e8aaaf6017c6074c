use reqwest::Method;

use super::{
    client::{path_segment, ApiClient},
    error::ApiError,
    types::{MessageResponse, NotificationList, NotificationQuery},
};

impl ApiClient {
    pub async fn list_notifications(
        &self,
        query: &NotificationQuery,
    ) -> Result<NotificationList, ApiError> {
        self.call(
            Method::GET,
            "/auth/notifications",
            |req| req.query(query),
            "Failed to load notifications",
        )
        .await
    }

    pub async fn mark_notification_read(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.call(
            Method::PATCH,
            &format!("/auth/notifications/{}/read", path_segment(id)),
            |req| req,
            "Failed to update notification",
        )
        .await
    }

    pub async fn mark_all_notifications_read(&self) -> Result<MessageResponse, ApiError> {
        self.call(
            Method::POST,
            "/auth/notifications/read-all",
            |req| req,
            "Failed to update notifications",
        )
        .await
    }

    pub async fn delete_notification(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.call(
            Method::DELETE,
            &format!("/auth/notifications/{}/delete", path_segment(id)),
            |req| req,
            "Failed to delete notification",
        )
        .await
    }

    /// Removes read notifications.
    pub async fn clear_notifications(&self) -> Result<MessageResponse, ApiError> {
        self.call(
            Method::DELETE,
            "/auth/notifications/clear",
            |req| req,
            "Failed to clear notifications",
        )
        .await
    }
}
