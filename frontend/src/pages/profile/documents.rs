use leptos::*;

use crate::{
    api::{use_api, DocumentUpload, EmployeeDocument, FileUpload},
    components::{
        alert::{AlertBanner, MessageState},
        common::{Button, ButtonVariant, TextField},
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::LoadingSpinner,
    },
    state::request_gate::PageData,
    utils::{
        download::trigger_download,
        file::{read_file, selected_file},
        format::{file_size, or_dash},
        time::format_date,
    },
};

pub const DOCUMENT_TYPES: &[(&str, &str)] = &[
    ("RESUME", "Resume/CV"),
    ("ID_PROOF", "ID Proof"),
    ("ADDRESS_PROOF", "Address Proof"),
    ("CERTIFICATE", "Certificate"),
    ("OFFER_LETTER", "Offer Letter"),
    ("CONTRACT", "Employment Contract"),
    ("OTHER", "Other"),
];

pub const MISSING_UPLOAD_FIELDS: &str = "Please choose a file and enter a document name";

pub fn document_type_label(code: Option<&str>) -> String {
    let code = code.unwrap_or("OTHER");
    DOCUMENT_TYPES
        .iter()
        .find(|(value, _)| *value == code)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| or_dash(Some(code)))
}

pub fn build_upload(
    name: &str,
    document_type: &str,
    file: Option<FileUpload>,
) -> Result<DocumentUpload, &'static str> {
    let name = name.trim();
    match file {
        Some(file) if !name.is_empty() => Ok(DocumentUpload {
            document_name: name.to_string(),
            document_type: document_type.to_string(),
            file,
        }),
        _ => Err(MISSING_UPLOAD_FIELDS),
    }
}

#[component]
fn DocumentRow(
    document: EmployeeDocument,
    on_download: Callback<(String, String)>,
    on_delete: Callback<(String, String)>,
) -> impl IntoView {
    let id = document.id.clone().unwrap_or_default();
    let name = document.document_name.clone();
    let download_args = (id.clone(), name.clone());
    let delete_args = (id, name);
    view! {
        <tr>
            <td class="px-4 py-2 text-sm font-medium text-fg">{document.document_name.clone()}</td>
            <td class="px-4 py-2 text-sm text-fg">{document_type_label(document.document_type.as_deref())}</td>
            <td class="px-4 py-2 text-sm text-fg">{file_size(document.file_size.as_ref())}</td>
            <td class="px-4 py-2 text-sm text-fg">
                {document.uploaded_at.as_deref().map(format_date).unwrap_or_else(|| "-".to_string())}
            </td>
            <td class="px-4 py-2 text-sm text-right space-x-3">
                <button type="button" class="text-action-primary-bg hover:underline" on:click=move |_| on_download.call(download_args.clone())>
                    {"Download"}
                </button>
                <button type="button" class="text-status-error-text hover:underline" on:click=move |_| on_delete.call(delete_args.clone())>
                    {"Delete"}
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn DocumentsSection() -> impl IntoView {
    let api = use_api();
    let documents = PageData::<Vec<EmployeeDocument>>::new();
    let messages = create_rw_signal(MessageState::default());
    let name = create_rw_signal(String::new());
    let document_type = create_rw_signal("OTHER".to_string());
    let file = create_rw_signal(None::<FileUpload>);
    let pending_delete = create_rw_signal(None::<(String, String)>);

    let reload = {
        let api = api.clone();
        let documents = documents.clone();
        move || {
            let api = api.clone();
            documents.load(async move { api.list_documents().await });
        }
    };
    {
        let reload = reload.clone();
        create_effect(move |_| reload());
    }

    let upload = {
        let api = api.clone();
        let reload = reload.clone();
        create_action(move |upload: &DocumentUpload| {
            let api = api.clone();
            let reload = reload.clone();
            let upload = upload.clone();
            async move {
                match api.upload_document(&upload).await {
                    Ok(_) => {
                        messages.update(|m| m.set_success("Document uploaded successfully!"));
                        name.set(String::new());
                        file.set(None);
                        reload();
                    }
                    Err(err) => messages.update(|m| m.set_api_error(&err)),
                }
            }
        })
    };
    let uploading = upload.pending();

    let download = {
        let api = api.clone();
        create_action(move |(id, file_name): &(String, String)| {
            let api = api.clone();
            let id = id.clone();
            let file_name = file_name.clone();
            async move {
                let result = api
                    .download_document(&id)
                    .await
                    .map_err(|err| err.error)
                    .and_then(|bytes| trigger_download(&file_name, &bytes, "application/octet-stream"));
                if let Err(msg) = result {
                    messages.update(|m| m.set_error(msg));
                }
            }
        })
    };

    let remove = {
        let documents = documents.clone();
        create_action(move |id: &String| {
            let api = api.clone();
            let documents = documents.clone();
            let id = id.clone();
            async move {
                match api.delete_document(&id).await {
                    Ok(_) => {
                        documents.update(|list| list.retain(|d| d.id.as_deref() != Some(id.as_str())));
                        messages.update(|m| m.set_success("Document deleted successfully!"));
                    }
                    Err(err) => messages.update(|m| m.set_api_error(&err)),
                }
            }
        })
    };

    let on_file = move |ev: leptos::ev::Event| {
        let Some(selected) = selected_file(&ev) else {
            file.set(None);
            return;
        };
        spawn_local(async move {
            match read_file(&selected).await {
                Ok(upload) => {
                    if name.get_untracked().trim().is_empty() {
                        name.set(upload.file_name.clone());
                    }
                    file.set(Some(upload));
                }
                Err(msg) => messages.update(|m| m.set_error(msg)),
            }
        });
    };

    let on_upload = move |_| {
        match build_upload(&name.get_untracked(), &document_type.get_untracked(), file.get_untracked()) {
            Ok(request) => upload.dispatch(request),
            Err(msg) => messages.update(|m| m.set_error(msg)),
        }
    };

    let on_download = Callback::new(move |args: (String, String)| download.dispatch(args));
    let on_delete = Callback::new(move |args: (String, String)| pending_delete.set(Some(args)));
    let confirm_delete = Callback::new(move |_: ()| {
        if let Some((id, _)) = pending_delete.get_untracked() {
            remove.dispatch(id);
        }
        pending_delete.set(None);
    });
    let cancel_delete = Callback::new(move |_: ()| pending_delete.set(None));

    let list = documents.value;
    let loading = documents.loading;

    view! {
        <div class="bg-surface-elevated shadow rounded-lg px-4 py-5 sm:p-6">
            <h3 class="text-lg leading-6 font-medium text-fg mb-4">{"Documents"}</h3>
            <AlertBanner messages=messages/>
            <div class="grid grid-cols-1 gap-4 md:grid-cols-3 mb-4">
                <TextField id="document_name" label="Document Name" value=name required=true/>
                <div>
                    <label for="document_type" class="block text-sm font-medium text-fg">{"Type"}</label>
                    <select
                        id="document_type"
                        class="mt-1 block w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg"
                        on:change=move |ev| document_type.set(event_target_value(&ev))
                    >
                        {DOCUMENT_TYPES
                            .iter()
                            .map(|(value, label)| {
                                let value = *value;
                                view! {
                                    <option value=value selected=move || document_type.get() == value>{*label}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label for="document_file" class="block text-sm font-medium text-fg">{"File"}</label>
                    <input id="document_file" type="file" class="mt-1 block w-full text-sm text-fg" on:change=on_file/>
                </div>
            </div>
            <Button loading=uploading on:click=on_upload>
                {move || if uploading.get() { "Uploading..." } else { "Upload Document" }}
            </Button>
            <div class="mt-6">
                <InlineErrorMessage error=documents.error/>
                {move || match list.get() {
                    None if loading.get() => view! { <LoadingSpinner/> }.into_view(),
                    Some(items) if !items.is_empty() => view! {
                        <div class="overflow-x-auto">
                            <table class="min-w-full divide-y divide-border">
                                <thead class="bg-surface-muted">
                                    <tr>
                                        {["Name", "Type", "Size", "Uploaded", ""]
                                            .into_iter()
                                            .map(|h| view! { <th class="px-4 py-2 text-left text-xs font-medium uppercase text-fg-muted">{h}</th> })
                                            .collect_view()}
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    {items
                                        .into_iter()
                                        .map(|document| view! {
                                            <DocumentRow document=document on_download=on_download on_delete=on_delete/>
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_view(),
                    _ => view! { <EmptyState title="No documents uploaded"/> }.into_view(),
                }}
            </div>
            <ConfirmDialog
                is_open=Signal::derive(move || pending_delete.with(Option::is_some))
                title="Delete document"
                message=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|(_, name)| format!("Delete \"{}\"? This cannot be undone.", name))
                        .unwrap_or_default()
                })
                on_confirm=confirm_delete
                on_cancel=cancel_delete
                confirm_label="Delete"
                destructive=true
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file() -> FileUpload {
        FileUpload {
            file_name: "resume.pdf".into(),
            mime_type: Some("application/pdf".into()),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn upload_needs_name_and_file() {
        assert_eq!(build_upload("  ", "RESUME", Some(sample_file())), Err(MISSING_UPLOAD_FIELDS));
        assert_eq!(build_upload("CV", "RESUME", None), Err(MISSING_UPLOAD_FIELDS));
        let upload = build_upload(" CV ", "RESUME", Some(sample_file())).unwrap();
        assert_eq!(upload.document_name, "CV");
        assert_eq!(upload.file.file_name, "resume.pdf");
    }

    #[test]
    fn type_labels_default_to_other() {
        assert_eq!(document_type_label(Some("ID_PROOF")), "ID Proof");
        assert_eq!(document_type_label(None), "Other");
        assert_eq!(document_type_label(Some("PAYSLIP")), "PAYSLIP");
    }
}
