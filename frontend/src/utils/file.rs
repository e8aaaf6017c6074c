use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::api::FileUpload;

/// First file selected in the `<input type="file">` that fired `ev`.
pub fn selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

pub async fn read_file(file: &web_sys::File) -> Result<FileUpload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Failed to read file".to_string())?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime_type = Some(file.type_()).filter(|t| !t.is_empty());
    Ok(FileUpload {
        file_name: file.name(),
        mime_type,
        bytes,
    })
}
