//! Profile-photo file handling.
//!
//! Reads the picked `File` into memory so the request can be replayed after a
//! token refresh without touching the DOM again.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use todo_api::Upload;
use todo_api::todos::PROFILE_IMAGE_FIELD;

/// Build an upload part for the profile image.
pub fn profile_upload(file_name: String, content_type: Option<String>, bytes: Vec<u8>) -> Upload {
    Upload {
        field: PROFILE_IMAGE_FIELD.to_owned(),
        file_name,
        content_type: content_type.filter(|ct| !ct.is_empty()),
        bytes,
    }
}

/// Read a picked file into an [`Upload`].
///
/// # Errors
///
/// Returns the JS error text if the browser fails to read the file.
#[cfg(feature = "csr")]
pub async fn read_file(file: &web_sys::File) -> Result<Upload, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(profile_upload(file.name(), Some(file.type_()), bytes))
}
