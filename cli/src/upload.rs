//! Profile photo uploads read from disk.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use std::path::Path;

use todo_api::Upload;
use todo_api::todos::PROFILE_IMAGE_FIELD;

use crate::error::CliError;

/// Read `path` into a multipart upload for the profile endpoint.
///
/// # Errors
///
/// Returns [`CliError::ReadFile`] if the file cannot be read.
pub fn profile_upload(path: &Path) -> Result<Upload, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::ReadFile { path: path.to_path_buf(), source })?;
    let file_name = path
        .file_name()
        .map_or_else(|| "upload".to_owned(), |name| name.to_string_lossy().into_owned());
    Ok(Upload {
        field: PROFILE_IMAGE_FIELD.to_owned(),
        file_name,
        content_type: Some(mime_guess::from_path(path).first_or_octet_stream().to_string()),
        bytes,
    })
}
