//! Request body encoding.

use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, warn};

use super::error::ApiError;
use super::transport::{ATLASSIAN_TOKEN_HEADER, FormFile, RequestBody};

/// JSON payload together with the headers it requires.
pub fn json_body<T: Serialize>(value: &T) -> Result<(RequestBody, Vec<(String, String)>), ApiError> {
  let bytes = serde_json::to_vec(value).map_err(ApiError::Encoding)?;
  Ok((
    RequestBody::Json(bytes),
    vec![("Content-Type".to_string(), "application/json".to_string())],
  ))
}

/// Read every attachment at `paths` into a multipart body.
///
/// Files that cannot be opened are skipped with a warning; the remaining
/// files keep their call-site order. Each handle is dropped before the next
/// file is opened.
///
/// # Errors
/// Returns [`ApiError::Transfer`] when an opened file cannot be read.
pub async fn multipart_body(paths: &[String]) -> Result<(RequestBody, Vec<(String, String)>), ApiError> {
  let mut files = Vec::with_capacity(paths.len());

  for path in paths {
    let mut file = match File::open(path).await {
      Ok(file) => file,
      Err(err) => {
        warn!("Skipping attachment {path}: {err}");
        continue;
      }
    };

    let mut data = Vec::new();
    file
      .read_to_end(&mut data)
      .await
      .map_err(|source| ApiError::Transfer {
        path: path.clone(),
        source,
      })?;

    let file_name = base_name(path).ok_or_else(|| ApiError::Transfer {
      path: path.clone(),
      source: std::io::Error::new(ErrorKind::InvalidInput, "path has no file name"),
    })?;

    debug!("Attaching {file_name} ({} bytes)", data.len());
    files.push(FormFile { file_name, data });
  }

  Ok((
    RequestBody::Multipart(files),
    vec![(ATLASSIAN_TOKEN_HEADER.to_string(), "no-check".to_string())],
  ))
}

fn base_name(path: &str) -> Option<String> {
  Path::new(path)
    .file_name()
    .map(|name| name.to_string_lossy().into_owned())
}
