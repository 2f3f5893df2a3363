//! Plain-data request description and the transport seam.
//!
//! The client only ever builds [`ApiRequest`] values and hands them to a
//! [`Transport`]. Connections, TLS and authentication live behind that trait,
//! which keeps request composition deterministic and easy to test with a
//! scripted fake.

use std::fmt;

use async_trait::async_trait;
use url::Url;

use super::error::TransportError;

/// Header asserting the CSRF token bypass required for attachment uploads.
pub const ATLASSIAN_TOKEN_HEADER: &str = "X-Atlassian-Token";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
  Get,
  Post,
  Put,
  Delete,
}

impl fmt::Display for HttpMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Self::Get => "GET",
      Self::Post => "POST",
      Self::Put => "PUT",
      Self::Delete => "DELETE",
    };
    f.write_str(name)
  }
}

/// One file section of a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFile {
  /// Base name of the local file, sent as the part's filename.
  pub file_name: String,
  /// Full file contents.
  pub data: Vec<u8>,
}

/// Request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
  Empty,
  /// Serialized JSON document.
  Json(Vec<u8>),
  /// `multipart/form-data` upload, one `file` part per entry in order.
  Multipart(Vec<FormFile>),
}

/// A fully prepared request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
  pub method: HttpMethod,
  pub url: Url,
  pub headers: Vec<(String, String)>,
  pub body: RequestBody,
}

impl ApiRequest {
  /// Build a request with no headers and no body.
  pub fn new(method: HttpMethod, url: Url) -> Self {
    Self {
      method,
      url,
      headers: Vec::new(),
      body: RequestBody::Empty,
    }
  }

  /// Look up a header value by case-insensitive name.
  pub fn header(&self, name: &str) -> Option<&str> {
    self
      .headers
      .iter()
      .find(|(key, _)| key.eq_ignore_ascii_case(name))
      .map(|(_, value)| value.as_str())
  }
}

/// Executes prepared requests (enables testing with fake implementations).
#[async_trait]
pub trait Transport: Send + Sync {
  /// Send `request` and return the raw response body.
  ///
  /// # Errors
  /// Returns a [`TransportError`] for non-success statuses and for requests
  /// that never produced a response.
  async fn send(&self, request: ApiRequest) -> Result<Vec<u8>, TransportError>;
}
