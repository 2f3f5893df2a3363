//! `reqwest`-backed [`Transport`] with Basic authentication.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::multipart::{Form, Part};
use tracing::trace;

use super::error::TransportError;
use super::transport::{ApiRequest, FormFile, HttpMethod, RequestBody, Transport};

/// HTTP transport talking to a real Confluence instance.
#[derive(Clone)]
pub struct HttpTransport {
  username: String,
  token: String,
  client: reqwest::Client,
}

impl HttpTransport {
  /// Create a new transport.
  ///
  /// # Arguments
  /// * `username` - The user's email address
  /// * `token` - The API token
  /// * `timeout_secs` - Request timeout in seconds
  ///
  /// # Errors
  /// Returns an error if the underlying `reqwest::Client` cannot be built.
  pub fn new(username: impl Into<String>, token: impl Into<String>, timeout_secs: u64) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(timeout_secs))
      .user_agent(format!(
        "confluence-content/{} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("TARGET")
      ))
      .build()
      .context("Failed to create HTTP client")?;

    Ok(Self {
      username: username.into(),
      token: token.into(),
      client,
    })
  }

  /// Get the authorization header value (Basic auth).
  fn auth_header(&self) -> String {
    let credentials = format!("{}:{}", self.username, self.token);
    format!("Basic {}", BASE64.encode(credentials.as_bytes()))
  }
}

#[async_trait]
impl Transport for HttpTransport {
  async fn send(&self, request: ApiRequest) -> Result<Vec<u8>, TransportError> {
    let method = match request.method {
      HttpMethod::Get => reqwest::Method::GET,
      HttpMethod::Post => reqwest::Method::POST,
      HttpMethod::Put => reqwest::Method::PUT,
      HttpMethod::Delete => reqwest::Method::DELETE,
    };

    let mut builder = self
      .client
      .request(method, request.url)
      .header("Authorization", self.auth_header())
      .header("Accept", "application/json");

    for (name, value) in &request.headers {
      builder = builder.header(name.as_str(), value.as_str());
    }

    builder = match request.body {
      RequestBody::Empty => builder,
      RequestBody::Json(bytes) => builder.body(bytes),
      RequestBody::Multipart(files) => builder.multipart(multipart_form(files)),
    };

    let response = builder
      .send()
      .await
      .map_err(|e| TransportError::Request(e.to_string()))?;

    let status = response.status();
    trace!("Response status {status}");
    if !status.is_success() {
      let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| String::from("(no error details)"));
      return Err(TransportError::Status {
        status: status.as_u16(),
        body: error_text,
      });
    }

    let bytes = response
      .bytes()
      .await
      .map_err(|e| TransportError::Request(format!("Failed to read response body: {e}")))?;
    Ok(bytes.to_vec())
  }
}

/// Render attachment files as a `multipart/form-data` form, one `file` part
/// each. `reqwest` supplies the boundary and content-type header.
fn multipart_form(files: Vec<FormFile>) -> Form {
  files.into_iter().fold(Form::new(), |form, file| {
    form.part("file", Part::bytes(file.data).file_name(file.file_name))
  })
}
