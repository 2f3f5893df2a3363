//! Error types surfaced by the content client.

use std::fmt;

/// Failure reported by a [`Transport`](super::transport::Transport).
///
/// The client never inspects or retries these; they are handed back to the
/// caller wrapped in [`ApiError::Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
  /// The server answered with a non-success status code.
  Status {
    /// HTTP status code returned by the server.
    status: u16,
    /// Response body, kept verbatim for diagnostics.
    body: String,
  },
  /// The request never produced a response (connection, TLS, timeout, ...).
  Request(String),
}

impl fmt::Display for TransportError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Status { status, body } => write!(f, "Confluence API returned error {status}: {body}"),
      Self::Request(msg) => write!(f, "request failed: {msg}"),
    }
  }
}

impl std::error::Error for TransportError {}

/// Errors returned by [`ContentClient`](super::client::ContentClient)
/// operations.
#[derive(Debug)]
pub enum ApiError {
  /// The endpoint could not be composed into an absolute URL.
  InvalidUrl(String),
  /// The content violates the identifier requirements of the operation.
  InvalidContent(String),
  /// The request payload could not be serialized.
  Encoding(serde_json::Error),
  /// The response body did not match the expected shape.
  Decoding(serde_json::Error),
  /// An attachment opened successfully but could not be read.
  Transfer {
    /// Local path of the attachment being copied.
    path: String,
    /// Underlying I/O failure.
    source: std::io::Error,
  },
  /// Passthrough of whatever the transport reported.
  Transport(TransportError),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidUrl(msg) => write!(f, "invalid URL: {msg}"),
      Self::InvalidContent(msg) => write!(f, "invalid content: {msg}"),
      Self::Encoding(err) => write!(f, "failed to encode request body: {err}"),
      Self::Decoding(err) => write!(f, "failed to decode response body: {err}"),
      Self::Transfer { path, source } => write!(f, "failed to copy attachment {path}: {source}"),
      Self::Transport(err) => write!(f, "{err}"),
    }
  }
}

impl std::error::Error for ApiError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Encoding(err) | Self::Decoding(err) => Some(err),
      Self::Transfer { source, .. } => Some(source),
      Self::Transport(err) => Some(err),
      Self::InvalidUrl(_) | Self::InvalidContent(_) => None,
    }
  }
}

impl From<TransportError> for ApiError {
  fn from(err: TransportError) -> Self {
    Self::Transport(err)
  }
}
