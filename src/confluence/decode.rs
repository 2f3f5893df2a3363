//! Response body decoding.

use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Deserialize a complete response body into `T`.
///
/// # Errors
/// Returns [`ApiError::Decoding`] for malformed JSON or a shape mismatch.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
  serde_json::from_slice(body).map_err(ApiError::Decoding)
}
