//! Credential sources and the resolution order across them.

use url::Url;

use super::{Credential, CredentialError};

/// A source of credentials keyed by host name.
pub trait CredentialsProvider {
  /// Credentials for `host`, or `Ok(None)` when this source has no entry so
  /// the caller can fall back to another one.
  fn get_credentials(&self, host: &str) -> Result<Option<Credential>, CredentialError>;
}

/// Resolve credentials for `base_url`.
///
/// Explicit values (flags or environment variables) win. Whatever is missing
/// is filled from `fallback`, looked up by the host of `base_url`.
///
/// # Errors
/// Returns [`CredentialError::NotFound`] when neither source yields both a
/// username and a token.
pub fn resolve_credentials(
  base_url: &str,
  username: Option<String>,
  token: Option<String>,
  fallback: &dyn CredentialsProvider,
) -> Result<Credential, CredentialError> {
  if let (Some(username), Some(password)) = (&username, &token) {
    return Ok(Credential {
      username: username.clone(),
      password: password.clone(),
    });
  }

  let host = host_of(base_url)?;
  match fallback.get_credentials(&host)? {
    Some(found) => Ok(Credential {
      username: username.unwrap_or(found.username),
      password: token.unwrap_or(found.password),
    }),
    None => Err(CredentialError::NotFound { host }),
  }
}

fn host_of(base_url: &str) -> Result<String, CredentialError> {
  Url::parse(base_url)
    .ok()
    .and_then(|url| url.host_str().map(str::to_string))
    .ok_or_else(|| CredentialError::MissingHost(base_url.to_string()))
}
