//! Credential values and lookup errors.

use std::fmt;

/// Username and API token for Basic authentication.
///
/// For Atlassian Cloud the username is the account e-mail address and the
/// password is an API token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
  pub username: String,
  pub password: String,
}

/// Errors raised while resolving credentials.
#[derive(Debug)]
pub enum CredentialError {
  /// `HOME` is not set, so the default `.netrc` location is unknown.
  HomeNotSet,
  /// The base URL has no host to look credentials up for.
  MissingHost(String),
  /// No source provided both a username and a token.
  NotFound { host: String },
  /// The `.netrc` file exists but could not be read.
  Io(std::io::Error),
}

impl fmt::Display for CredentialError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::HomeNotSet => write!(f, "HOME is not set; cannot locate ~/.netrc"),
      Self::MissingHost(url) => write!(f, "cannot determine host of {url}"),
      Self::NotFound { host } => write!(
        f,
        "credentials for {host} not found. Provide --user and --token, set CONFLUENCE_USER and CONFLUENCE_TOKEN, or add {host} to ~/.netrc"
      ),
      Self::Io(err) => write!(f, "failed to read .netrc: {err}"),
    }
  }
}

impl std::error::Error for CredentialError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io(err) => Some(err),
      _ => None,
    }
  }
}

impl From<std::io::Error> for CredentialError {
  fn from(err: std::io::Error) -> Self {
    Self::Io(err)
  }
}
