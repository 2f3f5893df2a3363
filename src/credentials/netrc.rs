//! `.netrc` credential lookup.

use std::path::PathBuf;

use super::{Credential, CredentialError, CredentialsProvider};

/// Reads credentials from a `.netrc` file.
///
/// The file location is `$NETRC` when set, `~/.netrc` otherwise, unless an
/// explicit path is given with [`NetrcProvider::with_path`]. A missing file
/// is not an error; it simply yields no credentials.
#[derive(Debug, Default)]
pub struct NetrcProvider {
  path: Option<PathBuf>,
}

impl NetrcProvider {
  pub fn new() -> Self {
    Self::default()
  }

  /// Read from `path` instead of the default location.
  pub fn with_path(path: impl Into<PathBuf>) -> Self {
    Self {
      path: Some(path.into()),
    }
  }

  fn location(&self) -> Result<PathBuf, CredentialError> {
    if let Some(path) = &self.path {
      return Ok(path.clone());
    }
    if let Some(path) = std::env::var_os("NETRC") {
      return Ok(PathBuf::from(path));
    }
    let home = std::env::var_os("HOME").ok_or(CredentialError::HomeNotSet)?;
    Ok(PathBuf::from(home).join(".netrc"))
  }
}

impl CredentialsProvider for NetrcProvider {
  fn get_credentials(&self, host: &str) -> Result<Option<Credential>, CredentialError> {
    let path = self.location()?;
    if !path.exists() {
      return Ok(None);
    }

    let content = std::fs::read_to_string(&path)?;
    Ok(parse_netrc(&content, host))
  }
}

#[derive(Debug, Default)]
struct Entry {
  /// `None` for the `default` entry.
  machine: Option<String>,
  login: Option<String>,
  password: Option<String>,
}

impl Entry {
  fn credential(&self) -> Option<Credential> {
    Some(Credential {
      username: self.login.clone()?,
      password: self.password.clone()?,
    })
  }
}

/// Find the credentials for `host`, falling back to the `default` entry.
///
/// Entries may span several lines or sit on one line
/// (`machine h login u password p`). Lines starting with `#` are comments.
/// A `macdef` body runs up to the next blank line and is skipped.
fn parse_netrc(content: &str, host: &str) -> Option<Credential> {
  let mut tokens = tokenize(content).into_iter();

  let mut entries: Vec<Entry> = Vec::new();
  while let Some(token) = tokens.next() {
    match token {
      "machine" => entries.push(Entry {
        machine: tokens.next().map(str::to_string),
        ..Entry::default()
      }),
      "default" => entries.push(Entry::default()),
      "login" | "password" | "account" => {
        let value = tokens.next().map(str::to_string);
        if let Some(entry) = entries.last_mut() {
          match token {
            "login" => entry.login = value,
            "password" => entry.password = value,
            _ => {}
          }
        }
      }
      _ => {}
    }
  }

  entries
    .iter()
    .filter(|entry| entry.machine.as_deref() == Some(host))
    .chain(entries.iter().filter(|entry| entry.machine.is_none()))
    .find_map(Entry::credential)
}

/// Split `content` into words, dropping comment lines and macro definitions.
fn tokenize(content: &str) -> Vec<&str> {
  let mut tokens = Vec::new();
  let mut in_macro = false;

  for line in content.lines() {
    if in_macro {
      in_macro = !line.trim().is_empty();
      continue;
    }
    if line.trim_start().starts_with('#') {
      continue;
    }

    let mut words = line.split_whitespace();
    while let Some(word) = words.next() {
      if word == "macdef" {
        in_macro = true;
        break;
      }
      tokens.push(word);
      if matches!(word, "machine" | "login" | "password" | "account")
        && let Some(value) = words.next()
      {
        tokens.push(value);
      }
    }
  }

  tokens
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_parse_netrc_multiline_entries() {
    let content = r#"
machine example.com
  login user1
  password pass1

machine other.com
  login user2
  password pass2
"#;

    let cred = parse_netrc(content, "other.com").unwrap();
    assert_eq!(cred.username, "user2");
    assert_eq!(cred.password, "pass2");
  }

  #[test]
  fn test_parse_netrc_single_line_entry() {
    let content = "machine wiki.example.com login bot@example.com password s3cret\n";
    let cred = parse_netrc(content, "wiki.example.com").unwrap();
    assert_eq!(cred.username, "bot@example.com");
    assert_eq!(cred.password, "s3cret");
  }

  #[test]
  fn test_parse_netrc_default_is_fallback_only() {
    let content = r#"
default
  login defaultuser
  password defaultpass
machine example.com
  login user1
  password pass1
"#;

    assert_eq!(parse_netrc(content, "example.com").unwrap().username, "user1");
    assert_eq!(parse_netrc(content, "any-host.com").unwrap().username, "defaultuser");
  }

  #[test]
  fn test_parse_netrc_skips_comments_and_incomplete_entries() {
    let content = r#"
# machine example.com login commented password out
machine example.com
  login user-without-password
"#;

    assert!(parse_netrc(content, "example.com").is_none());
    assert!(parse_netrc("", "example.com").is_none());
    assert!(parse_netrc("   \n\t\n", "example.com").is_none());
  }

  #[test]
  fn test_parse_netrc_skips_macdef_body() {
    let content = r#"
machine example.com
  login user1
  password pass1
macdef init
  login intruder
  password hijacked

machine other.com login user2 password pass2
"#;

    let cred = parse_netrc(content, "example.com").unwrap();
    assert_eq!(cred.username, "user1");
    assert_eq!(cred.password, "pass1");
    assert_eq!(parse_netrc(content, "other.com").unwrap().username, "user2");
  }

  #[test]
  fn test_parse_netrc_keyword_values_are_not_keywords() {
    let content = "machine example.com login macdef password default\n";
    let cred = parse_netrc(content, "example.com").unwrap();
    assert_eq!(cred.username, "macdef");
    assert_eq!(cred.password, "default");
  }

  #[test]
  fn test_provider_reads_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("netrc");
    fs::write(&path, "machine example.atlassian.net login me@example.com password tok\n").unwrap();

    let provider = NetrcProvider::with_path(&path);
    let cred = provider.get_credentials("example.atlassian.net").unwrap().unwrap();
    assert_eq!(cred.username, "me@example.com");
    assert!(provider.get_credentials("elsewhere.net").unwrap().is_none());
  }

  #[test]
  fn test_provider_missing_file_yields_none() {
    let dir = TempDir::new().unwrap();
    let provider = NetrcProvider::with_path(dir.path().join("absent"));
    assert!(provider.get_credentials("example.com").unwrap().is_none());
  }
}
