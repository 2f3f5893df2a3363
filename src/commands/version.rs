//! `confluence-content version`.

use serde_json::json;

/// Print version and build metadata, as JSON when `json` is set.
pub(crate) fn handle_version_command(json: bool) {
  let version = env!("CARGO_PKG_VERSION");
  let git_hash = env!("GIT_HASH");
  let target = env!("TARGET");

  if json {
    let info = json!({
      "version": version,
      "git_commit": git_hash,
      "target": target,
    });
    println!("{info:#}");
  } else {
    println!("confluence-content {version}");
    println!("Git commit: {git_hash}");
    println!("Target: {target}");
  }
}
