//! Construction of `/content` resource URLs.

use url::Url;

use super::error::ApiError;

/// Builds absolute URLs below `{root}/content/`.
#[derive(Debug, Clone)]
pub struct ContentEndpoint {
  root: String,
}

impl ContentEndpoint {
  /// Create a builder for an API root such as
  /// `https://example.atlassian.net/wiki/rest/api`.
  ///
  /// The root is not validated here; malformed roots surface as
  /// [`ApiError::InvalidUrl`] from [`ContentEndpoint::url`].
  pub fn new(root: impl Into<String>) -> Self {
    let root = root.into();
    Self {
      root: root.trim_end_matches('/').to_string(),
    }
  }

  /// The normalized API root (without trailing slash).
  pub fn root(&self) -> &str {
    &self.root
  }

  /// Resolve `content_id` and an optional sub-resource (e.g. `["label"]`,
  /// `["child", "attachment"]`) to `{root}/content/{id}/{sub...}`.
  ///
  /// The id always lands in exactly one path segment: `/`, `?`, `#` and `%`
  /// are percent-encoded. An empty id yields `{root}/content/`.
  ///
  /// # Errors
  /// Returns [`ApiError::InvalidUrl`] when the root is not an absolute,
  /// hierarchical URL, or when the id is a dot segment (`.` or `..`).
  pub fn url(&self, content_id: &str, subresource: &[&str]) -> Result<Url, ApiError> {
    if matches!(content_id, "." | "..") {
      return Err(ApiError::InvalidUrl(format!(
        "{content_id:?} cannot be used as a content id"
      )));
    }

    let raw = format!("{}/content/", self.root);
    let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;

    url
      .path_segments_mut()
      .map_err(|()| ApiError::InvalidUrl(format!("{raw}: not a hierarchical URL")))?
      .pop_if_empty()
      .push(content_id)
      .extend(subresource);

    Ok(url)
  }
}

/// Append the `expand` directive to `url`, skipping it entirely when there is
/// nothing to expand.
pub fn with_expand(mut url: Url, expand: &[&str]) -> Url {
  if !expand.is_empty() {
    url.query_pairs_mut().append_pair("expand", &expand.join(","));
  }
  url
}

/// Append a pagination window to `url`.
pub fn with_window(mut url: Url, start: usize, limit: usize) -> Url {
  url
    .query_pairs_mut()
    .append_pair("start", &start.to_string())
    .append_pair("limit", &limit.to_string());
  url
}

#[cfg(test)]
mod tests {
  use super::*;

  const ROOT: &str = "https://example.atlassian.net/wiki/rest/api";

  #[test]
  fn test_url_joins_root_content_and_path() {
    let endpoint = ContentEndpoint::new(ROOT);

    for (id, sub, expected) in [
      ("", &[][..], "/wiki/rest/api/content/"),
      ("123456", &[][..], "/wiki/rest/api/content/123456"),
      ("123456", &["label"][..], "/wiki/rest/api/content/123456/label"),
      (
        "123456",
        &["child", "attachment"][..],
        "/wiki/rest/api/content/123456/child/attachment",
      ),
    ] {
      let url = endpoint.url(id, sub).unwrap();
      assert_eq!(url.path(), expected, "path for {id:?} {sub:?}");
      assert_eq!(url.host_str(), Some("example.atlassian.net"));
      assert_eq!(url.query(), None);
    }
  }

  #[test]
  fn test_new_trims_trailing_slash() {
    let endpoint = ContentEndpoint::new(format!("{ROOT}/"));
    assert_eq!(endpoint.root(), ROOT);
    assert_eq!(endpoint.url("1", &[]).unwrap().path(), "/wiki/rest/api/content/1");
  }

  #[test]
  fn test_url_rejects_relative_root() {
    let endpoint = ContentEndpoint::new("wiki/rest/api");
    let err = endpoint.url("123", &[]).unwrap_err();
    assert!(matches!(err, ApiError::InvalidUrl(_)), "got {err:?}");
  }

  #[test]
  fn test_url_rejects_non_hierarchical_root() {
    let endpoint = ContentEndpoint::new("mailto:wiki");
    assert!(matches!(endpoint.url("123", &[]), Err(ApiError::InvalidUrl(_))));
  }

  #[test]
  fn test_url_rejects_empty_root() {
    let endpoint = ContentEndpoint::new("");
    assert!(matches!(endpoint.url("", &[]), Err(ApiError::InvalidUrl(_))));
  }

  #[test]
  fn test_id_stays_in_one_segment() {
    let endpoint = ContentEndpoint::new(ROOT);

    for (id, expected) in [
      ("123/../456", "/wiki/rest/api/content/123%2F..%2F456"),
      ("12#3", "/wiki/rest/api/content/12%233"),
      ("12?x=1", "/wiki/rest/api/content/12%3Fx=1"),
      ("50%", "/wiki/rest/api/content/50%25"),
    ] {
      let url = endpoint.url(id, &["label"]).unwrap();
      assert_eq!(url.path(), format!("{expected}/label"), "path for {id:?}");
      assert_eq!(url.query(), None);
      assert_eq!(url.fragment(), None);
    }
  }

  #[test]
  fn test_url_rejects_dot_segment_ids() {
    let endpoint = ContentEndpoint::new(ROOT);
    assert!(matches!(endpoint.url("..", &[]), Err(ApiError::InvalidUrl(_))));
    assert!(matches!(endpoint.url(".", &["label"]), Err(ApiError::InvalidUrl(_))));
  }

  #[test]
  fn test_with_expand_joins_fields() {
    let url = ContentEndpoint::new(ROOT).url("123", &[]).unwrap();
    let url = with_expand(url, &["body.storage", "version", "ancestors"]);

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
      pairs,
      vec![("expand".to_string(), "body.storage,version,ancestors".to_string())]
    );
  }

  #[test]
  fn test_with_expand_skips_empty_list() {
    let url = ContentEndpoint::new(ROOT).url("123", &[]).unwrap();
    let url = with_expand(url, &[]);
    assert_eq!(url.query(), None);
  }

  #[test]
  fn test_with_window_appends_start_and_limit() {
    let url = ContentEndpoint::new(ROOT).url("123", &["child", "page"]).unwrap();
    let url = with_window(with_expand(url, &["version"]), 50, 25);
    assert_eq!(url.query(), Some("expand=version&start=50&limit=25"));
  }
}
