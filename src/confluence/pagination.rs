//! Accumulation of paginated listings (child pages, labels).

use serde::de::DeserializeOwned;
use tracing::debug;

use super::decode::decode;
use super::endpoint::{ContentEndpoint, with_expand, with_window};
use super::error::ApiError;
use super::models::{PageRequest, PagedResult};
use super::transport::{ApiRequest, HttpMethod, Transport};

/// Sub-resource listing the direct child pages of a content.
pub const CHILD_PAGES: &[&str] = &["child", "page"];

/// Sub-resource listing the labels of a content.
pub const LABELS: &[&str] = &["label"];

/// Fetch every item of `resource` below `request.content_id`, window by
/// window, preserving server order.
///
/// A window is followed by another one only when it came back saturated
/// (`size > 0 && size == limit`). When the last real window is exactly full
/// this issues one more request; an empty answer ends the listing and an
/// error fails it.
///
/// # Errors
/// Any endpoint, transport or decoding failure aborts the listing; items
/// gathered so far are discarded.
pub async fn collect_all<T: DeserializeOwned>(
  transport: &dyn Transport,
  endpoint: &ContentEndpoint,
  request: PageRequest,
  resource: &[&str],
  expand: &[&str],
) -> Result<Vec<T>, ApiError> {
  let mut items = Vec::new();
  let mut cursor = request;

  loop {
    let url = endpoint.url(&cursor.content_id, resource)?;
    let url = with_window(with_expand(url, expand), cursor.start, cursor.limit);

    debug!(
      "Listing {} of {} (start={}, limit={})",
      resource.join("/"),
      cursor.content_id, cursor.start, cursor.limit
    );
    let body = transport.send(ApiRequest::new(HttpMethod::Get, url)).await?;
    let page: PagedResult<T> = decode(&body)?;

    let size = page.size;
    items.extend(page.results);

    if size == 0 || size != cursor.limit {
      break;
    }
    cursor = cursor.advance(size);
  }

  debug!("Collected {} items of {}", items.len(), resource.join("/"));
  Ok(items)
}
