//! Sample Confluence API responses for tests

use serde_json::json;

pub const API_ROOT: &str = "https://example.atlassian.net/wiki/rest/api";

// Response to creating the page titled "Test"
pub fn created_page_response() -> serde_json::Value {
  json!({
    "id": "3604482",
    "type": "page",
    "status": "current",
    "title": "Test",
    "space": {"key": "DOCS", "name": "Documentation", "type": "global"},
    "body": {
      "storage": {"value": "<p>Hello</p>", "representation": "storage"}
    },
    "version": {"number": 1, "minorEdit": false},
    "ancestors": [],
    "_links": {
      "webui": "/spaces/DOCS/pages/3604482/Test",
      "self": "https://example.atlassian.net/wiki/rest/api/content/3604482"
    }
  })
}

// A page fetched with body.storage, version and ancestors expanded
pub fn expanded_page_response() -> serde_json::Value {
  json!({
    "id": "123456",
    "type": "page",
    "status": "current",
    "title": "Getting Started Guide",
    "space": {"key": "DOCS"},
    "body": {
      "storage": {
        "value": "<h1>Getting Started</h1><p>Welcome to our documentation!</p>",
        "representation": "storage"
      }
    },
    "version": {"number": 12},
    "ancestors": [{"id": "1000", "type": "page"}, {"id": "1001", "type": "page"}]
  })
}

// Attachment upload answer
pub fn attachment_upload_response() -> serde_json::Value {
  json!({
    "id": "123456",
    "type": "page",
    "title": "Getting Started Guide"
  })
}

// One window of a child page listing
pub fn child_pages_window(start: usize, limit: usize, ids: &[&str]) -> serde_json::Value {
  let results: Vec<_> = ids
    .iter()
    .map(|id| json!({"id": id, "type": "page", "status": "current", "title": format!("Child {id}")}))
    .collect();
  json!({"results": results, "start": start, "limit": limit, "size": ids.len()})
}

// One window of a label listing
pub fn labels_window(start: usize, limit: usize, names: &[&str]) -> serde_json::Value {
  let results: Vec<_> = names
    .iter()
    .enumerate()
    .map(|(i, name)| json!({"prefix": "global", "name": name, "id": format!("{}", start + i)}))
    .collect();
  json!({"results": results, "start": start, "limit": limit, "size": names.len()})
}
