//! Data transfer objects exchanged with the Confluence `/content` API.

use serde::{Deserialize, Serialize};

/// A single Confluence page or blog post.
///
/// Empty strings, empty ancestor lists and absent nested objects are left out
/// of the JSON payload so the same structure works for create, update and
/// label requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
  /// Server-assigned identifier; empty until the content is created.
  #[serde(skip_serializing_if = "String::is_empty")]
  pub id: String,
  /// Content type (typically `"page"` or `"blogpost"`).
  #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
  pub content_type: String,
  /// Publication status such as `"current"` or `"draft"`.
  #[serde(skip_serializing_if = "String::is_empty")]
  pub status: String,
  #[serde(skip_serializing_if = "String::is_empty")]
  pub title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub body: Option<Body>,
  /// Version metadata; updates must carry the next version number.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version: Option<Version>,
  /// Parent pages, nearest last.
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub ancestors: Vec<Ancestor>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub space: Option<Space>,
  /// Label prefix, only set when this value is a label-add payload.
  #[serde(rename = "prefix", skip_serializing_if = "String::is_empty")]
  pub label_prefix: String,
  /// Label name, only set when this value is a label-add payload.
  #[serde(rename = "name", skip_serializing_if = "String::is_empty")]
  pub label_name: String,
  /// Local files to upload with [`add_attachments`](super::ContentClient::add_attachments).
  /// Never sent over the wire.
  #[serde(skip)]
  pub attachments: Vec<String>,
}

impl Content {
  /// A new page in `space_key` with a storage-format body.
  pub fn page(space_key: impl Into<String>, title: impl Into<String>, storage: impl Into<String>) -> Self {
    Self {
      content_type: "page".to_string(),
      title: title.into(),
      body: Some(Body::storage(storage)),
      space: Some(Space { key: space_key.into() }),
      ..Self::default()
    }
  }

  /// A label-add payload targeting the content `content_id`.
  pub fn label(content_id: impl Into<String>, prefix: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      id: content_id.into(),
      label_prefix: prefix.into(),
      label_name: name.into(),
      ..Self::default()
    }
  }

  /// Current version number, `0` when the version was not expanded.
  pub fn version_number(&self) -> u64 {
    self.version.as_ref().map_or(0, |v| v.number)
  }
}

/// Page body wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Body {
  pub storage: Storage,
}

impl Body {
  /// Body holding `value` in Confluence storage format.
  pub fn storage(value: impl Into<String>) -> Self {
    Self {
      storage: Storage {
        value: value.into(),
        representation: "storage".to_string(),
      },
    }
  }
}

/// Storage format (Confluence's internal XHTML) value and its representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Storage {
  pub value: String,
  pub representation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Version {
  pub number: u64,
}

/// Reference to a parent page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ancestor {
  #[serde(skip_serializing_if = "String::is_empty")]
  pub id: String,
}

/// Reference to the space a page lives in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Space {
  #[serde(skip_serializing_if = "String::is_empty")]
  pub key: String,
}

/// Label attached to a piece of content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
  #[serde(skip_serializing_if = "String::is_empty")]
  pub id: String,
  /// Namespace such as `"global"` or `"my"`.
  #[serde(skip_serializing_if = "String::is_empty")]
  pub prefix: String,
  pub name: String,
}

/// One window of a paginated listing.
///
/// Some deployments spell the limit field `limt`; both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(bound = "for<'de2> T: Deserialize<'de2>")]
pub struct PagedResult<T> {
  pub results: Vec<T>,
  #[serde(default)]
  pub start: usize,
  #[serde(default, alias = "limt")]
  pub limit: usize,
  pub size: usize,
}

/// Child page listing envelope.
pub type PageResult = PagedResult<Content>;

/// Label listing envelope.
pub type LabelResult = PagedResult<Label>;

/// Cursor for a paginated listing below a parent content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
  /// Identifier of the parent content whose children or labels are listed.
  pub content_id: String,
  pub start: usize,
  pub limit: usize,
}

impl PageRequest {
  /// Cursor at offset `0` with the given window size.
  pub fn new(content_id: impl Into<String>, limit: usize) -> Self {
    Self {
      content_id: content_id.into(),
      start: 0,
      limit,
    }
  }

  /// The cursor for the window following one that returned `size` items.
  pub fn advance(&self, size: usize) -> Self {
    Self {
      content_id: self.content_id.clone(),
      start: self.start + size,
      limit: self.limit,
    }
  }
}
