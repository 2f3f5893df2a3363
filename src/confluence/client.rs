//! Public operations on the Confluence `/content` resource.

use tracing::{debug, info};

use super::decode::decode;
use super::encode::{json_body, multipart_body};
use super::endpoint::{ContentEndpoint, with_expand};
use super::error::ApiError;
use super::models::{Content, Label, PageRequest};
use super::pagination::{CHILD_PAGES, LABELS, collect_all};
use super::transport::{ApiRequest, HttpMethod, RequestBody, Transport};

/// Confluence content client.
///
/// Holds only the API root and the transport; every operation composes an
/// [`ApiRequest`], sends it and decodes the answer. Nothing is cached or
/// retried.
pub struct ContentClient<T> {
  endpoint: ContentEndpoint,
  transport: T,
}

impl<T: Transport> ContentClient<T> {
  /// Create a client for the REST root `api_root`
  /// (e.g. `https://example.atlassian.net/wiki/rest/api`).
  pub fn new(api_root: impl Into<String>, transport: T) -> Self {
    Self {
      endpoint: ContentEndpoint::new(api_root),
      transport,
    }
  }

  /// The transport requests are sent through.
  pub fn transport(&self) -> &T {
    &self.transport
  }

  /// Fetch a content by ID.
  ///
  /// # Arguments
  /// * `content_id` - Identifier of the content to retrieve.
  /// * `expand` - Fields to expand (e.g. `body.storage`, `version`).
  pub async fn get_content(&self, content_id: &str, expand: &[&str]) -> Result<Content, ApiError> {
    require_id(content_id, "get")?;

    let url = with_expand(self.endpoint.url(content_id, &[])?, expand);
    let body = self.send(ApiRequest::new(HttpMethod::Get, url)).await?;
    decode(&body)
  }

  /// Create a new content. `content.id` must be empty.
  ///
  /// # Returns
  /// The stored content as echoed by the server, including its new ID.
  pub async fn create_content(&self, content: &Content) -> Result<Content, ApiError> {
    if !content.id.is_empty() {
      return Err(ApiError::InvalidContent(format!(
        "create expects content without an id, got {}",
        content.id
      )));
    }

    let created: Content = self.write(HttpMethod::Post, "", &[], content).await?;
    info!("Created content {} ({})", created.id, created.title);
    Ok(created)
  }

  /// Replace a content. The caller sets `content.version` to the next
  /// version number.
  pub async fn update_content(&self, content: &Content) -> Result<Content, ApiError> {
    require_id(&content.id, "update")?;

    let updated: Content = self.write(HttpMethod::Put, &content.id, &[], content).await?;
    info!("Updated content {} to version {}", updated.id, updated.version_number());
    Ok(updated)
  }

  /// Delete a content. The response body is ignored.
  pub async fn delete_content(&self, content_id: &str) -> Result<(), ApiError> {
    require_id(content_id, "delete")?;

    let url = self.endpoint.url(content_id, &[])?;
    self.send(ApiRequest::new(HttpMethod::Delete, url)).await?;
    info!("Deleted content {content_id}");
    Ok(())
  }

  /// Attach a label to `content.id` using `content.label_prefix` and
  /// `content.label_name`. See [`Content::label`].
  pub async fn add_label(&self, content: &Content) -> Result<Content, ApiError> {
    require_id(&content.id, "add label")?;

    self
      .write(HttpMethod::Post, &content.id, &["label"], content)
      .await
  }

  /// Upload every file in `content.attachments` to `content.id`.
  ///
  /// Files that cannot be opened are skipped; see
  /// [`multipart_body`](super::encode::multipart_body).
  pub async fn add_attachments(&self, content: &Content) -> Result<Content, ApiError> {
    require_id(&content.id, "add attachments")?;

    let url = self.endpoint.url(&content.id, &["child", "attachment"])?;
    let (body, headers) = multipart_body(&content.attachments).await?;

    let response = self
      .send(ApiRequest {
        method: HttpMethod::Post,
        url,
        headers,
        body,
      })
      .await?;
    decode(&response)
  }

  /// List every direct child page of `request.content_id`.
  pub async fn get_child_pages(&self, request: PageRequest, expand: &[&str]) -> Result<Vec<Content>, ApiError> {
    require_id(&request.content_id, "list child pages")?;
    collect_all(&self.transport, &self.endpoint, request, CHILD_PAGES, expand).await
  }

  /// List every label of `request.content_id`.
  pub async fn get_labels(&self, request: PageRequest) -> Result<Vec<Label>, ApiError> {
    require_id(&request.content_id, "list labels")?;
    collect_all(&self.transport, &self.endpoint, request, LABELS, &[]).await
  }

  async fn write(
    &self,
    method: HttpMethod,
    content_id: &str,
    subresource: &[&str],
    content: &Content,
  ) -> Result<Content, ApiError> {
    let url = self.endpoint.url(content_id, subresource)?;
    let (body, headers) = json_body(content)?;

    let response = self
      .send(ApiRequest {
        method,
        url,
        headers,
        body,
      })
      .await?;
    decode(&response)
  }

  async fn send(&self, request: ApiRequest) -> Result<Vec<u8>, ApiError> {
    debug!("{} {}", request.method, request.url);
    if let RequestBody::Multipart(files) = &request.body {
      debug!("Uploading {} attachment(s)", files.len());
    }
    Ok(self.transport.send(request).await?)
  }
}

fn require_id(content_id: &str, operation: &str) -> Result<(), ApiError> {
  if content_id.is_empty() {
    return Err(ApiError::InvalidContent(format!("{operation} requires a content id")));
  }
  Ok(())
}
