//! Handlers for the content subcommands (`get`, `create`, `update`,
//! `delete`, `label`, `attach`, `children`, `labels`).
//!
//! Each handler resolves credentials, builds a [`ContentClient`] over the
//! HTTP transport, runs exactly one facade operation and prints the decoded
//! result as JSON on stdout.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::{Cli, ContentCommand};
use crate::confluence::{Ancestor, Body, Content, ContentClient, HttpTransport, PageRequest, Version};
use crate::credentials::{NetrcProvider, resolve_credentials};

/// Run a content subcommand.
///
/// # Errors
/// Returns the first failure with the operation name attached as context.
pub(crate) async fn handle_content_command(command: &ContentCommand, cli: &Cli) -> Result<()> {
  let client = connect(cli)?;

  match command {
    ContentCommand::Get { id, expand } => {
      let expand: Vec<&str> = expand.iter().map(String::as_str).collect();
      let content = client
        .get_content(id, &expand)
        .await
        .with_context(|| format!("Failed to fetch content {id}"))?;
      print_json(&content)
    }
    ContentCommand::Create {
      title,
      space,
      parent,
      body_file,
      content_type,
    } => {
      let mut content = Content::page(space, title, read_body(body_file.as_deref())?);
      content.content_type = content_type.clone();
      if let Some(parent) = parent {
        content.ancestors.push(Ancestor { id: parent.clone() });
      }

      let created = client
        .create_content(&content)
        .await
        .with_context(|| format!("Failed to create page {title:?}"))?;
      print_json(&created)
    }
    ContentCommand::Update { id, title, body_file } => {
      let current = client
        .get_content(id, &["body.storage", "version", "space"])
        .await
        .with_context(|| format!("Failed to fetch content {id}"))?;
      let content = next_revision(current, title.as_deref(), body_file.as_deref())?;

      let updated = client
        .update_content(&content)
        .await
        .with_context(|| format!("Failed to update content {id}"))?;
      print_json(&updated)
    }
    ContentCommand::Delete { id } => {
      client
        .delete_content(id)
        .await
        .with_context(|| format!("Failed to delete content {id}"))?;
      println!("Deleted {id}");
      Ok(())
    }
    ContentCommand::Label { id, name, prefix } => {
      let labelled = client
        .add_label(&Content::label(id, prefix, name))
        .await
        .with_context(|| format!("Failed to add label {name:?} to {id}"))?;
      print_json(&labelled)
    }
    ContentCommand::Attach { id, files } => {
      let content = Content {
        id: id.clone(),
        attachments: files.iter().map(|p| p.to_string_lossy().into_owned()).collect(),
        ..Content::default()
      };
      let result = client
        .add_attachments(&content)
        .await
        .with_context(|| format!("Failed to upload attachments to {id}"))?;
      print_json(&result)
    }
    ContentCommand::Children { id, limit, expand } => {
      let expand: Vec<&str> = expand.iter().map(String::as_str).collect();
      let children = client
        .get_child_pages(PageRequest::new(id, *limit), &expand)
        .await
        .with_context(|| format!("Failed to list child pages of {id}"))?;
      print_json(&children)
    }
    ContentCommand::Labels { id, limit } => {
      let labels = client
        .get_labels(PageRequest::new(id, *limit))
        .await
        .with_context(|| format!("Failed to list labels of {id}"))?;
      print_json(&labels)
    }
  }
}

fn connect(cli: &Cli) -> Result<ContentClient<HttpTransport>> {
  let base_url = cli
    .auth
    .url
    .as_deref()
    .context("--url (or CONFLUENCE_URL) is required")?;

  let credential = resolve_credentials(
    base_url,
    cli.auth.user.clone(),
    cli.auth.token.clone(),
    &NetrcProvider::new(),
  )
  .context("Failed to resolve credentials")?;

  let transport = HttpTransport::new(credential.username, credential.password, cli.performance.timeout)?;
  Ok(ContentClient::new(cli.auth.api_root(base_url), transport))
}

/// Apply the requested title/body changes to `current` and bump its version.
fn next_revision(mut current: Content, title: Option<&str>, body_file: Option<&Path>) -> Result<Content> {
  if let Some(title) = title {
    current.title = title.to_string();
  }
  if body_file.is_some() {
    current.body = Some(Body::storage(read_body(body_file)?));
  }
  current.version = Some(Version {
    number: current.version_number() + 1,
  });
  Ok(current)
}

fn read_body(path: Option<&Path>) -> Result<String> {
  match path {
    Some(path) => std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display())),
    None => Ok(String::new()),
  }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}
