//! Command-line interface definitions for confluence-content.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use url::Url;

use crate::commands::content;
use crate::commands::version::handle_version_command;

/// confluence-content - Manage Confluence pages from the command line
#[derive(Debug, Parser)]
#[command(
  name = "confluence-content",
  version,
  about = "Create, read, update and delete Confluence content",
  long_about = "A command-line client for the Confluence REST content API.\n\
                Manages pages, labels and attachments and lists child pages.",
  styles = get_clap_styles()
)]
pub struct Cli {
  /// Subcommand to execute
  #[command(subcommand)]
  pub command: Command,

  /// Authentication options
  #[command(flatten)]
  pub auth: AuthOptions,

  /// Behavior options
  #[command(flatten)]
  pub behavior: BehaviorOptions,

  /// Performance options
  #[command(flatten)]
  pub performance: PerformanceOptions,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  #[command(flatten)]
  Content(ContentCommand),

  /// Display version and build information
  Version {
    /// Output in JSON format
    #[arg(long)]
    json: bool,
  },
}

/// Subcommands that talk to the content API.
#[derive(Debug, Subcommand)]
pub enum ContentCommand {
  /// Print a content as JSON
  Get {
    #[arg(value_name = "ID")]
    id: String,

    /// Fields to expand (comma separated, e.g. body.storage,version)
    #[arg(long, value_delimiter = ',', default_value = "body.storage,version,space")]
    expand: Vec<String>,
  },

  /// Create a new page
  Create {
    /// Page title
    #[arg(long)]
    title: String,

    /// Key of the space the page is created in
    #[arg(long, value_name = "KEY")]
    space: String,

    /// Parent page ID
    #[arg(long, value_name = "ID")]
    parent: Option<String>,

    /// File holding the body in storage format
    #[arg(long, value_name = "FILE")]
    body_file: Option<PathBuf>,

    /// Content type
    #[arg(long = "type", default_value = "page")]
    content_type: String,
  },

  /// Replace the title and/or body of a page, bumping its version
  Update {
    #[arg(value_name = "ID")]
    id: String,

    /// New title
    #[arg(long)]
    title: Option<String>,

    /// File holding the new body in storage format
    #[arg(long, value_name = "FILE")]
    body_file: Option<PathBuf>,
  },

  /// Delete a content
  Delete {
    #[arg(value_name = "ID")]
    id: String,
  },

  /// Add a label to a content
  Label {
    #[arg(value_name = "ID")]
    id: String,

    /// Label name
    #[arg(value_name = "NAME")]
    name: String,

    /// Label prefix
    #[arg(long, default_value = "global")]
    prefix: String,
  },

  /// Upload files as attachments of a content
  Attach {
    #[arg(value_name = "ID")]
    id: String,

    /// Files to upload; unreadable paths are skipped
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
  },

  /// List every child page of a content
  Children {
    #[arg(value_name = "ID")]
    id: String,

    /// Page size used while paginating
    #[arg(long, default_value = "25", value_name = "N")]
    limit: usize,

    /// Fields to expand on each child (comma separated)
    #[arg(long, value_delimiter = ',')]
    expand: Vec<String>,
  },

  /// List every label of a content
  Labels {
    #[arg(value_name = "ID")]
    id: String,

    /// Page size used while paginating
    #[arg(long, default_value = "25", value_name = "N")]
    limit: usize,
  },
}

/// Normalize a URL by adding https:// if no scheme is present
fn normalize_url(url: &str) -> Result<String, String> {
  let trimmed = url.trim();

  let parsed = match Url::parse(trimmed) {
    Ok(parsed) if parsed.has_host() => parsed,
    _ => Url::parse(&format!("https://{trimmed}")).map_err(|e| format!("Invalid URL: {e}"))?,
  };

  Ok(parsed.as_str().trim_end_matches('/').to_string())
}

/// Authentication options
#[derive(Debug, Parser)]
pub struct AuthOptions {
  /// Confluence base URL
  #[arg(long, env = "CONFLUENCE_URL", value_name = "URL", value_parser = normalize_url)]
  pub url: Option<String>,

  /// Path of the REST API below the base URL
  #[arg(long, env = "CONFLUENCE_API_PATH", default_value = "/wiki/rest/api", value_name = "PATH")]
  pub api_path: String,

  /// Confluence user email
  #[arg(long, env = "CONFLUENCE_USER", value_name = "EMAIL")]
  pub user: Option<String>,

  /// Confluence API token
  #[arg(long, env = "CONFLUENCE_TOKEN", value_name = "TOKEN")]
  pub token: Option<String>,
}

impl AuthOptions {
  /// REST root the content client is created with.
  pub fn api_root(&self, base_url: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), self.api_path.trim_matches('/'))
  }
}

/// Behavior options
#[derive(Debug, Parser)]
pub struct BehaviorOptions {
  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,
}

/// Performance options
#[derive(Debug, Parser)]
pub struct PerformanceOptions {
  /// Request timeout in seconds
  #[arg(long, default_value = "30", value_name = "SECONDS")]
  pub timeout: u64,
}

impl Cli {
  /// Validate CLI arguments
  pub fn validate(&self) -> Result<(), String> {
    let Command::Content(command) = &self.command else {
      return Ok(());
    };
    if self.auth.url.is_none() {
      return Err("--url (or CONFLUENCE_URL) is required".to_string());
    }

    match command {
      ContentCommand::Children { limit, .. } | ContentCommand::Labels { limit, .. } if *limit == 0 => {
        Err("--limit must be at least 1".to_string())
      }
      ContentCommand::Update {
        title: None,
        body_file: None,
        ..
      } => Err("update needs --title and/or --body-file".to_string()),
      _ => Ok(()),
    }
  }
}

/// Parse CLI arguments, initialize logging, and dispatch to the chosen
/// command.
pub async fn run() {
  let cli = Cli::parse();

  init_tracing(&cli.behavior);

  if let Err(e) = cli.validate() {
    eprintln!("Error: {e}");
    process::exit(4); // Invalid arguments exit code
  }

  let result = match &cli.command {
    Command::Version { json } => {
      handle_version_command(*json);
      Ok(())
    }
    Command::Content(command) => content::handle_content_command(command, &cli).await,
  };

  if let Err(e) = result {
    eprintln!("Error: {e:#}");
    process::exit(1);
  }
}

fn init_tracing(behavior: &BehaviorOptions) {
  let level = if behavior.quiet {
    LevelFilter::ERROR
  } else {
    match behavior.verbose {
      0 => LevelFilter::WARN,
      1 => LevelFilter::INFO,
      2 => LevelFilter::DEBUG,
      _ => LevelFilter::TRACE,
    }
  };

  let env_filter = EnvFilter::builder()
    .with_default_directive(level.into())
    .from_env_lossy();

  let _ = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .try_init();
}

/// Get custom styles for clap help output
fn get_clap_styles() -> clap::builder::Styles {
  use clap::builder::styling::{AnsiColor, Effects};

  clap::builder::Styles::styled()
    .header(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .usage(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .literal(AnsiColor::BrightGreen.on_default())
    .placeholder(AnsiColor::BrightCyan.on_default())
    .error(AnsiColor::BrightRed.on_default() | Effects::BOLD)
    .valid(AnsiColor::BrightGreen.on_default())
    .invalid(AnsiColor::BrightRed.on_default())
}
