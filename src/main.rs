//! confluence-content - Manage Confluence content from the command line
//!
//! This is the main entry point for the CLI application.

#[tokio::main]
async fn main() {
  confluence_content::cli::run().await;
}
