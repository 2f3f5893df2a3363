//! CLI subcommand handlers.
//!
//! Keeps `cli.rs` limited to argument definitions while the handlers build
//! the client and print results.

pub mod content;
pub mod version;
