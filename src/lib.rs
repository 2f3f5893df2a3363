//! Client library for the Confluence REST content API.
//!
//! [`confluence::ContentClient`] creates, reads, updates and deletes pages,
//! adds labels, uploads attachments and pages through child-page and label
//! listings. Requests go through the [`confluence::Transport`] trait;
//! [`confluence::HttpTransport`] is the `reqwest` implementation.

pub mod cli;
pub mod commands;
pub mod confluence;
pub mod credentials;
