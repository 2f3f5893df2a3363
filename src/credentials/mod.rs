//! Credential discovery for the CLI.
//!
//! Atlassian Cloud authenticates REST calls with an e-mail address and an API
//! token (<https://id.atlassian.com/manage-profile/security/api-tokens>).
//! Explicit flags or environment variables are used first; anything missing is
//! looked up in `~/.netrc`:
//!
//! ```text
//! machine your-instance.atlassian.net
//!   login your.email@example.com
//!   password your-api-token-here
//! ```

mod netrc;
mod provider;
mod types;

pub use netrc::NetrcProvider;
pub use provider::{CredentialsProvider, resolve_credentials};
pub use types::{Credential, CredentialError};
