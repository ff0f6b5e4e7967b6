//! Login credential check
//!
//! A fixed in-memory credential set compared by exact string equality.
//! Nothing is issued on success: no token, no session, no cookie. The
//! employee routes are not guarded.

mod credentials;

pub use credentials::{Credential, CredentialStore, default_credentials, parse_credentials};
