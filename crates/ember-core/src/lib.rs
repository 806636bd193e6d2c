//! Ember Core
//!
//! Shared error handling and credential types for Ember services.
//! This crate has minimal dependencies and defines the vocabulary
//! used across the other crates.

pub mod credentials;
pub mod error;

pub use credentials::{CredentialPair, TokenKind};
pub use error::{Error, Result};
