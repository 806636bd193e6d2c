//! Layered secret resolution for Ember services.
//!
//! Secrets are looked up through an ordered list of providers; the
//! process environment wins over the `private/` file store.

pub mod providers;
pub mod resolver;

pub use providers::{EnvProvider, FileProvider, SecretProvider, SecretValue};
pub use resolver::SecretResolver;
