//! Request handlers.

pub mod health;
pub mod login;
pub mod whoami;
