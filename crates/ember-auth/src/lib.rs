//! JWT issuance, verification, and route gating for Ember services.
//!
//! The login flow mints an access/refresh pair through [`TokenIssuer`];
//! protected routes run incoming tokens through [`TokenGate`], which
//! tries access validation first and falls back to refresh validation.

pub mod gate;
pub mod token;

pub use gate::{GateDecision, TokenGate};
pub use token::{AuthError, Claims, TokenIssuer, TokenVerifier};
