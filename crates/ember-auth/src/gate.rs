//! The token gate: decides whether a protected operation may proceed.

use crate::token::{Claims, TokenVerifier};
use ember_core::credentials::TokenKind;
use tracing::{debug, error};

/// Outcome of a gate evaluation.
#[derive(Debug)]
pub enum GateDecision {
    /// The request may proceed. Claims are present when a token was
    /// actually checked (a non-requiring gate checks nothing).
    Allowed(Option<Claims>),
    /// No token was presented, or both validation attempts failed.
    Denied,
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }
}

/// Gates an operation behind a valid access or refresh token.
///
/// A requiring gate tries the presented token as an access token first,
/// then falls back to treating it as a refresh token; the first success
/// wins and a double failure denies the request. A non-requiring gate
/// waves every request through.
pub struct TokenGate {
    verifier: TokenVerifier,
    required: bool,
}

impl TokenGate {
    pub fn new(verifier: TokenVerifier) -> Self {
        Self {
            verifier,
            required: true,
        }
    }

    /// A gate that allows every request through unchecked.
    pub fn disabled(verifier: TokenVerifier) -> Self {
        Self {
            verifier,
            required: false,
        }
    }

    pub fn evaluate(&self, token: Option<&str>) -> GateDecision {
        if !self.required {
            return GateDecision::Allowed(None);
        }

        let Some(token) = token else {
            error!("no token presented");
            return GateDecision::Denied;
        };

        match self.verifier.verify(token, TokenKind::Access) {
            Ok(claims) => {
                debug!(username = %claims.sub, "access token accepted");
                return GateDecision::Allowed(Some(claims));
            }
            Err(e) => error!("access token rejected: {e}"),
        }

        match self.verifier.verify(token, TokenKind::Refresh) {
            Ok(claims) => {
                debug!(username = %claims.sub, "refresh token accepted");
                GateDecision::Allowed(Some(claims))
            }
            Err(e) => {
                error!("refresh token rejected: {e}");
                GateDecision::Denied
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenIssuer;

    const SECRET: &[u8] = b"test-signing-secret";

    fn gate() -> TokenGate {
        TokenGate::new(TokenVerifier::new(SECRET))
    }

    #[test]
    fn disabled_gate_allows_without_token() {
        let gate = TokenGate::disabled(TokenVerifier::new(SECRET));
        assert!(gate.evaluate(None).is_allowed());
        assert!(gate.evaluate(Some("not-even-a-jwt")).is_allowed());
    }

    #[test]
    fn missing_token_is_denied() {
        assert!(!gate().evaluate(None).is_allowed());
    }

    #[test]
    fn malformed_token_is_denied() {
        assert!(!gate().evaluate(Some("not-even-a-jwt")).is_allowed());
    }

    #[test]
    fn access_token_is_allowed() {
        let pair = TokenIssuer::new(SECRET).issue("alice").unwrap();

        match gate().evaluate(Some(&pair.access_token)) {
            GateDecision::Allowed(Some(claims)) => assert_eq!(claims.sub, "alice"),
            other => panic!("expected allowed with claims, got {other:?}"),
        }
    }

    #[test]
    fn refresh_token_is_allowed_as_fallback() {
        let pair = TokenIssuer::new(SECRET).issue("alice").unwrap();

        match gate().evaluate(Some(&pair.refresh_token)) {
            GateDecision::Allowed(Some(claims)) => {
                assert_eq!(claims.sub, "alice");
                assert_eq!(claims.kind, TokenKind::Refresh);
            }
            other => panic!("expected allowed with claims, got {other:?}"),
        }
    }

    #[test]
    fn foreign_token_is_denied() {
        let pair = TokenIssuer::new(b"somebody-elses-secret")
            .issue("alice")
            .unwrap();
        assert!(!gate().evaluate(Some(&pair.access_token)).is_allowed());
    }
}
