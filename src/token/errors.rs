use thiserror::Error;

/// Error type for token issuance and validation.
///
/// Validation failures are deliberately coarse: callers learn whether a token
/// expired, failed its signature check, or never parsed, and nothing more.
/// `Expired` is kept distinct so callers can prompt a refresh flow.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Invalid RSA key material: {0}")]
    InvalidKey(String),

    #[error("Cannot issue a token with an empty subject")]
    EmptySubject,

    #[error("Access token lifetime is out of range")]
    InvalidLifetime,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token signature is invalid")]
    SignatureInvalid,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token carries no subject identity")]
    MissingSubject,
}
