use thiserror::Error;

/// Error type for PKCE challenge derivation and exchange checks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PkceError {
    #[error("Code verifier length must be between {min} and {max} characters, got {actual}")]
    VerifierLength {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Code verifier must be ASCII")]
    VerifierNotAscii,

    #[error("Authorization requires a code verifier")]
    VerifierMissing,

    #[error("Code verifier does not match the recorded challenge")]
    ChallengeMismatch,
}
