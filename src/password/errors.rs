use thiserror::Error;

/// Error type for credential hashing operations.
///
/// A wrong password is not an error; `verify` reports it as `Ok(false)`.
/// `MalformedRecord` signals a damaged stored record, which callers should
/// treat as a data-integrity fault rather than a failed login.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Malformed credential record: {0}")]
    MalformedRecord(String),

    #[error("Key derivation failed: {0}")]
    KdfFailed(String),
}
