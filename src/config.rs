use chrono::Duration;
use serde::Deserialize;

/// Settings consumed by the credential and token subsystem.
///
/// Deserialized from whatever configuration source the embedding service
/// uses; only the fields this crate needs live here. Key material arrives as
/// PEM text, not file paths, so loading and secret handling stay with the
/// caller.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// RSA private key (PEM) used to sign access tokens.
    pub access_token_private_key_pem: String,
    /// RSA public key (PEM) used to verify access tokens.
    pub access_token_public_key_pem: String,
    /// Access token lifetime in seconds.
    pub access_token_ttl_seconds: i64,
}

impl AuthConfig {
    /// The access token lifetime as a duration.
    ///
    /// # Returns
    /// `None` when the configured seconds are not representable as a
    /// duration, so an absurd setting is rejected at startup instead of
    /// panicking at issuance time
    pub fn access_token_lifetime(&self) -> Option<Duration> {
        Duration::try_seconds(self.access_token_ttl_seconds)
    }
}
