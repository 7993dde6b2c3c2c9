use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::AccessTokenClaims;
use super::errors::TokenError;

/// Issues RS256-signed access tokens with a fixed lifetime.
///
/// Holds only the private half of the keypair. Validation is a separate
/// concern handled by [`TokenValidator`](super::TokenValidator), which needs
/// only the public half, so resource servers never see signing material.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    access_token_lifetime: Duration,
}

impl TokenIssuer {
    /// Create an issuer from an RSA private key in PEM form.
    ///
    /// # Arguments
    /// * `private_key_pem` - RSA private key, PKCS#1 or PKCS#8 PEM
    /// * `access_token_lifetime` - Lifetime stamped into every issued token
    ///
    /// # Errors
    /// * `InvalidKey` - The PEM does not contain a usable RSA private key
    pub fn from_rsa_pem(
        private_key_pem: &[u8],
        access_token_lifetime: Duration,
    ) -> Result<Self, TokenError> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem)
            .map_err(|e| TokenError::InvalidKey(e.to_string()))?;
        Ok(Self {
            encoding_key,
            access_token_lifetime,
        })
    }

    /// Mint a signed access token for an account.
    ///
    /// # Arguments
    /// * `account_uid` - Subject the token is granted to; must be non-empty
    /// * `scopes` - Granted scope codes, joined with `,` in the given order,
    ///   without deduplication
    ///
    /// # Returns
    /// Compact JWS string with claims `sub`, `iat`, `exp`, `scope`, where
    /// `exp = iat + access_token_lifetime`
    ///
    /// # Errors
    /// * `EmptySubject` - `account_uid` is empty
    /// * `InvalidLifetime` - The expiry is not representable
    /// * `EncodingFailed` - Signing the claims failed
    pub fn issue_access_token<S: AsRef<str>>(
        &self,
        account_uid: &str,
        scopes: &[S],
    ) -> Result<String, TokenError> {
        if account_uid.is_empty() {
            return Err(TokenError::EmptySubject);
        }

        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.access_token_lifetime)
            .ok_or(TokenError::InvalidLifetime)?;
        let claims = AccessTokenClaims {
            sub: Some(account_uid.to_string()),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            scope: join_scopes(scopes),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// The configured access token lifetime.
    pub fn access_token_lifetime(&self) -> Duration {
        self.access_token_lifetime
    }
}

fn join_scopes<S: AsRef<str>>(scopes: &[S]) -> String {
    scopes
        .iter()
        .map(|scope| scope.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}
