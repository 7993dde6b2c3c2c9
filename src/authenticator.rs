use chrono::Duration;
use serde::Serialize;

use crate::config::AuthConfig;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::issue_refresh_token;
use crate::token::AccessTokenClaims;
use crate::token::TokenError;
use crate::token::TokenIssuer;
use crate::token::TokenValidator;

/// Token type reported in every grant, per RFC 6750.
const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Authentication coordinator combining password verification, token
/// issuance, and the bearer-token guard.
///
/// Holds no per-request state; one instance serves every login and every
/// guarded request concurrently.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_validator: TokenValidator,
}

/// Verified caller identity produced by the authentication guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    /// Account the validated token was granted to
    pub account_uid: String,
    /// Always `false` here; elevation is an authorization decision made by
    /// the caller against its own account records, never inferred from the
    /// token
    pub is_admin: bool,
}

/// Token bundle returned by a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct TokenGrant {
    /// Signed access token to present on guarded requests
    pub access_token: String,
    /// Opaque refresh token for the caller to persist alongside the grant
    pub refresh_token: String,
    /// Always `Bearer`
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create an authenticator from RSA key material in PEM form.
    ///
    /// # Arguments
    /// * `private_key_pem` - RSA private key used to sign access tokens
    /// * `public_key_pem` - RSA public key used to verify access tokens
    /// * `access_token_lifetime` - Lifetime stamped into every issued token
    ///
    /// # Errors
    /// * `InvalidKey` - Either PEM does not contain a usable RSA key
    pub fn new(
        private_key_pem: &[u8],
        public_key_pem: &[u8],
        access_token_lifetime: Duration,
    ) -> Result<Self, TokenError> {
        Ok(Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::from_rsa_pem(private_key_pem, access_token_lifetime)?,
            token_validator: TokenValidator::from_rsa_pem(public_key_pem)?,
        })
    }

    /// Create an authenticator from parsed settings.
    ///
    /// # Errors
    /// * `InvalidKey` - The configured PEMs do not contain usable RSA keys
    /// * `InvalidLifetime` - The configured lifetime is not representable
    pub fn from_config(config: &AuthConfig) -> Result<Self, TokenError> {
        let access_token_lifetime = config
            .access_token_lifetime()
            .ok_or(TokenError::InvalidLifetime)?;
        Self::new(
            config.access_token_private_key_pem.as_bytes(),
            config.access_token_public_key_pem.as_bytes(),
            access_token_lifetime,
        )
    }

    /// Hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Credential record in `hex(salt)$hex(key)` form
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored credential record.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `record` - Stored credential record
    ///
    /// # Returns
    /// True if the password matches, false otherwise
    ///
    /// # Errors
    /// * `PasswordError` - The record is malformed; never returned for a
    ///   wrong password
    pub fn verify_password(&self, password: &str, record: &str) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, record)
    }

    /// Verify credentials and grant tokens.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_record` - Stored credential record for the account
    /// * `account_uid` - Subject to bind the access token to
    /// * `scopes` - Scope codes to grant
    ///
    /// # Returns
    /// TokenGrant with a signed access token and a fresh refresh token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - The stored record is unusable; a data-integrity fault,
    ///   not a wrong password
    /// * `Token` - Token issuance failed after the password verified
    pub fn login<S: AsRef<str>>(
        &self,
        password: &str,
        stored_record: &str,
        account_uid: &str,
        scopes: &[S],
    ) -> Result<TokenGrant, AuthenticationError> {
        // Verify password
        if !self.password_hasher.verify(password, stored_record)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        // Mint the access/refresh pair
        let access_token = self.token_issuer.issue_access_token(account_uid, scopes)?;
        Ok(TokenGrant {
            access_token,
            refresh_token: issue_refresh_token(),
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.token_issuer.access_token_lifetime().num_seconds(),
        })
    }

    /// Mint a signed access token without password verification.
    ///
    /// Useful for refresh flows where the caller has already proven identity
    /// by other means.
    ///
    /// # Arguments
    /// * `account_uid` - Subject to bind the token to; must be non-empty
    /// * `scopes` - Scope codes to grant
    ///
    /// # Errors
    /// * `TokenError` - Subject is empty or signing failed
    pub fn issue_access_token<S: AsRef<str>>(
        &self,
        account_uid: &str,
        scopes: &[S],
    ) -> Result<String, TokenError> {
        self.token_issuer.issue_access_token(account_uid, scopes)
    }

    /// Verify an access token and return its claims.
    ///
    /// # Arguments
    /// * `token` - Compact JWS string
    ///
    /// # Errors
    /// * `TokenError` - Token is expired, forged, or malformed
    pub fn validate_access_token(&self, token: &str) -> Result<AccessTokenClaims, TokenError> {
        self.token_validator.validate_access_token(token)
    }

    /// Authentication guard: resolve a bearer token to a verified identity.
    ///
    /// Every protected operation passes through here. The token is validated
    /// from scratch on every call; nothing is cached between calls.
    ///
    /// # Arguments
    /// * `token` - Raw bearer token, already stripped of the `Bearer ` prefix
    ///   by the transport
    ///
    /// # Returns
    /// AuthenticatedIdentity with the token's subject and `is_admin = false`
    ///
    /// # Errors
    /// * `Expired` / `SignatureInvalid` / `Malformed` - Validation failed
    /// * `MissingSubject` - The token validated but carries no subject; never
    ///   defaulted to an anonymous identity
    pub fn authenticate(&self, token: &str) -> Result<AuthenticatedIdentity, TokenError> {
        let claims = self.token_validator.validate_access_token(token)?;
        let account_uid = claims.sub.ok_or(TokenError::MissingSubject)?;
        Ok(AuthenticatedIdentity {
            account_uid,
            is_admin: false,
        })
    }
}
