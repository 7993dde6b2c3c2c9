//! Credential and token core for an OAuth2-style authorization server
//!
//! Provides the cryptographic subsystem behind login and protected-resource
//! access:
//! - Password hashing and verification (scrypt, salted self-contained records)
//! - RS256 access tokens and opaque refresh tokens
//! - PKCE code challenges and exchange-time verification (RFC 7636)
//! - The authentication guard resolving bearer tokens to verified identities
//!
//! Transports, account storage, and configuration loading stay with the
//! embedding service. This crate takes raw token strings and parsed settings
//! and returns typed results for the caller to map onto its protocol.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth_core::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let record = hasher.hash("correct horse battery staple").unwrap();
//! let is_valid = hasher.verify("correct horse battery staple", &record).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## PKCE
//! ```
//! use auth_core::pkce;
//!
//! // Verifier and challenge from RFC 7636 appendix B.
//! let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
//! let challenge = pkce::challenge_from_verifier(verifier).unwrap();
//! assert_eq!(challenge, "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
//!
//! // At exchange time, the recorded challenge gates the presented verifier.
//! pkce::verify_code_exchange(Some(&challenge), Some(verifier)).unwrap();
//! ```
//!
//! ## Complete Authentication Flow
//! ```no_run
//! use auth_core::Authenticator;
//! use chrono::Duration;
//!
//! let private_pem = std::fs::read("secrets/access-token-private.pem").unwrap();
//! let public_pem = std::fs::read("secrets/access-token-public.pem").unwrap();
//! let auth = Authenticator::new(&private_pem, &public_pem, Duration::minutes(15)).unwrap();
//!
//! // Register: hash password
//! let record = auth.hash_password("correct horse battery staple").unwrap();
//!
//! // Login: verify and grant tokens
//! let grant = auth
//!     .login("correct horse battery staple", &record, "acct-42", &["account:read"])
//!     .unwrap();
//! println!("Bearer {}", grant.access_token);
//!
//! // Guarded request: resolve the bearer token to an identity
//! let identity = auth.authenticate(&grant.access_token).unwrap();
//! assert_eq!(identity.account_uid, "acct-42");
//! ```

pub mod authenticator;
pub mod config;
pub mod geoip;
pub mod password;
pub mod pkce;
pub mod token;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use authenticator::AuthenticatedIdentity;
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::TokenGrant;
pub use config::AuthConfig;
pub use geoip::GeoIpClient;
pub use geoip::IpInfo;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use pkce::PkceError;
pub use token::issue_refresh_token;
pub use token::AccessTokenClaims;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TokenValidator;
