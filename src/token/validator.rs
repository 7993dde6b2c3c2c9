use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::AccessTokenClaims;
use super::errors::TokenError;

/// Validates RS256-signed access tokens.
///
/// Needs only the public half of the keypair, never the signing key.
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    /// Create a validator from an RSA public key in PEM form.
    ///
    /// # Arguments
    /// * `public_key_pem` - RSA public key, SPKI PEM
    ///
    /// # Errors
    /// * `InvalidKey` - The PEM does not contain a usable RSA public key
    ///
    /// # Security Notes
    /// - The algorithm is pinned to RS256: tokens asserting any other
    ///   algorithm in their header, including `none`, are rejected
    /// - Expiry is checked with zero leeway; issuer and validator share a clock
    pub fn from_rsa_pem(public_key_pem: &[u8]) -> Result<Self, TokenError> {
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem)
            .map_err(|e| TokenError::InvalidKey(e.to_string()))?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.leeway = 0;

        Ok(Self {
            decoding_key,
            validation,
        })
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// # Arguments
    /// * `token` - Compact JWS string to validate
    ///
    /// # Returns
    /// The decoded claims
    ///
    /// # Errors
    /// * `Expired` - Signature verified but `exp` is in the past
    /// * `SignatureInvalid` - Signature check failed, or the token asserts a
    ///   different algorithm than the pinned one
    /// * `Malformed` - Not a parsable JWT, claims do not deserialize, or a
    ///   required claim is missing
    pub fn validate_access_token(&self, token: &str) -> Result<AccessTokenClaims, TokenError> {
        jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::SignatureInvalid
                }
                _ => TokenError::Malformed(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;
    use jsonwebtoken::EncodingKey;
    use jsonwebtoken::Header;
    use serde::Serialize;

    use super::*;
    use crate::test_support::RSA_PRIVATE_KEY_PEM;
    use crate::test_support::RSA_PUBLIC_KEY_PEM;
    use crate::test_support::UNTRUSTED_RSA_PRIVATE_KEY_PEM;
    use crate::test_support::UNTRUSTED_RSA_PUBLIC_KEY_PEM;
    use crate::token::TokenIssuer;

    fn validator() -> TokenValidator {
        TokenValidator::from_rsa_pem(RSA_PUBLIC_KEY_PEM.as_bytes())
            .expect("Failed to build validator")
    }

    fn trusted_token(lifetime: Duration) -> String {
        TokenIssuer::from_rsa_pem(RSA_PRIVATE_KEY_PEM.as_bytes(), lifetime)
            .expect("Failed to build issuer")
            .issue_access_token("acct-42", &["account:read"])
            .expect("Failed to issue token")
    }

    #[test]
    fn test_valid_token_roundtrips_claims() {
        let claims = validator()
            .validate_access_token(&trusted_token(Duration::minutes(15)))
            .expect("Failed to validate token");

        assert_eq!(claims.subject(), Some("acct-42"));
        assert!(claims.has_scope("account:read"));
    }

    #[test]
    fn test_expired_token_is_reported_as_expired_not_invalid() {
        // Negative lifetime forces exp into the past at issuance
        let result = validator().validate_access_token(&trusted_token(Duration::minutes(-5)));

        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_token_signed_by_untrusted_key_is_rejected() {
        let forged = TokenIssuer::from_rsa_pem(
            UNTRUSTED_RSA_PRIVATE_KEY_PEM.as_bytes(),
            Duration::minutes(15),
        )
        .expect("Failed to build issuer")
        .issue_access_token("acct-42", &["account:read"])
        .expect("Failed to issue token");

        let result = validator().validate_access_token(&forged);
        assert!(matches!(result, Err(TokenError::SignatureInvalid)));
    }

    #[test]
    fn test_trusted_token_fails_under_a_different_public_key() {
        let other = TokenValidator::from_rsa_pem(UNTRUSTED_RSA_PUBLIC_KEY_PEM.as_bytes())
            .expect("Failed to build validator");

        let result = other.validate_access_token(&trusted_token(Duration::minutes(15)));
        assert!(matches!(result, Err(TokenError::SignatureInvalid)));
    }

    #[test]
    fn test_token_signed_with_wrong_algorithm_is_rejected() {
        let now = Utc::now();
        let claims = AccessTokenClaims {
            sub: Some("acct-42".to_string()),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(15)).timestamp(),
            scope: "account:read".to_string(),
        };
        let hs256 = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"shared-secret"),
        )
        .expect("Failed to encode token");

        let result = validator().validate_access_token(&hs256);
        assert!(matches!(result, Err(TokenError::SignatureInvalid)));
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        assert!(matches!(
            validator().validate_access_token("not-a-token"),
            Err(TokenError::Malformed(_))
        ));
        assert!(matches!(
            validator().validate_access_token("a.b.c"),
            Err(TokenError::Malformed(_))
        ));
        assert!(matches!(
            validator().validate_access_token(""),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn test_token_without_expiry_is_malformed() {
        #[derive(Serialize)]
        struct NoExpiry {
            sub: String,
            iat: i64,
            scope: String,
        }
        let claims = NoExpiry {
            sub: "acct-42".to_string(),
            iat: Utc::now().timestamp(),
            scope: "account:read".to_string(),
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::RS256),
            &claims,
            &EncodingKey::from_rsa_pem(RSA_PRIVATE_KEY_PEM.as_bytes()).unwrap(),
        )
        .expect("Failed to encode token");

        let result = validator().validate_access_token(&token);
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_garbage_public_key_is_rejected() {
        let result = TokenValidator::from_rsa_pem(b"not a pem");
        assert!(matches!(result, Err(TokenError::InvalidKey(_))));
    }
}
