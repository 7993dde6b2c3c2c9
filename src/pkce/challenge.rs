use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use sha2::Digest;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::PkceError;

/// Minimum code verifier length allowed by RFC 7636.
pub const VERIFIER_MIN_LEN: usize = 43;

/// Maximum code verifier length allowed by RFC 7636.
pub const VERIFIER_MAX_LEN: usize = 128;

/// Derive the S256 code challenge for a verifier.
///
/// Deterministic and side-effect-free, so the same function serves both
/// sides of the exchange: clients derive the challenge they register, and
/// [`verify_code_exchange`] re-derives it from the presented verifier.
///
/// # Arguments
/// * `verifier` - Client-held code verifier, 43 to 128 ASCII characters
///
/// # Returns
/// Unpadded base64url encoding of the verifier's SHA-256 digest (43 characters)
///
/// # Errors
/// * `VerifierLength` - Verifier is outside the RFC 7636 length bounds
/// * `VerifierNotAscii` - Verifier contains non-ASCII characters
pub fn challenge_from_verifier(verifier: &str) -> Result<String, PkceError> {
    let length = verifier.chars().count();
    if !(VERIFIER_MIN_LEN..=VERIFIER_MAX_LEN).contains(&length) {
        return Err(PkceError::VerifierLength {
            min: VERIFIER_MIN_LEN,
            max: VERIFIER_MAX_LEN,
            actual: length,
        });
    }
    if !verifier.is_ascii() {
        return Err(PkceError::VerifierNotAscii);
    }

    let digest = Sha256::digest(verifier.as_bytes());
    Ok(URL_SAFE_NO_PAD.encode(digest))
}

/// Gate an authorization-code exchange on its recorded challenge.
///
/// Codes granted without PKCE (`recorded_challenge` is `None`) pass
/// unconditionally, even if a verifier is presented. Codes bound to a
/// challenge require a verifier that re-derives to exactly that challenge;
/// the comparison is constant-time.
///
/// # Arguments
/// * `recorded_challenge` - Challenge recorded at authorization time, if any
/// * `presented_verifier` - Verifier presented at exchange time, if any
///
/// # Errors
/// * `VerifierMissing` - The code is challenge-bound but no verifier was presented
/// * `ChallengeMismatch` - The verifier does not re-derive to the recorded challenge
/// * `VerifierLength` / `VerifierNotAscii` - The presented verifier is malformed
pub fn verify_code_exchange(
    recorded_challenge: Option<&str>,
    presented_verifier: Option<&str>,
) -> Result<(), PkceError> {
    let challenge = match recorded_challenge {
        Some(challenge) => challenge,
        None => return Ok(()),
    };
    let verifier = presented_verifier.ok_or(PkceError::VerifierMissing)?;

    let computed = challenge_from_verifier(verifier)?;
    if bool::from(computed.as_bytes().ct_eq(challenge.as_bytes())) {
        Ok(())
    } else {
        Err(PkceError::ChallengeMismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test vector from RFC 7636 appendix B.
    const RFC_VERIFIER: &str = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
    const RFC_CHALLENGE: &str = "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM";

    #[test]
    fn test_challenge_matches_rfc_7636_vector() {
        let challenge = challenge_from_verifier(RFC_VERIFIER).unwrap();
        assert_eq!(challenge, RFC_CHALLENGE);
    }

    #[test]
    fn test_challenge_is_deterministic_and_unpadded() {
        let verifier = "a".repeat(64);
        let first = challenge_from_verifier(&verifier).unwrap();
        let second = challenge_from_verifier(&verifier).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 43);
        assert!(!first.contains('='));
    }

    #[test]
    fn test_verifier_length_bounds_are_inclusive() {
        assert!(challenge_from_verifier(&"v".repeat(43)).is_ok());
        assert!(challenge_from_verifier(&"v".repeat(128)).is_ok());

        assert_eq!(
            challenge_from_verifier(&"v".repeat(42)),
            Err(PkceError::VerifierLength {
                min: 43,
                max: 128,
                actual: 42
            })
        );
        assert_eq!(
            challenge_from_verifier(&"v".repeat(129)),
            Err(PkceError::VerifierLength {
                min: 43,
                max: 128,
                actual: 129
            })
        );
    }

    #[test]
    fn test_non_ascii_verifier_is_rejected() {
        let verifier = format!("é{}", "v".repeat(42));
        assert_eq!(
            challenge_from_verifier(&verifier),
            Err(PkceError::VerifierNotAscii)
        );
    }

    #[test]
    fn test_exchange_without_challenge_ignores_verifier() {
        assert!(verify_code_exchange(None, None).is_ok());
        assert!(verify_code_exchange(None, Some(RFC_VERIFIER)).is_ok());
    }

    #[test]
    fn test_bound_exchange_requires_verifier() {
        assert_eq!(
            verify_code_exchange(Some(RFC_CHALLENGE), None),
            Err(PkceError::VerifierMissing)
        );
    }

    #[test]
    fn test_bound_exchange_accepts_matching_verifier() {
        assert!(verify_code_exchange(Some(RFC_CHALLENGE), Some(RFC_VERIFIER)).is_ok());
    }

    #[test]
    fn test_bound_exchange_rejects_wrong_verifier() {
        let other = "c".repeat(50);
        assert_eq!(
            verify_code_exchange(Some(RFC_CHALLENGE), Some(&other)),
            Err(PkceError::ChallengeMismatch)
        );
    }

    #[test]
    fn test_bound_exchange_propagates_invalid_verifier() {
        assert_eq!(
            verify_code_exchange(Some(RFC_CHALLENGE), Some("too-short")),
            Err(PkceError::VerifierLength {
                min: 43,
                max: 128,
                actual: 9
            })
        );
    }
}
