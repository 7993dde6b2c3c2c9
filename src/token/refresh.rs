use rand::rngs::OsRng;
use rand::RngCore;

/// Refresh token entropy in bytes (64 hex characters once encoded).
const REFRESH_TOKEN_LEN: usize = 32;

/// Generate an opaque refresh token.
///
/// The token carries no claims and no expiry; it is only meaningful as a
/// lookup key in whatever store the caller persists it to. Uniqueness is
/// probabilistic at this entropy.
///
/// # Returns
/// 256 bits from the operating system's CSPRNG, as 64 lowercase hex characters
pub fn issue_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_LEN];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_refresh_token_is_64_lowercase_hex_characters() {
        let token = issue_refresh_token();

        assert_eq!(token.len(), 64);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_refresh_tokens_do_not_repeat() {
        let tokens: HashSet<String> = (0..10_000).map(|_| issue_refresh_token()).collect();
        assert_eq!(tokens.len(), 10_000);
    }
}
