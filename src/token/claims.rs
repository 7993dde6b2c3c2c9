use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a signed access token.
///
/// The scope claim is a single comma-joined string rather than an array, in
/// the order the scopes were granted. Tokens may legitimately lack a subject
/// (client-credential style grants); the authentication guard is where a
/// subject becomes mandatory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessTokenClaims {
    /// Account the token was granted to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Issue time as a Unix timestamp in seconds.
    pub iat: i64,
    /// Expiry as a Unix timestamp in seconds.
    pub exp: i64,
    /// Granted scope codes, comma-joined.
    #[serde(default)]
    pub scope: String,
}

impl AccessTokenClaims {
    /// The account the token is bound to, if any.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    /// The granted scope codes, in grant order.
    pub fn scopes(&self) -> Vec<&str> {
        self.scope.split(',').filter(|s| !s.is_empty()).collect()
    }

    /// Whether the token was granted the given scope code.
    pub fn has_scope(&self, code: &str) -> bool {
        self.scopes().iter().any(|granted| *granted == code)
    }
}
