pub mod claims;
pub mod errors;
pub mod issuer;
pub mod refresh;
pub mod validator;

pub use claims::AccessTokenClaims;
pub use errors::TokenError;
pub use issuer::TokenIssuer;
pub use refresh::issue_refresh_token;
pub use validator::TokenValidator;
