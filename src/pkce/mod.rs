pub mod challenge;
pub mod errors;

pub use challenge::challenge_from_verifier;
pub use challenge::verify_code_exchange;
pub use challenge::VERIFIER_MAX_LEN;
pub use challenge::VERIFIER_MIN_LEN;
pub use errors::PkceError;
