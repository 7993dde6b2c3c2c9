//! Shared key fixtures for unit tests.
//!
//! The trusted pair backs issuance and validation; the untrusted pair stands
//! in for an attacker's keys in signature tests.

pub(crate) const RSA_PRIVATE_KEY_PEM: &str = include_str!("../tests/fixtures/rsa_private.pem");
pub(crate) const RSA_PUBLIC_KEY_PEM: &str = include_str!("../tests/fixtures/rsa_public.pem");
pub(crate) const UNTRUSTED_RSA_PRIVATE_KEY_PEM: &str =
    include_str!("../tests/fixtures/untrusted_rsa_private.pem");
pub(crate) const UNTRUSTED_RSA_PUBLIC_KEY_PEM: &str =
    include_str!("../tests/fixtures/untrusted_rsa_public.pem");
