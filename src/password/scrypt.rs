use rand::rngs::OsRng;
use rand::RngCore;
use scrypt::Params;
use subtle::ConstantTimeEq;

use super::errors::PasswordError;

/// Separates the salt from the derived key in a stored record.
const RECORD_DELIMITER: char = '$';

/// Salt length in bytes (32 hex characters once encoded).
const SALT_LEN: usize = 16;

/// Derived key length in bytes (64 hex characters once encoded).
const KEY_LEN: usize = 32;

/// scrypt cost parameters: N = 2^14, r = 8, p = 1.
///
/// These are baked into every stored record's meaning. Changing them
/// invalidates existing records, so treat them as part of the storage format.
const SCRYPT_LOG_N: u8 = 14;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;

/// Password hashing implementation.
///
/// Provides one-way credential records (internally uses scrypt).
/// Records are self-contained: `hex(salt)$hex(derived_key)`, lowercase,
/// with a fresh random salt per hash call.
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Create a new password hasher with the standard cost parameters.
    ///
    /// # Returns
    /// PasswordHasher instance configured with the fixed process-wide work factor
    pub fn new() -> Self {
        let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, KEY_LEN)
            .expect("hard-coded scrypt parameters are valid");
        Self { params }
    }

    /// Create a password hasher with caller-supplied cost parameters.
    ///
    /// Records only verify under the parameters that produced them, so this
    /// is mainly for tests that cannot afford the production work factor.
    ///
    /// # Arguments
    /// * `params` - scrypt cost parameters to use for hashing and verification
    pub fn with_params(params: Params) -> Self {
        Self { params }
    }

    /// Hash a plaintext password into a storable credential record.
    ///
    /// Generates a random 16-byte salt and derives a 32-byte key from the
    /// UTF-8 password bytes. Hashing the same password twice yields two
    /// different records.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Credential record in `hex(salt)$hex(key)` form
    ///
    /// # Errors
    /// * `KdfFailed` - The key derivation function rejected its inputs
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);

        let key = self.derive(password, &salt)?;
        Ok(format!(
            "{}{}{}",
            hex::encode(salt),
            RECORD_DELIMITER,
            hex::encode(key)
        ))
    }

    /// Verify a password against a stored credential record.
    ///
    /// Re-derives the key from the candidate password and the record's salt,
    /// then compares against the stored key in constant time.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `record` - Stored credential record in `hex(salt)$hex(key)` form
    ///
    /// # Returns
    /// True if the password matches, false otherwise
    ///
    /// # Errors
    /// * `MalformedRecord` - The record does not have the expected shape;
    ///   never returned for a wrong password
    pub fn verify(&self, password: &str, record: &str) -> Result<bool, PasswordError> {
        let (salt, expected_key) = parse_record(record)?;
        let derived = self.derive(password, &salt)?;
        Ok(bool::from(derived.as_slice().ct_eq(expected_key.as_slice())))
    }

    fn derive(&self, password: &str, salt: &[u8]) -> Result<[u8; KEY_LEN], PasswordError> {
        let mut key = [0u8; KEY_LEN];
        scrypt::scrypt(password.as_bytes(), salt, &self.params, &mut key)
            .map_err(|e| PasswordError::KdfFailed(e.to_string()))?;
        Ok(key)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_record(record: &str) -> Result<([u8; SALT_LEN], [u8; KEY_LEN]), PasswordError> {
    let (salt_hex, key_hex) = record
        .split_once(RECORD_DELIMITER)
        .ok_or_else(|| PasswordError::MalformedRecord("missing salt/key delimiter".to_string()))?;

    let salt = hex::decode(salt_hex)
        .map_err(|e| PasswordError::MalformedRecord(format!("salt is not valid hex: {}", e)))?;
    let key = hex::decode(key_hex)
        .map_err(|e| PasswordError::MalformedRecord(format!("key is not valid hex: {}", e)))?;

    let salt: [u8; SALT_LEN] = salt
        .try_into()
        .map_err(|_| PasswordError::MalformedRecord(format!("salt must be {} bytes", SALT_LEN)))?;
    let key: [u8; KEY_LEN] = key
        .try_into()
        .map_err(|_| PasswordError::MalformedRecord(format!("key must be {} bytes", KEY_LEN)))?;

    Ok((salt, key))
}
