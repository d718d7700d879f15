use tracing::{info, warn};

use crate::errors::CoreError;
use crate::models::ledger::Ledger;
use crate::models::user::UserCredential;
use crate::storage::encryption::{self, KdfParams};

/// Salt used when hashing against a username that is not registered.
const UNKNOWN_USER_SALT: [u8; 16] = [0u8; 16];

/// Registers users and checks their passwords.
///
/// Secrets are hashed with Argon2id under a random per-user salt; only the
/// salt, hash and KDF parameters are stored.
pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self
    }

    /// Register a new user. Fails with `UserAlreadyExists` if the name is taken.
    pub fn register_user(
        &self,
        ledger: &mut Ledger,
        username: &str,
        secret: &str,
    ) -> Result<(), CoreError> {
        let username = Self::normalize_username(username)?;
        if secret.is_empty() {
            return Err(CoreError::ValidationError("Password must not be empty".into()));
        }
        if ledger.users.contains_key(&username) {
            warn!(username, "registration rejected: user exists");
            return Err(CoreError::UserAlreadyExists(username));
        }

        let credential = Self::hash_credential(&username, secret, &ledger.settings.credential_kdf)?;
        ledger.users.insert(username.clone(), credential);
        info!(username, "user registered");
        Ok(())
    }

    /// Check a username/secret pair. Unknown users and wrong secrets both give `false`.
    pub fn authenticate(&self, ledger: &Ledger, username: &str, secret: &str) -> Result<bool, CoreError> {
        let username = username.trim();
        let Some(credential) = ledger.users.get(username) else {
            // Same KDF work as a real check so unknown names cost the same time.
            let _ = encryption::derive_key(secret, &UNKNOWN_USER_SALT, &ledger.settings.credential_kdf);
            warn!(username, "authentication failed: unknown user");
            return Ok(false);
        };

        let hash = encryption::derive_key(secret, &credential.salt, &credential.kdf)?;
        let ok = encryption::constant_time_eq(&hash, &credential.hash);
        if !ok {
            warn!(username, "authentication failed: wrong password");
        }
        Ok(ok)
    }

    /// Whether `username` has registered.
    pub fn user_exists(&self, ledger: &Ledger, username: &str) -> bool {
        ledger.users.contains_key(username.trim())
    }

    /// Build a fresh credential with a new random salt.
    pub fn hash_credential(
        username: &str,
        secret: &str,
        kdf: &KdfParams,
    ) -> Result<UserCredential, CoreError> {
        kdf.validate().map_err(CoreError::Encryption)?;
        let salt = encryption::generate_salt()?;
        let hash = encryption::derive_key(secret, &salt, kdf)?;
        Ok(UserCredential {
            username: username.to_string(),
            salt,
            hash,
            kdf: *kdf,
        })
    }

    fn normalize_username(username: &str) -> Result<String, CoreError> {
        let trimmed = username.trim();
        if trimmed.is_empty() {
            return Err(CoreError::ValidationError("Username must not be empty".into()));
        }
        Ok(trimmed.to_string())
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}
