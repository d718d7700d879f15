use tracing::debug;

use crate::errors::CoreError;
use crate::models::ledger::Ledger;

use super::encryption::{self, KdfParams};
use super::format;

/// High-level storage operations: save/load a ledger to/from encrypted bytes or files.
pub struct StorageManager;

impl StorageManager {
    /// Encrypt and serialize a ledger to raw bytes (portable, platform-independent).
    ///
    /// Flow: Ledger → bincode → AES-256-GCM(Argon2id(passphrase)) → BDGT format bytes
    pub fn save_to_bytes(ledger: &Ledger, passphrase: &str) -> Result<Vec<u8>, CoreError> {
        Self::save_to_bytes_with_params(ledger, passphrase, &KdfParams::default())
    }

    /// Same as [`save_to_bytes`](Self::save_to_bytes) with explicit key-derivation cost.
    pub fn save_to_bytes_with_params(
        ledger: &Ledger,
        passphrase: &str,
        kdf_params: &KdfParams,
    ) -> Result<Vec<u8>, CoreError> {
        kdf_params.validate().map_err(CoreError::Encryption)?;

        let plaintext = bincode::serialize(ledger)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize ledger: {e}")))?;

        let salt = encryption::generate_salt()?;
        let nonce = encryption::generate_nonce()?;
        let key = encryption::derive_key(passphrase, &salt, kdf_params)?;
        let ciphertext = encryption::encrypt(&plaintext, &key, &nonce)?;

        debug!(
            rows = ledger.rows.len(),
            users = ledger.users.len(),
            bytes = ciphertext.len(),
            "ledger encrypted"
        );

        Ok(format::write_file(
            format::CURRENT_VERSION,
            kdf_params,
            &salt,
            &nonce,
            &ciphertext,
        ))
    }

    /// Decrypt and deserialize a ledger from raw bytes.
    ///
    /// Flow: BDGT bytes → parse header → Argon2id(passphrase, salt) → AES-256-GCM decrypt → bincode → Ledger
    pub fn load_from_bytes(data: &[u8], passphrase: &str) -> Result<Ledger, CoreError> {
        let (header, ciphertext) = format::read_file(data)?;

        let key = encryption::derive_key(passphrase, &header.salt, &header.kdf_params)?;
        let plaintext = encryption::decrypt(ciphertext, &key, &header.nonce)?;

        let ledger: Ledger = bincode::deserialize(&plaintext)
            .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize ledger: {e}")))?;

        debug!(rows = ledger.rows.len(), users = ledger.users.len(), "ledger decrypted");
        Ok(ledger)
    }

    /// Save a ledger to an encrypted file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(ledger: &Ledger, path: &str, passphrase: &str) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(ledger, passphrase)?;
        std::fs::write(path, bytes)?;
        tracing::info!(path, "ledger saved");
        Ok(())
    }

    /// Load a ledger from an encrypted file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str, passphrase: &str) -> Result<Ledger, CoreError> {
        let bytes = std::fs::read(path)?;
        let ledger = Self::load_from_bytes(&bytes, passphrase)?;
        tracing::info!(path, rows = ledger.rows.len(), "ledger loaded");
        Ok(ledger)
    }
}
