use thiserror::Error;

/// Unified error type for the entire budget-tracker-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Ledger Input ────────────────────────────────────────────────
    #[error("Malformed date '{value}' in ledger row {row}")]
    MalformedDate { row: String, value: String },

    #[error("Malformed entry kind '{value}' in ledger row {row}")]
    MalformedKind { row: String, value: String },

    #[error("Malformed amount '{value}' in ledger row {row}")]
    MalformedAmount { row: String, value: String },

    #[error("Invalid month key '{0}': expected YYYY-MM")]
    InvalidMonthKey(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    // ── Credentials ─────────────────────────────────────────────────
    #[error("User already exists: {0}")]
    UserAlreadyExists(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Session was not issued by this tracker")]
    ForeignSession,

    // ── Storage / File ──────────────────────────────────────────────
    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("Unsupported file version: {0}")]
    UnsupportedVersion(u16),

    #[error("Encryption failed: {0}")]
    Encryption(String),

    #[error("Decryption failed — wrong passphrase or corrupted file")]
    Decryption,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Export error: {0}")]
    Export(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),
}

impl CoreError {
    /// True for the errors that mean the stored ledger itself is unreadable
    /// (as opposed to a bad request from the caller).
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            CoreError::MalformedDate { .. }
                | CoreError::MalformedKind { .. }
                | CoreError::MalformedAmount { .. }
        )
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<bincode::Error> for CoreError {
    fn from(e: bincode::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        CoreError::Export(e.to_string())
    }
}

impl From<aes_gcm::Error> for CoreError {
    fn from(_: aes_gcm::Error) -> Self {
        CoreError::Decryption
    }
}
