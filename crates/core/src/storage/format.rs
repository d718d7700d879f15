use crate::errors::CoreError;
use super::encryption::KdfParams;

/// Magic bytes identifying a BDGT (Budget Tracker ledger) file.
pub const MAGIC: &[u8; 4] = b"BDGT";

/// Current file format version.
pub const CURRENT_VERSION: u16 = 1;

/// Minimum header size in bytes:
/// magic(4) + version(2) + kdf_params(12) + salt(16) + nonce(12) + ciphertext_len(8) = 54
pub const MIN_HEADER_SIZE: usize = 54;

/// File header read from an encrypted ledger file.
#[derive(Debug)]
pub struct FileHeader {
    pub version: u16,
    pub kdf_params: KdfParams,
    pub salt: [u8; 16],
    pub nonce: [u8; 12],
    pub ciphertext_len: u64,
}

/// Write a complete encrypted ledger file to bytes.
///
/// Layout:
/// ```text
/// [BDGT: 4B] [version: 2B LE] [memory_cost: 4B LE] [time_cost: 4B LE]
/// [parallelism: 4B LE] [salt: 16B] [nonce: 12B] [ciphertext_len: 8B LE]
/// [ciphertext: variable]
/// ```
pub fn write_file(
    version: u16,
    kdf_params: &KdfParams,
    salt: &[u8; 16],
    nonce: &[u8; 12],
    ciphertext: &[u8],
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(MIN_HEADER_SIZE + ciphertext.len());

    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&version.to_le_bytes());
    buf.extend_from_slice(&kdf_params.memory_cost.to_le_bytes());
    buf.extend_from_slice(&kdf_params.time_cost.to_le_bytes());
    buf.extend_from_slice(&kdf_params.parallelism.to_le_bytes());
    buf.extend_from_slice(salt);
    buf.extend_from_slice(nonce);
    buf.extend_from_slice(&(ciphertext.len() as u64).to_le_bytes());
    // Ciphertext (includes AES-GCM auth tag)
    buf.extend_from_slice(ciphertext);

    buf
}

/// Little-endian field reader over the header bytes.
struct HeaderCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> HeaderCursor<'a> {
    fn take<const N: usize>(&mut self, field: &str) -> Result<[u8; N], CoreError> {
        let bytes: [u8; N] = self
            .data
            .get(self.offset..self.offset + N)
            .and_then(|s| s.try_into().ok())
            .ok_or_else(|| CoreError::InvalidFileFormat(format!("Failed to read {field}")))?;
        self.offset += N;
        Ok(bytes)
    }

    fn u16(&mut self, field: &str) -> Result<u16, CoreError> {
        self.take::<2>(field).map(u16::from_le_bytes)
    }

    fn u32(&mut self, field: &str) -> Result<u32, CoreError> {
        self.take::<4>(field).map(u32::from_le_bytes)
    }

    fn u64(&mut self, field: &str) -> Result<u64, CoreError> {
        self.take::<8>(field).map(u64::from_le_bytes)
    }
}

/// Parse the header from raw file bytes.
/// Returns the header and the ciphertext slice.
pub fn read_file(data: &[u8]) -> Result<(FileHeader, &[u8]), CoreError> {
    if data.len() < MIN_HEADER_SIZE {
        return Err(CoreError::InvalidFileFormat(
            "File too small to be a valid ledger file".into(),
        ));
    }

    if &data[0..4] != MAGIC {
        return Err(CoreError::InvalidFileFormat(
            "Invalid magic bytes — not a BDGT ledger file".into(),
        ));
    }

    let mut cursor = HeaderCursor { data, offset: 4 };

    let version = cursor.u16("version")?;
    if version == 0 || version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion(version));
    }

    let kdf_params = KdfParams {
        memory_cost: cursor.u32("KDF memory_cost")?,
        time_cost: cursor.u32("KDF time_cost")?,
        parallelism: cursor.u32("KDF parallelism")?,
    };
    // Crafted files must not be able to request unbounded Argon2 work
    kdf_params.validate().map_err(CoreError::InvalidFileFormat)?;

    let salt = cursor.take::<16>("salt")?;
    let nonce = cursor.take::<12>("nonce")?;
    let ciphertext_len = cursor.u64("ciphertext length")?;

    let offset = cursor.offset;
    let available = (data.len() - offset) as u64;
    if available < ciphertext_len {
        return Err(CoreError::InvalidFileFormat(format!(
            "File truncated: expected {ciphertext_len} bytes of ciphertext, got {available}"
        )));
    }

    let ciphertext = &data[offset..offset + ciphertext_len as usize];

    let header = FileHeader {
        version,
        kdf_params,
        salt,
        nonce,
        ciphertext_len,
    };

    Ok((header, ciphertext))
}
