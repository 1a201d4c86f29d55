use crate::error::{NovaError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

/// Read a file and return it as standard base64.
pub fn encode_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| {
        NovaError::InputError(format!("Error reading image {}: {}", path.display(), e))
    })?;
    Ok(encode_bytes(&bytes))
}

pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(encoded.trim())?)
}
