//! Record file envelope
//!
//! Wraps a payload in a checksummed header and unwraps it again.

use crate::error::{EmsError, Result};

use super::{HEADER_SIZE, MAGIC, VERSION};

/// Wrap `payload` in a record file header
pub fn encode_record(payload: &[u8]) -> Result<Vec<u8>> {
    let len = u32::try_from(payload.len()).map_err(|_| {
        EmsError::Storage(format!("record payload too large: {} bytes", payload.len()))
    })?;

    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&crc32fast::hash(payload).to_le_bytes());
    out.extend_from_slice(payload);
    Ok(out)
}

/// Validate the header of `bytes` and return the payload
pub fn decode_record(bytes: &[u8]) -> Result<Vec<u8>> {
    if bytes.len() < HEADER_SIZE {
        return Err(EmsError::StorageCorruption(format!(
            "record file truncated: {} bytes, header needs {}",
            bytes.len(),
            HEADER_SIZE
        )));
    }

    let (header, payload) = bytes.split_at(HEADER_SIZE);

    if &header[0..4] != MAGIC {
        return Err(EmsError::StorageCorruption(format!(
            "invalid record magic: expected EMSR, got {:?}",
            &header[0..4]
        )));
    }

    let version = u16::from_le_bytes([header[4], header[5]]);
    if version != VERSION {
        return Err(EmsError::StorageCorruption(format!(
            "unsupported record version: {}",
            version
        )));
    }

    let len = u32::from_le_bytes([header[6], header[7], header[8], header[9]]) as usize;
    if len != payload.len() {
        return Err(EmsError::StorageCorruption(format!(
            "payload length mismatch: header says {}, found {}",
            len,
            payload.len()
        )));
    }

    let expected_crc = u32::from_le_bytes([header[10], header[11], header[12], header[13]]);
    let actual_crc = crc32fast::hash(payload);
    if expected_crc != actual_crc {
        return Err(EmsError::StorageCorruption(format!(
            "CRC mismatch: expected {:#010x}, computed {:#010x}",
            expected_crc, actual_crc
        )));
    }

    Ok(payload.to_vec())
}
