//! Storage Module
//!
//! The durable key-value medium the record store persists into.
//!
//! ## Responsibilities
//! - `get`/`set`/`remove` of opaque byte values by string key
//! - Atomic replacement: a reader never observes a half-written value
//! - Corruption detection on read (magic, version, length, CRC32)
//!
//! ## Record File Format (one file per key)
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Header (14 bytes)                                       │
//! │   Magic: "EMSR" (4) | Version: u16 (2)                  │
//! │   PayloadLen: u32 (4) | PayloadCRC: u32 (4)             │
//! ├─────────────────────────────────────────────────────────┤
//! │ Payload (PayloadLen bytes, JSON)                        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! All integers are little-endian.

mod file_medium;
mod memory;
mod record_file;

use crate::error::Result;

pub use file_medium::FileMedium;
pub use memory::MemoryMedium;
pub use record_file::{decode_record, encode_record};

// =============================================================================
// Shared Constants
// =============================================================================

/// Magic bytes identifying an EMS record file
pub(crate) const MAGIC: &[u8; 4] = b"EMSR";

/// Current record file format version
pub(crate) const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + PayloadLen (4) + CRC (4) = 14 bytes
pub(crate) const HEADER_SIZE: usize = 14;

// =============================================================================
// Medium Trait
// =============================================================================

/// A string-keyed store of byte values
///
/// Implementations must make `set` atomic per key: after a crash or error a
/// later `get` returns either the old value or the new one.
pub trait KvMedium: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}
