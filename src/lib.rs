//! # EMS
//!
//! The data core of an employee management dashboard:
//! - Employee records with add/edit/delete
//! - Leave requests with a Pending → Approved/Rejected review step
//! - Daily attendance check-in/check-out with a late-arrival rule
//! - Filtered employee lists and analytics aggregates
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Presentation (ems-cli, UI)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Engine                                │
//! │   Directory · Attendance (per-subject lock) · Leave · Views  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ load / update (mutex per collection)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     RecordStore                              │
//! │      ems_data · ems_leaves · ems_attendance (JSON arrays)    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ get / set
//!                ┌──────▼──────┐
//!                │  KvMedium   │  FileMedium (CRC32 record files)
//!                │             │  MemoryMedium
//!                └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod storage;
pub mod store;
pub mod views;
pub mod attendance;
pub mod leave;
pub mod directory;
pub mod command;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{EmsError, ErrorKind, Result};
pub use config::Config;
pub use engine::Engine;
pub use command::{Command, Outcome};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of EMS
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
