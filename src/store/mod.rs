//! Store Module
//!
//! Owns the three record collections and persists them over a `KvMedium`.
//!
//! ## Responsibilities
//! - Load a collection, seeding the bootstrap set on first access
//! - Overwrite a whole collection on save (no delta writes)
//! - Validate stored JSON at the boundary instead of trusting its shape
//! - Serialize read-modify-write cycles per collection
//!
//! ## Persisted Keys
//! | Collection  | Key              | Record             |
//! |-------------|------------------|--------------------|
//! | employees   | `ems_data`       | `Employee`         |
//! | leaves      | `ems_leaves`     | `LeaveRequest`     |
//! | attendance  | `ems_attendance` | `AttendanceRecord` |
//!
//! ## Concurrency
//! Each collection has its own mutex; an `update` holds it across read,
//! mutate and persist. Nothing coordinates separate processes sharing a
//! medium: the last writer wins.

mod collection;
mod record_store;
pub mod seed;

pub use collection::{Collection, Record};
pub use record_store::{CollectionStore, RecordStore};
