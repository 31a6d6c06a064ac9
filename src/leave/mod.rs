//! Leave Module
//!
//! Submission and review of leave requests.
//!
//! ## Lifecycle
//! ```text
//!   submit ──▶ Pending ──decide──▶ Approved | Rejected
//! ```
//! Only a Pending request can be decided. New requests are prepended, so
//! storage order is newest first.

mod workflow;

pub use workflow::{decide, leaves_for, pending, submit};
