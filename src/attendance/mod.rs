//! Attendance Module
//!
//! Daily check-in/check-out per subject.
//!
//! ## State Machine (per subject, per day)
//! ```text
//!   NotCheckedIn ──check_in──▶ CheckedIn ──check_out──▶ CheckedOut
//! ```
//! One session per subject per day: once a subject has a record for today,
//! a second check-in is rejected, whether or not the first one is closed.
//!
//! ## Concurrency
//! Transitions of one subject are serialized by a per-subject lock, held
//! across the clock read and the collection update. The subject is checked
//! against the employee collection first, so unknown subjects never get a
//! lock entry.

mod clock;
mod tracker;

pub use clock::{Clock, FixedClock, SystemClock};
pub use tracker::{AttendanceState, AttendanceTracker};
