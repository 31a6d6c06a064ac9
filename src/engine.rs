//! Engine Module
//!
//! The explicit store object that coordinates all components.
//!
//! ## Responsibilities
//! - Own the medium, the record store, the clock and the attendance locks
//! - Expose every employee, view, attendance and leave operation
//! - Route `Command`s from a presentation layer to those operations
//! - Explicit lifecycle: `open` → operations → `close`

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::attendance::{AttendanceState, AttendanceTracker, Clock, SystemClock};
use crate::command::{Command, Outcome};
use crate::config::Config;
use crate::directory::Directory;
use crate::error::Result;
use crate::leave;
use crate::model::{
    AttendanceRecord, Decision, Employee, LeaveApplication, LeaveRequest, NewEmployee,
};
use crate::storage::{FileMedium, KvMedium, MemoryMedium};
use crate::store::RecordStore;
use crate::views::{self, Aggregates, Dashboard, EmployeeFilter};

/// The employee management engine
///
/// ## Concurrency Model: single process, single writer
///
/// - **Collections**: each guarded by one mutex inside `RecordStore`; every
///   mutation is a read-modify-write that persists before releasing it
/// - **Attendance**: additionally serialized per subject
/// - **Views**: computed on snapshots, no locks held while computing
///
/// Two processes sharing a data directory are not coordinated; the last
/// save of a collection wins.
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// The three persisted collections
    store: RecordStore,

    /// Source of "today" and "now"
    clock: Arc<dyn Clock>,

    /// Attendance transitions and per-subject locks
    attendance: AttendanceTracker,
}

impl Engine {
    /// Open or create an engine with the given config
    ///
    /// On startup:
    /// 1. Validate the config
    /// 2. Open/create the data directory
    /// 3. Ready to serve requests (collections load lazily; first access
    ///    seeds the bootstrap data)
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        let medium = FileMedium::open(&config.data_dir, config.sync_strategy)?;
        info!(data_dir = %config.data_dir.display(), "opened file storage");
        Self::with_medium(config, Arc::new(medium), Arc::new(SystemClock))
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_dir(path).build();
        Self::open(config)
    }

    /// Non-durable engine over an in-memory medium
    pub fn in_memory(config: Config, clock: Arc<dyn Clock>) -> Result<Self> {
        Self::with_medium(config, Arc::new(MemoryMedium::new()), clock)
    }

    /// Engine over any medium and clock
    pub fn with_medium(
        config: Config,
        medium: Arc<dyn KvMedium>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        config.validate()?;
        let store = RecordStore::new(medium, config.seed_sample_data);
        let attendance = AttendanceTracker::new(config.late_after_hour);

        Ok(Self {
            config,
            store,
            clock,
            attendance,
        })
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&self, command: Command) -> Result<Outcome> {
        debug!(command = command.name(), mutation = command.is_mutation(), "execute");

        match command {
            Command::ListEmployees { filter } => {
                self.filter_employees(&filter).map(Outcome::Employees)
            }
            Command::GetEmployee { id } => self.employee(&id).map(Outcome::Employee),
            Command::AddEmployee(new) => self.add_employee(new).map(Outcome::Employee),
            Command::UpdateEmployee(employee) => {
                self.update_employee(employee).map(Outcome::Employee)
            }
            Command::DeleteEmployee { id } => self.delete_employee(&id).map(Outcome::Employee),
            Command::Analytics => self.compute_aggregates().map(Outcome::Analytics),
            Command::Dashboard => self.dashboard().map(Outcome::Dashboard),
            Command::CheckIn { subject } => self.check_in(&subject).map(Outcome::Attendance),
            Command::CheckOut { subject } => self.check_out(&subject).map(Outcome::Attendance),
            Command::AttendanceToday { subject } => {
                self.attendance_state(&subject).map(Outcome::AttendanceState)
            }
            Command::AttendanceHistory { subject } => {
                self.attendance_history(&subject).map(Outcome::AttendanceHistory)
            }
            Command::SubmitLeave(application) => {
                self.submit_leave(application).map(Outcome::Leave)
            }
            Command::DecideLeave { id, decision } => {
                self.decide_leave(&id, decision).map(Outcome::Leave)
            }
            Command::ListLeaves {
                employee_id,
                pending_only,
            } => {
                let leaves = match employee_id {
                    Some(id) => self.leaves_for(&id)?,
                    None => self.leaves()?,
                };
                Ok(Outcome::Leaves(
                    leaves
                        .into_iter()
                        .filter(|l| !pending_only || l.is_pending())
                        .collect(),
                ))
            }
        }
    }

    // =========================================================================
    // Employees
    // =========================================================================

    /// Snapshot of every employee in storage order
    pub fn employees(&self) -> Result<Vec<Employee>> {
        self.store.load_employees()
    }

    pub fn employee(&self, id: &str) -> Result<Employee> {
        Directory::new(&self.store).get(id)
    }

    pub fn add_employee(&self, new: NewEmployee) -> Result<Employee> {
        Directory::new(&self.store).add(new)
    }

    pub fn update_employee(&self, employee: Employee) -> Result<Employee> {
        Directory::new(&self.store).update(employee)
    }

    pub fn delete_employee(&self, id: &str) -> Result<Employee> {
        Directory::new(&self.store).delete(id)
    }

    // =========================================================================
    // Views
    // =========================================================================

    pub fn filter_employees(&self, criteria: &EmployeeFilter) -> Result<Vec<Employee>> {
        Ok(views::filter_employees(&self.employees()?, criteria))
    }

    pub fn compute_aggregates(&self) -> Result<Aggregates> {
        Ok(views::compute_aggregates(&self.employees()?))
    }

    pub fn dashboard(&self) -> Result<Dashboard> {
        let employees = self.employees()?;
        Ok(Dashboard {
            summary: views::summarize(&employees),
            recent: views::recent_employees(&employees, self.config.recent_limit),
            positions: views::top_positions(&employees, self.config.top_positions_limit),
        })
    }

    // =========================================================================
    // Attendance
    // =========================================================================

    pub fn check_in(&self, subject: &str) -> Result<AttendanceRecord> {
        self.attendance
            .check_in(&self.store, self.clock.as_ref(), subject)
    }

    pub fn check_out(&self, subject: &str) -> Result<AttendanceRecord> {
        self.attendance
            .check_out(&self.store, self.clock.as_ref(), subject)
    }

    pub fn attendance_state(&self, subject: &str) -> Result<AttendanceState> {
        self.attendance
            .state(&self.store, self.clock.as_ref(), subject)
    }

    pub fn attendance_history(&self, subject: &str) -> Result<Vec<AttendanceRecord>> {
        self.attendance.history(&self.store, subject)
    }

    // =========================================================================
    // Leave
    // =========================================================================

    pub fn submit_leave(&self, application: LeaveApplication) -> Result<LeaveRequest> {
        leave::submit(&self.store, self.clock.now().date(), application)
    }

    pub fn decide_leave(&self, id: &str, decision: Decision) -> Result<LeaveRequest> {
        leave::decide(&self.store, id, decision)
    }

    /// Every leave request, newest first
    pub fn leaves(&self) -> Result<Vec<LeaveRequest>> {
        self.store.load_leaves()
    }

    pub fn leaves_for(&self, employee_id: &str) -> Result<Vec<LeaveRequest>> {
        leave::leaves_for(&self.store, employee_id)
    }

    pub fn pending_leaves(&self) -> Result<Vec<LeaveRequest>> {
        leave::pending(&self.store)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Drop cached snapshots so the next read goes back to storage
    pub fn reload(&self) {
        self.store.invalidate_all();
    }

    /// Delete all stored collections; the next access seeds them again
    pub fn reset(&self) -> Result<()> {
        self.store.reset_all()
    }

    /// Close the engine
    ///
    /// Every mutation is persisted when it returns, so there is nothing to
    /// flush; this releases the caches and ends the lifecycle explicitly.
    pub fn close(self) -> Result<()> {
        self.store.invalidate_all();
        info!("engine closed");
        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Direct access to the record store (load/save of whole collections)
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
