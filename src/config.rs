//! Configuration for EMS
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{EmsError, Result};

/// Main configuration for an EMS instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the record files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── ems_data.rec        (employees)
    ///     ├── ems_leaves.rec      (leave requests)
    ///     └── ems_attendance.rec  (attendance records)
    pub data_dir: PathBuf,

    /// Sync strategy: whether record files are fsynced on save
    pub sync_strategy: SyncStrategy,

    /// Seed the sample employees and leave requests on first access
    pub seed_sample_data: bool,

    // -------------------------------------------------------------------------
    // Attendance Configuration
    // -------------------------------------------------------------------------
    /// Check-ins with a local hour strictly greater than this are Late
    pub late_after_hour: u32,

    // -------------------------------------------------------------------------
    // View Configuration
    // -------------------------------------------------------------------------
    /// Number of employees listed as recent on the dashboard
    pub recent_limit: usize,

    /// Number of rows in the position breakdown
    pub top_positions_limit: usize,
}

/// Record file sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync every saved record file before the rename (safest, slowest)
    EveryWrite,

    /// Leave flushing to the OS page cache
    OsBuffered,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./ems_data"),
            sync_strategy: SyncStrategy::EveryWrite,
            seed_sample_data: true,
            late_after_hour: 9,
            recent_limit: 5,
            top_positions_limit: 10,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject settings that can never be satisfied
    pub fn validate(&self) -> Result<()> {
        if self.late_after_hour > 23 {
            return Err(EmsError::Config(format!(
                "late_after_hour must be within 0..=23, got {}",
                self.late_after_hour
            )));
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(EmsError::Config("data_dir must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all record files)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the record file sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Enable or disable first-run sample data
    pub fn seed_sample_data(mut self, seed: bool) -> Self {
        self.config.seed_sample_data = seed;
        self
    }

    /// Set the late-arrival threshold hour
    pub fn late_after_hour(mut self, hour: u32) -> Self {
        self.config.late_after_hour = hour;
        self
    }

    /// Set how many recent employees the dashboard lists
    pub fn recent_limit(mut self, limit: usize) -> Self {
        self.config.recent_limit = limit;
        self
    }

    /// Set how many positions the position breakdown keeps
    pub fn top_positions_limit(mut self, limit: usize) -> Self {
        self.config.top_positions_limit = limit;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
