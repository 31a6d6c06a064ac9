//! Collection identities and the record contract

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// One of the three persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Employees,
    Leaves,
    Attendance,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Employees,
        Collection::Leaves,
        Collection::Attendance,
    ];

    /// Storage key of the collection
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Employees => "ems_data",
            Collection::Leaves => "ems_leaves",
            Collection::Attendance => "ems_attendance",
        }
    }

    /// Human-readable name used in logs and errors
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Employees => "employees",
            Collection::Leaves => "leave requests",
            Collection::Attendance => "attendance",
        }
    }
}

/// A record that lives in a collection
pub trait Record: Clone + Serialize + DeserializeOwned + Send + 'static {
    /// The collection this record type is stored in
    const COLLECTION: Collection;

    /// Unique id within the collection
    fn id(&self) -> &str;

    /// Per-record field constraints checked at the storage boundary
    fn validate(&self) -> Result<()>;
}
