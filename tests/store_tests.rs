//! Tests for RecordStore
//!
//! These tests verify:
//! - First access seeds and persists the bootstrap data
//! - save/load round-trips whole collections
//! - Malformed or invalid stored content fails loudly
//! - update() is all-or-nothing
//! - Cache invalidation and reset

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use ems::model::{
    AttendanceRecord, AttendanceStatus, Department, Employee, EmployeeStatus,
};
use ems::storage::{KvMedium, MemoryMedium};
use ems::store::{seed, Collection, RecordStore};
use ems::{EmsError, ErrorKind};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_store(seed_sample_data: bool) -> (Arc<MemoryMedium>, RecordStore) {
    let medium = Arc::new(MemoryMedium::new());
    let store = RecordStore::new(medium.clone(), seed_sample_data);
    (medium, store)
}

fn employee(id: &str, name: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        department: Department::It,
        position: "Engineer".to_string(),
        salary: 1000.0,
        hire_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        email: format!("{}@company.com", id),
        phone: String::new(),
        status: EmployeeStatus::Active,
    }
}

// =============================================================================
// Seeding Tests
// =============================================================================

#[test]
fn test_first_load_seeds_and_persists() {
    let (medium, store) = setup_store(true);
    assert!(medium.is_empty());

    let employees = store.load_employees().unwrap();

    assert_eq!(employees, seed::employees());
    assert!(medium.get(Collection::Employees.key()).unwrap().is_some());
}

#[test]
fn test_seeded_leaves_match_sample_data() {
    let (_medium, store) = setup_store(true);

    let leaves = store.load_leaves().unwrap();

    assert_eq!(leaves.len(), 2);
    assert_eq!(leaves[0].id, "l1");
    assert_eq!(leaves[1].employee_name, "Ahmed Ali");
}

#[test]
fn test_attendance_bootstraps_empty() {
    let (medium, store) = setup_store(true);

    assert!(store.load_attendance().unwrap().is_empty());
    assert_eq!(
        medium.get("ems_attendance").unwrap(),
        Some(b"[]".to_vec())
    );
}

#[test]
fn test_seeding_disabled_bootstraps_empty() {
    let (_medium, store) = setup_store(false);

    assert!(store.load_employees().unwrap().is_empty());
    assert!(store.load_leaves().unwrap().is_empty());
}

#[test]
fn test_existing_value_is_not_reseeded() {
    let medium = Arc::new(MemoryMedium::new());
    medium.set("ems_data", b"[]").unwrap();

    let store = RecordStore::new(medium, true);

    assert!(store.load_employees().unwrap().is_empty());
}

#[test]
fn test_persisted_shape_uses_camel_case_and_display_strings() {
    let (medium, store) = setup_store(true);
    store.load_employees().unwrap();

    let raw = medium.get("ems_data").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();

    assert_eq!(json[0]["hireDate"], "2023-01-15");
    assert_eq!(json[0]["department"], "IT");
    assert_eq!(json[2]["status"], "On Leave");
}

// =============================================================================
// Save / Load Tests
// =============================================================================

#[test]
fn test_save_then_load_roundtrip() {
    let (_medium, store) = setup_store(true);
    let mut employees = store.load_employees().unwrap();
    employees.push(employee("x1", "New Hire"));

    store.save_employees(employees.clone()).unwrap();
    store.invalidate_all();

    assert_eq!(store.load_employees().unwrap(), employees);
}

#[test]
fn test_attendance_roundtrip_keeps_open_record() {
    let (_medium, store) = setup_store(false);
    let record = AttendanceRecord {
        id: "a1".to_string(),
        employee_id: "1".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
        check_in: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
        check_out: None,
        status: AttendanceStatus::Present,
    };

    store.save_attendance(vec![record.clone()]).unwrap();
    store.invalidate_all();

    assert_eq!(store.load_attendance().unwrap(), vec![record]);
}

#[test]
fn test_save_rejects_duplicate_ids() {
    let (_medium, store) = setup_store(false);
    store.save_employees(vec![employee("a", "First")]).unwrap();

    let err = store
        .save_employees(vec![employee("b", "One"), employee("b", "Two")])
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(store.load_employees().unwrap(), vec![employee("a", "First")]);
}

// =============================================================================
// Boundary Validation Tests
// =============================================================================

#[test]
fn test_malformed_json_fails_loudly() {
    let medium = Arc::new(MemoryMedium::new());
    medium.set("ems_data", b"{not json").unwrap();
    let store = RecordStore::new(medium.clone(), true);

    let err = store.load_employees().unwrap_err();

    assert!(matches!(err, EmsError::StorageCorruption(_)));
    assert_eq!(err.kind(), ErrorKind::Storage);
    // The bad value was not replaced by the sample data
    assert_eq!(medium.get("ems_data").unwrap(), Some(b"{not json".to_vec()));
}

#[test]
fn test_unknown_enum_value_is_corruption() {
    let medium = Arc::new(MemoryMedium::new());
    let json = r#"[{"id":"1","name":"A","department":"Legal","position":"P",
        "salary":1,"hireDate":"2024-01-01","email":"a@b.c","phone":"","status":"Active"}]"#;
    medium.set("ems_data", json.as_bytes()).unwrap();
    let store = RecordStore::new(medium, true);

    assert!(matches!(
        store.load_employees(),
        Err(EmsError::StorageCorruption(_))
    ));
}

#[test]
fn test_negative_salary_in_storage_is_corruption() {
    let medium = Arc::new(MemoryMedium::new());
    let json = r#"[{"id":"1","name":"A","department":"HR","position":"P",
        "salary":-5,"hireDate":"2024-01-01","email":"a@b.c","phone":"","status":"Active"}]"#;
    medium.set("ems_data", json.as_bytes()).unwrap();
    let store = RecordStore::new(medium, true);

    assert!(matches!(
        store.load_employees(),
        Err(EmsError::StorageCorruption(ref msg)) if msg.contains("salary")
    ));
}

#[test]
fn test_duplicate_ids_in_storage_is_corruption() {
    let medium = Arc::new(MemoryMedium::new());
    let bytes = serde_json::to_vec(&vec![employee("1", "A"), employee("1", "B")]).unwrap();
    medium.set("ems_data", &bytes).unwrap();
    let store = RecordStore::new(medium, true);

    assert!(matches!(
        store.load_employees(),
        Err(EmsError::StorageCorruption(ref msg)) if msg.contains("duplicate")
    ));
}

#[test]
fn test_missing_phone_defaults_to_empty() {
    let medium = Arc::new(MemoryMedium::new());
    let json = r#"[{"id":"1","name":"A","department":"HR","position":"P",
        "salary":1,"hireDate":"2024-01-01","email":"a@b.c","status":"Inactive"}]"#;
    medium.set("ems_data", json.as_bytes()).unwrap();
    let store = RecordStore::new(medium, true);

    let employees = store.load_employees().unwrap();
    assert_eq!(employees[0].phone, "");
    assert_eq!(employees[0].status, EmployeeStatus::Inactive);
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_update_persists_mutation() {
    let (medium, store) = setup_store(false);

    store
        .employees()
        .update(|employees| {
            employees.push(employee("u1", "Updated"));
            Ok(())
        })
        .unwrap();

    let raw = medium.get("ems_data").unwrap().unwrap();
    let persisted: Vec<Employee> = serde_json::from_slice(&raw).unwrap();
    assert_eq!(persisted, vec![employee("u1", "Updated")]);
}

#[test]
fn test_failed_update_leaves_collection_unchanged() {
    let (_medium, store) = setup_store(true);
    let before = store.load_employees().unwrap();

    let result: Result<(), EmsError> = store.employees().update(|employees| {
        employees.clear();
        Err(EmsError::Validation("abort".to_string()))
    });

    assert!(result.is_err());
    assert_eq!(store.load_employees().unwrap(), before);
}

#[test]
fn test_update_producing_invalid_collection_is_rejected() {
    let (_medium, store) = setup_store(true);
    let before = store.load_employees().unwrap();

    let result = store.employees().update(|employees| {
        let copy = employees[0].clone();
        employees.push(copy);
        Ok(())
    });

    assert!(matches!(result, Err(EmsError::Validation(_))));
    assert_eq!(store.load_employees().unwrap(), before);
}

// =============================================================================
// Cache Tests
// =============================================================================

#[test]
fn test_invalidate_rereads_medium() {
    let (medium, store) = setup_store(true);
    assert_eq!(store.load_employees().unwrap().len(), 5);

    medium.set("ems_data", b"[]").unwrap();
    // Cached snapshot still served
    assert_eq!(store.load_employees().unwrap().len(), 5);

    store.invalidate_all();
    assert!(store.load_employees().unwrap().is_empty());
}

#[test]
fn test_reset_reseeds_on_next_access() {
    let (medium, store) = setup_store(true);
    store.save_employees(Vec::new()).unwrap();

    store.reset_all().unwrap();
    assert_eq!(medium.get("ems_data").unwrap(), None);

    assert_eq!(store.load_employees().unwrap(), seed::employees());
}
