//! Domain records for the HR dashboard tables.
//!
//! # Responsibility
//! - Define the five flat records and their status vocabularies.
//! - Bind each record to its schema through the `Entity` trait.
//!
//! # Invariants
//! - Every record is identified by a store-assigned `RecordId`.
//! - `employeeId` / `candidateId` are free-form numbers; no foreign keys.

pub mod attendance;
pub mod employee;
pub mod leave;
pub mod payroll;
pub mod recruitment;
pub mod status;

/// Numeric record identifier, unique within one store.
pub type RecordId = i64;
