//! Record storage contracts and the in-memory store.
//!
//! # Responsibility
//! - Define the CRUD contract the record manager talks to.
//! - Keep storage details out of form, grid and detail logic.
//!
//! # Invariants
//! - Ids are assigned by the store and never change afterwards.
//! - Missing ids are reported as `StoreError::NotFound`, never as panics.

pub mod record_store;
