//! Record manager services.
//!
//! # Responsibility
//! - Coordinate form, grid and detail state over a record repository.
//! - Keep UI shells decoupled from storage and validation details.

pub mod detail;
pub mod form;
pub mod grid;
pub mod manager;
