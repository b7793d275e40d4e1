//! Row models and input DTOs, one module per table group.

pub mod actor;
pub mod customer;
pub mod film;
pub mod inventory;
pub mod rental;
