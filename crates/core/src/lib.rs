//! Domain types and rules for the film rental store.
//!
//! This crate has no database or HTTP dependencies so the rules here can be
//! shared by the repository layer, the API, and their tests.

pub mod customer;
pub mod error;
pub mod rental;
pub mod search;
pub mod types;
