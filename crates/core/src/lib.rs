//! # Nobat Core
//!
//! Domain types and the booking validator for the Nobat consultation
//! booking service. This crate is free of web and database concerns so
//! the validation rules can be tested in isolation.

pub mod errors;
pub mod models;
pub mod validation;
