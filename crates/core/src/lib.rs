//! Domain rules for the HR administration platform.
//!
//! This crate is free of I/O: status vocabularies, state-transition tables,
//! cross-field validation, and scoring live here so the DB and API layers
//! share one source of truth.

pub mod announcement;
pub mod attendance;
pub mod criteria;
pub mod employee;
pub mod error;
pub mod evaluation;
pub mod period;
pub mod roles;
pub mod scoring;
pub mod task;
pub mod training;
pub mod types;
