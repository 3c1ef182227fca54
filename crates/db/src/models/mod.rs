//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod announcement;
pub mod attendance;
pub mod criterion;
pub mod employee;
pub mod evaluation;
pub mod period;
pub mod role;
pub mod session;
pub mod task;
pub mod training;
pub mod user;
