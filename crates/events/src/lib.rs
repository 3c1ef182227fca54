//! In-process domain event plumbing.
//!
//! Workflow handlers publish [`HrEvent`]s on the [`EventBus`]; delivery
//! channels (email, push, digests) subscribe at the bus and are otherwise
//! outside this codebase.

pub mod bus;

pub use bus::{EventBus, HrEvent};
