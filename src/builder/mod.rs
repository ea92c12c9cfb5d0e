//! Builder API for declaring hierarchies and constructing machines.
//!
//! This module provides the state registry (identities, declared parents and
//! factories), the fluent machine builder, the `state_ids!` macro, and the
//! configuration errors all of them report.

pub mod error;
pub mod machine;
pub mod macros;
pub mod registry;

pub use error::{ConfigurationError, HierarchyViolation};
pub use machine::StateMachineBuilder;
pub use registry::{StateFactory, StateRegistry, StateRegistryBuilder};
