//! Core hierarchy types.
//!
//! This module contains the vocabulary every hierarchy is written in:
//! - State identities via the `StateId` trait
//! - State behavior via the `State` trait
//! - Transition descriptors returned by state queries
//!
//! Nothing here knows about the active path; that is owned by the machine.

mod state;
mod transition;

pub use state::{State, StateId};
pub use transition::Transition;
