//! The hierarchical state machine runtime.
//!
//! # Tick protocol
//!
//! - `initialize` enters the root and settles the initial active path
//! - `process_state_transitions` settles the leaf for this tick
//! - `update_states` updates every active state, ancestors first
//!
//! Settling means: query the leaf, apply the answer, query the new leaf, and
//! so on until a leaf answers `Transition::None`. A `Sibling` answer replaces
//! only the leaf; an `InnerEntry` answer pushes exactly one level. The
//! configured transition limit turns oscillating hierarchies into errors
//! instead of hangs.

mod config;
mod error;
#[allow(clippy::module_inception)]
mod machine;
mod path;

pub use config::MachineConfig;
pub use error::HsmError;
pub use machine::{MachineStatus, StateMachine};
