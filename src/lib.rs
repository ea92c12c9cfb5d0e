//! hsmrt: a hierarchical state machine runtime
//!
//! hsmrt runs nested state trees for per-entity, per-tick logic such as game
//! characters or embedded controllers. Client code declares a hierarchy once,
//! binds each machine to an owner object, and drives it every tick.
//!
//! # Core Concepts
//!
//! - **StateId**: Comparable identity of a state in the hierarchy
//! - **State**: Behavior of a live node: transition query plus lifecycle hooks
//! - **Transition**: `None`, `Sibling(target)` or `InnerEntry(target)`
//! - **StateRegistry**: Declared parents and factories, shared between machines
//! - **StateMachine**: Owns the active path and runs the tick protocol
//! - **TraceSink**: Receives structured enter/exit/transition/update events
//!
//! # Example
//!
//! ```rust
//! use hsmrt::builder::StateRegistry;
//! use hsmrt::core::{State, Transition};
//! use hsmrt::machine::StateMachine;
//! use hsmrt::state_ids;
//! use std::sync::Arc;
//!
//! state_ids! {
//!     enum Light {
//!         Powered,
//!         Off,
//!         On,
//!     }
//! }
//!
//! struct Switch {
//!     on: bool,
//! }
//!
//! struct Powered;
//! struct Off;
//! struct On;
//!
//! impl State<Light, Switch> for Powered {
//!     fn transition(&self, _switch: &Switch) -> Transition<Light> {
//!         Transition::inner_entry(Light::Off)
//!     }
//! }
//!
//! impl State<Light, Switch> for Off {
//!     fn transition(&self, switch: &Switch) -> Transition<Light> {
//!         if switch.on { Transition::sibling(Light::On) } else { Transition::None }
//!     }
//! }
//!
//! impl State<Light, Switch> for On {
//!     fn transition(&self, switch: &Switch) -> Transition<Light> {
//!         if switch.on { Transition::None } else { Transition::sibling(Light::Off) }
//!     }
//! }
//!
//! let registry = StateRegistry::builder()
//!     .root(Light::Powered, || Powered)
//!     .child(Light::Off, Light::Powered, || Off)
//!     .child(Light::On, Light::Powered, || On)
//!     .build()
//!     .unwrap();
//!
//! let mut switch = Switch { on: false };
//! let mut machine = StateMachine::new(Arc::new(registry));
//! machine.initialize(Light::Powered, &mut switch).unwrap();
//! assert_eq!(machine.active_states(), vec![Light::Powered, Light::Off]);
//!
//! switch.on = true;
//! machine.process_state_transitions(&mut switch).unwrap();
//! machine.update_states(&mut switch).unwrap();
//! assert_eq!(machine.leaf(), Some(Light::On));
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod trace;

// Re-export commonly used types
pub use crate::builder::{ConfigurationError, StateMachineBuilder, StateRegistry};
pub use crate::core::{State, StateId, Transition};
pub use crate::machine::{HsmError, MachineConfig, MachineStatus, StateMachine};
pub use crate::trace::{TraceEvent, TraceEventKind, TraceLevel, TraceSink};
