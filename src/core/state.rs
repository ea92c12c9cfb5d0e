//! State identity and state behavior traits.
//!
//! A hierarchy is described by two things: identities (`StateId`), which are
//! cheap tokens used to register, construct and trace states, and behaviors
//! (`State`), which are the live instances sitting on the active path.

use super::transition::Transition;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Identity of a state within a hierarchy.
///
/// Identities are opaque, comparable tokens. They are used to register states,
/// to name transition targets, and to label trace events and errors.
///
/// # Required Traits
///
/// - `Copy` + `Eq` + `Hash`: identities are map keys and are passed by value
/// - `Debug`: identities are debuggable for diagnostics
/// - `Serialize`: identities appear in serialized trace events
///
/// # Example
///
/// ```rust
/// use hsmrt::core::StateId;
/// use serde::Serialize;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
/// enum DoorState {
///     Closed,
///     Open,
/// }
///
/// impl StateId for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Open.name(), "Open");
/// ```
pub trait StateId: Copy + Eq + Hash + Debug + Serialize + Send + Sync + 'static {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

impl StateId for &'static str {
    fn name(&self) -> &str {
        self
    }
}

/// Behavior of a single node in a state hierarchy.
///
/// `I` is the identity type of the hierarchy and `O` the owner type every
/// state of the machine is bound to. The owner is handed to each hook by the
/// machine; states never store it.
///
/// `O` may be an accessor trait object, so states only see the part of the
/// owner they need. `dyn Trait` as a type parameter means
/// `dyn Trait + 'static`, and the `&mut` hooks are invariant over it, so
/// implementations must spell the bound out:
///
/// ```rust
/// use hsmrt::core::State;
///
/// trait Odometer {
///     fn add(&mut self, meters: u32);
/// }
///
/// struct Rolling;
///
/// impl State<&'static str, dyn Odometer> for Rolling {
///     fn update(&mut self, odometer: &mut (dyn Odometer + 'static)) {
///         odometer.add(1);
///     }
/// }
/// ```
///
/// The lifecycle of a node is:
///
/// 1. `on_enter()` - once, when the node is pushed onto the active path
/// 2. `transition()` - every resolution step while the node is the leaf
/// 3. `update()` - once per `update_states` call while on the active path
/// 4. `on_exit()` - once, when the node is removed from the active path
///
/// # Example
///
/// ```rust
/// use hsmrt::core::{State, Transition};
///
/// struct Lamp {
///     powered: bool,
///     glow: u32,
/// }
///
/// struct Off;
///
/// impl State<&'static str, Lamp> for Off {
///     fn transition(&self, lamp: &Lamp) -> Transition<&'static str> {
///         if lamp.powered {
///             Transition::sibling("On")
///         } else {
///             Transition::None
///         }
///     }
///
///     fn on_enter(&mut self, lamp: &mut Lamp) {
///         lamp.glow = 0;
///     }
/// }
///
/// let lamp = Lamp { powered: true, glow: 3 };
/// assert_eq!(Off.transition(&lamp), Transition::Sibling("On"));
/// ```
pub trait State<I: StateId, O: ?Sized>: Send {
    /// Decide where the machine goes next.
    ///
    /// Only read access to the owner is available, so the query cannot mutate
    /// anything the machine or its siblings observe.
    fn transition(&self, _owner: &O) -> Transition<I> {
        Transition::None
    }

    /// Called once when the node becomes part of the active path.
    fn on_enter(&mut self, _owner: &mut O) {}

    /// Called once when the node leaves the active path.
    fn on_exit(&mut self, _owner: &mut O) {}

    /// Called once per tick while the node is on the active path.
    fn update(&mut self, _owner: &mut O) {}
}
