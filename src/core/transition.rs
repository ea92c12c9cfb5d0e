//! Transition descriptors returned by state queries.

use super::state::StateId;
use serde::Serialize;

/// Outcome of a state's transition query.
///
/// Exactly one variant is produced per query. The machine applies it to the
/// current leaf of the active path:
///
/// - `None` keeps the path as it is
/// - `Sibling` replaces only the leaf with a state sharing its parent
/// - `InnerEntry` pushes a child beneath the leaf, one level deeper
///
/// # Example
///
/// ```rust
/// use hsmrt::core::Transition;
///
/// let stay: Transition<&'static str> = Transition::None;
/// let swap = Transition::sibling("Move");
/// let descend = Transition::inner_entry("Locomotion");
///
/// assert!(stay.is_none());
/// assert_eq!(swap.target(), Some("Move"));
/// assert_eq!(descend.target(), Some("Locomotion"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Transition<I> {
    /// Stay put
    None,

    /// Replace the leaf with the target, which shares the leaf's parent
    Sibling(I),

    /// Push the target beneath the leaf
    InnerEntry(I),
}

impl<I: StateId> Transition<I> {
    /// Transition to a sibling of the current leaf.
    pub fn sibling(target: I) -> Self {
        Transition::Sibling(target)
    }

    /// Descend into a child of the current leaf.
    pub fn inner_entry(target: I) -> Self {
        Transition::InnerEntry(target)
    }

    /// Target identity, if any.
    pub fn target(&self) -> Option<I> {
        match self {
            Transition::None => None,
            Transition::Sibling(target) | Transition::InnerEntry(target) => Some(*target),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Transition::None)
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Transition::None => "none",
            Transition::Sibling(_) => "sibling",
            Transition::InnerEntry(_) => "inner_entry",
        }
    }
}

impl<I> Default for Transition<I> {
    fn default() -> Self {
        Transition::None
    }
}
