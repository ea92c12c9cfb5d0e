//! State registry: identities, declared parents and factories.

use crate::builder::error::{ConfigurationError, HierarchyViolation};
use crate::core::{State, StateId};
use std::collections::{HashMap, HashSet};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for state factories.
/// Factories create a fresh instance each time the state is entered.
pub type StateFactory<I, O> = Box<dyn Fn() -> Box<dyn State<I, O>> + Send + Sync>;

/// Registration record for one state.
pub(crate) struct StateDescriptor<I: StateId, O: ?Sized> {
    id: I,
    parent: Option<I>,
    factory: StateFactory<I, O>,
}

impl<I: StateId, O: ?Sized> StateDescriptor<I, O> {
    fn parent(&self) -> Option<I> {
        self.parent
    }
}

/// Immutable map from identity to declared parent and factory.
///
/// Instances are only created on demand, for states that are about to join
/// the active path. A registry is typically wrapped in an `Arc` and shared by
/// every machine driving the same kind of entity.
pub struct StateRegistry<I: StateId, O: ?Sized> {
    states: HashMap<I, StateDescriptor<I, O>>,
    order: Vec<I>,
}

impl<I: StateId, O: ?Sized> StateRegistry<I, O> {
    /// Start declaring a hierarchy.
    pub fn builder() -> StateRegistryBuilder<I, O> {
        StateRegistryBuilder::new()
    }

    pub fn contains(&self, id: I) -> bool {
        self.states.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registered identities in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = I> + '_ {
        self.order.iter().copied()
    }

    /// Declared parent of a state; `None` for roots.
    pub fn parent_of(&self, id: I) -> Result<Option<I>, ConfigurationError> {
        self.descriptor(id).map(StateDescriptor::parent)
    }

    /// Direct children of a state, in declaration order.
    pub fn children_of(&self, id: I) -> Vec<I> {
        self.order
            .iter()
            .copied()
            .filter(|child| self.states[child].parent == Some(id))
            .collect()
    }

    /// Ancestors of a state, nearest first.
    pub fn ancestors(&self, id: I) -> Result<Vec<I>, ConfigurationError> {
        let mut ancestors = Vec::new();
        let mut current = self.parent_of(id)?;
        while let Some(parent) = current {
            ancestors.push(parent);
            current = self.parent_of(parent)?;
        }
        Ok(ancestors)
    }

    /// Distance from the root; roots have depth 0.
    pub fn depth_of(&self, id: I) -> Result<usize, ConfigurationError> {
        self.ancestors(id).map(|ancestors| ancestors.len())
    }

    /// Create a fresh instance of a registered state.
    pub fn construct(&self, id: I) -> Result<Box<dyn State<I, O>>, ConfigurationError> {
        self.descriptor(id).map(|descriptor| (descriptor.factory)())
    }

    fn descriptor(&self, id: I) -> Result<&StateDescriptor<I, O>, ConfigurationError> {
        self.states
            .get(&id)
            .ok_or_else(|| ConfigurationError::UnknownState {
                state: id.name().to_string(),
            })
    }
}

impl<I: StateId, O: ?Sized> fmt::Debug for StateRegistry<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.order.iter().map(|id| (id, self.states[id].parent)))
            .finish()
    }
}

/// Builder for declaring a hierarchy with a fluent API.
pub struct StateRegistryBuilder<I: StateId, O: ?Sized> {
    entries: Vec<StateDescriptor<I, O>>,
}

impl<I: StateId, O: ?Sized> StateRegistryBuilder<I, O> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a state without a parent.
    pub fn root<S, F>(self, id: I, factory: F) -> Self
    where
        S: State<I, O> + 'static,
        F: Fn() -> S + Send + Sync + 'static,
    {
        self.register(id, None, factory)
    }

    /// Register a state beneath `parent`.
    pub fn child<S, F>(self, id: I, parent: I, factory: F) -> Self
    where
        S: State<I, O> + 'static,
        F: Fn() -> S + Send + Sync + 'static,
    {
        self.register(id, Some(parent), factory)
    }

    fn register<S, F>(mut self, id: I, parent: Option<I>, factory: F) -> Self
    where
        S: State<I, O> + 'static,
        F: Fn() -> S + Send + Sync + 'static,
    {
        let factory: StateFactory<I, O> =
            Box::new(move || -> Box<dyn State<I, O>> { Box::new(factory()) });
        self.entries.push(StateDescriptor {
            id,
            parent,
            factory,
        });
        self
    }

    /// Build the registry.
    /// Returns every hierarchy violation found, not just the first.
    pub fn build(self) -> Result<StateRegistry<I, O>, ConfigurationError> {
        let declared: Vec<(I, Option<I>)> = self
            .entries
            .iter()
            .map(|entry| (entry.id, entry.parent))
            .collect();

        if let Validation::Failure(violations) = validate_hierarchy(&declared) {
            return Err(ConfigurationError::InvalidHierarchy(
                violations.iter().cloned().collect(),
            ));
        }

        let mut order = Vec::with_capacity(self.entries.len());
        let mut states = HashMap::with_capacity(self.entries.len());
        for entry in self.entries {
            order.push(entry.id);
            states.insert(entry.id, entry);
        }

        Ok(StateRegistry { states, order })
    }
}

impl<I: StateId, O: ?Sized> Default for StateRegistryBuilder<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

/// Check declared (identity, parent) pairs, accumulating ALL violations.
fn validate_hierarchy<I: StateId>(
    declared: &[(I, Option<I>)],
) -> Validation<(), NonEmptyVec<HierarchyViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<HierarchyViolation>>> = Vec::new();

    let mut seen = HashSet::new();
    for (id, _) in declared {
        if !seen.insert(*id) {
            checks.push(Validation::fail(HierarchyViolation::DuplicateState {
                state: id.name().to_string(),
            }));
        }
    }

    let parents: HashMap<I, Option<I>> = declared.iter().copied().collect();
    for (id, parent) in declared {
        if let Some(parent) = parent {
            if !parents.contains_key(parent) {
                checks.push(Validation::fail(HierarchyViolation::UnknownParent {
                    state: id.name().to_string(),
                    parent: parent.name().to_string(),
                }));
            }
        }
    }

    let mut reported = HashSet::new();
    for (id, _) in declared {
        if reported.insert(*id) && is_own_ancestor(*id, &parents) {
            checks.push(Validation::fail(HierarchyViolation::ParentCycle {
                state: id.name().to_string(),
            }));
        }
    }

    if checks.is_empty() {
        return Validation::success(());
    }

    Validation::all_vec(checks).map(|_| ())
}

fn is_own_ancestor<I: StateId>(id: I, parents: &HashMap<I, Option<I>>) -> bool {
    let mut visited = HashSet::new();
    let mut current = parents.get(&id).copied().flatten();
    while let Some(ancestor) = current {
        if ancestor == id {
            return true;
        }
        if !visited.insert(ancestor) {
            return false;
        }
        current = parents.get(&ancestor).copied().flatten();
    }
    false
}
