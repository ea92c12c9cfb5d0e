//! Configuration errors for registries and machines.

use thiserror::Error;

/// A single defect in a declared state hierarchy.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HierarchyViolation {
    #[error("State '{state}' is registered more than once")]
    DuplicateState { state: String },

    #[error("State '{state}' declares unknown parent '{parent}'")]
    UnknownParent { state: String, parent: String },

    #[error("State '{state}' is its own ancestor")]
    ParentCycle { state: String },
}

/// Errors caused by a hierarchy or machine that is set up wrong.
///
/// These are fatal for the machine that reports them.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("Invalid state hierarchy: {}", join_violations(.0))]
    InvalidHierarchy(Vec<HierarchyViolation>),

    #[error("State '{state}' is not registered")]
    UnknownState { state: String },

    #[error("State '{state}' declares parent '{parent}' and cannot be a root")]
    NotARoot { state: String, parent: String },

    #[error("State '{state}' cannot be entered beneath '{leaf}' (declared parent: {declared:?})")]
    NotAChild {
        state: String,
        leaf: String,
        declared: Option<String>,
    },

    #[error("State '{state}' is not a sibling of '{leaf}' (declared parent: {declared:?}, expected: {expected:?})")]
    NotASibling {
        state: String,
        leaf: String,
        declared: Option<String>,
        expected: Option<String>,
    },

    #[error("State machine '{machine}' is already initialized")]
    AlreadyInitialized { machine: String },

    #[error("State machine '{machine}' is not initialized. Call .initialize(root, owner) first")]
    NotInitialized { machine: String },

    #[error("Entry descent did not settle within {limit} transitions (path: {})", .path.join(" > "))]
    EntryDescentUnbounded { limit: usize, path: Vec<String> },

    #[error("Transition limit must be at least 1")]
    InvalidTransitionLimit,

    #[error("State registry not specified. Call .registry(registry) before .build()")]
    MissingRegistry,
}

fn join_violations(violations: &[HierarchyViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
