//! Hierarchical state machine runtime.

use crate::builder::{ConfigurationError, StateMachineBuilder, StateRegistry};
use crate::core::{StateId, Transition};
use crate::machine::config::MachineConfig;
use crate::machine::error::HsmError;
use crate::machine::path::{ActivePath, StateNode};
use crate::trace::{TraceEvent, TraceEventKind, TraceLevel, TraceSink, TracingSink};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Lifecycle status of a machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MachineStatus {
    /// Not initialized yet, or shut down
    Uninitialized,

    /// Active path established; ticks are accepted
    Active,

    /// A fatal error was raised; only `shutdown` is accepted
    Faulted,
}

/// Why settling stopped early.
enum Stall {
    LimitExceeded,
    Configuration(ConfigurationError),
}

impl From<ConfigurationError> for Stall {
    fn from(error: ConfigurationError) -> Self {
        Stall::Configuration(error)
    }
}

/// Runtime for one hierarchy instance bound to one owner type.
///
/// The machine owns the active path. Each tick the client calls
/// `process_state_transitions` and then `update_states`, handing in the owner
/// both times.
///
/// # Example
///
/// ```rust
/// use hsmrt::builder::StateRegistry;
/// use hsmrt::core::{State, Transition};
/// use hsmrt::machine::StateMachine;
/// use std::sync::Arc;
///
/// struct Door {
///     open: bool,
/// }
///
/// struct Closed;
/// struct Open;
///
/// impl State<&'static str, Door> for Closed {
///     fn transition(&self, door: &Door) -> Transition<&'static str> {
///         if door.open { Transition::sibling("Open") } else { Transition::None }
///     }
/// }
///
/// impl State<&'static str, Door> for Open {
///     fn transition(&self, door: &Door) -> Transition<&'static str> {
///         if door.open { Transition::None } else { Transition::sibling("Closed") }
///     }
/// }
///
/// let registry = StateRegistry::builder()
///     .root("Closed", || Closed)
///     .root("Open", || Open)
///     .build()
///     .unwrap();
///
/// let mut door = Door { open: false };
/// let mut machine = StateMachine::new(Arc::new(registry));
/// machine.initialize("Closed", &mut door).unwrap();
///
/// door.open = true;
/// machine.process_state_transitions(&mut door).unwrap();
/// machine.update_states(&mut door).unwrap();
/// assert_eq!(machine.leaf(), Some("Open"));
/// ```
pub struct StateMachine<I: StateId, O: ?Sized> {
    id: Uuid,
    config: MachineConfig,
    registry: Arc<StateRegistry<I, O>>,
    path: ActivePath<I, O>,
    status: MachineStatus,
    fault: Option<String>,
    running: Option<&'static str>,
    tick: u64,
    sink: Box<dyn TraceSink<I>>,
}

impl<I: StateId, O: ?Sized> StateMachine<I, O> {
    /// Create an uninitialized machine with the default configuration.
    pub fn new(registry: Arc<StateRegistry<I, O>>) -> Self {
        Self::from_parts(registry, MachineConfig::default(), Box::new(TracingSink))
    }

    /// Create an uninitialized machine with an explicit configuration.
    pub fn with_config(
        registry: Arc<StateRegistry<I, O>>,
        config: MachineConfig,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self::from_parts(registry, config, Box::new(TracingSink)))
    }

    pub fn builder() -> StateMachineBuilder<I, O> {
        StateMachineBuilder::new()
    }

    pub(crate) fn from_parts(
        registry: Arc<StateRegistry<I, O>>,
        config: MachineConfig,
        sink: Box<dyn TraceSink<I>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            registry,
            path: ActivePath::new(),
            status: MachineStatus::Uninitialized,
            fault: None,
            running: None,
            tick: 0,
            sink,
        }
    }

    /// Enter `root` and descend until the leaf requests no transition.
    ///
    /// On failure every state entered so far is exited again, leaf first, and
    /// the machine stays uninitialized.
    pub fn initialize(&mut self, root: I, owner: &mut O) -> Result<(), HsmError> {
        self.begin("initialize")?;
        let result = self.initialize_path(root, owner);
        self.end();
        result
    }

    /// Resolve transitions for this tick.
    ///
    /// The leaf is queried repeatedly; every `Sibling` or `InnerEntry` answer
    /// is applied and the new leaf queried again, until a leaf answers
    /// `Transition::None`. Returns the number of transitions applied.
    pub fn process_state_transitions(&mut self, owner: &mut O) -> Result<usize, HsmError> {
        self.begin("process_state_transitions")?;
        let result = self.resolve_tick(owner);
        self.end();
        result
    }

    /// Call `update` on every active state, root first.
    pub fn update_states(&mut self, owner: &mut O) -> Result<(), HsmError> {
        self.begin("update_states")?;
        let result = self.update_path(owner);
        self.end();
        result
    }

    /// Exit every active state, leaf first, and return to `Uninitialized`.
    ///
    /// Also clears a fault, so the machine can be initialized again.
    pub fn shutdown(&mut self, owner: &mut O) -> Result<(), HsmError> {
        self.begin("shutdown")?;
        let exited = self.path.len();
        self.exit_all(owner);
        self.status = MachineStatus::Uninitialized;
        self.fault = None;
        self.tick = 0;
        if exited > 0 {
            tracing::debug!(machine = %self.config.name, exited, "State machine shut down");
        }
        self.end();
        Ok(())
    }

    /// Set the debug name and trace verbosity of this instance.
    pub fn set_debug_info(&mut self, name: impl Into<String>, level: TraceLevel) {
        self.config.name = name.into();
        self.config.trace_level = level;
    }

    /// Replace the trace sink.
    pub fn set_trace_sink<S: TraceSink<I> + 'static>(&mut self, sink: S) {
        self.sink = Box::new(sink);
    }

    pub fn status(&self) -> MachineStatus {
        self.status
    }

    pub fn is_initialized(&self) -> bool {
        self.status == MachineStatus::Active
    }

    /// Innermost active state.
    pub fn leaf(&self) -> Option<I> {
        self.path.leaf().map(|leaf| leaf.id)
    }

    /// Active states from root to leaf.
    pub fn active_states(&self) -> Vec<I> {
        self.path.ids().collect()
    }

    /// Check whether `id` is anywhere on the active path.
    pub fn is_in_state(&self, id: I) -> bool {
        self.path.contains(id)
    }

    /// Number of active states.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Index of the last `process_state_transitions` call; 0 before the first.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<StateRegistry<I, O>> {
        &self.registry
    }

    fn begin(&mut self, operation: &'static str) -> Result<(), HsmError> {
        if let Some(running) = self.running {
            return Err(HsmError::Reentrancy {
                attempted: operation,
                running,
            });
        }
        self.running = Some(operation);
        Ok(())
    }

    fn end(&mut self) {
        self.running = None;
    }

    fn ensure_active(&self) -> Result<(), HsmError> {
        match self.status {
            MachineStatus::Active => Ok(()),
            MachineStatus::Uninitialized => Err(ConfigurationError::NotInitialized {
                machine: self.config.name.clone(),
            }
            .into()),
            MachineStatus::Faulted => Err(HsmError::Faulted {
                machine: self.config.name.clone(),
                reason: self.fault.clone().unwrap_or_default(),
            }),
        }
    }

    fn initialize_path(&mut self, root: I, owner: &mut O) -> Result<(), HsmError> {
        if self.status != MachineStatus::Uninitialized {
            return Err(ConfigurationError::AlreadyInitialized {
                machine: self.config.name.clone(),
            }
            .into());
        }

        if let Some(parent) = self.registry.parent_of(root)? {
            return Err(ConfigurationError::NotARoot {
                state: root.name().to_string(),
                parent: parent.name().to_string(),
            }
            .into());
        }

        let state = self.registry.construct(root)?;
        self.tick = 0;
        self.enter(
            StateNode {
                id: root,
                parent: None,
                state,
            },
            owner,
        );

        match self.settle(owner) {
            Ok(transitions) => {
                self.status = MachineStatus::Active;
                tracing::debug!(
                    machine = %self.config.name,
                    root = root.name(),
                    leaf = ?self.leaf(),
                    depth = self.path.len(),
                    transitions,
                    "State machine initialized"
                );
                Ok(())
            }
            Err(stall) => {
                let error: HsmError = match stall {
                    Stall::LimitExceeded => ConfigurationError::EntryDescentUnbounded {
                        limit: self.config.transition_limit,
                        path: self.path.ids().map(|id| id.name().to_string()).collect(),
                    }
                    .into(),
                    Stall::Configuration(error) => error.into(),
                };
                self.exit_all(owner);
                tracing::error!(
                    machine = %self.config.name,
                    error = %error,
                    "State machine initialization failed"
                );
                Err(error)
            }
        }
    }

    fn resolve_tick(&mut self, owner: &mut O) -> Result<usize, HsmError> {
        self.ensure_active()?;
        self.tick += 1;

        match self.settle(owner) {
            Ok(transitions) => {
                debug_assert!(self.path.is_well_formed(&self.registry));
                Ok(transitions)
            }
            Err(stall) => {
                let error = match stall {
                    Stall::LimitExceeded => HsmError::TransitionLoop {
                        machine: self.config.name.clone(),
                        limit: self.config.transition_limit,
                        tick: self.tick,
                        leaf: self
                            .leaf()
                            .map(|leaf| leaf.name().to_string())
                            .unwrap_or_default(),
                    },
                    Stall::Configuration(error) => error.into(),
                };
                self.fault(&error);
                Err(error)
            }
        }
    }

    fn update_path(&mut self, owner: &mut O) -> Result<(), HsmError> {
        self.ensure_active()?;

        for depth in 0..self.path.len() {
            let Some(node) = self.path.node_mut(depth) else {
                break;
            };
            node.state.update(owner);
            let id = node.id;
            self.emit(TraceEventKind::Updated, id, None, depth);
        }
        Ok(())
    }

    /// Apply leaf transitions until the leaf answers `None`.
    fn settle(&mut self, owner: &mut O) -> Result<usize, Stall> {
        let limit = self.config.transition_limit;
        let mut applied = 0;

        loop {
            let Some(leaf) = self.path.leaf() else {
                return Err(ConfigurationError::NotInitialized {
                    machine: self.config.name.clone(),
                }
                .into());
            };
            let (leaf_id, leaf_parent) = (leaf.id, leaf.parent);

            let transition = leaf.state.transition(owner);
            if let Some(target) = transition.target() {
                tracing::trace!(
                    machine = %self.config.name,
                    leaf = leaf_id.name(),
                    target = target.name(),
                    transition = transition.kind(),
                    applied,
                    "Applying transition"
                );
            }

            match transition {
                Transition::None => return Ok(applied),
                _ if applied >= limit => return Err(Stall::LimitExceeded),
                Transition::Sibling(target) => {
                    self.replace_leaf(leaf_id, leaf_parent, target, owner)?
                }
                Transition::InnerEntry(target) => self.descend(leaf_id, target, owner)?,
            }
            applied += 1;
        }
    }

    fn replace_leaf(
        &mut self,
        leaf: I,
        parent: Option<I>,
        target: I,
        owner: &mut O,
    ) -> Result<(), ConfigurationError> {
        let declared = self.registry.parent_of(target)?;
        if declared != parent {
            return Err(ConfigurationError::NotASibling {
                state: target.name().to_string(),
                leaf: leaf.name().to_string(),
                declared: declared.map(|id| id.name().to_string()),
                expected: parent.map(|id| id.name().to_string()),
            });
        }

        let state = self.registry.construct(target)?;
        self.emit(
            TraceEventKind::Sibling,
            target,
            Some(leaf),
            self.path.len() - 1,
        );
        self.exit_leaf(owner);
        self.enter(
            StateNode {
                id: target,
                parent,
                state,
            },
            owner,
        );
        Ok(())
    }

    fn descend(&mut self, leaf: I, target: I, owner: &mut O) -> Result<(), ConfigurationError> {
        let declared = self.registry.parent_of(target)?;
        if declared != Some(leaf) {
            return Err(ConfigurationError::NotAChild {
                state: target.name().to_string(),
                leaf: leaf.name().to_string(),
                declared: declared.map(|id| id.name().to_string()),
            });
        }

        let state = self.registry.construct(target)?;
        self.emit(
            TraceEventKind::InnerEntry,
            target,
            Some(leaf),
            self.path.len(),
        );
        self.enter(
            StateNode {
                id: target,
                parent: Some(leaf),
                state,
            },
            owner,
        );
        Ok(())
    }

    fn enter(&mut self, node: StateNode<I, O>, owner: &mut O) {
        let id = node.id;
        self.path.push(node);
        self.emit(TraceEventKind::Entered, id, None, self.path.len() - 1);
        if let Some(leaf) = self.path.leaf_mut() {
            leaf.state.on_enter(owner);
        }
    }

    fn exit_leaf(&mut self, owner: &mut O) {
        if let Some(mut node) = self.path.pop() {
            node.state.on_exit(owner);
            self.emit(TraceEventKind::Exited, node.id, None, self.path.len());
        }
    }

    fn exit_all(&mut self, owner: &mut O) {
        while !self.path.is_empty() {
            self.exit_leaf(owner);
        }
    }

    fn fault(&mut self, error: &HsmError) {
        self.status = MachineStatus::Faulted;
        self.fault = Some(error.to_string());
        tracing::error!(
            machine = %self.config.name,
            tick = self.tick,
            error = %error,
            "State machine faulted"
        );
    }

    fn emit(&mut self, kind: TraceEventKind, state: I, from: Option<I>, depth: usize) {
        if !self.config.trace_level.includes(kind) {
            return;
        }

        let event = TraceEvent {
            machine: self.config.name.clone(),
            machine_id: self.id,
            tick: self.tick,
            kind,
            state,
            from,
            depth,
            timestamp: Utc::now(),
        };
        self.sink.record(&event);
    }
}

impl<I: StateId, O: ?Sized> Drop for StateMachine<I, O> {
    fn drop(&mut self) {
        if !self.path.is_empty() {
            tracing::warn!(
                machine = %self.config.name,
                leaf = ?self.leaf(),
                depth = self.path.len(),
                "State machine dropped with active states; on_exit was not called"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;
    use crate::trace::RecordingSink;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[derive(Default)]
    struct Owner {
        go: bool,
        log: Vec<String>,
        explode: bool,
    }

    struct Logged {
        name: &'static str,
        next: Transition<&'static str>,
        when_go: Transition<&'static str>,
    }

    impl State<&'static str, Owner> for Logged {
        fn transition(&self, owner: &Owner) -> Transition<&'static str> {
            if owner.go {
                self.when_go
            } else {
                self.next
            }
        }

        fn on_enter(&mut self, owner: &mut Owner) {
            owner.log.push(format!("enter {}", self.name));
        }

        fn on_exit(&mut self, owner: &mut Owner) {
            owner.log.push(format!("exit {}", self.name));
        }

        fn update(&mut self, owner: &mut Owner) {
            if owner.explode {
                panic!("update exploded");
            }
            owner.log.push(format!("update {}", self.name));
        }
    }

    fn logged(
        name: &'static str,
        next: Transition<&'static str>,
        when_go: Transition<&'static str>,
    ) -> impl Fn() -> Logged + Send + Sync + 'static {
        move || Logged {
            name,
            next,
            when_go,
        }
    }

    // Root > Mid > {A, B}; Mid enters A, A moves to B when `go` is set.
    fn registry() -> Arc<StateRegistry<&'static str, Owner>> {
        let registry = StateRegistry::builder()
            .root(
                "Root",
                logged(
                    "Root",
                    Transition::inner_entry("Mid"),
                    Transition::inner_entry("Mid"),
                ),
            )
            .child(
                "Mid",
                "Root",
                logged(
                    "Mid",
                    Transition::inner_entry("A"),
                    Transition::inner_entry("A"),
                ),
            )
            .child(
                "A",
                "Mid",
                logged("A", Transition::None, Transition::sibling("B")),
            )
            .child("B", "Mid", logged("B", Transition::None, Transition::None))
            .child(
                "Stray",
                "Root",
                logged("Stray", Transition::None, Transition::None),
            )
            .build()
            .unwrap();
        Arc::new(registry)
    }

    #[test]
    fn initialize_descends_to_settled_leaf() {
        let mut owner = Owner::default();
        let mut machine = StateMachine::new(registry());

        machine.initialize("Root", &mut owner).unwrap();

        assert_eq!(machine.status(), MachineStatus::Active);
        assert_eq!(machine.active_states(), vec!["Root", "Mid", "A"]);
        assert_eq!(machine.leaf(), Some("A"));
        assert_eq!(machine.depth(), 3);
        assert!(machine.is_in_state("Mid"));
        assert!(!machine.is_in_state("B"));
        assert_eq!(owner.log, vec!["enter Root", "enter Mid", "enter A"]);
    }

    #[test]
    fn double_initialize_is_rejected() {
        let mut owner = Owner::default();
        let mut machine = StateMachine::new(registry());
        machine.initialize("Root", &mut owner).unwrap();

        let result = machine.initialize("Root", &mut owner);

        assert!(matches!(
            result,
            Err(HsmError::Configuration(
                ConfigurationError::AlreadyInitialized { .. }
            ))
        ));
        assert_eq!(machine.active_states(), vec!["Root", "Mid", "A"]);
    }

    #[test]
    fn initialize_requires_registered_root() {
        let mut owner = Owner::default();
        let mut machine = StateMachine::new(registry());

        let unknown = machine.initialize("Nope", &mut owner);
        assert!(matches!(
            unknown,
            Err(HsmError::Configuration(
                ConfigurationError::UnknownState { .. }
            ))
        ));

        let not_root = machine.initialize("Mid", &mut owner);
        assert!(matches!(
            not_root,
            Err(HsmError::Configuration(ConfigurationError::NotARoot { .. }))
        ));
        assert_eq!(machine.status(), MachineStatus::Uninitialized);
        assert!(owner.log.is_empty());
    }

    #[test]
    fn ticking_before_initialize_fails() {
        let mut owner = Owner::default();
        let mut machine = StateMachine::new(registry());

        assert!(matches!(
            machine.process_state_transitions(&mut owner),
            Err(HsmError::Configuration(
                ConfigurationError::NotInitialized { .. }
            ))
        ));
        assert!(machine.update_states(&mut owner).is_err());
    }

    #[test]
    fn sibling_transition_replaces_only_the_leaf() {
        let mut owner = Owner::default();
        let mut machine = StateMachine::new(registry());
        machine.initialize("Root", &mut owner).unwrap();
        owner.log.clear();

        owner.go = true;
        let applied = machine.process_state_transitions(&mut owner).unwrap();

        assert_eq!(applied, 1);
        assert_eq!(machine.active_states(), vec!["Root", "Mid", "B"]);
        assert_eq!(owner.log, vec!["exit A", "enter B"]);
        assert_eq!(machine.tick(), 1);
    }

    #[test]
    fn second_tick_without_changes_applies_nothing() {
        let mut owner = Owner {
            go: true,
            ..Owner::default()
        };
        let mut machine = StateMachine::new(registry());
        machine.initialize("Root", &mut owner).unwrap();

        assert_eq!(machine.process_state_transitions(&mut owner).unwrap(), 0);
        assert_eq!(machine.process_state_transitions(&mut owner).unwrap(), 0);
        assert_eq!(machine.leaf(), Some("B"));
    }

    #[test]
    fn update_runs_root_to_leaf() {
        let mut owner = Owner::default();
        let mut machine = StateMachine::new(registry());
        machine.initialize("Root", &mut owner).unwrap();
        owner.log.clear();

        machine.process_state_transitions(&mut owner).unwrap();
        machine.update_states(&mut owner).unwrap();

        assert_eq!(owner.log, vec!["update Root", "update Mid", "update A"]);
    }

    #[test]
    fn shutdown_exits_leaf_first_and_allows_reinitialize() {
        let mut owner = Owner::default();
        let mut machine = StateMachine::new(registry());
        machine.initialize("Root", &mut owner).unwrap();
        machine.process_state_transitions(&mut owner).unwrap();
        owner.log.clear();

        machine.shutdown(&mut owner).unwrap();

        assert_eq!(owner.log, vec!["exit A", "exit Mid", "exit Root"]);
        assert_eq!(machine.status(), MachineStatus::Uninitialized);
        assert_eq!(machine.depth(), 0);
        assert_eq!(machine.tick(), 0);

        machine.initialize("Root", &mut owner).unwrap();
        assert_eq!(machine.leaf(), Some("A"));
    }

    #[test]
    fn inner_entry_to_non_child_faults_the_machine() {
        let registry = StateRegistry::builder()
            .root(
                "Root",
                logged("Root", Transition::None, Transition::inner_entry("Deep")),
            )
            .child("Mid", "Root", logged("Mid", Transition::None, Transition::None))
            .child("Deep", "Mid", logged("Deep", Transition::None, Transition::None))
            .build()
            .unwrap();
        let mut owner = Owner::default();
        let mut machine = StateMachine::new(Arc::new(registry));
        machine.initialize("Root", &mut owner).unwrap();

        owner.go = true;
        let result = machine.process_state_transitions(&mut owner);

        assert!(matches!(
            result,
            Err(HsmError::Configuration(ConfigurationError::NotAChild { .. }))
        ));
        assert_eq!(machine.status(), MachineStatus::Faulted);
        assert_eq!(machine.active_states(), vec!["Root"]);

        let halted = machine.update_states(&mut owner);
        assert!(matches!(halted, Err(HsmError::Faulted { .. })));

        machine.shutdown(&mut owner).unwrap();
        assert_eq!(machine.status(), MachineStatus::Uninitialized);
    }

    #[test]
    fn sibling_with_different_parent_is_rejected() {
        let registry = StateRegistry::builder()
            .root(
                "Root",
                logged("Root", Transition::inner_entry("A"), Transition::None),
            )
            .child(
                "A",
                "Root",
                logged("A", Transition::None, Transition::sibling("Other")),
            )
            .root("Other", logged("Other", Transition::None, Transition::None))
            .build()
            .unwrap();
        let mut owner = Owner::default();
        let mut machine = StateMachine::new(Arc::new(registry));
        machine.initialize("Root", &mut owner).unwrap();

        owner.go = true;
        let result = machine.process_state_transitions(&mut owner);

        assert!(matches!(
            result,
            Err(HsmError::Configuration(ConfigurationError::NotASibling { .. }))
        ));
        assert_eq!(machine.status(), MachineStatus::Faulted);
        assert_eq!(machine.leaf(), Some("A"));
    }

    #[test]
    fn failed_initialize_rolls_back_entered_states() {
        let registry = StateRegistry::builder()
            .root(
                "Root",
                logged("Root", Transition::inner_entry("Ghost"), Transition::None),
            )
            .build()
            .unwrap();
        let mut owner = Owner::default();
        let mut machine = StateMachine::new(Arc::new(registry));

        let result = machine.initialize("Root", &mut owner);

        assert!(matches!(
            result,
            Err(HsmError::Configuration(
                ConfigurationError::UnknownState { .. }
            ))
        ));
        assert_eq!(owner.log, vec!["enter Root", "exit Root"]);
        assert_eq!(machine.status(), MachineStatus::Uninitialized);
        assert_eq!(machine.depth(), 0);
    }

    #[test]
    fn panicking_hook_leaves_machine_locked() {
        let mut owner = Owner::default();
        let mut machine = StateMachine::new(registry());
        machine.initialize("Root", &mut owner).unwrap();

        owner.explode = true;
        let unwound = catch_unwind(AssertUnwindSafe(|| {
            let _ = machine.update_states(&mut owner);
        }));
        assert!(unwound.is_err());

        owner.explode = false;
        let result = machine.process_state_transitions(&mut owner);
        assert_eq!(
            result,
            Err(HsmError::Reentrancy {
                attempted: "process_state_transitions",
                running: "update_states",
            })
        );
    }

    #[test]
    fn trace_level_filters_events() {
        let sink = RecordingSink::new();
        let mut owner = Owner::default();
        let mut machine = StateMachine::new(registry());
        machine.set_trace_sink(sink.clone());

        machine.initialize("Root", &mut owner).unwrap();
        assert!(sink.events().is_empty());

        machine.set_debug_info("TestHsm", TraceLevel::Basic);
        owner.go = true;
        machine.process_state_transitions(&mut owner).unwrap();
        machine.update_states(&mut owner).unwrap();

        assert_eq!(
            sink.summary(),
            vec![
                (TraceEventKind::Sibling, "B"),
                (TraceEventKind::Exited, "A"),
                (TraceEventKind::Entered, "B"),
            ]
        );
        let events = sink.events();
        assert!(events.iter().all(|event| event.machine == "TestHsm"));
        assert!(events.iter().all(|event| event.tick == 1));
        assert!(events.iter().all(|event| event.machine_id == machine.id()));
        assert_eq!(events[0].from, Some("A"));
        assert_eq!(events[0].depth, 2);

        sink.clear();
        machine.set_debug_info("TestHsm", TraceLevel::Verbose);
        machine.update_states(&mut owner).unwrap();
        assert_eq!(
            sink.summary(),
            vec![
                (TraceEventKind::Updated, "Root"),
                (TraceEventKind::Updated, "Mid"),
                (TraceEventKind::Updated, "B"),
            ]
        );
    }
}
