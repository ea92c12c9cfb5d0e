//! Builder for constructing state machines.

use crate::builder::error::ConfigurationError;
use crate::builder::registry::StateRegistry;
use crate::core::StateId;
use crate::machine::{MachineConfig, StateMachine};
use crate::trace::{TraceLevel, TraceSink, TracingSink};
use std::sync::Arc;

/// Builder for constructing state machines with a fluent API.
pub struct StateMachineBuilder<I: StateId, O: ?Sized> {
    registry: Option<Arc<StateRegistry<I, O>>>,
    config: MachineConfig,
    sink: Option<Box<dyn TraceSink<I>>>,
}

impl<I: StateId, O: ?Sized> StateMachineBuilder<I, O> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            registry: None,
            config: MachineConfig::default(),
            sink: None,
        }
    }

    /// Set the hierarchy (required).
    pub fn registry(mut self, registry: Arc<StateRegistry<I, O>>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    pub fn trace_level(mut self, level: TraceLevel) -> Self {
        self.config.trace_level = level;
        self
    }

    pub fn transition_limit(mut self, limit: usize) -> Self {
        self.config.transition_limit = limit;
        self
    }

    /// Set the trace sink (optional, defaults to `TracingSink`).
    pub fn trace_sink<S: TraceSink<I> + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing or the config is invalid.
    pub fn build(self) -> Result<StateMachine<I, O>, ConfigurationError> {
        let registry = self.registry.ok_or(ConfigurationError::MissingRegistry)?;
        self.config.validate()?;

        let sink = self.sink.unwrap_or_else(|| Box::new(TracingSink));
        Ok(StateMachine::from_parts(registry, self.config, sink))
    }
}

impl<I: StateId, O: ?Sized> Default for StateMachineBuilder<I, O> {
    fn default() -> Self {
        Self::new()
    }
}
