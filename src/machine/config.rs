//! Per-instance machine configuration.

use crate::builder::ConfigurationError;
use crate::trace::TraceLevel;
use serde::{Deserialize, Serialize};

/// Configuration scoped to a single machine.
///
/// Every field has a default, so partial documents deserialize:
///
/// ```rust
/// use hsmrt::machine::MachineConfig;
/// use hsmrt::trace::TraceLevel;
///
/// let config: MachineConfig =
///     serde_json::from_str(r#"{ "name": "TestHsm", "trace_level": "basic" }"#).unwrap();
///
/// assert_eq!(config.name, "TestHsm");
/// assert_eq!(config.trace_level, TraceLevel::Basic);
/// assert_eq!(config.transition_limit, MachineConfig::DEFAULT_TRANSITION_LIMIT);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Debug name reported in trace events, logs and errors
    pub name: String,

    pub trace_level: TraceLevel,

    /// Maximum transitions applied by one `initialize` or
    /// `process_state_transitions` call before it is treated as a loop
    pub transition_limit: usize,
}

impl MachineConfig {
    pub const DEFAULT_NAME: &'static str = "hsm";
    pub const DEFAULT_TRANSITION_LIMIT: usize = 64;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_trace_level(mut self, level: TraceLevel) -> Self {
        self.trace_level = level;
        self
    }

    pub fn with_transition_limit(mut self, limit: usize) -> Self {
        self.transition_limit = limit;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.transition_limit == 0 {
            return Err(ConfigurationError::InvalidTransitionLimit);
        }
        Ok(())
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            trace_level: TraceLevel::Off,
            transition_limit: Self::DEFAULT_TRANSITION_LIMIT,
        }
    }
}
