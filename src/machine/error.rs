//! Errors raised while driving a state machine.

use crate::builder::ConfigurationError;
use thiserror::Error;

/// Errors that can occur while initializing or ticking a machine.
///
/// All of them are fatal for the instance that raised them.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HsmError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("State machine '{machine}' applied {limit} transitions in tick {tick} without settling (leaf: '{leaf}')")]
    TransitionLoop {
        machine: String,
        limit: usize,
        tick: u64,
        leaf: String,
    },

    #[error("'{attempted}' called while '{running}' is still executing")]
    Reentrancy {
        attempted: &'static str,
        running: &'static str,
    },

    #[error("State machine '{machine}' halted after a fatal error: {reason}")]
    Faulted { machine: String, reason: String },
}

impl HsmError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, HsmError::Configuration(_))
    }
}
