//! Forwarding diagnostics.
//!
//! Every call that falls through to the engine because no local
//! implementation exists produces one [`ForwardingWarning`]. The warning
//! never blocks the call; where it ends up is decided by the
//! [`DiagnosticSink`] held in the context.

use std::cell::RefCell;
use std::fmt;

/// Why a call was forwarded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardReason {
    /// Permissive lookup: no local attribute under that name
    NotImplemented,
    /// Strict lookup: snake_case name accepted but only the engine has it
    Incomplete,
}

/// A forwarded attribute access
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardingWarning {
    /// Name exactly as the caller requested it
    pub requested: String,
    /// camelCase name sent to the engine
    pub remote_name: String,
    /// Engine class of the receiver
    pub class_name: String,
    pub reason: ForwardReason,
}

impl fmt::Display for ForwardingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            ForwardReason::NotImplemented => write!(
                f,
                "\"{}\" is not implemented. {}.{} was called directly so its return value may be an unwrapped remote object",
                self.requested, self.class_name, self.remote_name
            ),
            ForwardReason::Incomplete => write!(
                f,
                "\"{}\" has no local implementation; forwarding to {}.{}",
                self.requested, self.class_name, self.remote_name
            ),
        }
    }
}

/// Receiver for forwarding warnings
pub trait DiagnosticSink: fmt::Debug {
    fn warn(&self, warning: &ForwardingWarning);
}

/// Emits warnings through the `log` facade
#[derive(Debug, Clone)]
pub struct LogSink {
    target: String,
}

impl LogSink {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl DiagnosticSink for LogSink {
    fn warn(&self, warning: &ForwardingWarning) {
        log::warn!(target: self.target.as_str(), "{}", warning);
    }
}

/// Keeps every warning in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    warnings: RefCell<Vec<ForwardingWarning>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<ForwardingWarning> {
        self.warnings.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.warnings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.borrow().is_empty()
    }

    /// Drain recorded warnings
    pub fn take(&self) -> Vec<ForwardingWarning> {
        self.warnings.borrow_mut().drain(..).collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn warn(&self, warning: &ForwardingWarning) {
        self.warnings.borrow_mut().push(warning.clone());
    }
}
