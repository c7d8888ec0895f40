//! Bridge configuration.

use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};

/// What happens when a caller asks for an attribute that has no local
/// implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchPolicy {
    /// Always forward to the engine under the camelCase name, with a warning
    Permissive,
    /// Reject spellings that are not already snake_case, suggesting the
    /// declared attribute when one matches; forward the rest with a warning
    Strict,
}

impl Default for DispatchPolicy {
    fn default() -> Self {
        Self::Permissive
    }
}

/// Bridge configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Policy for attributes without a local implementation
    #[serde(default)]
    pub dispatch_policy: DispatchPolicy,

    /// Log target used by [`crate::diagnostics::LogSink`]
    #[serde(default = "default_log_target")]
    pub log_target: String,
}

fn default_log_target() -> String {
    "keanu_bridge::forward".to_string()
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            dispatch_policy: DispatchPolicy::default(),
            log_target: default_log_target(),
        }
    }
}

impl BridgeConfig {
    pub fn strict() -> Self {
        Self {
            dispatch_policy: DispatchPolicy::Strict,
            ..Default::default()
        }
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| BridgeError::ConfigError(e.to_string()))
    }

    /// Deserialize configuration from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BridgeError::ConfigError(e.to_string()))
    }
}
