//! Scheduler configuration.

use serde::{Deserialize, Serialize};

/// Name of the terminal resource when none is configured.
pub const DEFAULT_TERMINAL_RESOURCE: &str = "Backbuffer";

/// How resource accesses are folded into usage ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RangeTracking {
    /// Reads and writes both extend a single lifetime window.
    ///
    /// Never lets two live resources share memory, but also never detects
    /// read-before-write hazards, so it aliases less than it could.
    #[default]
    Conservative,
    /// Reads extend the read range and writes extend the write range.
    Split,
}

/// Options for a scheduling run.
///
/// # Example
///
/// ```
/// use redlilium_graph::{RangeTracking, ScheduleConfig};
///
/// let config = ScheduleConfig::new()
///     .with_terminal_resource("FinalColor")
///     .with_external_resource("BlueNoise")
///     .with_range_tracking(RangeTracking::Split);
///
/// assert!(config.is_terminal("finalcolor"));
/// assert!(config.is_external("BlueNoise"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// The resource whose writers root the traversal.
    pub terminal_resource: String,
    /// Resources provided from outside the graph. Passes may read them
    /// without any pass writing them.
    pub external_resources: Vec<String>,
    /// How usage ranges are tracked.
    pub range_tracking: RangeTracking,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            terminal_resource: DEFAULT_TERMINAL_RESOURCE.to_string(),
            external_resources: Vec::new(),
            range_tracking: RangeTracking::default(),
        }
    }
}

impl ScheduleConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the terminal resource name.
    pub fn with_terminal_resource(mut self, name: impl Into<String>) -> Self {
        self.terminal_resource = name.into();
        self
    }

    /// Whitelist an externally provided resource.
    pub fn with_external_resource(mut self, name: impl Into<String>) -> Self {
        self.external_resources.push(name.into());
        self
    }

    /// Set the usage range tracking mode.
    pub fn with_range_tracking(mut self, tracking: RangeTracking) -> Self {
        self.range_tracking = tracking;
        self
    }

    /// Check if a resource name is the terminal resource (case-insensitive).
    pub fn is_terminal(&self, name: &str) -> bool {
        name.eq_ignore_ascii_case(&self.terminal_resource)
    }

    /// Check if a resource name is whitelisted as external.
    pub fn is_external(&self, name: &str) -> bool {
        self.external_resources.iter().any(|e| e == name)
    }
}
