//! RON pipeline descriptions.
//!
//! A description bundles a [`ScheduleConfig`] with the passes to schedule:
//!
//! ```ron
//! (
//!     config: (terminal_resource: "Backbuffer", external_resources: ["BlueNoise"]),
//!     passes: [
//!         (name: "gbuffer", texture_outputs: [(name: "Albedo", format: (pixel_format: Rgba8Unorm))]),
//!         (name: "final", texture_inputs: ["Albedo"], texture_outputs: [(name: "Backbuffer", format: (pixel_format: Bgra8Unorm))]),
//!     ],
//! )
//! ```
//!
//! Every list, `config` and `size` may be omitted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compiler::{CompiledGraph, schedule_with};
use crate::config::ScheduleConfig;
use crate::error::GraphError;
use crate::graph::PassDescriptor;

/// Errors raised while loading or scheduling a pipeline description.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The description file could not be read.
    #[error("failed to read pipeline description {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The description is not valid RON or does not match the schema.
    #[error("failed to parse pipeline description: {0}")]
    Parse(String),

    /// The description could not be written back out.
    #[error("failed to serialize pipeline description: {0}")]
    Serialize(String),

    /// The description parsed, but its passes could not be scheduled.
    #[error(transparent)]
    Schedule(#[from] GraphError),
}

/// A scheduler configuration together with the passes it applies to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineDescription {
    /// Scheduling options.
    #[serde(default)]
    pub config: ScheduleConfig,
    /// Passes, in any order.
    #[serde(default)]
    pub passes: Vec<PassDescriptor>,
}

impl PipelineDescription {
    /// Create a description from a configuration and a pass list.
    pub fn new(config: ScheduleConfig, passes: Vec<PassDescriptor>) -> Self {
        Self { config, passes }
    }

    /// Parse a description from RON text.
    pub fn from_ron_str(source: &str) -> Result<Self, LoadError> {
        ron::from_str(source).map_err(|e| LoadError::Parse(e.to_string()))
    }

    /// Read and parse a description file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let description = Self::from_ron_str(&source)?;
        log::debug!(
            "Loaded {} passes from {}",
            description.passes.len(),
            path.display()
        );
        Ok(description)
    }

    /// Write the description as pretty-printed RON.
    pub fn to_ron_string(&self) -> Result<String, LoadError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| LoadError::Serialize(e.to_string()))
    }

    /// Schedule the described passes with the described configuration.
    pub fn schedule(&self) -> Result<CompiledGraph, LoadError> {
        Ok(schedule_with(&self.passes, &self.config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RangeTracking;
    use crate::types::{TextureFormat, TextureSize};

    const DEFERRED: &str = r#"
        (
            config: (terminal_resource: "Backbuffer", external_resources: ["BlueNoise"]),
            passes: [
                (
                    name: "final",
                    texture_inputs: ["Albedo", "BlueNoise"],
                    texture_outputs: [(name: "Backbuffer", format: (pixel_format: Bgra8Unorm))],
                ),
                (
                    name: "gbuffer",
                    texture_outputs: [
                        (name: "Albedo", format: (pixel_format: Rgba8Unorm, size: Absolute(width: 64, height: 64))),
                    ],
                ),
            ],
        )
    "#;

    #[test]
    fn test_parse_description() {
        let description = PipelineDescription::from_ron_str(DEFERRED).unwrap();

        assert_eq!(description.passes.len(), 2);
        assert!(description.config.is_external("BlueNoise"));
        assert_eq!(description.config.range_tracking, RangeTracking::Conservative);

        let gbuffer = &description.passes[1];
        assert_eq!(gbuffer.name(), "gbuffer");
        assert_eq!(
            gbuffer.texture_outputs()[0].format.size,
            TextureSize::Absolute {
                width: 64,
                height: 64
            }
        );
    }

    #[test]
    fn test_schedule_description() {
        let compiled = PipelineDescription::from_ron_str(DEFERRED)
            .unwrap()
            .schedule()
            .unwrap();
        let order: Vec<_> = compiled.pass_names().collect();
        assert_eq!(order, vec!["gbuffer", "final"]);
    }

    #[test]
    fn test_defaults_when_omitted() {
        let description = PipelineDescription::from_ron_str("()").unwrap();
        assert_eq!(description, PipelineDescription::default());

        let description = PipelineDescription::from_ron_str(
            r#"(passes: [(name: "only", texture_outputs: [(name: "Backbuffer")])])"#,
        )
        .unwrap();
        let output = &description.passes[0].texture_outputs()[0];
        assert_eq!(output.format.pixel_format, TextureFormat::Rgba8Unorm);
        assert_eq!(output.format.size, TextureSize::default());
    }

    #[test]
    fn test_malformed_description() {
        let err = PipelineDescription::from_ron_str("(passes: [(name: 42)])").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_schedule_error_is_wrapped() {
        let description = PipelineDescription::new(
            ScheduleConfig::default(),
            vec![PassDescriptor::new("lonely")],
        );
        let err = description.schedule().unwrap_err();
        assert!(matches!(
            err,
            LoadError::Schedule(GraphError::MissingTerminalWriter { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = PipelineDescription::load("definitely/not/here.ron").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_ron_text_round_trips() {
        let description = PipelineDescription::from_ron_str(DEFERRED).unwrap();
        let text = description.to_ron_string().unwrap();
        assert_eq!(PipelineDescription::from_ron_str(&text).unwrap(), description);
    }
}
