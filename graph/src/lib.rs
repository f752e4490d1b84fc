//! # RedLilium Graph
//!
//! Render pass scheduling for RedLilium pipeline descriptions.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`PassDescriptor`] - A named pass with its dependencies, inputs and outputs
//! - [`schedule`] / [`schedule_with`] - Compute a submission order for the passes
//!   that contribute to the terminal resource
//! - [`UsageTable`] / [`AliasTable`] - Resource lifetimes and memory sharing
//! - [`PipelineDescription`] - RON pipeline files
//!
//! ## Example
//!
//! ```
//! use redlilium_graph::{PassDescriptor, TextureFormat, schedule};
//!
//! let passes = vec![
//!     PassDescriptor::new("tonemap")
//!         .with_texture_input("Hdr")
//!         .with_texture_output("Backbuffer", TextureFormat::Bgra8Unorm),
//!     PassDescriptor::new("lighting").with_texture_output("Hdr", TextureFormat::Rgba16Float),
//!     PassDescriptor::new("unused").with_texture_output("Debug", TextureFormat::Rgba8Unorm),
//! ];
//!
//! let compiled = schedule(&passes)?;
//! assert_eq!(compiled.pass_names().collect::<Vec<_>>(), ["lighting", "tonemap"]);
//! # Ok::<(), redlilium_graph::GraphError>(())
//! ```

pub mod compiler;
pub mod config;
pub mod description;
pub mod error;
pub mod graph;
pub mod lifetime;
pub mod types;

// Re-export main types for convenience
pub use compiler::{
    CompiledGraph, Discovery, ResolveStats, normalize_order, resolve_dependencies, schedule,
    schedule_with,
};
pub use config::{DEFAULT_TERMINAL_RESOURCE, RangeTracking, ScheduleConfig};
pub use description::{LoadError, PipelineDescription};
pub use error::{ErrorCategory, GraphError, ResourceKind};
pub use graph::{PassDescriptor, PassHandle, PassIndex, TextureOutput, WriteIndex};
pub use lifetime::{AliasTable, Span, UsageRange, UsageTable, resolve_aliases};
pub use types::{ResourceFormat, TextureFormat, TextureSize};

/// Graph library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_compiled_graph_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompiledGraph>();
        assert_send_sync::<GraphError>();
    }
}
