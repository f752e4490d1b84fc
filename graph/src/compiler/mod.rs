//! Pass scheduling.
//!
//! This module turns an unordered set of [`PassDescriptor`]s into a
//! [`CompiledGraph`]: a submission order plus the lifetime and aliasing data
//! that memory allocation needs.
//!
//! # Pipeline
//!
//! 1. **Index** - [`PassIndex`] and [`WriteIndex`] over the descriptors
//! 2. **Resolve** - Depth-first expansion from every writer of the terminal
//!    resource, with a depth guard for cycles ([`resolve_dependencies`])
//! 3. **Normalize** - Reverse and deduplicate the discovery order
//!    ([`normalize_order`])
//! 4. **Track** - Per-resource usage ranges ([`UsageTable`])
//! 5. **Alias** - Pair up transient textures with disjoint lifetimes
//!    ([`resolve_aliases`])
//!
//! Passes that do not contribute to the terminal resource are dropped.
//! Any error aborts the whole run; there is no partial schedule.
//!
//! The result only needs to be rebuilt when the pass set changes, so none of
//! this runs per frame.
//!
//! # Example
//!
//! ```
//! use redlilium_graph::{PassDescriptor, TextureFormat, schedule};
//!
//! let passes = vec![
//!     PassDescriptor::new("B")
//!         .with_texture_input("G")
//!         .with_texture_output("Backbuffer", TextureFormat::Bgra8Unorm),
//!     PassDescriptor::new("A").with_texture_output("G", TextureFormat::Rgba8Unorm),
//! ];
//!
//! let compiled = schedule(&passes)?;
//! let order: Vec<_> = compiled.pass_names().collect();
//! assert_eq!(order, ["A", "B"]);
//! # Ok::<(), redlilium_graph::GraphError>(())
//! ```
//!
//! [`PassIndex`]: crate::graph::PassIndex
//! [`WriteIndex`]: crate::graph::WriteIndex
//! [`UsageTable`]: crate::lifetime::UsageTable
//! [`resolve_aliases`]: crate::lifetime::resolve_aliases

mod order;
mod resolve;

pub use order::normalize_order;
pub use resolve::{Discovery, ResolveStats, resolve_dependencies};

use crate::config::ScheduleConfig;
use crate::error::GraphError;
use crate::graph::{PassDescriptor, PassIndex, WriteIndex};
use crate::lifetime::{AliasTable, UsageTable, resolve_aliases};

/// A scheduled pass set.
///
/// Holds copies of the scheduled descriptors, so it stays valid after the
/// input is dropped and can be shared freely between threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledGraph {
    passes: Vec<PassDescriptor>,
    usage: UsageTable,
    aliases: AliasTable,
    stats: ResolveStats,
}

impl CompiledGraph {
    /// Passes in submission order.
    pub fn pass_order(&self) -> &[PassDescriptor] {
        &self.passes
    }

    /// Pass names in submission order.
    pub fn pass_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.passes.iter().map(PassDescriptor::name)
    }

    /// Submission index of a pass, if it was scheduled.
    pub fn position(&self, pass: &str) -> Option<usize> {
        self.passes.iter().position(|p| p.name() == pass)
    }

    /// Get the number of scheduled passes.
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    /// Check if nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Per-resource usage ranges over the submission order.
    pub fn usage(&self) -> &UsageTable {
        &self.usage
    }

    /// Which resources share memory with which.
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Traversal counters from dependency resolution.
    pub fn stats(&self) -> ResolveStats {
        self.stats
    }
}

/// Schedule passes with the default configuration.
///
/// The terminal resource is `"Backbuffer"`, no external resources are
/// whitelisted and usage ranges are tracked conservatively.
pub fn schedule(passes: &[PassDescriptor]) -> Result<CompiledGraph, GraphError> {
    schedule_with(passes, &ScheduleConfig::default())
}

/// Schedule passes with an explicit configuration.
pub fn schedule_with(
    passes: &[PassDescriptor],
    config: &ScheduleConfig,
) -> Result<CompiledGraph, GraphError> {
    log::debug!(
        "Scheduling {} passes for terminal resource `{}`",
        passes.len(),
        config.terminal_resource
    );

    let index = PassIndex::build(passes)?;
    let writes = WriteIndex::build(&index)?;
    let discovery = resolve_dependencies(&index, &writes, config)?;

    let order = normalize_order(discovery.order, index.len());
    let scheduled: Vec<PassDescriptor> = order.iter().map(|&h| index.get(h).clone()).collect();

    let usage = UsageTable::track(&scheduled, config.range_tracking);
    let aliases = resolve_aliases(&usage, &writes, config);

    log::debug!(
        "Scheduled {} of {} passes, {} aliased resources",
        scheduled.len(),
        passes.len(),
        aliases.len()
    );

    Ok(CompiledGraph {
        passes: scheduled,
        usage,
        aliases,
        stats: discovery.stats,
    })
}
