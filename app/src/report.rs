//! Human-readable schedule report.

use std::fmt;

use redlilium_graph::{CompiledGraph, ScheduleConfig};

/// Submission order, resource lifetimes and aliases of a compiled graph.
pub struct Report<'a> {
    compiled: &'a CompiledGraph,
    config: &'a ScheduleConfig,
}

impl<'a> Report<'a> {
    /// Create a report for a graph compiled with `config`.
    pub fn new(compiled: &'a CompiledGraph, config: &'a ScheduleConfig) -> Self {
        Self { compiled, config }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compiled = self.compiled;

        writeln!(
            f,
            "Submission order ({} passes, terminal `{}`):",
            compiled.pass_count(),
            self.config.terminal_resource
        )?;
        for (index, pass) in compiled.pass_names().enumerate() {
            writeln!(f, "  {index:>3}  {pass}")?;
        }

        let usage = compiled.usage();
        let width = usage
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);

        writeln!(f, "\nResources ({}):", usage.len())?;
        for (name, range) in usage.iter() {
            let lifetime = match range.lifetime() {
                Some(span) if span.first == span.last => format!("pass {}", span.first),
                Some(span) => format!("passes {}..={}", span.first, span.last),
                None => "unused".to_string(),
            };
            match compiled.aliases().backing(name) {
                Some(backing) => writeln!(f, "  {name:<width$}  {lifetime:<16}  reuses {backing}")?,
                None => writeln!(f, "  {name:<width$}  {lifetime}")?,
            }
        }

        let stats = compiled.stats();
        writeln!(
            f,
            "\n{} aliased, {} visits, max depth {}",
            compiled.aliases().len(),
            stats.visits,
            stats.max_depth
        )
    }
}
