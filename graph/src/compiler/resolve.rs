//! Depth-first dependency expansion from the terminal resource.

use crate::config::ScheduleConfig;
use crate::error::{GraphError, ResourceKind};
use crate::graph::{PassHandle, PassIndex, WriteIndex};

/// Counters describing one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Number of pass expansions performed.
    pub visits: usize,
    /// Deepest expansion depth reached. Terminal writers are at depth 1.
    pub max_depth: usize,
}

/// Raw traversal output: passes in root-to-leaf discovery order.
///
/// A pass appears once for every path that requires it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Discovered passes, duplicates included.
    pub order: Vec<PassHandle>,
    /// Traversal counters.
    pub stats: ResolveStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Append(PassHandle),
    Expand(PassHandle),
}

struct Frame {
    handle: PassHandle,
    depth: usize,
    cursor: usize,
}

/// Expand every pass required to produce the terminal resource.
///
/// Every writer of the terminal resource is appended, then expanded. Expanding
/// a pass walks, in order, its explicit dependencies, the writers of each
/// texture it reads, and the writers of each buffer it reads. Each required
/// pass is appended before it is expanded.
///
/// The traversal runs on an explicit stack. A depth greater than the number
/// of passes can only be reached through a cycle and aborts with
/// [`GraphError::CyclicDependency`].
pub fn resolve_dependencies(
    passes: &PassIndex<'_>,
    writes: &WriteIndex<'_>,
    config: &ScheduleConfig,
) -> Result<Discovery, GraphError> {
    let roots = writes
        .writers(&config.terminal_resource)
        .ok_or_else(|| GraphError::MissingTerminalWriter {
            resource: config.terminal_resource.clone(),
        })?;

    let mut resolver = Resolver {
        passes,
        writes,
        config,
        steps: vec![None; passes.len()],
        stack: Vec::new(),
        discovery: Discovery::default(),
    };
    resolver.discovery.order.extend_from_slice(roots);

    for &root in roots {
        resolver.enter(root, 1)?;
        resolver.run()?;
    }

    let discovery = resolver.discovery;
    log::trace!(
        "Dependency traversal made {} visits, max depth {}",
        discovery.stats.visits,
        discovery.stats.max_depth
    );
    Ok(discovery)
}

struct Resolver<'p, 'a> {
    passes: &'p PassIndex<'a>,
    writes: &'p WriteIndex<'a>,
    config: &'p ScheduleConfig,
    /// Per-pass step lists, built on first expansion.
    steps: Vec<Option<Vec<Step>>>,
    stack: Vec<Frame>,
    discovery: Discovery,
}

impl Resolver<'_, '_> {
    fn run(&mut self) -> Result<(), GraphError> {
        while let Some(frame) = self.stack.last_mut() {
            let step = self.steps[frame.handle.index()]
                .as_ref()
                .and_then(|list| list.get(frame.cursor))
                .copied();
            frame.cursor += 1;
            let depth = frame.depth + 1;

            match step {
                None => {
                    self.stack.pop();
                }
                Some(Step::Append(handle)) => self.discovery.order.push(handle),
                Some(Step::Expand(handle)) => self.enter(handle, depth)?,
            }
        }
        Ok(())
    }

    fn enter(&mut self, handle: PassHandle, depth: usize) -> Result<(), GraphError> {
        // A DAG never needs more hops than it has passes
        if depth > self.passes.len() {
            let chain = self
                .stack
                .iter()
                .map(|frame| frame.handle)
                .chain(std::iter::once(handle))
                .map(|h| self.passes.name(h).to_string())
                .collect();
            return Err(GraphError::CyclicDependency {
                pass: self.passes.name(handle).to_string(),
                chain,
            });
        }

        if self.steps[handle.index()].is_none() {
            self.steps[handle.index()] =
                Some(build_steps(self.passes, self.writes, self.config, handle)?);
        }

        self.discovery.stats.visits += 1;
        self.discovery.stats.max_depth = self.discovery.stats.max_depth.max(depth);
        self.stack.push(Frame {
            handle,
            depth,
            cursor: 0,
        });
        Ok(())
    }
}

/// Resolve a pass's dependencies into handles.
fn build_steps(
    passes: &PassIndex<'_>,
    writes: &WriteIndex<'_>,
    config: &ScheduleConfig,
    handle: PassHandle,
) -> Result<Vec<Step>, GraphError> {
    let pass = passes.get(handle);
    let mut steps = Vec::new();

    for dependency in pass.dependencies() {
        let dependency_handle = passes.handle(dependency).ok_or_else(|| {
            GraphError::UnknownDependency {
                pass: pass.name().to_string(),
                dependency: dependency.clone(),
            }
        })?;
        steps.push(Step::Append(dependency_handle));
        steps.push(Step::Expand(dependency_handle));
    }

    let inputs = pass
        .texture_inputs()
        .iter()
        .map(|name| (name, ResourceKind::Texture))
        .chain(
            pass.input_buffers()
                .iter()
                .map(|name| (name, ResourceKind::Buffer)),
        );

    for (resource, kind) in inputs {
        match writes.writers(resource) {
            Some(writers) => {
                steps.extend(writers.iter().map(|&w| Step::Append(w)));
                steps.extend(writers.iter().map(|&w| Step::Expand(w)));
            }
            None if config.is_external(resource) => {
                log::trace!("Pass `{}` reads external {kind} `{resource}`", pass.name());
            }
            None => {
                return Err(GraphError::UnresolvedInput {
                    pass: pass.name().to_string(),
                    resource: resource.clone(),
                    kind,
                });
            }
        }
    }

    Ok(steps)
}
