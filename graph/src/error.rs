//! Graph error types.

use std::fmt;

use thiserror::Error;

/// Whether an unresolved input was read as a texture or as a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A texture input.
    Texture,
    /// A buffer input.
    Buffer,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Texture => write!(f, "texture"),
            Self::Buffer => write!(f, "buffer"),
        }
    }
}

/// Broad classification of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The pass set itself is malformed.
    Configuration,
    /// A pass reads something no pass writes.
    UnresolvedInput,
    /// The dependency graph contains a cycle.
    CyclicDependency,
}

/// Errors that can occur while scheduling a pass set.
///
/// Every variant aborts scheduling of the whole configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Two passes share a name.
    #[error("duplicate pass name `{name}`")]
    DuplicatePass { name: String },

    /// Nothing writes the terminal resource, so nothing can be rendered.
    #[error("no pass writes the terminal resource `{resource}`")]
    MissingTerminalWriter { resource: String },

    /// An explicit dependency names a pass that does not exist.
    #[error("pass `{pass}` depends on unknown pass `{dependency}`")]
    UnknownDependency { pass: String, dependency: String },

    /// Two writers disagree about the format of a texture.
    #[error("pass `{pass}` writes texture `{resource}` with a format that differs from its other writers")]
    ConflictingFormat { resource: String, pass: String },

    /// A pass reads a resource that nothing writes.
    #[error("pass `{pass}` reads {kind} `{resource}`, but no pass writes it")]
    UnresolvedInput {
        pass: String,
        resource: String,
        kind: ResourceKind,
    },

    /// Traversal depth exceeded the pass count.
    #[error("cyclic dependency detected at pass `{pass}` (chain: {})", .chain.join(" -> "))]
    CyclicDependency { pass: String, chain: Vec<String> },
}

impl GraphError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicatePass { .. }
            | Self::MissingTerminalWriter { .. }
            | Self::UnknownDependency { .. }
            | Self::ConflictingFormat { .. } => ErrorCategory::Configuration,
            Self::UnresolvedInput { .. } => ErrorCategory::UnresolvedInput,
            Self::CyclicDependency { .. } => ErrorCategory::CyclicDependency,
        }
    }

    /// Name of the pass the error is about, if any.
    pub fn pass(&self) -> Option<&str> {
        match self {
            Self::DuplicatePass { name } => Some(name),
            Self::MissingTerminalWriter { .. } => None,
            Self::UnknownDependency { pass, .. }
            | Self::ConflictingFormat { pass, .. }
            | Self::UnresolvedInput { pass, .. }
            | Self::CyclicDependency { pass, .. } => Some(pass),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphError::MissingTerminalWriter {
            resource: "Backbuffer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no pass writes the terminal resource `Backbuffer`"
        );

        let err = GraphError::UnresolvedInput {
            pass: "C".to_string(),
            resource: "X".to_string(),
            kind: ResourceKind::Buffer,
        };
        assert_eq!(err.to_string(), "pass `C` reads buffer `X`, but no pass writes it");

        let err = GraphError::CyclicDependency {
            pass: "A".to_string(),
            chain: vec!["A".to_string(), "B".to_string(), "A".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "cyclic dependency detected at pass `A` (chain: A -> B -> A)"
        );
    }

    #[test]
    fn test_error_category() {
        let err = GraphError::DuplicatePass {
            name: "gbuffer".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.pass(), Some("gbuffer"));

        let err = GraphError::CyclicDependency {
            pass: "A".to_string(),
            chain: Vec::new(),
        };
        assert_eq!(err.category(), ErrorCategory::CyclicDependency);
    }
}
