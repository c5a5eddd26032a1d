//! Error types for sqlforge

use thiserror::Error;

/// Result type alias for compilation
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors reported while compiling a query
///
/// The builder never fails; every structural problem surfaces here, when
/// the query is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Group tokens do not pair up
    #[error("Unbalanced group: {0}")]
    UnbalancedGroup(String),

    /// A group opened and closed with nothing inside
    #[error("Empty group at token {position}")]
    EmptyGroup { position: usize },

    /// AND/OR with no predicate on one side
    #[error("Misplaced {connector} at token {position}")]
    MisplacedConnector { connector: &'static str, position: usize },

    /// INSERT with no value rows
    #[error("INSERT INTO {0} has no value rows")]
    EmptyInsert(String),

    /// UPDATE with no SET assignments
    #[error("UPDATE {0} has no SET assignments")]
    EmptyUpdate(String),

    /// More than one statement family populated (checked compilation only)
    #[error("Ambiguous statement: {0}")]
    AmbiguousStatement(String),
}

impl CompileError {
    /// Create a misplaced-connector error
    pub(crate) fn misplaced(connector: &'static str, position: usize) -> Self {
        Self::MisplacedConnector { connector, position }
    }

    /// Check if this error describes a malformed where-token sequence
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::UnbalancedGroup(_) | Self::EmptyGroup { .. } | Self::MisplacedConnector { .. }
        )
    }

    /// Check if this is an ambiguous statement error
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::AmbiguousStatement(_))
    }
}
