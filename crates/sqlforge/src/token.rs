//! Clause tokens shared by the builder and the compiler.
//!
//! The WHERE sequence is the IR's only recursive, order-sensitive
//! structure: the builder appends [`WhereToken`]s in call order, inserting
//! explicit [`Connector`]s between predicates, and the compiler renders the
//! sequence in a single left-to-right pass. Everything here is plain data;
//! validation happens at compile time.

use crate::value::Value;

/// Boolean connective between sibling predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    /// SQL keyword for this connective.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// One element of the ordered WHERE sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum WhereToken {
    /// `<column> <operator> <value>`
    Condition {
        column: String,
        operator: String,
        value: Value,
    },
    /// `AND` / `OR` between predicates
    Connector(Connector),
    /// `(`
    GroupStart,
    /// `)`
    GroupEnd,
    /// `<column> IS NULL`
    IsNull(String),
    /// `<column> IS NOT NULL`
    IsNotNull(String),
}

impl WhereToken {
    /// True for tokens that close a predicate, i.e. tokens a connective may
    /// legally follow.
    pub(crate) fn ends_predicate(&self) -> bool {
        matches!(
            self,
            Self::Condition { .. } | Self::IsNull(_) | Self::IsNotNull(_) | Self::GroupEnd
        )
    }
}

/// Join flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    FullOuter,
    Cross,
}

impl JoinKind {
    /// SQL keywords for this join.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::FullOuter => "FULL OUTER JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }
}

/// One JOIN clause.
#[derive(Clone, Debug, PartialEq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: String,
    /// ON condition; `None` for CROSS JOIN.
    pub on: Option<String>,
}

/// One ORDER BY term.
#[derive(Clone, Debug, PartialEq)]
pub enum OrderTerm {
    /// Bare column, ascending.
    Asc(String),
    /// `<column> DESC`
    Desc(String),
    /// Verbatim SQL fragment.
    Raw(String),
}

/// One HAVING clause; clauses render joined by `AND`.
#[derive(Clone, Debug, PartialEq)]
pub struct HavingClause {
    pub column: String,
    pub operator: String,
    pub value: Value,
}

/// UNION flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnionKind {
    /// `UNION`
    Distinct,
    /// `UNION ALL`
    All,
}

/// Insert-or-update description, rendered per dialect (`ON CONFLICT`,
/// `ON DUPLICATE KEY UPDATE`, or `MERGE`).
#[derive(Clone, Debug, PartialEq)]
pub struct UpsertSpec {
    pub table: String,
    /// Ordered (column, value) assignments, conflict column included.
    pub assignments: Vec<(String, Value)>,
    pub conflict_column: String,
}

/// Which statement family a query compiles as.
///
/// Variants are listed in dispatch order: the first populated family wins
/// when several are set on one query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatementKind {
    Upsert,
    Insert,
    Update,
    Delete,
    Select,
}
