//! The query IR and its fluent builder.
//!
//! A [`Query`] starts empty and grows through chained calls; every method
//! consumes and returns the builder. Nothing is validated while building
//! and nothing is dialect-specific: the same instance can be compiled any
//! number of times, for any [`Dialect`](crate::Dialect), without being
//! mutated by the compiler.
//!
//! Predicates are stored as an ordered token sequence. Each `where_*` /
//! `or_where_*` / group-opening call inserts an explicit AND or OR
//! connective first whenever the previous token closes a predicate, so
//! call order alone determines the rendered clause.

use crate::token::{
    Connector, HavingClause, Join, JoinKind, OrderTerm, StatementKind, UnionKind, UpsertSpec,
    WhereToken,
};
use crate::value::Value;

/// A buildable, compilable statement description.
///
/// One aggregate covers all four statement families. Populating more than
/// one family is not rejected; the compiler resolves the conflict by a
/// fixed dispatch priority (insert-or-update, INSERT, UPDATE, DELETE, then
/// SELECT), and [`Query::to_sql_checked`] refuses such queries instead.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query {
    pub(crate) table: Option<String>,
    pub(crate) from_subquery: Option<(Box<Query>, String)>,
    pub(crate) columns: Vec<String>,
    pub(crate) distinct: bool,
    pub(crate) where_tokens: Vec<WhereToken>,
    pub(crate) joins: Vec<Join>,
    pub(crate) group_by: Vec<String>,
    pub(crate) having: Vec<HavingClause>,
    pub(crate) order_by: Vec<OrderTerm>,
    pub(crate) limit: Option<i64>,
    pub(crate) offset: Option<i64>,
    pub(crate) use_top: bool,
    pub(crate) union: Option<(UnionKind, Box<Query>)>,
    pub(crate) insert_table: Option<String>,
    pub(crate) insert_columns: Vec<String>,
    pub(crate) insert_rows: Vec<Vec<Value>>,
    pub(crate) update_table: Option<String>,
    pub(crate) set_clauses: Vec<(String, Value)>,
    pub(crate) delete_table: Option<String>,
    pub(crate) upsert: Option<UpsertSpec>,
}

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Projection and source ====================

    /// Append columns to the projection list. An empty projection compiles
    /// as `*`.
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Emit `SELECT DISTINCT`.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Set the FROM table. Takes precedence over a from-subquery when both
    /// are set.
    pub fn from(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    /// Select from a nested query: `FROM (<query>) AS <alias>`.
    pub fn from_subquery(mut self, query: Query, alias: &str) -> Self {
        self.from_subquery = Some((Box::new(query), alias.to_string()));
        self
    }

    // ==================== WHERE conditions ====================

    /// Add `column = value`, AND-connected.
    pub fn where_eq<V: Into<Value>>(self, column: &str, value: V) -> Self {
        self.push_condition(Connector::And, column, "=", value.into())
    }

    /// Add `column != value`, AND-connected.
    pub fn where_ne<V: Into<Value>>(self, column: &str, value: V) -> Self {
        self.push_condition(Connector::And, column, "!=", value.into())
    }

    /// Add `column > value`, AND-connected.
    pub fn where_gt<V: Into<Value>>(self, column: &str, value: V) -> Self {
        self.push_condition(Connector::And, column, ">", value.into())
    }

    /// Add `column >= value`, AND-connected.
    pub fn where_gte<V: Into<Value>>(self, column: &str, value: V) -> Self {
        self.push_condition(Connector::And, column, ">=", value.into())
    }

    /// Add `column < value`, AND-connected.
    pub fn where_lt<V: Into<Value>>(self, column: &str, value: V) -> Self {
        self.push_condition(Connector::And, column, "<", value.into())
    }

    /// Add `column <= value`, AND-connected.
    pub fn where_lte<V: Into<Value>>(self, column: &str, value: V) -> Self {
        self.push_condition(Connector::And, column, "<=", value.into())
    }

    /// Add `column LIKE value`, AND-connected.
    pub fn where_like<V: Into<Value>>(self, column: &str, value: V) -> Self {
        self.push_condition(Connector::And, column, "LIKE", value.into())
    }

    /// Add `column NOT LIKE value`, AND-connected.
    pub fn where_not_like<V: Into<Value>>(self, column: &str, value: V) -> Self {
        self.push_condition(Connector::And, column, "NOT LIKE", value.into())
    }

    /// Add a condition with a caller-supplied operator, AND-connected.
    pub fn where_op<V: Into<Value>>(self, column: &str, operator: &str, value: V) -> Self {
        self.push_condition(Connector::And, column, operator, value.into())
    }

    /// Add `column = value`, OR-connected.
    pub fn or_where_eq<V: Into<Value>>(self, column: &str, value: V) -> Self {
        self.push_condition(Connector::Or, column, "=", value.into())
    }

    /// Add `column != value`, OR-connected.
    pub fn or_where_ne<V: Into<Value>>(self, column: &str, value: V) -> Self {
        self.push_condition(Connector::Or, column, "!=", value.into())
    }

    /// Add `column > value`, OR-connected.
    pub fn or_where_gt<V: Into<Value>>(self, column: &str, value: V) -> Self {
        self.push_condition(Connector::Or, column, ">", value.into())
    }

    /// Add `column >= value`, OR-connected.
    pub fn or_where_gte<V: Into<Value>>(self, column: &str, value: V) -> Self {
        self.push_condition(Connector::Or, column, ">=", value.into())
    }

    /// Add `column < value`, OR-connected.
    pub fn or_where_lt<V: Into<Value>>(self, column: &str, value: V) -> Self {
        self.push_condition(Connector::Or, column, "<", value.into())
    }

    /// Add `column <= value`, OR-connected.
    pub fn or_where_lte<V: Into<Value>>(self, column: &str, value: V) -> Self {
        self.push_condition(Connector::Or, column, "<=", value.into())
    }

    /// Add `column LIKE value`, OR-connected.
    pub fn or_where_like<V: Into<Value>>(self, column: &str, value: V) -> Self {
        self.push_condition(Connector::Or, column, "LIKE", value.into())
    }

    /// Add a condition with a caller-supplied operator, OR-connected.
    pub fn or_where_op<V: Into<Value>>(self, column: &str, operator: &str, value: V) -> Self {
        self.push_condition(Connector::Or, column, operator, value.into())
    }

    // ==================== NULL checks ====================

    /// Add `column IS NULL`, AND-connected.
    pub fn where_null(self, column: &str) -> Self {
        self.push_predicate(Connector::And, WhereToken::IsNull(column.to_string()))
    }

    /// Add `column IS NOT NULL`, AND-connected.
    pub fn where_not_null(self, column: &str) -> Self {
        self.push_predicate(Connector::And, WhereToken::IsNotNull(column.to_string()))
    }

    /// Add `column IS NULL`, OR-connected.
    pub fn or_where_null(self, column: &str) -> Self {
        self.push_predicate(Connector::Or, WhereToken::IsNull(column.to_string()))
    }

    /// Add `column IS NOT NULL`, OR-connected.
    pub fn or_where_not_null(self, column: &str) -> Self {
        self.push_predicate(Connector::Or, WhereToken::IsNotNull(column.to_string()))
    }

    // ==================== IN and BETWEEN ====================

    /// Add `column IN (values...)`, AND-connected. An empty list compiles
    /// to `1=0` rather than invalid `IN ()`.
    pub fn where_in<I, V>(self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let list = Value::List(values.into_iter().map(Into::into).collect());
        self.push_condition(Connector::And, column, "IN", list)
    }

    /// Add `column NOT IN (values...)`, AND-connected. An empty list
    /// compiles to `1=1`.
    pub fn where_not_in<I, V>(self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let list = Value::List(values.into_iter().map(Into::into).collect());
        self.push_condition(Connector::And, column, "NOT IN", list)
    }

    /// Add `column IN (values...)`, OR-connected.
    pub fn or_where_in<I, V>(self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let list = Value::List(values.into_iter().map(Into::into).collect());
        self.push_condition(Connector::Or, column, "IN", list)
    }

    /// Add `column BETWEEN lo AND hi`, AND-connected.
    pub fn where_between<V: Into<Value>>(self, column: &str, lo: V, hi: V) -> Self {
        let bounds = Value::Pair(Box::new(lo.into()), Box::new(hi.into()));
        self.push_condition(Connector::And, column, "BETWEEN", bounds)
    }

    /// Add `column NOT BETWEEN lo AND hi`, AND-connected.
    pub fn where_not_between<V: Into<Value>>(self, column: &str, lo: V, hi: V) -> Self {
        let bounds = Value::Pair(Box::new(lo.into()), Box::new(hi.into()));
        self.push_condition(Connector::And, column, "NOT BETWEEN", bounds)
    }

    // ==================== Predicate groups ====================

    /// Open a parenthesized group, AND-connected to the preceding
    /// predicate. Nesting is unlimited; balance is checked at compile time.
    pub fn begin_group(self) -> Self {
        self.push_predicate(Connector::And, WhereToken::GroupStart)
    }

    /// Open a parenthesized group, OR-connected to the preceding predicate.
    pub fn or_begin_group(self) -> Self {
        self.push_predicate(Connector::Or, WhereToken::GroupStart)
    }

    /// Close the innermost group.
    pub fn end_group(mut self) -> Self {
        self.where_tokens.push(WhereToken::GroupEnd);
        self
    }

    // ==================== JOIN ====================

    /// Add `INNER JOIN table ON on`.
    pub fn join(self, table: &str, on: &str) -> Self {
        self.push_join(JoinKind::Inner, table, Some(on))
    }

    /// Add `LEFT JOIN table ON on`.
    pub fn left_join(self, table: &str, on: &str) -> Self {
        self.push_join(JoinKind::Left, table, Some(on))
    }

    /// Add `RIGHT JOIN table ON on`.
    pub fn right_join(self, table: &str, on: &str) -> Self {
        self.push_join(JoinKind::Right, table, Some(on))
    }

    /// Add `FULL OUTER JOIN table ON on`.
    pub fn full_outer_join(self, table: &str, on: &str) -> Self {
        self.push_join(JoinKind::FullOuter, table, Some(on))
    }

    /// Add `CROSS JOIN table` (no ON condition).
    pub fn cross_join(self, table: &str) -> Self {
        self.push_join(JoinKind::Cross, table, None)
    }

    // ==================== GROUP BY / HAVING ====================

    /// Append GROUP BY columns.
    pub fn group_by<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_by.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Append a HAVING clause; clauses render joined by `AND`.
    pub fn having<V: Into<Value>>(mut self, column: &str, operator: &str, value: V) -> Self {
        self.having.push(HavingClause {
            column: column.to_string(),
            operator: operator.to_string(),
            value: value.into(),
        });
        self
    }

    // ==================== ORDER BY ====================

    /// Append an ascending order term (rendered as the bare column).
    pub fn order_by(mut self, column: &str) -> Self {
        self.order_by.push(OrderTerm::Asc(column.to_string()));
        self
    }

    /// Append a descending order term (`column DESC`).
    pub fn order_by_desc(mut self, column: &str) -> Self {
        self.order_by.push(OrderTerm::Desc(column.to_string()));
        self
    }

    /// Append a verbatim order expression, e.g. `RAND()`.
    pub fn order_by_raw(mut self, expr: &str) -> Self {
        self.order_by.push(OrderTerm::Raw(expr.to_string()));
        self
    }

    // ==================== Pagination ====================

    /// Cap the row count using the dialect's clause-final syntax
    /// (`LIMIT n` or `OFFSET ... FETCH`). Clears TOP mode.
    pub fn limit(mut self, n: i64) -> Self {
        self.limit = Some(n);
        self.use_top = false;
        self
    }

    /// Skip `n` rows. Ignored while TOP mode is active.
    pub fn offset(mut self, n: i64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Cap the row count in the SELECT-list position: `SELECT TOP n ...`.
    pub fn top(mut self, n: i64) -> Self {
        self.limit = Some(n);
        self.use_top = true;
        self
    }

    // ==================== Set operations ====================

    /// Attach `UNION <query>`.
    pub fn union(mut self, query: Query) -> Self {
        self.union = Some((UnionKind::Distinct, Box::new(query)));
        self
    }

    /// Attach `UNION ALL <query>`.
    pub fn union_all(mut self, query: Query) -> Self {
        self.union = Some((UnionKind::All, Box::new(query)));
        self
    }

    // ==================== INSERT ====================

    /// Target the INSERT family: `INSERT INTO table (columns...)`.
    /// An empty column list omits the parenthesized column group.
    pub fn insert_into<I, S>(mut self, table: &str, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_table = Some(table.to_string());
        self.insert_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Append one VALUES row. Call repeatedly for multi-row inserts.
    pub fn values<I, V>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.insert_rows
            .push(row.into_iter().map(Into::into).collect());
        self
    }

    // ==================== UPDATE ====================

    /// Target the UPDATE family: `UPDATE table`.
    pub fn update(mut self, table: &str) -> Self {
        self.update_table = Some(table.to_string());
        self
    }

    /// Append a SET assignment: `column = value`.
    pub fn set<V: Into<Value>>(mut self, column: &str, value: V) -> Self {
        self.set_clauses.push((column.to_string(), value.into()));
        self
    }

    // ==================== DELETE ====================

    /// Target the DELETE family: `DELETE FROM table`.
    pub fn delete_from(mut self, table: &str) -> Self {
        self.delete_table = Some(table.to_string());
        self
    }

    // ==================== Insert-or-update ====================

    /// Target the insert-or-update family, keyed on `conflict_column`.
    ///
    /// Renders per dialect: `ON CONFLICT (k) DO UPDATE` (PostgreSQL,
    /// SQLite), `ON DUPLICATE KEY UPDATE` (MySQL), or a `MERGE` statement
    /// (SQL Server, Oracle).
    pub fn insert_or_update<I, S, V>(mut self, table: &str, assignments: I, conflict_column: &str) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<Value>,
    {
        self.upsert = Some(UpsertSpec {
            table: table.to_string(),
            assignments: assignments
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
            conflict_column: conflict_column.to_string(),
        });
        self
    }

    // ==================== Introspection ====================

    /// Which statement family this query compiles as, following the
    /// dispatch priority.
    pub fn statement_kind(&self) -> StatementKind {
        if self.upsert.is_some() {
            StatementKind::Upsert
        } else if self.insert_table.is_some() {
            StatementKind::Insert
        } else if self.update_table.is_some() {
            StatementKind::Update
        } else if self.delete_table.is_some() {
            StatementKind::Delete
        } else {
            StatementKind::Select
        }
    }

    /// True when more than one statement family is populated, i.e. the
    /// dispatch priority is deciding which one wins.
    pub fn is_ambiguous(&self) -> bool {
        let populated = [
            self.upsert.is_some(),
            self.insert_table.is_some(),
            self.update_table.is_some(),
            self.delete_table.is_some(),
        ];
        populated.iter().filter(|set| **set).count() > 1
    }

    /// The ordered WHERE token sequence, for inspection.
    pub fn where_tokens(&self) -> &[WhereToken] {
        &self.where_tokens
    }

    // ==================== Internal ====================

    /// Append a predicate-start token, inserting the connective first when
    /// the previous token closes a predicate.
    fn push_predicate(mut self, connector: Connector, token: WhereToken) -> Self {
        let follows_predicate = self
            .where_tokens
            .last()
            .is_some_and(WhereToken::ends_predicate);
        if follows_predicate {
            self.where_tokens.push(WhereToken::Connector(connector));
        }
        self.where_tokens.push(token);
        self
    }

    fn push_condition(self, connector: Connector, column: &str, operator: &str, value: Value) -> Self {
        self.push_predicate(
            connector,
            WhereToken::Condition {
                column: column.to_string(),
                operator: operator.to_string(),
                value,
            },
        )
    }

    fn push_join(mut self, kind: JoinKind, table: &str, on: Option<&str>) -> Self {
        self.joins.push(Join {
            kind,
            table: table.to_string(),
            on: on.map(str::to_string),
        });
        self
    }
}
