//! Query compilation: IR in, SQL text out.
//!
//! One renderer serves both output contracts: literal SQL text, and
//! placeholder SQL (`@p0`, `@p1`, ...) plus the ordered bound values. The
//! traversal reads the IR without mutating it, so one query can be
//! compiled repeatedly, for different dialects, with identical results.

mod delete;
mod insert;
mod predicate;
mod select;
mod update;


use crate::dialect::Dialect;
use crate::error::{CompileError, CompileResult};
use crate::query::Query;
use crate::value::{Value, push_quoted};

impl Query {
    /// Compile to literal SQL text for `dialect`.
    ///
    /// ```
    /// use sqlforge::{Dialect, Query};
    ///
    /// let sql = Query::new()
    ///     .select(["*"])
    ///     .from("users")
    ///     .where_eq("id", 1)
    ///     .to_sql(Dialect::PostgreSql)
    ///     .unwrap();
    /// assert_eq!(sql, "SELECT * FROM users WHERE id = 1");
    /// ```
    pub fn to_sql(&self, dialect: Dialect) -> CompileResult<String> {
        let mut renderer = Renderer::new(dialect, false);
        renderer.render_query(self)?;
        self.trace_compiled(dialect, &renderer.sql, 0);
        Ok(renderer.sql)
    }

    /// Compile to placeholder SQL plus the ordered bound values.
    ///
    /// Placeholders are `@p0`, `@p1`, ... in source order of first
    /// occurrence during traversal; the returned list's index matches the
    /// placeholder's numeric suffix. Structural text (identifiers, raw
    /// fragments, `NULL`, pagination counts) is never parameterized.
    pub fn to_sql_params(&self, dialect: Dialect) -> CompileResult<(String, Vec<Value>)> {
        let mut renderer = Renderer::new(dialect, true);
        renderer.render_query(self)?;
        self.trace_compiled(dialect, &renderer.sql, renderer.params.len());
        Ok((renderer.sql, renderer.params))
    }

    /// Like [`Query::to_sql`], but refuse a query with more than one
    /// statement family populated instead of resolving it by dispatch
    /// priority.
    pub fn to_sql_checked(&self, dialect: Dialect) -> CompileResult<String> {
        if self.is_ambiguous() {
            return Err(CompileError::AmbiguousStatement(self.family_list()));
        }
        self.to_sql(dialect)
    }

    fn family_list(&self) -> String {
        let mut families: Vec<&str> = Vec::new();
        if self.upsert.is_some() {
            families.push("INSERT OR UPDATE");
        }
        if self.insert_table.is_some() {
            families.push("INSERT");
        }
        if self.update_table.is_some() {
            families.push("UPDATE");
        }
        if self.delete_table.is_some() {
            families.push("DELETE");
        }
        families.join(" + ")
    }

    #[cfg(feature = "tracing")]
    fn trace_compiled(&self, dialect: Dialect, sql: &str, param_count: usize) {
        tracing::debug!(
            target: "sqlforge.sql",
            dialect = ?dialect,
            kind = ?self.statement_kind(),
            sql_len = sql.len(),
            param_count,
            sql = %sql,
        );
    }

    #[cfg(not(feature = "tracing"))]
    fn trace_compiled(&self, _dialect: Dialect, _sql: &str, _param_count: usize) {}
}

/// Single-pass SQL renderer.
///
/// Accumulates output text and, in parameterized mode, the bound values.
/// Subqueries are rendered through the same instance, so placeholder
/// numbering keeps running across nesting levels.
pub(crate) struct Renderer {
    dialect: Dialect,
    parameterize: bool,
    sql: String,
    params: Vec<Value>,
}

impl Renderer {
    fn new(dialect: Dialect, parameterize: bool) -> Self {
        Self {
            dialect,
            parameterize,
            sql: String::with_capacity(128),
            params: Vec::new(),
        }
    }

    /// Render one statement, dispatching on the first populated family.
    pub(crate) fn render_query(&mut self, query: &Query) -> CompileResult<()> {
        if let Some(upsert) = &query.upsert {
            return self.render_upsert(upsert);
        }
        if let Some(table) = query.insert_table.as_deref() {
            return self.render_insert(table, query);
        }
        if let Some(table) = query.update_table.as_deref() {
            return self.render_update(table, query);
        }
        if let Some(table) = query.delete_table.as_deref() {
            return self.render_delete(table, query);
        }
        self.render_select(query)
    }

    /// Append one value: inline literal text, or a placeholder in
    /// parameterized mode. Compound values recurse element-wise.
    pub(crate) fn push_value(&mut self, value: &Value) -> CompileResult<()> {
        if self.parameterize && value.is_bindable() {
            self.sql.push_str(&format!("@p{}", self.params.len()));
            self.params.push(value.clone());
            return Ok(());
        }
        match value {
            Value::Null => self.sql.push_str("NULL"),
            Value::Bool(b) => self.sql.push_str(if *b { "1" } else { "0" }),
            Value::Int(n) => self.sql.push_str(&n.to_string()),
            Value::Float(f) => self.sql.push_str(&f.to_string()),
            Value::Decimal(d) => self.sql.push_str(&d.to_string()),
            Value::Text(s) => push_quoted(&mut self.sql, s),
            Value::Date(d) => self.sql.push_str(&format!("'{}'", d.format("%Y-%m-%d"))),
            Value::DateTime(dt) => self
                .sql
                .push_str(&format!("'{}'", dt.format("%Y-%m-%d %H:%M:%S"))),
            Value::Uuid(u) => self.sql.push_str(&format!("'{u}'")),
            Value::Json(j) => push_quoted(&mut self.sql, &j.to_string()),
            Value::List(items) => {
                self.sql.push('(');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.sql.push_str(", ");
                    }
                    self.push_value(item)?;
                }
                self.sql.push(')');
            }
            Value::Pair(lo, hi) => {
                self.push_value(lo)?;
                self.sql.push_str(" AND ");
                self.push_value(hi)?;
            }
            Value::Query(subquery) => {
                self.sql.push('(');
                self.render_query(subquery)?;
                self.sql.push(')');
            }
            Value::Raw(fragment) => self.sql.push_str(fragment),
        }
        Ok(())
    }
}
