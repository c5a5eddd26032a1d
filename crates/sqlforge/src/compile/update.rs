//! UPDATE rendering.

use super::Renderer;
use crate::error::{CompileError, CompileResult};
use crate::query::Query;

impl Renderer {
    /// Render `UPDATE <t> SET <c> = <v>, ... [WHERE <tokens>]`.
    ///
    /// SET values come first in traversal order, so under parameterized
    /// compilation their placeholders precede the WHERE placeholders.
    pub(crate) fn render_update(&mut self, table: &str, query: &Query) -> CompileResult<()> {
        if query.set_clauses.is_empty() {
            return Err(CompileError::EmptyUpdate(table.to_string()));
        }
        self.sql.push_str("UPDATE ");
        self.sql.push_str(table);
        self.sql.push_str(" SET ");
        for (i, (column, value)) in query.set_clauses.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.sql.push_str(column);
            self.sql.push_str(" = ");
            self.push_value(value)?;
        }
        self.push_where_clause(&query.where_tokens)
    }
}
