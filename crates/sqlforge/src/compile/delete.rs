//! DELETE rendering.

use super::Renderer;
use crate::error::CompileResult;
use crate::query::Query;

impl Renderer {
    /// Render `DELETE FROM <t> [WHERE <tokens>]`. A DELETE with no WHERE
    /// is rendered as-is; whether that is wise is the caller's call.
    pub(crate) fn render_delete(&mut self, table: &str, query: &Query) -> CompileResult<()> {
        self.sql.push_str("DELETE FROM ");
        self.sql.push_str(table);
        self.push_where_clause(&query.where_tokens)
    }
}
