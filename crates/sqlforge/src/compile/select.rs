//! SELECT rendering.

use super::Renderer;
use crate::error::CompileResult;
use crate::query::Query;
use crate::token::{OrderTerm, UnionKind};

impl Renderer {
    /// Render the SELECT family:
    /// `SELECT [DISTINCT] [TOP n] <cols|*> [FROM ...] [joins] [WHERE ...]
    /// [GROUP BY ...] [HAVING ...] [UNION [ALL] ...] [ORDER BY ...]
    /// [paging]`.
    pub(crate) fn render_select(&mut self, query: &Query) -> CompileResult<()> {
        self.sql.push_str("SELECT ");
        if query.distinct {
            self.sql.push_str("DISTINCT ");
        }
        if query.use_top {
            if let Some(limit) = query.limit {
                self.sql.push_str(&format!("TOP {limit} "));
            }
        }

        if query.columns.is_empty() {
            self.sql.push('*');
        } else {
            self.sql.push_str(&query.columns.join(", "));
        }

        // A plain table wins over a from-subquery when both are set.
        if let Some(table) = query.table.as_deref() {
            self.sql.push_str(" FROM ");
            self.sql.push_str(table);
        } else if let Some((subquery, alias)) = &query.from_subquery {
            self.sql.push_str(" FROM (");
            self.render_query(subquery)?;
            self.sql.push_str(") AS ");
            self.sql.push_str(alias);
        }

        for join in &query.joins {
            self.sql.push(' ');
            self.sql.push_str(join.kind.as_str());
            self.sql.push(' ');
            self.sql.push_str(&join.table);
            if let Some(on) = &join.on {
                self.sql.push_str(" ON ");
                self.sql.push_str(on);
            }
        }

        self.push_where_clause(&query.where_tokens)?;

        if !query.group_by.is_empty() {
            self.sql.push_str(" GROUP BY ");
            self.sql.push_str(&query.group_by.join(", "));
        }

        self.push_having_clause(&query.having)?;

        if let Some((kind, other)) = &query.union {
            self.sql.push_str(match kind {
                UnionKind::Distinct => " UNION ",
                UnionKind::All => " UNION ALL ",
            });
            self.render_query(other)?;
        }

        if !query.order_by.is_empty() {
            self.sql.push_str(" ORDER BY ");
            for (i, term) in query.order_by.iter().enumerate() {
                if i > 0 {
                    self.sql.push_str(", ");
                }
                match term {
                    OrderTerm::Asc(column) => self.sql.push_str(column),
                    OrderTerm::Desc(column) => {
                        self.sql.push_str(column);
                        self.sql.push_str(" DESC");
                    }
                    OrderTerm::Raw(expr) => self.sql.push_str(expr),
                }
            }
        }

        if !query.use_top {
            if let Some(clause) = self.dialect.page_clause(query.limit, query.offset) {
                self.sql.push(' ');
                self.sql.push_str(&clause);
            }
        }

        Ok(())
    }
}
