//! Dialect policy: the per-target rendering rules.
//!
//! A [`Dialect`] is passed to the compile entry points and parameterizes
//! three things: clause-final pagination syntax, identifier quoting, and
//! the upsert template. Nothing dialect-specific is baked into the IR, so
//! one query can be compiled for several targets.

use serde::{Deserialize, Serialize};

/// Target SQL variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// T-SQL: `[ident]`, `OFFSET ... FETCH`, `MERGE` upserts
    SqlServer,
    /// `"ident"`, `LIMIT`/`OFFSET`, `ON CONFLICT` upserts
    PostgreSql,
    /// `` `ident` ``, `LIMIT`/`OFFSET`, `ON DUPLICATE KEY UPDATE` upserts
    MySql,
    /// `"ident"`, `LIMIT`/`OFFSET`, `ON CONFLICT` upserts
    Sqlite,
    /// `"ident"`, `OFFSET ... FETCH`, `MERGE ... USING dual` upserts
    Oracle,
}

impl Dialect {
    /// Every supported dialect, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::SqlServer,
        Self::PostgreSql,
        Self::MySql,
        Self::Sqlite,
        Self::Oracle,
    ];

    /// Quote an identifier for this dialect, escaping the closing quote
    /// character by doubling it.
    ///
    /// Compiled statements splice identifiers verbatim; this helper is for
    /// callers whose identifiers collide with reserved words.
    ///
    /// ```
    /// use sqlforge::Dialect;
    ///
    /// assert_eq!(Dialect::SqlServer.quote_ident("order"), "[order]");
    /// assert_eq!(Dialect::MySql.quote_ident("order"), "`order`");
    /// assert_eq!(Dialect::PostgreSql.quote_ident("order"), "\"order\"");
    /// ```
    pub fn quote_ident(self, ident: &str) -> String {
        let (open, close) = match self {
            Self::SqlServer => ('[', ']'),
            Self::MySql => ('`', '`'),
            Self::PostgreSql | Self::Sqlite | Self::Oracle => ('"', '"'),
        };
        let mut quoted = String::with_capacity(ident.len() + 2);
        quoted.push(open);
        for ch in ident.chars() {
            quoted.push(ch);
            if ch == close {
                quoted.push(close);
            }
        }
        quoted.push(close);
        quoted
    }

    /// Render the clause-final pagination fragment, or `None` when neither
    /// limit nor offset is set.
    ///
    /// Not consulted in TOP mode, where the row count is emitted in the
    /// SELECT-list position instead.
    pub(crate) fn page_clause(self, limit: Option<i64>, offset: Option<i64>) -> Option<String> {
        match self {
            Self::PostgreSql | Self::MySql | Self::Sqlite => match (limit, offset) {
                (Some(n), Some(m)) => Some(format!("LIMIT {n} OFFSET {m}")),
                (Some(n), None) => Some(format!("LIMIT {n}")),
                (None, Some(m)) => Some(format!("OFFSET {m}")),
                (None, None) => None,
            },
            // T-SQL only accepts FETCH after an OFFSET arm.
            Self::SqlServer => match (limit, offset) {
                (Some(n), m) => Some(format!(
                    "OFFSET {} ROWS FETCH NEXT {n} ROWS ONLY",
                    m.unwrap_or(0)
                )),
                (None, Some(m)) => Some(format!("OFFSET {m} ROWS")),
                (None, None) => None,
            },
            Self::Oracle => match (limit, offset) {
                (Some(n), Some(m)) => Some(format!("OFFSET {m} ROWS FETCH NEXT {n} ROWS ONLY")),
                (Some(n), None) => Some(format!("FETCH FIRST {n} ROWS ONLY")),
                (None, Some(m)) => Some(format!("OFFSET {m} ROWS")),
                (None, None) => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident_styles() {
        assert_eq!(Dialect::SqlServer.quote_ident("user"), "[user]");
        assert_eq!(Dialect::MySql.quote_ident("user"), "`user`");
        assert_eq!(Dialect::PostgreSql.quote_ident("user"), "\"user\"");
        assert_eq!(Dialect::Sqlite.quote_ident("user"), "\"user\"");
        assert_eq!(Dialect::Oracle.quote_ident("user"), "\"user\"");
    }

    #[test]
    fn test_quote_ident_doubles_closing_char() {
        assert_eq!(Dialect::SqlServer.quote_ident("a]b"), "[a]]b]");
        assert_eq!(Dialect::MySql.quote_ident("a`b"), "`a``b`");
        assert_eq!(Dialect::PostgreSql.quote_ident("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_page_clause_limit_dialects() {
        assert_eq!(
            Dialect::PostgreSql.page_clause(Some(10), Some(20)),
            Some("LIMIT 10 OFFSET 20".to_string())
        );
        assert_eq!(
            Dialect::MySql.page_clause(Some(10), None),
            Some("LIMIT 10".to_string())
        );
        assert_eq!(
            Dialect::Sqlite.page_clause(None, Some(20)),
            Some("OFFSET 20".to_string())
        );
        assert_eq!(Dialect::PostgreSql.page_clause(None, None), None);
    }

    #[test]
    fn test_page_clause_sql_server() {
        assert_eq!(
            Dialect::SqlServer.page_clause(Some(10), Some(20)),
            Some("OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY".to_string())
        );
        assert_eq!(
            Dialect::SqlServer.page_clause(Some(10), None),
            Some("OFFSET 0 ROWS FETCH NEXT 10 ROWS ONLY".to_string())
        );
        assert_eq!(
            Dialect::SqlServer.page_clause(None, Some(20)),
            Some("OFFSET 20 ROWS".to_string())
        );
    }

    #[test]
    fn test_page_clause_oracle() {
        assert_eq!(
            Dialect::Oracle.page_clause(Some(10), Some(20)),
            Some("OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY".to_string())
        );
        assert_eq!(
            Dialect::Oracle.page_clause(Some(10), None),
            Some("FETCH FIRST 10 ROWS ONLY".to_string())
        );
        assert_eq!(
            Dialect::Oracle.page_clause(None, Some(20)),
            Some("OFFSET 20 ROWS".to_string())
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Dialect::PostgreSql).unwrap();
        assert_eq!(json, "\"postgresql\"");
        let back: Dialect = serde_json::from_str("\"sqlserver\"").unwrap();
        assert_eq!(back, Dialect::SqlServer);
    }
}
