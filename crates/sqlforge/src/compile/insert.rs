//! INSERT and insert-or-update rendering.
//!
//! Plain inserts render identically everywhere; the conflict handling is
//! where dialects split. PostgreSQL and SQLite take `ON CONFLICT`, MySQL
//! takes `ON DUPLICATE KEY UPDATE`, SQL Server and Oracle take `MERGE`
//! statements (against a VALUES row and `dual`, respectively).

use super::Renderer;
use crate::dialect::Dialect;
use crate::error::{CompileError, CompileResult};
use crate::query::Query;
use crate::token::UpsertSpec;
use crate::value::Value;

/// Assignment columns other than the conflict key, i.e. the ones the
/// matched arm updates.
fn non_conflict_columns(spec: &UpsertSpec) -> Vec<&str> {
    spec.assignments
        .iter()
        .map(|(column, _)| column.as_str())
        .filter(|column| *column != spec.conflict_column)
        .collect()
}

impl Renderer {
    /// Render `INSERT INTO <t> [(<cols>)] VALUES (<r1>), (<r2>), ...`.
    pub(crate) fn render_insert(&mut self, table: &str, query: &Query) -> CompileResult<()> {
        if query.insert_rows.is_empty() {
            return Err(CompileError::EmptyInsert(table.to_string()));
        }
        self.sql.push_str("INSERT INTO ");
        self.sql.push_str(table);
        if !query.insert_columns.is_empty() {
            self.sql.push_str(" (");
            self.sql.push_str(&query.insert_columns.join(", "));
            self.sql.push(')');
        }
        self.sql.push_str(" VALUES ");
        for (i, row) in query.insert_rows.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.push_row(row)?;
        }
        Ok(())
    }

    /// Render the insert-or-update family with this dialect's template.
    pub(crate) fn render_upsert(&mut self, spec: &UpsertSpec) -> CompileResult<()> {
        if spec.assignments.is_empty() {
            return Err(CompileError::EmptyInsert(spec.table.clone()));
        }
        match self.dialect {
            Dialect::PostgreSql | Dialect::Sqlite => self.upsert_on_conflict(spec),
            Dialect::MySql => self.upsert_on_duplicate_key(spec),
            Dialect::SqlServer => self.upsert_merge(spec),
            Dialect::Oracle => self.upsert_merge_dual(spec),
        }
    }

    fn push_row(&mut self, row: &[Value]) -> CompileResult<()> {
        self.sql.push('(');
        for (i, value) in row.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.push_value(value)?;
        }
        self.sql.push(')');
        Ok(())
    }

    /// `INSERT INTO t (...) VALUES (...)`, shared by the non-MERGE
    /// templates.
    fn push_upsert_insert(&mut self, spec: &UpsertSpec) -> CompileResult<()> {
        self.sql.push_str("INSERT INTO ");
        self.sql.push_str(&spec.table);
        self.sql.push_str(" (");
        for (i, (column, _)) in spec.assignments.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.sql.push_str(column);
        }
        self.sql.push_str(") VALUES (");
        for (i, (_, value)) in spec.assignments.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.push_value(value)?;
        }
        self.sql.push(')');
        Ok(())
    }

    fn upsert_on_conflict(&mut self, spec: &UpsertSpec) -> CompileResult<()> {
        self.push_upsert_insert(spec)?;
        self.sql.push_str(" ON CONFLICT (");
        self.sql.push_str(&spec.conflict_column);
        self.sql.push(')');
        let updates = non_conflict_columns(spec);
        if updates.is_empty() {
            self.sql.push_str(" DO NOTHING");
            return Ok(());
        }
        self.sql.push_str(" DO UPDATE SET ");
        for (i, column) in updates.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.sql.push_str(&format!("{column} = EXCLUDED.{column}"));
        }
        Ok(())
    }

    fn upsert_on_duplicate_key(&mut self, spec: &UpsertSpec) -> CompileResult<()> {
        self.push_upsert_insert(spec)?;
        self.sql.push_str(" ON DUPLICATE KEY UPDATE ");
        let updates = non_conflict_columns(spec);
        if updates.is_empty() {
            // MySQL has no DO NOTHING arm; a self-assignment keeps the
            // statement valid when only the key column is written.
            let key = &spec.conflict_column;
            self.sql.push_str(&format!("{key} = {key}"));
            return Ok(());
        }
        for (i, column) in updates.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.sql.push_str(&format!("{column} = VALUES({column})"));
        }
        Ok(())
    }

    fn upsert_merge(&mut self, spec: &UpsertSpec) -> CompileResult<()> {
        let key = &spec.conflict_column;
        self.sql.push_str("MERGE INTO ");
        self.sql.push_str(&spec.table);
        self.sql.push_str(" AS target USING (VALUES (");
        for (i, (_, value)) in spec.assignments.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.push_value(value)?;
        }
        self.sql.push_str(")) AS source (");
        self.push_assignment_columns(spec);
        self.sql
            .push_str(&format!(") ON target.{key} = source.{key}"));
        let updates = non_conflict_columns(spec);
        if !updates.is_empty() {
            self.sql.push_str(" WHEN MATCHED THEN UPDATE SET ");
            for (i, column) in updates.iter().enumerate() {
                if i > 0 {
                    self.sql.push_str(", ");
                }
                self.sql
                    .push_str(&format!("target.{column} = source.{column}"));
            }
        }
        self.sql.push_str(" WHEN NOT MATCHED THEN INSERT (");
        self.push_assignment_columns(spec);
        self.sql.push_str(") VALUES (");
        for (i, (column, _)) in spec.assignments.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.sql.push_str(&format!("source.{column}"));
        }
        // T-SQL requires MERGE to be terminated.
        self.sql.push_str(");");
        Ok(())
    }

    fn upsert_merge_dual(&mut self, spec: &UpsertSpec) -> CompileResult<()> {
        let table = &spec.table;
        let key = &spec.conflict_column;
        self.sql.push_str(&format!("MERGE INTO {table} USING (SELECT "));
        for (i, (column, value)) in spec.assignments.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.push_value(value)?;
            self.sql.push_str(&format!(" AS {column}"));
        }
        self.sql
            .push_str(&format!(" FROM dual) source ON ({table}.{key} = source.{key})"));
        let updates = non_conflict_columns(spec);
        if !updates.is_empty() {
            self.sql.push_str(" WHEN MATCHED THEN UPDATE SET ");
            for (i, column) in updates.iter().enumerate() {
                if i > 0 {
                    self.sql.push_str(", ");
                }
                self.sql
                    .push_str(&format!("{table}.{column} = source.{column}"));
            }
        }
        self.sql.push_str(" WHEN NOT MATCHED THEN INSERT (");
        self.push_assignment_columns(spec);
        self.sql.push_str(") VALUES (");
        for (i, (column, _)) in spec.assignments.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.sql.push_str(&format!("source.{column}"));
        }
        self.sql.push(')');
        Ok(())
    }

    fn push_assignment_columns(&mut self, spec: &UpsertSpec) {
        for (i, (column, _)) in spec.assignments.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.sql.push_str(column);
        }
    }
}
