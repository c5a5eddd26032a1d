//! WHERE-token validation and rendering, shared by SELECT, UPDATE, and
//! DELETE, plus HAVING rendering.
//!
//! The builder appends tokens without checking them; this pass is the
//! authority. A malformed sequence is rejected with a structural error
//! rather than rendered into broken SQL.

use super::Renderer;
use crate::error::{CompileError, CompileResult};
use crate::token::{HavingClause, WhereToken};
use crate::value::Value;

/// Check group balance and connective placement.
pub(crate) fn validate(tokens: &[WhereToken]) -> CompileResult<()> {
    let mut depth: usize = 0;
    for (position, token) in tokens.iter().enumerate() {
        match token {
            WhereToken::GroupStart => depth += 1,
            WhereToken::GroupEnd => {
                if depth == 0 {
                    return Err(CompileError::UnbalancedGroup(format!(
                        "')' at token {position} has no matching '('"
                    )));
                }
                depth -= 1;
                if position > 0 && matches!(tokens[position - 1], WhereToken::GroupStart) {
                    return Err(CompileError::EmptyGroup {
                        position: position - 1,
                    });
                }
            }
            WhereToken::Connector(connector) => {
                let keyword = connector.as_str();
                let follows_predicate = position > 0 && tokens[position - 1].ends_predicate();
                if !follows_predicate {
                    return Err(CompileError::misplaced(keyword, position));
                }
                match tokens.get(position + 1) {
                    None | Some(WhereToken::Connector(_)) | Some(WhereToken::GroupEnd) => {
                        return Err(CompileError::misplaced(keyword, position));
                    }
                    Some(_) => {}
                }
            }
            WhereToken::Condition { .. } | WhereToken::IsNull(_) | WhereToken::IsNotNull(_) => {}
        }
    }
    if depth != 0 {
        return Err(CompileError::UnbalancedGroup(format!("{depth} unclosed '('")));
    }
    Ok(())
}

impl Renderer {
    /// Append ` WHERE <tokens>` when the sequence is non-empty, validating
    /// it first.
    pub(crate) fn push_where_clause(&mut self, tokens: &[WhereToken]) -> CompileResult<()> {
        if tokens.is_empty() {
            return Ok(());
        }
        validate(tokens)?;
        self.sql.push_str(" WHERE ");
        self.render_tokens(tokens)
    }

    /// Single left-to-right pass: one space between tokens, none after `(`
    /// or before `)`.
    fn render_tokens(&mut self, tokens: &[WhereToken]) -> CompileResult<()> {
        let mut needs_space = false;
        for token in tokens {
            match token {
                WhereToken::GroupStart => {
                    if needs_space {
                        self.sql.push(' ');
                    }
                    self.sql.push('(');
                    needs_space = false;
                }
                WhereToken::GroupEnd => {
                    self.sql.push(')');
                    needs_space = true;
                }
                WhereToken::Connector(connector) => {
                    if needs_space {
                        self.sql.push(' ');
                    }
                    self.sql.push_str(connector.as_str());
                    needs_space = true;
                }
                WhereToken::Condition {
                    column,
                    operator,
                    value,
                } => {
                    if needs_space {
                        self.sql.push(' ');
                    }
                    self.render_condition(column, operator, value)?;
                    needs_space = true;
                }
                WhereToken::IsNull(column) => {
                    if needs_space {
                        self.sql.push(' ');
                    }
                    self.sql.push_str(column);
                    self.sql.push_str(" IS NULL");
                    needs_space = true;
                }
                WhereToken::IsNotNull(column) => {
                    if needs_space {
                        self.sql.push(' ');
                    }
                    self.sql.push_str(column);
                    self.sql.push_str(" IS NOT NULL");
                    needs_space = true;
                }
            }
        }
        Ok(())
    }

    /// Render `<column> <operator> <value>`, with the vacuous empty-list
    /// cases folded to `1=0` / `1=1` so `IN ()` never appears.
    pub(crate) fn render_condition(
        &mut self,
        column: &str,
        operator: &str,
        value: &Value,
    ) -> CompileResult<()> {
        if let Value::List(items) = value {
            if items.is_empty() {
                if operator.eq_ignore_ascii_case("NOT IN") {
                    self.sql.push_str("1=1");
                    return Ok(());
                }
                if operator.eq_ignore_ascii_case("IN") {
                    self.sql.push_str("1=0");
                    return Ok(());
                }
            }
        }
        self.sql.push_str(column);
        self.sql.push(' ');
        self.sql.push_str(operator);
        self.sql.push(' ');
        self.push_value(value)
    }

    /// Append ` HAVING <clauses>` joined by `AND` when any are present.
    pub(crate) fn push_having_clause(&mut self, clauses: &[HavingClause]) -> CompileResult<()> {
        if clauses.is_empty() {
            return Ok(());
        }
        self.sql.push_str(" HAVING ");
        for (i, clause) in clauses.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(" AND ");
            }
            self.render_condition(&clause.column, &clause.operator, &clause.value)?;
        }
        Ok(())
    }
}
