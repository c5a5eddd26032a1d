//! # sqlforge
//!
//! A fluent query builder and multi-dialect SQL compiler.
//!
//! ## Features
//!
//! - **One query, five dialects**: build a [`Query`] once, compile it for
//!   SQL Server, PostgreSQL, MySQL, SQLite, or Oracle
//! - **Fluent building**: chained methods append to the query in call order
//! - **Explicit boolean structure**: WHERE clauses are a token stream with
//!   groups and connectors, so precedence is always visible
//! - **Literal or parameterized output**: [`Query::to_sql`] inlines values,
//!   [`Query::to_sql_params`] emits `@p0`-style placeholders plus the values
//!   in placeholder order
//! - **Structural validation**: unbalanced groups, dangling connectors, and
//!   empty statements are compile errors, not broken SQL
//!
//! ## Usage
//!
//! ```
//! use sqlforge::{Dialect, Query};
//!
//! let sql = Query::new()
//!     .select(["*"])
//!     .from("users")
//!     .begin_group()
//!     .where_lt("age", 18)
//!     .or_where_gt("age", 60)
//!     .end_group()
//!     .where_eq("active", true)
//!     .to_sql(Dialect::PostgreSql)
//!     .unwrap();
//!
//! assert_eq!(sql, "SELECT * FROM users WHERE (age < 18 OR age > 60) AND active = 1");
//! ```
//!
//! Parameterized output keeps user data out of the SQL text:
//!
//! ```
//! use sqlforge::{Dialect, Query, Value};
//!
//! let (sql, params) = Query::new()
//!     .insert_into("users", ["name", "age"])
//!     .values([Value::from("Alice"), Value::from(30)])
//!     .to_sql_params(Dialect::SqlServer)
//!     .unwrap();
//!
//! assert_eq!(sql, "INSERT INTO users (name, age) VALUES (@p0, @p1)");
//! assert_eq!(params, vec![Value::from("Alice"), Value::from(30)]);
//! ```

pub mod dialect;
pub mod error;
pub mod prelude;
pub mod query;
pub mod token;
pub mod value;

mod compile;

pub use dialect::Dialect;
pub use error::{CompileError, CompileResult};
pub use query::Query;
pub use token::{
    Connector, HavingClause, Join, JoinKind, OrderTerm, StatementKind, UnionKind, UpsertSpec,
    WhereToken,
};
pub use value::Value;
