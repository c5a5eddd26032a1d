//! Convenience re-exports.
//!
//! ```
//! use sqlforge::prelude::*;
//!
//! let sql = Query::new()
//!     .select(["*"])
//!     .from("users")
//!     .where_eq("id", 1)
//!     .to_sql(Dialect::PostgreSql)
//!     .unwrap();
//! assert_eq!(sql, "SELECT * FROM users WHERE id = 1");
//! ```

pub use crate::dialect::Dialect;
pub use crate::error::{CompileError, CompileResult};
pub use crate::query::Query;
pub use crate::token::{Connector, WhereToken};
pub use crate::value::Value;
