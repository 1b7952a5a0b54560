//! # sqlexpress
//!
//! Compiles typed expression trees into parameterized T-SQL.
//!
//! Queries are described as an ordered sequence of [`Fragment`](ast::Fragment)s
//! holding [`Expr`](ast::Expr) trees. Compiling a sequence yields SQL text in
//! which every literal is replaced by a placeholder, plus the ordered list of
//! bind parameters.
//!
//! ## Quick Example
//!
//! ```rust
//! use sqlexpress::prelude::*;
//!
//! let stmt = Query::new()
//!     .select([all("Order")])
//!     .from("Order")
//!     .filter(is_in(col("Order", "Status"), ["open", "held"]))
//!     .order_by([col("Order", "OrderDate").desc()])
//!     .paginate(offset_fetch(20, 10))
//!     .compile()?;
//!
//! assert_eq!(
//!     stmt.text,
//!     "SELECT _t0.*\n\
//!      FROM [Order] AS _t0\n\
//!      WHERE (_t0.[Status] IN (@p0, @p1))\n\
//!      ORDER BY _t0.[OrderDate] DESC\n\
//!      OFFSET @p2 ROWS FETCH NEXT @p3 ROWS ONLY"
//! );
//! assert_eq!(stmt.parameters.len(), 4);
//! # Ok::<(), sqlexpress::CompileError>(())
//! ```
//!
//! ## Pieces
//!
//! | Module       | Role                                              |
//! |--------------|---------------------------------------------------|
//! | `ast`        | Expression and fragment model, builders           |
//! | `params`     | Placeholder allocation and bind parameters        |
//! | `schema`     | Entity catalog, table and alias resolution        |
//! | `transpiler` | Expression and fragment translation               |
//! | `compiler`   | CTE handling and statement assembly               |
//! | `config`     | `sqlexpress.toml` loading                         |

pub mod ast;
pub mod compiler;
pub mod config;
pub mod error;
pub mod params;
pub mod parser;
pub mod schema;
pub mod transpiler;

pub use compiler::{CompiledStatement, Compiler};
pub use error::{CompileError, ConfigError};

pub mod prelude {
    pub use crate::ast::builders::*;
    pub use crate::ast::*;
    pub use crate::compiler::{CompiledStatement, Compiler};
    pub use crate::config::{CompileOptions, Config};
    pub use crate::error::*;
    pub use crate::params::{ParameterDirection, SqlQueryParameter};
    pub use crate::schema::{Catalog, EntityMapping};
}

/// Compile a fragment sequence with an empty catalog and default options.
///
/// # Example
///
/// ```
/// use sqlexpress::ast::builders::*;
///
/// let fragments = Query::new()
///     .select([col("Product", "Name")])
///     .from("Product")
///     .filter(eq(col("Product", "Discontinued"), null()))
///     .into_fragments();
///
/// let stmt = sqlexpress::compile(&fragments).unwrap();
/// assert!(stmt.text.ends_with("WHERE (_t0.[Discontinued] IS NULL)"));
/// assert!(stmt.parameters.is_empty());
/// ```
pub fn compile(fragments: &[ast::Fragment]) -> Result<CompiledStatement, CompileError> {
    compiler::compile(fragments)
}
