//! Builder functions for expression trees and fragment sequences.
//!
//! Captured values are turned into `Constant` nodes when the tree is built,
//! so the compiler never has to evaluate host objects.
//!
//! # Modules
//!
//! - `columns` - Row variables, columns, table references
//! - `literals` - Constants and list literals
//! - `conditions` - Comparisons, logic, arithmetic, IN lists
//! - `ext` - Fluent methods on [`Expr`](crate::ast::Expr)
//! - `time` - Date arithmetic and DATEDIFF
//! - `case_when` - Searched and simple CASE chains
//! - `cast` - Type definitions for CAST / CONVERT
//! - `aggregates` - SUM, COUNT, MIN, MAX and friends
//! - `window` - ROW_NUMBER, OVER, OFFSET / FETCH
//! - `selection` - `alias.*`, OUTPUT columns, SET assignments, app locks
//! - `query` - The [`Query`] fragment builder
//!
//! # Example
//! ```
//! use sqlexpress::ast::builders::*;
//!
//! let stmt = Query::new()
//!     .select([col("Product", "Name"), col("Product", "Price")])
//!     .from("Product")
//!     .filter(col("Product", "Name").starts_with("Chai"))
//!     .compile()
//!     .unwrap();
//!
//! assert_eq!(
//!     stmt.text,
//!     "SELECT _t0.[Name], _t0.[Price]\nFROM [Product] AS _t0\nWHERE (_t0.[Name] LIKE @p0)"
//! );
//! ```

pub mod aggregates;
pub mod case_when;
pub mod cast;
pub mod columns;
pub mod conditions;
pub mod ext;
pub mod literals;
pub mod query;
pub mod selection;
pub mod time;
pub mod window;

pub use aggregates::*;
pub use case_when::*;
pub use cast::*;
pub use columns::*;
pub use conditions::*;
pub use ext::*;
pub use literals::*;
pub use query::*;
pub use selection::*;
pub use time::*;
pub use window::*;
