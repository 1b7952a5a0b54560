//! Operation tables, one module per category family.
//!
//! Operations outside a category's table fail with
//! `CompileError::UnsupportedOperation`.

mod aggregate;
mod conditional;
mod conversion;
mod dates;
mod pagination;
mod selection;
mod strings;
