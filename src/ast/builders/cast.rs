//! Type definitions used by CAST and CONVERT.

use crate::ast::{Category, DbType, Expr, Operation, Value};

/// `TYPE(MAX)`
pub fn max_size(db_type: DbType) -> Expr {
    Expr::call(Category::Definition, Operation::Max, vec![db_type.into()])
}

/// `TYPE(n)`
pub fn sized(db_type: DbType, size: u32) -> Expr {
    Expr::call(
        Category::Definition,
        Operation::Size,
        vec![db_type.into(), Expr::Constant(Value::Int(size as i64))],
    )
}
