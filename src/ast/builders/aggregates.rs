//! Aggregate function builders (COUNT, SUM, MIN, MAX, etc.)

use crate::ast::{Category, Expr, Operation, ValueKind};

fn aggregate(operation: Operation, args: Vec<Expr>) -> Expr {
    Expr::call(Category::Aggregate, operation, args)
}

pub fn sum(x: Expr) -> Expr {
    aggregate(Operation::Sum, vec![x])
}

pub fn sign(x: Expr) -> Expr {
    aggregate(Operation::Sign, vec![x])
}

pub fn max(x: Expr) -> Expr {
    aggregate(Operation::Max, vec![x])
}

pub fn min(x: Expr) -> Expr {
    aggregate(Operation::Min, vec![x])
}

pub fn len(x: Expr) -> Expr {
    aggregate(Operation::Len, vec![x]).returning(ValueKind::Int32)
}

/// `COUNT(x)`; rejected for string, binary and entity operands.
pub fn count(x: Expr) -> Expr {
    aggregate(Operation::Count, vec![x]).returning(ValueKind::Int32)
}

/// `COUNT(DISTINCT x)`
pub fn count_distinct(x: Expr) -> Expr {
    aggregate(Operation::CountDistinct, vec![x]).returning(ValueKind::Int32)
}

/// `COUNT(*)`
pub fn count_all() -> Expr {
    Expr::call(Category::Counting, Operation::CountAll, vec![]).returning(ValueKind::Int32)
}

/// `LEFT(x, n)`
pub fn left(x: Expr, length: impl Into<Expr>) -> Expr {
    aggregate(Operation::Left, vec![x, length.into()]).returning(ValueKind::String)
}

/// `RIGHT(x, n)`
pub fn right(x: Expr, length: impl Into<Expr>) -> Expr {
    aggregate(Operation::Right, vec![x, length.into()]).returning(ValueKind::String)
}
