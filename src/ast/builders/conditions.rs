//! Comparisons, logic, arithmetic and membership.

use crate::ast::{BinaryOp, Category, Expr, Operation, Value};

/// `(left = right)`, or `(left IS NULL)` when `right` is null
pub fn eq(left: Expr, right: impl Into<Expr>) -> Expr {
    Expr::binary(left, BinaryOp::Equal, right.into())
}

/// `(left <> right)`, or `(left IS NOT NULL)` when `right` is null
pub fn ne(left: Expr, right: impl Into<Expr>) -> Expr {
    Expr::binary(left, BinaryOp::NotEqual, right.into())
}

pub fn lt(left: Expr, right: impl Into<Expr>) -> Expr {
    Expr::binary(left, BinaryOp::LessThan, right.into())
}

pub fn le(left: Expr, right: impl Into<Expr>) -> Expr {
    Expr::binary(left, BinaryOp::LessThanOrEqual, right.into())
}

pub fn gt(left: Expr, right: impl Into<Expr>) -> Expr {
    Expr::binary(left, BinaryOp::GreaterThan, right.into())
}

pub fn ge(left: Expr, right: impl Into<Expr>) -> Expr {
    Expr::binary(left, BinaryOp::GreaterThanOrEqual, right.into())
}

pub fn and(left: Expr, right: Expr) -> Expr {
    Expr::binary(left, BinaryOp::AndAlso, right)
}

pub fn or(left: Expr, right: Expr) -> Expr {
    Expr::binary(left, BinaryOp::OrElse, right)
}

/// Fold predicates with AND; `None` when there are none.
pub fn all_of(predicates: impl IntoIterator<Item = Expr>) -> Option<Expr> {
    predicates.into_iter().reduce(and)
}

pub fn add(left: Expr, right: impl Into<Expr>) -> Expr {
    Expr::binary(left, BinaryOp::Add, right.into())
}

pub fn sub(left: Expr, right: impl Into<Expr>) -> Expr {
    Expr::binary(left, BinaryOp::Subtract, right.into())
}

pub fn modulo(left: Expr, right: impl Into<Expr>) -> Expr {
    Expr::binary(left, BinaryOp::Modulo, right.into())
}

/// `(x IN (@p0, @p1, ...))`
pub fn is_in<V: Into<Value>>(x: Expr, values: impl IntoIterator<Item = V>) -> Expr {
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();
    Expr::binary(x, BinaryOp::In, Expr::Constant(Value::List(values)))
}

pub fn not_in<V: Into<Value>>(x: Expr, values: impl IntoIterator<Item = V>) -> Expr {
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();
    Expr::binary(x, BinaryOp::NotIn, Expr::Constant(Value::List(values)))
}

/// `(x IN (<subquery or list expression>))` through the condition helpers.
pub fn in_expr(x: Expr, list: Expr) -> Expr {
    Expr::call(Category::Condition, Operation::In, vec![x, list])
}

pub fn not_in_expr(x: Expr, list: Expr) -> Expr {
    Expr::call(Category::Condition, Operation::NotIn, vec![x, list])
}

/// `(x IS NULL)`
pub fn is_null(x: Expr) -> Expr {
    Expr::call(Category::Condition, Operation::IsNull, vec![x])
}

/// `(x IS NOT NULL)`
pub fn is_not_null(x: Expr) -> Expr {
    Expr::call(Category::Condition, Operation::IsNotNull, vec![x])
}
