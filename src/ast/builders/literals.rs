//! Literal values.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::ast::{DbType, Expr, Value};

/// Constant bound as a parameter
pub fn lit(value: impl Into<Value>) -> Expr {
    Expr::Constant(value.into())
}

pub fn null() -> Expr {
    Expr::Constant(Value::Null)
}

/// Constant list, expanded to one parameter per element.
pub fn list<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Expr {
    Expr::Constant(Value::List(values.into_iter().map(Into::into).collect()))
}

/// Database type name, rendered inline.
pub fn db_type(db_type: DbType) -> Expr {
    Expr::Constant(Value::DbType(db_type))
}

/// Array initializer: a constant list when every element is constant,
/// otherwise a comma-joined expression list.
pub fn array(elements: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::ArrayInit(elements.into_iter().collect())
}

/// List initializer; elements must be constants.
pub fn list_init(elements: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::ListInit(elements.into_iter().collect())
}

impl From<bool> for Expr {
    fn from(b: bool) -> Self {
        lit(b)
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        lit(n)
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        lit(n)
    }
}

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        lit(n)
    }
}

impl From<&str> for Expr {
    fn from(s: &str) -> Self {
        lit(s)
    }
}

impl From<String> for Expr {
    fn from(s: String) -> Self {
        lit(s)
    }
}

impl From<NaiveDateTime> for Expr {
    fn from(dt: NaiveDateTime) -> Self {
        lit(dt)
    }
}

impl From<Uuid> for Expr {
    fn from(u: Uuid) -> Self {
        lit(u)
    }
}

impl From<DbType> for Expr {
    fn from(t: DbType) -> Self {
        db_type(t)
    }
}
