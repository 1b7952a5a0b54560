//! Row variables, column references and table references.

use crate::ast::{EntityId, Expr, MemberId, Value};

/// The row variable bound to `entity`.
pub fn row(entity: &str) -> Expr {
    Expr::Parameter(EntityId::new(entity))
}

/// Column `member` of the row bound to `entity`.
///
/// # Example
/// ```ignore
/// col("Order", "ShippedDate")  // _t0.[ShippedDate]
/// ```
pub fn col(entity: &str, member: &str) -> Expr {
    Expr::MemberAccess {
        target: Some(Box::new(row(entity))),
        owner: EntityId::new(entity),
        member: MemberId::new(member),
    }
}

/// The entity type used as a table reference (renders as its alias).
pub fn table(entity: &str) -> Expr {
    Expr::Constant(Value::Table(EntityId::new(entity)))
}

/// Static member evaluated at compile time from the catalog.
///
/// # Example
/// ```ignore
/// static_member("String", "Empty")  // @p0 = ''
/// ```
pub fn static_member(owner: &str, member: &str) -> Expr {
    Expr::MemberAccess {
        target: None,
        owner: EntityId::new(owner),
        member: MemberId::new(member),
    }
}
