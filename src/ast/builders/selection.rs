//! Projection helpers, assignments and application locks.

use crate::ast::{Category, Expr, LockMode, LockOwner, Operation, Value, ValueKind};

use super::columns::row;

/// `<alias>.*`
pub fn all(entity: &str) -> Expr {
    Expr::call(Category::Selection, Operation::All, vec![row(entity)])
}

/// `INSERTED.<column>`, or `INSERTED.*` for [`all`].
pub fn inserted(column: Expr) -> Expr {
    Expr::call(Category::Selection, Operation::Inserted, vec![column])
}

/// `DELETED.<column>`, or `DELETED.*` for [`all`].
pub fn deleted(column: Expr) -> Expr {
    Expr::call(Category::Selection, Operation::Deleted, vec![column])
}

/// `column = value` inside an UPDATE ... SET.
pub fn set(column: Expr, value: impl Into<Expr>) -> Expr {
    Expr::call(Category::Assignment, Operation::Set, vec![column, value.into()])
}

/// `APPLOCK_TEST(principal, resource, 'mode', 'owner')`
pub fn applock_test(
    principal: impl Into<Expr>,
    resource: impl Into<Expr>,
    mode: LockMode,
    owner: LockOwner,
) -> Expr {
    Expr::call(
        Category::AppLock,
        Operation::Test,
        vec![
            principal.into(),
            resource.into(),
            Expr::Constant(Value::LockMode(mode)),
            Expr::Constant(Value::LockOwner(owner)),
        ],
    )
    .returning(ValueKind::Int32)
}
