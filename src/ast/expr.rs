use serde::{Deserialize, Serialize};

use crate::ast::{BinaryOp, Category, EntityId, MemberId, Operation, Value, ValueKind};

/// An expression node.
///
/// Trees are immutable once built and borrowed by the compiler for the
/// duration of one compile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A constant value
    Constant(Value),
    /// The row variable bound to an entity in the enclosing query
    Parameter(EntityId),
    /// Member access (column, captured value, static member, DATEDIFF part)
    MemberAccess {
        target: Option<Box<Expr>>,
        owner: EntityId,
        member: MemberId,
    },
    /// Binary expression (left op right)
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Operation call dispatched by category
    Call {
        category: Category,
        operation: Operation,
        /// Object the operation is invoked on (instance-style operations)
        target: Option<Box<Expr>>,
        args: Vec<Expr>,
        /// Declared return type, used for implicit conversions
        returns: Option<ValueKind>,
    },
    /// List initializer; elements must be constants
    ListInit(Vec<Expr>),
    /// Array initializer
    ArrayInit(Vec<Expr>),
}

impl Expr {
    /// Build a call node with no receiver and no declared return type.
    pub fn call(category: Category, operation: Operation, args: Vec<Expr>) -> Self {
        Expr::Call {
            category,
            operation,
            target: None,
            args,
            returns: None,
        }
    }

    /// Build a call node invoked on `target`.
    pub fn method(category: Category, operation: Operation, target: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            category,
            operation,
            target: Some(Box::new(target)),
            args,
            returns: None,
        }
    }

    /// Set the declared return type of a call node.
    pub fn returning(self, kind: ValueKind) -> Self {
        match self {
            Expr::Call {
                category,
                operation,
                target,
                args,
                ..
            } => Expr::Call {
                category,
                operation,
                target,
                args,
                returns: Some(kind),
            },
            other => other,
        }
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_null_constant(&self) -> bool {
        matches!(self, Expr::Constant(v) if v.is_null())
    }

    pub fn is_call(&self) -> bool {
        matches!(self, Expr::Call { .. })
    }

    /// Operation of a call node.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Expr::Call { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Best-effort declared kind of this expression.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Expr::Constant(v) => v.kind(),
            Expr::Parameter(_) => Some(ValueKind::Entity),
            Expr::Call { returns, .. } => *returns,
            _ => None,
        }
    }
}

impl From<Value> for Expr {
    fn from(v: Value) -> Self {
        Expr::Constant(v)
    }
}
