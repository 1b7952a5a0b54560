pub mod builders;
pub mod expr;
pub mod fragment;
pub mod ident;
pub mod operators;
pub mod values;

pub use self::expr::Expr;
pub use self::fragment::{Fragment, FragmentKind, JoinKind, ProcedureArgument, SetOperator};
pub use self::ident::{EntityId, MemberId};
pub use self::operators::{BinaryOp, Category, Operation};
pub use self::values::{DbType, LockMode, LockOwner, Value, ValueKind};
