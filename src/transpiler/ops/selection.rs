use crate::ast::{EntityId, Expr, Operation, Value};
use crate::error::{CompileError, CompileResult};
use crate::transpiler::{Call, Translator};

impl Translator<'_> {
    pub(crate) fn translate_selection_call(&mut self, call: &Call<'_>) -> CompileResult<String> {
        match call.operation {
            Operation::All => {
                let entity = row_entity(call.arg(0)?, call.operation)?;
                Ok(format!("{}.*", self.tables.resolve_alias(entity)?))
            }
            Operation::As => {
                let expr = self.translate(call.arg(0)?)?;
                let column = self.column_name(call.arg(1)?, call.operation)?;
                Ok(format!("{} AS {}", expr, column))
            }
            Operation::Inserted | Operation::Deleted => {
                let prefix = if call.operation == Operation::Inserted {
                    "INSERTED"
                } else {
                    "DELETED"
                };
                match call.arg(0)? {
                    Expr::Call {
                        operation: Operation::All,
                        ..
                    } => Ok(format!("{}.*", prefix)),
                    column @ Expr::MemberAccess { .. } => {
                        Ok(format!("{}.{}", prefix, self.column_name(column, call.operation)?))
                    }
                    _ => Err(call.unsupported()),
                }
            }
            _ => Err(call.unsupported()),
        }
    }

    /// Bare quoted column name of a member access.
    pub(crate) fn column_name(&mut self, expr: &Expr, operation: Operation) -> CompileResult<String> {
        match expr {
            Expr::MemberAccess { owner, member, .. } => Ok(self.tables.resolve_column(owner, member)),
            _ => Err(CompileError::invalid_args(operation, "expected a column")),
        }
    }
}

fn row_entity(expr: &Expr, operation: Operation) -> CompileResult<&EntityId> {
    match expr {
        Expr::Parameter(entity) | Expr::Constant(Value::Table(entity)) => Ok(entity),
        _ => Err(CompileError::invalid_args(operation, "expected a row or table")),
    }
}
