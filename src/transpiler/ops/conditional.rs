//! CASE chains and condition helpers.
//!
//! A searched CASE is a chain of call nodes where each node's target is the
//! previous link:
//!
//! ```text
//! Else(Then(When(Then(When(cond1), v1), cond2), v2), v3)
//! ```
//!
//! A simple CASE starts from `Case(x)` instead of the first `When`.

use crate::ast::{Expr, Operation};
use crate::error::{CompileError, CompileResult};
use crate::transpiler::{Call, Translator};

impl Translator<'_> {
    pub(crate) fn translate_conditional_call(&mut self, call: &Call<'_>) -> CompileResult<String> {
        match call.operation {
            Operation::When => {
                let mut sql = String::new();
                let mut has_case = false;
                if let Some(target) = call.target.filter(|t| t.is_call()) {
                    sql.push_str(&self.translate(target)?);
                    has_case = target.operation() == Some(Operation::Case);
                }
                if !has_case {
                    has_case = count_when(call) > 1;
                }
                sql.push_str(if has_case { " WHEN " } else { "CASE WHEN " });
                for condition in call.args {
                    sql.push_str(&self.translate(condition)?);
                }
                Ok(sql)
            }
            Operation::Then => {
                let mut sql = String::new();
                if let Some(target) = call.target.filter(|t| t.is_call()) {
                    sql.push_str(&self.translate(target)?);
                }
                sql.push_str(" THEN ");
                sql.push_str(&self.translate(call.arg(0)?)?);
                Ok(sql)
            }
            Operation::Else => {
                // Else re-emits its Then link so the chain closes in one place
                let (when, value) = match call.target {
                    Some(Expr::Call {
                        operation: Operation::Then,
                        target,
                        args,
                        ..
                    }) => (target.as_deref(), args.first()),
                    _ => {
                        return Err(CompileError::invalid_args(
                            Operation::Else,
                            "ELSE must follow THEN",
                        ));
                    }
                };
                let value = value.ok_or_else(|| {
                    CompileError::invalid_args(Operation::Then, "missing result value")
                })?;

                let mut sql = String::new();
                if let Some(when) = when {
                    sql.push_str(&self.translate(when)?);
                }
                sql.push_str(" THEN ");
                sql.push_str(&self.translate(value)?);
                sql.push_str(" ELSE ");
                sql.push_str(&self.translate(call.arg(0)?)?);
                sql.push_str(" END");
                Ok(sql)
            }
            _ => Err(call.unsupported()),
        }
    }

    pub(crate) fn translate_condition_call(&mut self, call: &Call<'_>) -> CompileResult<String> {
        match call.operation {
            Operation::IsNull => Ok(format!("({} IS NULL)", self.translate(call.arg(0)?)?)),
            Operation::IsNotNull => Ok(format!("({} IS NOT NULL)", self.translate(call.arg(0)?)?)),
            Operation::In | Operation::NotIn => {
                let expr = self.translate(call.arg(0)?)?;
                let list = self.translate(call.arg(1)?)?;
                let op = if call.operation == Operation::In {
                    "IN"
                } else {
                    "NOT IN"
                };
                Ok(format!("({} {} ({}))", expr, op, list))
            }
            Operation::Case => Ok(format!("CASE {}", self.translate(call.arg(0)?)?)),
            _ => Err(call.unsupported()),
        }
    }
}

/// Number of `When` links in the chain ending at `call`, itself included.
fn count_when(call: &Call<'_>) -> usize {
    let mut count = 1;
    let mut current = call.target;
    while let Some(Expr::Call {
        operation, target, ..
    }) = current
    {
        if *operation == Operation::When {
            count += 1;
        }
        current = target.as_deref();
    }
    count
}
