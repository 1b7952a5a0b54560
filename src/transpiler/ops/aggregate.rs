//! Aggregates, assignment, row counting and application locks.

use crate::ast::Operation;
use crate::error::{CompileError, CompileResult};
use crate::transpiler::{Call, Translator};

impl Translator<'_> {
    pub(crate) fn translate_aggregate_call(&mut self, call: &Call<'_>) -> CompileResult<String> {
        match call.operation {
            Operation::Sum => self.wrap("SUM", call.arg(0)?),
            Operation::Sign => self.wrap("SIGN", call.arg(0)?),
            Operation::Max => self.wrap("MAX", call.arg(0)?),
            Operation::Min => self.wrap("MIN", call.arg(0)?),
            Operation::Len => self.wrap("LEN", call.arg(0)?),
            Operation::Count | Operation::CountDistinct => {
                let operand = call.arg(0)?;
                if operand.kind().is_some_and(|kind| kind.is_structured()) {
                    return Err(call.unsupported());
                }
                let operand = self.translate(operand)?;
                if call.operation == Operation::Count {
                    Ok(format!("COUNT({})", operand))
                } else {
                    Ok(format!("COUNT(DISTINCT {})", operand))
                }
            }
            Operation::Left | Operation::Right => {
                let function = if call.operation == Operation::Left {
                    "LEFT"
                } else {
                    "RIGHT"
                };
                let expr = self.translate(call.arg(0)?)?;
                let length = self.translate(call.arg(1)?)?;
                Ok(format!("{}({}, {})", function, expr, length))
            }
            _ => Err(call.unsupported()),
        }
    }

    pub(crate) fn translate_assignment_call(&mut self, call: &Call<'_>) -> CompileResult<String> {
        match call.operation {
            Operation::Set => {
                let column = self.translate(call.arg(0)?)?;
                let value = self.translate(call.arg(1)?)?;
                Ok(format!("{} = {}", column, value))
            }
            _ => Err(call.unsupported()),
        }
    }

    pub(crate) fn translate_counting_call(&mut self, call: &Call<'_>) -> CompileResult<String> {
        match call.operation {
            Operation::CountAll => Ok("COUNT(*)".to_string()),
            _ => Err(call.unsupported()),
        }
    }

    pub(crate) fn translate_applock_call(&mut self, call: &Call<'_>) -> CompileResult<String> {
        match call.operation {
            Operation::Test => {
                if call.args.len() != 4 {
                    return Err(CompileError::invalid_args(
                        call.operation,
                        format!("expected 4 arguments, got {}", call.args.len()),
                    ));
                }
                Ok(format!("APPLOCK_TEST({})", self.join(call.args)?))
            }
            _ => Err(call.unsupported()),
        }
    }
}
