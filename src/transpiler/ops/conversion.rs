use crate::ast::Operation;
use crate::error::{CompileError, CompileResult};
use crate::transpiler::{Call, Translator};

impl Translator<'_> {
    pub(crate) fn translate_conversion_call(&mut self, call: &Call<'_>) -> CompileResult<String> {
        match call.operation {
            Operation::Compress => self.wrap("COMPRESS", call.arg(0)?),
            Operation::Decompress => self.wrap("DECOMPRESS", call.arg(0)?),
            Operation::Unicode => self.wrap("UNICODE", call.arg(0)?),
            Operation::Ascii => self.wrap("ASCII", call.arg(0)?),
            Operation::Cast => {
                let expr = self.translate(call.arg(0)?)?;
                let db_type = match call.args.get(1) {
                    Some(db_type) => self.translate(db_type)?,
                    None => implicit_db_type(call)?,
                };
                Ok(format!("CAST({} AS {})", expr, db_type))
            }
            Operation::Convert => match call.args.len() {
                3 => {
                    let db_type = self.translate(call.arg(1)?)?;
                    let expr = self.translate(call.arg(0)?)?;
                    let style = call.raw_arg(2)?;
                    Ok(format!("CONVERT({}, {}, {})", db_type, expr, style))
                }
                2 => {
                    let db_type = self.translate(call.arg(1)?)?;
                    let expr = self.translate(call.arg(0)?)?;
                    Ok(format!("CONVERT({}, {})", db_type, expr))
                }
                1 => {
                    let db_type = implicit_db_type(call)?;
                    let expr = self.translate(call.arg(0)?)?;
                    Ok(format!("CONVERT({}, {})", db_type, expr))
                }
                n => Err(CompileError::invalid_args(
                    call.operation,
                    format!("expected 1 to 3 arguments, got {}", n),
                )),
            },
            Operation::Collate => {
                let expr = self.translate(call.arg(0)?)?;
                let collation = call.raw_arg(1)?;
                Ok(format!("{} COLLATE {}", expr, collation))
            }
            _ => Err(call.unsupported()),
        }
    }

    pub(crate) fn translate_definition_call(&mut self, call: &Call<'_>) -> CompileResult<String> {
        match call.operation {
            Operation::Max => Ok(format!("{}(MAX)", self.translate(call.arg(0)?)?)),
            Operation::Size => {
                let db_type = self.translate(call.arg(0)?)?;
                let size = call.raw_arg(1)?;
                Ok(format!("{}({})", db_type, size))
            }
            Operation::Asc => Ok(format!("{} ASC", self.translate(call.arg(0)?)?)),
            Operation::Desc => Ok(format!("{} DESC", self.translate(call.arg(0)?)?)),
            _ => Err(call.unsupported()),
        }
    }
}

/// Database type implied by the call's declared return type.
fn implicit_db_type(call: &Call<'_>) -> CompileResult<String> {
    call.returns
        .and_then(|kind| kind.db_type())
        .map(|db_type| db_type.keyword().to_string())
        .ok_or_else(|| {
            CompileError::UnsupportedImplicitConversion(
                call.returns
                    .map(|kind| kind.to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
            )
        })
}
