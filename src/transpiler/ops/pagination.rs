use crate::ast::Operation;
use crate::error::CompileResult;
use crate::transpiler::{Call, Translator};

impl Translator<'_> {
    pub(crate) fn translate_pagination_call(&mut self, call: &Call<'_>) -> CompileResult<String> {
        match call.operation {
            Operation::Offset => {
                let prefix = self.prefix(call, " ")?;
                let rows = self.translate(call.arg(0)?)?;
                Ok(format!("{}OFFSET {} ROWS", prefix, rows))
            }
            Operation::Fetch => match call.target.filter(|t| t.is_call()) {
                Some(offset) => {
                    let offset = self.translate(offset)?;
                    let rows = self.translate(call.arg(0)?)?;
                    Ok(format!("{} FETCH NEXT {} ROWS ONLY", offset, rows))
                }
                None => {
                    let rows = self.translate(call.arg(0)?)?;
                    Ok(format!("FETCH FIRST {} ROWS ONLY", rows))
                }
            },
            Operation::PartitionBy => {
                let prefix = self.prefix(call, "")?;
                let columns = self.join(call.args)?;
                Ok(format!("{}PARTITION BY {} ", prefix, columns))
            }
            Operation::OrderBy => {
                let prefix = self.prefix(call, "")?;
                let columns = self.join(call.args)?;
                Ok(format!("{}ORDER BY {}", prefix, columns))
            }
            Operation::Over => self.translate_over(call),
            _ => Err(call.unsupported()),
        }
    }

    pub(crate) fn translate_row_number_call(&mut self, call: &Call<'_>) -> CompileResult<String> {
        match call.operation {
            Operation::RowNumber => Ok("ROW_NUMBER()".to_string()),
            Operation::Over => self.translate_over(call),
            _ => Err(call.unsupported()),
        }
    }

    /// `<function> OVER(<window>)`
    fn translate_over(&mut self, call: &Call<'_>) -> CompileResult<String> {
        let function = self.translate(call.target()?)?;
        let window = self.translate(call.arg(0)?)?;
        Ok(format!("{} OVER({})", function, window.trim_end()))
    }

    /// Translated target followed by `separator`, or nothing.
    fn prefix(&mut self, call: &Call<'_>, separator: &str) -> CompileResult<String> {
        match call.target {
            Some(target) => Ok(format!("{}{}", self.translate(target)?, separator)),
            None => Ok(String::new()),
        }
    }
}
