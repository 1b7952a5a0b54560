use crate::ast::{Expr, Operation, Value};
use crate::error::CompileResult;
use crate::transpiler::{Call, Translator};

impl Translator<'_> {
    pub(crate) fn translate_string_call(&mut self, call: &Call<'_>) -> CompileResult<String> {
        match call.operation {
            Operation::StartsWith => self.translate_like(call, "", "%"),
            Operation::EndsWith => self.translate_like(call, "%", ""),
            Operation::Contains => self.translate_like(call, "%", "%"),
            Operation::Substring => {
                let expr = self.translate(call.target()?)?;
                let start = self.translate(call.arg(0)?)?;
                match call.args.get(1) {
                    None => Ok(format!("LEFT({}, {})", expr, start)),
                    Some(length) => {
                        let length = self.translate(length)?;
                        Ok(format!("SUBSTRING({}, {}, {})", expr, start, length))
                    }
                }
            }
            Operation::Trim => self.wrap("TRIM", call.target()?),
            Operation::TrimStart => self.wrap("LTRIM", call.target()?),
            Operation::TrimEnd => {
                let function = if self.options.legacy_trim_end {
                    "LTRIM"
                } else {
                    "RTRIM"
                };
                self.wrap(function, call.target()?)
            }
            Operation::ToUpper => self.wrap("UPPER", call.target()?),
            Operation::ToLower => self.wrap("LOWER", call.target()?),
            Operation::Replace => {
                let expr = self.translate(call.target()?)?;
                let from = self.translate(call.arg(0)?)?;
                let to = self.translate(call.arg(1)?)?;
                Ok(format!("REPLACE({}, {}, {})", expr, from, to))
            }
            Operation::IndexOf => {
                // CHARINDEX takes the needle first
                let needle = self.translate(call.arg(0)?)?;
                let haystack = self.translate(call.target()?)?;
                Ok(format!("CHARINDEX({}, {})", needle, haystack))
            }
            Operation::Concat => {
                let args = self.join(call.args)?;
                Ok(format!("CONCAT({})", args))
            }
            _ => Err(call.unsupported()),
        }
    }

    /// `(<expr> LIKE @pN)` with the wildcards folded into the parameter value.
    fn translate_like(&mut self, call: &Call<'_>, prefix: &str, suffix: &str) -> CompileResult<String> {
        let expr: &Expr = call.target()?;
        let expr = self.translate(expr)?;
        let pattern = call.raw_arg(0)?;
        let name = self
            .params
            .add_literal(Value::String(format!("{}{}{}", prefix, pattern, suffix)))?;
        Ok(format!("({} LIKE {})", expr, name))
    }
}
