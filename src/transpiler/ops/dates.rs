use crate::ast::{Expr, MemberId, Operation};
use crate::error::{CompileError, CompileResult};
use crate::transpiler::{Call, Translator};

impl Translator<'_> {
    pub(crate) fn translate_date_call(&mut self, call: &Call<'_>) -> CompileResult<String> {
        let unit = match call.operation {
            Operation::AddYears => "YEAR",
            Operation::AddMonths => "MONTH",
            Operation::AddDays => "DAY",
            Operation::AddHours => "HOUR",
            Operation::AddMinutes => "MINUTE",
            // Subtract only appears under a DATEDIFF member access
            _ => return Err(call.unsupported()),
        };
        let amount = self.translate(call.arg(0)?)?;
        let expr = self.translate(call.target()?)?;
        Ok(format!("DATEADD({}, {}, {})", unit, amount, expr))
    }

    /// `DATEDIFF(<part>, <start>, <end>)` for `(end - start).<Member>`.
    pub(crate) fn translate_date_diff(
        &mut self,
        end: &Expr,
        args: &[Expr],
        member: &MemberId,
    ) -> CompileResult<String> {
        let start = args
            .first()
            .ok_or_else(|| CompileError::invalid_args(Operation::Subtract, "missing start date"))?;
        let part = date_part(member.as_str());
        let start = self.translate(start)?;
        let end = self.translate(end)?;
        Ok(format!("DATEDIFF({}, {}, {})", part, start, end))
    }
}

/// `TotalDays` -> `DAY`, `Minutes` -> `MINUTE`.
fn date_part(member: &str) -> String {
    let upper = member.to_uppercase();
    let upper = upper.strip_prefix("TOTAL").unwrap_or(&upper);
    upper.strip_suffix('S').unwrap_or(upper).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("TotalDays"), "DAY");
        assert_eq!(date_part("TotalMilliseconds"), "MILLISECOND");
        assert_eq!(date_part("Hours"), "HOUR");
        assert_eq!(date_part("Minute"), "MINUTE");
    }
}
