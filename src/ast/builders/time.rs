//! Date arithmetic builders (DATEADD, DATEDIFF)

use crate::ast::{Category, EntityId, Expr, MemberId, Operation, ValueKind};

fn date_add(operation: Operation, date: Expr, amount: impl Into<Expr>) -> Expr {
    Expr::method(Category::Date, operation, date, vec![amount.into()]).returning(ValueKind::DateTime)
}

/// `DATEADD(YEAR, n, date)`
pub fn add_years(date: Expr, years: impl Into<Expr>) -> Expr {
    date_add(Operation::AddYears, date, years)
}

pub fn add_months(date: Expr, months: impl Into<Expr>) -> Expr {
    date_add(Operation::AddMonths, date, months)
}

pub fn add_days(date: Expr, days: impl Into<Expr>) -> Expr {
    date_add(Operation::AddDays, date, days)
}

pub fn add_hours(date: Expr, hours: impl Into<Expr>) -> Expr {
    date_add(Operation::AddHours, date, hours)
}

pub fn add_minutes(date: Expr, minutes: impl Into<Expr>) -> Expr {
    date_add(Operation::AddMinutes, date, minutes)
}

/// Units accepted by [`date_diff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
}

impl DatePart {
    /// Duration member the part is read from.
    fn member(self) -> &'static str {
        match self {
            DatePart::Days => "TotalDays",
            DatePart::Hours => "TotalHours",
            DatePart::Minutes => "TotalMinutes",
            DatePart::Seconds => "TotalSeconds",
            DatePart::Milliseconds => "TotalMilliseconds",
        }
    }
}

/// `DATEDIFF(<part>, start, end)`
///
/// Built as a member read on the date subtraction `end - start`.
///
/// # Example
/// ```ignore
/// date_diff(DatePart::Days, col("Order", "OrderDate"), col("Order", "ShippedDate"))
/// // DATEDIFF(DAY, _t0.[OrderDate], _t0.[ShippedDate])
/// ```
pub fn date_diff(part: DatePart, start: Expr, end: Expr) -> Expr {
    let span = Expr::method(Category::Date, Operation::Subtract, end, vec![start])
        .returning(ValueKind::Duration);
    Expr::MemberAccess {
        target: Some(Box::new(span)),
        owner: EntityId::new("TimeSpan"),
        member: MemberId::new(part.member()),
    }
}
