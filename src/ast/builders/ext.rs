//! Extension traits for Expr.

use crate::ast::{Category, Expr, Operation, Value, ValueKind};

/// Fluent instance-style operations on an expression.
pub trait ExprExt {
    /// `(expr LIKE 'value%')`
    fn starts_with(self, value: &str) -> Expr;

    /// `(expr LIKE '%value')`
    fn ends_with(self, value: &str) -> Expr;

    /// `(expr LIKE '%value%')`
    fn contains(self, value: &str) -> Expr;

    /// `LEFT(expr, n)`
    fn substring(self, length: impl Into<Expr>) -> Expr;

    /// `SUBSTRING(expr, start, length)`
    fn substring_len(self, start: impl Into<Expr>, length: impl Into<Expr>) -> Expr;

    fn trim(self) -> Expr;
    fn trim_start(self) -> Expr;
    fn trim_end(self) -> Expr;
    fn to_upper(self) -> Expr;
    fn to_lower(self) -> Expr;

    /// `REPLACE(expr, from, to)`
    fn replace(self, from: impl Into<Expr>, to: impl Into<Expr>) -> Expr;

    /// `CHARINDEX(needle, expr)`
    fn index_of(self, needle: impl Into<Expr>) -> Expr;

    /// `CAST(expr AS <type implied by kind>)`
    fn cast(self, kind: ValueKind) -> Expr;

    /// `CAST(expr AS type)`
    ///
    /// # Example
    /// ```ignore
    /// col("Order", "Total").cast_as(sized(DbType::NVarChar, 20))  // CAST(x AS NVARCHAR(20))
    /// ```
    fn cast_as(self, db_type: impl Into<Expr>) -> Expr;

    /// `CONVERT(<type implied by kind>, expr)`
    fn convert(self, kind: ValueKind) -> Expr;

    /// `CONVERT(type, expr)`
    fn convert_to(self, db_type: impl Into<Expr>) -> Expr;

    /// `CONVERT(type, expr, style)`
    fn convert_style(self, db_type: impl Into<Expr>, style: i64) -> Expr;

    fn compress(self) -> Expr;
    fn decompress(self) -> Expr;
    fn unicode(self) -> Expr;
    fn ascii(self) -> Expr;

    /// `expr COLLATE name`
    fn collate(self, collation: &str) -> Expr;

    /// `expr ASC`
    fn asc(self) -> Expr;

    /// `expr DESC`
    fn desc(self) -> Expr;

    /// `expr AS [column]`
    fn alias_as(self, column: Expr) -> Expr;
}

impl ExprExt for Expr {
    fn starts_with(self, value: &str) -> Expr {
        string_op(Operation::StartsWith, self, vec![value.into()]).returning(ValueKind::Bool)
    }

    fn ends_with(self, value: &str) -> Expr {
        string_op(Operation::EndsWith, self, vec![value.into()]).returning(ValueKind::Bool)
    }

    fn contains(self, value: &str) -> Expr {
        string_op(Operation::Contains, self, vec![value.into()]).returning(ValueKind::Bool)
    }

    fn substring(self, length: impl Into<Expr>) -> Expr {
        string_op(Operation::Substring, self, vec![length.into()])
    }

    fn substring_len(self, start: impl Into<Expr>, length: impl Into<Expr>) -> Expr {
        string_op(Operation::Substring, self, vec![start.into(), length.into()])
    }

    fn trim(self) -> Expr {
        string_op(Operation::Trim, self, vec![])
    }

    fn trim_start(self) -> Expr {
        string_op(Operation::TrimStart, self, vec![])
    }

    fn trim_end(self) -> Expr {
        string_op(Operation::TrimEnd, self, vec![])
    }

    fn to_upper(self) -> Expr {
        string_op(Operation::ToUpper, self, vec![])
    }

    fn to_lower(self) -> Expr {
        string_op(Operation::ToLower, self, vec![])
    }

    fn replace(self, from: impl Into<Expr>, to: impl Into<Expr>) -> Expr {
        string_op(Operation::Replace, self, vec![from.into(), to.into()])
    }

    fn index_of(self, needle: impl Into<Expr>) -> Expr {
        string_op(Operation::IndexOf, self, vec![needle.into()]).returning(ValueKind::Int32)
    }

    fn cast(self, kind: ValueKind) -> Expr {
        Expr::call(Category::Conversion, Operation::Cast, vec![self]).returning(kind)
    }

    fn cast_as(self, db_type: impl Into<Expr>) -> Expr {
        Expr::call(Category::Conversion, Operation::Cast, vec![self, db_type.into()])
    }

    fn convert(self, kind: ValueKind) -> Expr {
        Expr::call(Category::Conversion, Operation::Convert, vec![self]).returning(kind)
    }

    fn convert_to(self, db_type: impl Into<Expr>) -> Expr {
        Expr::call(Category::Conversion, Operation::Convert, vec![self, db_type.into()])
    }

    fn convert_style(self, db_type: impl Into<Expr>, style: i64) -> Expr {
        Expr::call(
            Category::Conversion,
            Operation::Convert,
            vec![self, db_type.into(), Expr::Constant(Value::Int(style))],
        )
    }

    fn compress(self) -> Expr {
        Expr::call(Category::Conversion, Operation::Compress, vec![self])
    }

    fn decompress(self) -> Expr {
        Expr::call(Category::Conversion, Operation::Decompress, vec![self])
    }

    fn unicode(self) -> Expr {
        Expr::call(Category::Conversion, Operation::Unicode, vec![self])
    }

    fn ascii(self) -> Expr {
        Expr::call(Category::Conversion, Operation::Ascii, vec![self])
    }

    fn collate(self, collation: &str) -> Expr {
        Expr::call(Category::Conversion, Operation::Collate, vec![self, collation.into()])
    }

    fn asc(self) -> Expr {
        Expr::call(Category::Definition, Operation::Asc, vec![self])
    }

    fn desc(self) -> Expr {
        Expr::call(Category::Definition, Operation::Desc, vec![self])
    }

    fn alias_as(self, column: Expr) -> Expr {
        Expr::call(Category::Selection, Operation::As, vec![self, column])
    }
}

/// String operation on `target`; declared as returning a string unless
/// the caller overrides it.
fn string_op(operation: Operation, target: Expr, args: Vec<Expr>) -> Expr {
    Expr::method(Category::String, operation, target, args).returning(ValueKind::String)
}

/// `CONCAT(a, b, ...)`
pub fn concat(args: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::call(Category::String, Operation::Concat, args.into_iter().collect())
        .returning(ValueKind::String)
}
