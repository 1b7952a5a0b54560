//! Window and pagination builders.
//!
//! # Example
//! ```ignore
//! over(row_number(), order_by_then(partition_by([col("Order", "CustomerId")]), [col("Order", "OrderDate")]))
//! // ROW_NUMBER() OVER(PARTITION BY _t0.[CustomerId] ORDER BY _t0.[OrderDate])
//! ```

use crate::ast::{Category, Expr, Operation, ValueKind};

/// `ROW_NUMBER()`
pub fn row_number() -> Expr {
    Expr::call(Category::RowNumbering, Operation::RowNumber, vec![]).returning(ValueKind::Int64)
}

/// `<function> OVER(<window>)`
pub fn over(function: Expr, window: Expr) -> Expr {
    let category = match function.operation() {
        Some(Operation::RowNumber) => Category::RowNumbering,
        _ => Category::Pagination,
    };
    Expr::method(category, Operation::Over, function, vec![window])
}

/// `PARTITION BY a, b`
pub fn partition_by(columns: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::call(Category::Pagination, Operation::PartitionBy, columns.into_iter().collect())
}

/// `ORDER BY a, b`
pub fn order_by(columns: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::call(Category::Pagination, Operation::OrderBy, columns.into_iter().collect())
}

/// `<window> ORDER BY a, b`, typically after [`partition_by`].
pub fn order_by_then(window: Expr, columns: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::method(
        Category::Pagination,
        Operation::OrderBy,
        window,
        columns.into_iter().collect(),
    )
}

/// `OFFSET n ROWS`
pub fn offset(rows: impl Into<Expr>) -> Expr {
    Expr::call(Category::Pagination, Operation::Offset, vec![rows.into()])
}

/// `OFFSET n ROWS FETCH NEXT m ROWS ONLY`
pub fn offset_fetch(skip: impl Into<Expr>, take: impl Into<Expr>) -> Expr {
    Expr::method(Category::Pagination, Operation::Fetch, offset(skip), vec![take.into()])
}

/// `FETCH FIRST n ROWS ONLY`
pub fn fetch_first(rows: impl Into<Expr>) -> Expr {
    Expr::call(Category::Pagination, Operation::Fetch, vec![rows.into()])
}
