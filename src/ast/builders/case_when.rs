//! CASE WHEN expression builders.
//!
//! The builders only allow the shapes the translator expects: a `Then`
//! always follows a `When`, and the chain is closed by `otherwise`.

use crate::ast::{Category, Expr, Operation};

/// Start a searched CASE: `CASE WHEN condition ...`
pub fn case_when(condition: Expr) -> WhenBuilder {
    WhenBuilder {
        chain: Expr::call(Category::Conditional, Operation::When, vec![condition]),
    }
}

/// Start a simple CASE: `CASE x WHEN ...`
pub fn case(operand: Expr) -> CaseBuilder {
    CaseBuilder {
        chain: Expr::call(Category::Condition, Operation::Case, vec![operand]),
    }
}

/// A chain waiting for its THEN value.
#[derive(Debug, Clone)]
pub struct WhenBuilder {
    chain: Expr,
}

impl WhenBuilder {
    pub fn then(self, value: impl Into<Expr>) -> CaseBuilder {
        CaseBuilder {
            chain: Expr::method(Category::Conditional, Operation::Then, self.chain, vec![value.into()]),
        }
    }
}

/// A chain that can take another WHEN or be closed with ELSE.
#[derive(Debug, Clone)]
pub struct CaseBuilder {
    chain: Expr,
}

impl CaseBuilder {
    /// Add another WHEN clause (a value for simple CASE, a condition otherwise)
    pub fn when(self, condition: impl Into<Expr>) -> WhenBuilder {
        WhenBuilder {
            chain: Expr::method(
                Category::Conditional,
                Operation::When,
                self.chain,
                vec![condition.into()],
            ),
        }
    }

    /// Add the ELSE clause and close the chain with END.
    pub fn otherwise(self, value: impl Into<Expr>) -> Expr {
        Expr::method(Category::Conditional, Operation::Else, self.chain, vec![value.into()])
    }
}
