//! Fluent fragment-sequence builder.

use crate::ast::{EntityId, Expr, Fragment, JoinKind, ProcedureArgument, SetOperator};
use crate::compiler::{CompiledStatement, Compiler};
use crate::error::CompileResult;

/// An ordered fragment sequence under construction.
///
/// Each method appends one fragment; nothing is validated until compile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    fragments: Vec<Fragment>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a CTE for `entity` whose body is `body`.
    pub fn with_cte(mut self, entity: &str, body: Query) -> Self {
        self.fragments.push(Fragment::Cte {
            entity: EntityId::new(entity),
            body: body.fragments,
        });
        self
    }

    pub fn select(self, columns: impl IntoIterator<Item = Expr>) -> Self {
        self.push_select(false, None, columns)
    }

    pub fn select_distinct(self, columns: impl IntoIterator<Item = Expr>) -> Self {
        self.push_select(true, None, columns)
    }

    /// `SELECT TOP (n) ...`
    pub fn select_top(self, n: impl Into<Expr>, columns: impl IntoIterator<Item = Expr>) -> Self {
        self.push_select(false, Some(n.into()), columns)
    }

    fn push_select(
        mut self,
        distinct: bool,
        top: Option<Expr>,
        columns: impl IntoIterator<Item = Expr>,
    ) -> Self {
        self.fragments.push(Fragment::Select {
            distinct,
            top,
            columns: columns.into_iter().collect(),
        });
        self
    }

    pub fn from(mut self, entity: &str) -> Self {
        self.fragments.push(Fragment::From {
            entity: EntityId::new(entity),
        });
        self
    }

    pub fn join(mut self, kind: JoinKind, entity: &str, on: Expr) -> Self {
        self.fragments.push(Fragment::Join {
            kind,
            entity: EntityId::new(entity),
            on: Some(on),
        });
        self
    }

    pub fn cross_join(mut self, entity: &str) -> Self {
        self.fragments.push(Fragment::Join {
            kind: JoinKind::Cross,
            entity: EntityId::new(entity),
            on: None,
        });
        self
    }

    /// WHERE clause
    pub fn filter(mut self, predicate: Expr) -> Self {
        self.fragments.push(Fragment::Where(predicate));
        self
    }

    pub fn group_by(mut self, columns: impl IntoIterator<Item = Expr>) -> Self {
        self.fragments.push(Fragment::GroupBy(columns.into_iter().collect()));
        self
    }

    pub fn having(mut self, predicate: Expr) -> Self {
        self.fragments.push(Fragment::Having(predicate));
        self
    }

    pub fn order_by(mut self, columns: impl IntoIterator<Item = Expr>) -> Self {
        self.fragments.push(Fragment::OrderBy(columns.into_iter().collect()));
        self
    }

    /// OFFSET / FETCH, see [`offset_fetch`](super::offset_fetch).
    pub fn paginate(mut self, pagination: Expr) -> Self {
        self.fragments.push(Fragment::Paginate(pagination));
        self
    }

    pub fn insert(mut self, entity: &str, columns: impl IntoIterator<Item = Expr>) -> Self {
        self.fragments.push(Fragment::Insert {
            entity: EntityId::new(entity),
            columns: columns.into_iter().collect(),
        });
        self
    }

    pub fn values(mut self, rows: impl IntoIterator<Item = Vec<Expr>>) -> Self {
        self.fragments.push(Fragment::Values(rows.into_iter().collect()));
        self
    }

    pub fn output(mut self, columns: impl IntoIterator<Item = Expr>) -> Self {
        self.fragments.push(Fragment::Output(columns.into_iter().collect()));
        self
    }

    pub fn update(mut self, entity: &str) -> Self {
        self.fragments.push(Fragment::Update {
            entity: EntityId::new(entity),
        });
        self
    }

    /// SET clause; build assignments with [`set`](super::set).
    pub fn set(mut self, assignments: impl IntoIterator<Item = Expr>) -> Self {
        self.fragments.push(Fragment::Set(assignments.into_iter().collect()));
        self
    }

    pub fn delete(mut self, entity: &str) -> Self {
        self.fragments.push(Fragment::Delete {
            entity: EntityId::new(entity),
        });
        self
    }

    /// Stored procedure call.
    pub fn exec(mut self, procedure: &str, arguments: impl IntoIterator<Item = ProcedureArgument>) -> Self {
        self.fragments.push(Fragment::Exec {
            procedure: EntityId::new(procedure),
            arguments: arguments.into_iter().collect(),
        });
        self
    }

    pub fn combine(mut self, op: SetOperator) -> Self {
        self.fragments.push(Fragment::Combine(op));
        self
    }

    pub fn union(self) -> Self {
        self.combine(SetOperator::Union)
    }

    pub fn union_all(self) -> Self {
        self.combine(SetOperator::UnionAll)
    }

    /// End the current batch (`GO`).
    pub fn batch(mut self) -> Self {
        self.fragments.push(Fragment::Batch);
        self
    }

    /// End the current result set (`;`).
    pub fn next_result_set(mut self) -> Self {
        self.fragments.push(Fragment::MultipleResultSets);
        self
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments
    }

    /// Compile with an empty catalog.
    pub fn compile(&self) -> CompileResult<CompiledStatement> {
        crate::compiler::compile(&self.fragments)
    }

    pub fn compile_with(&self, compiler: &Compiler) -> CompileResult<CompiledStatement> {
        compiler.compile(&self.fragments)
    }
}

impl From<Query> for Vec<Fragment> {
    fn from(query: Query) -> Self {
        query.fragments
    }
}
