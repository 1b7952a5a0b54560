use serde::{Deserialize, Serialize};

use crate::ast::{EntityId, Expr, Value};
use crate::params::ParameterDirection;

/// A clause-level unit of a statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fragment {
    /// Common table expression declared for `entity`
    Cte { entity: EntityId, body: Vec<Fragment> },
    Select {
        #[serde(default)]
        distinct: bool,
        #[serde(default)]
        top: Option<Expr>,
        columns: Vec<Expr>,
    },
    From { entity: EntityId },
    Join {
        kind: JoinKind,
        entity: EntityId,
        #[serde(default)]
        on: Option<Expr>,
    },
    Where(Expr),
    GroupBy(Vec<Expr>),
    Having(Expr),
    OrderBy(Vec<Expr>),
    /// OFFSET / FETCH expression
    Paginate(Expr),
    Insert { entity: EntityId, columns: Vec<Expr> },
    Values(Vec<Vec<Expr>>),
    Output(Vec<Expr>),
    Update { entity: EntityId },
    Set(Vec<Expr>),
    Delete { entity: EntityId },
    /// Stored procedure call
    Exec {
        procedure: EntityId,
        #[serde(default)]
        arguments: Vec<ProcedureArgument>,
    },
    /// Set operator between two queries
    Combine(SetOperator),
    /// Batch separator (GO)
    Batch,
    /// Result set terminator
    MultipleResultSets,
}

impl Fragment {
    pub fn kind(&self) -> FragmentKind {
        match self {
            Fragment::Cte { .. } => FragmentKind::CteDeclaration,
            Fragment::Select { .. } => FragmentKind::Select,
            Fragment::From { .. } => FragmentKind::From,
            Fragment::Join { .. } => FragmentKind::Join,
            Fragment::Where(_) => FragmentKind::Where,
            Fragment::GroupBy(_) => FragmentKind::GroupBy,
            Fragment::Having(_) => FragmentKind::Having,
            Fragment::OrderBy(_) => FragmentKind::OrderBy,
            Fragment::Paginate(_) => FragmentKind::Pagination,
            Fragment::Insert { .. } => FragmentKind::Insert,
            Fragment::Values(_) => FragmentKind::Values,
            Fragment::Output(_) => FragmentKind::Output,
            Fragment::Update { .. } => FragmentKind::Update,
            Fragment::Set(_) => FragmentKind::Set,
            Fragment::Delete { .. } => FragmentKind::Delete,
            Fragment::Exec { .. } => FragmentKind::Exec,
            Fragment::Combine(_) => FragmentKind::Combine,
            Fragment::Batch => FragmentKind::Batch,
            Fragment::MultipleResultSets => FragmentKind::MultipleResultSets,
        }
    }

    /// Batch and result-set fragments carry their own terminators.
    pub fn is_terminator(&self) -> bool {
        matches!(self, Fragment::Batch | Fragment::MultipleResultSets)
    }
}

/// Tag of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FragmentKind {
    CteDeclaration,
    Select,
    From,
    Join,
    Where,
    GroupBy,
    Having,
    OrderBy,
    Pagination,
    Insert,
    Values,
    Output,
    Update,
    Set,
    Delete,
    Exec,
    Combine,
    Batch,
    MultipleResultSets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl std::fmt::Display for JoinKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinKind::Inner => write!(f, "INNER JOIN"),
            JoinKind::Left => write!(f, "LEFT JOIN"),
            JoinKind::Right => write!(f, "RIGHT JOIN"),
            JoinKind::Full => write!(f, "FULL JOIN"),
            JoinKind::Cross => write!(f, "CROSS JOIN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetOperator {
    Union,
    UnionAll,
    Intersect,
    Except,
}

impl std::fmt::Display for SetOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetOperator::Union => write!(f, "UNION"),
            SetOperator::UnionAll => write!(f, "UNION ALL"),
            SetOperator::Intersect => write!(f, "INTERSECT"),
            SetOperator::Except => write!(f, "EXCEPT"),
        }
    }
}

/// Argument of a stored procedure call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureArgument {
    pub name: String,
    pub value: Value,
    #[serde(default)]
    pub direction: ParameterDirection,
}

impl ProcedureArgument {
    pub fn input(name: &str, value: impl Into<Value>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            direction: ParameterDirection::In,
        }
    }

    pub fn output(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: Value::Null,
            direction: ParameterDirection::Out,
        }
    }

    pub fn input_output(name: &str, value: impl Into<Value>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            direction: ParameterDirection::InOut,
        }
    }
}
