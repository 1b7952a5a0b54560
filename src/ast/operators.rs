use serde::{Deserialize, Serialize};

/// Binary operators of the host expression vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition (+)
    Add,
    /// Compound addition (+=)
    AddAssign,
    /// Subtraction (-)
    Subtract,
    /// Compound subtraction (-=)
    SubtractAssign,
    /// Logical AND
    And,
    /// Short-circuit AND
    AndAlso,
    /// Logical OR
    Or,
    /// Short-circuit OR
    OrElse,
    /// Equality (= or IS)
    Equal,
    /// Inequality (<> or IS NOT)
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    /// Modulo (%)
    Modulo,
    /// Membership (IN)
    In,
    /// Negated membership (NOT IN)
    NotIn,
    Multiply,
    Divide,
    Power,
    Coalesce,
    ExclusiveOr,
    LeftShift,
    RightShift,
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Operation category, set when the call node is built.
///
/// The translator dispatches on this tag, so two operations with the same
/// name (e.g. `Max` as a type definition and as an aggregate) never clash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    String,
    Date,
    Conditional,
    Condition,
    Selection,
    Conversion,
    Definition,
    Pagination,
    Aggregate,
    Assignment,
    Counting,
    RowNumbering,
    AppLock,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::String,
        Category::Date,
        Category::Conditional,
        Category::Condition,
        Category::Selection,
        Category::Conversion,
        Category::Definition,
        Category::Pagination,
        Category::Aggregate,
        Category::Assignment,
        Category::Counting,
        Category::RowNumbering,
        Category::AppLock,
    ];

    /// Operations the translator accepts for this category.
    pub fn operations(self) -> &'static [Operation] {
        use Operation::*;
        match self {
            Category::String => &[
                StartsWith, EndsWith, Contains, Substring, Trim, TrimStart, TrimEnd, ToUpper,
                ToLower, Replace, IndexOf, Concat,
            ],
            Category::Date => &[AddYears, AddMonths, AddDays, AddHours, AddMinutes, Subtract],
            Category::Conditional => &[When, Then, Else],
            Category::Condition => &[IsNull, IsNotNull, In, NotIn, Case],
            Category::Selection => &[All, As, Inserted, Deleted],
            Category::Conversion => &[Compress, Decompress, Cast, Convert, Unicode, Ascii, Collate],
            Category::Definition => &[Max, Size, Asc, Desc],
            Category::Pagination => &[Offset, Fetch, PartitionBy, OrderBy, Over],
            Category::Aggregate => &[Sum, Sign, Max, Min, Len, Count, CountDistinct, Left, Right],
            Category::Assignment => &[Set],
            Category::Counting => &[CountAll],
            Category::RowNumbering => &[RowNumber, Over],
            Category::AppLock => &[Test],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::String => "string",
            Category::Date => "date",
            Category::Conditional => "conditional",
            Category::Condition => "condition",
            Category::Selection => "selection",
            Category::Conversion => "conversion",
            Category::Definition => "definition",
            Category::Pagination => "pagination",
            Category::Aggregate => "aggregate",
            Category::Assignment => "assignment",
            Category::Counting => "counting",
            Category::RowNumbering => "row-numbering",
            Category::AppLock => "application-lock",
        };
        write!(f, "{}", name)
    }
}

/// Operation identifier of a call node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    // String
    StartsWith,
    EndsWith,
    Contains,
    Substring,
    Trim,
    TrimStart,
    TrimEnd,
    ToUpper,
    ToLower,
    Replace,
    IndexOf,
    Concat,
    // Date
    AddYears,
    AddMonths,
    AddDays,
    AddHours,
    AddMinutes,
    Subtract,
    // Conditional
    When,
    Then,
    Else,
    // Condition
    IsNull,
    IsNotNull,
    In,
    NotIn,
    Case,
    // Selection
    All,
    As,
    Inserted,
    Deleted,
    // Conversion
    Compress,
    Decompress,
    Cast,
    Convert,
    Unicode,
    Ascii,
    Collate,
    // Definition / aggregate
    Max,
    Size,
    Asc,
    Desc,
    Sum,
    Sign,
    Min,
    Len,
    Count,
    CountDistinct,
    Left,
    Right,
    // Pagination
    Offset,
    Fetch,
    PartitionBy,
    OrderBy,
    Over,
    // Assignment / counting / row numbering / locks
    Set,
    CountAll,
    RowNumber,
    Test,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
