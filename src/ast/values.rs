use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ast::EntityId;

/// A constant carried by the AST.
///
/// Plain data variants become bind parameters. The last four variants are
/// semantic constants that the translator renders inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// NULL value
    Null,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Float
    Float(f64),
    /// Exact numeric
    Decimal(Decimal),
    /// String
    String(String),
    /// Date and time without offset
    DateTime(NaiveDateTime),
    /// Date and time with offset
    DateTimeOffset(DateTime<FixedOffset>),
    /// Time of day / duration
    Time(NaiveTime),
    /// UUID value
    Guid(Uuid),
    /// Binary payload
    Bytes(Vec<u8>),
    /// Enumerable of values (expands to one parameter per element)
    List(Vec<Value>),
    /// Captured container, member name to value
    Record(BTreeMap<String, Value>),
    /// Entity type used as a table reference
    Table(EntityId),
    /// Database type name
    DbType(DbType),
    /// Application lock mode
    LockMode(LockMode),
    /// Application lock owner
    LockOwner(LockOwner),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Text used when a constant is spliced into SQL verbatim
    /// (sizes, style codes, collation names, LIKE patterns).
    pub fn raw_text(&self) -> Option<String> {
        match self {
            Value::Null => Some(String::new()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Int(n) => Some(n.to_string()),
            Value::Float(n) => Some(n.to_string()),
            Value::Decimal(d) => Some(d.to_string()),
            Value::String(s) => Some(s.clone()),
            Value::Guid(u) => Some(u.to_string()),
            _ => None,
        }
    }

    /// Declared kind of this value, when it has one.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Value::Bool(_) => Some(ValueKind::Bool),
            Value::Int(_) => Some(ValueKind::Int64),
            Value::Float(_) => Some(ValueKind::Double),
            Value::Decimal(_) => Some(ValueKind::Decimal),
            Value::String(_) => Some(ValueKind::String),
            Value::DateTime(_) => Some(ValueKind::DateTime),
            Value::DateTimeOffset(_) => Some(ValueKind::DateTimeOffset),
            Value::Time(_) => Some(ValueKind::Duration),
            Value::Guid(_) => Some(ValueKind::Guid),
            Value::Bytes(_) => Some(ValueKind::Bytes),
            Value::Record(_) | Value::Table(_) => Some(ValueKind::Entity),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::String(s) => write!(f, "'{}'", s),
            Value::DateTime(dt) => write!(f, "'{}'", dt),
            Value::DateTimeOffset(dt) => write!(f, "'{}'", dt),
            Value::Time(t) => write!(f, "'{}'", t),
            Value::Guid(u) => write!(f, "'{}'", u),
            Value::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            Value::List(arr) => {
                write!(f, "[")?;
                for (i, v) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Value::Record(fields) => write!(f, "{{{} fields}}", fields.len()),
            Value::Table(e) => write!(f, "{}", e),
            Value::DbType(t) => write!(f, "{}", t),
            Value::LockMode(m) => write!(f, "'{}'", m.name()),
            Value::LockOwner(o) => write!(f, "'{}'", o.name()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i16> for Value {
    fn from(n: i16) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Value::DateTimeOffset(dt)
    }
}

impl From<Uuid> for Value {
    fn from(u: Uuid) -> Self {
        Value::Guid(u)
    }
}

impl From<DbType> for Value {
    fn from(t: DbType) -> Self {
        Value::DbType(t)
    }
}

impl From<LockMode> for Value {
    fn from(m: LockMode) -> Self {
        Value::LockMode(m)
    }
}

impl From<LockOwner> for Value {
    fn from(o: LockOwner) -> Self {
        Value::LockOwner(o)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

/// Declared type of an operand or operation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Int16,
    Int32,
    Int64,
    Double,
    Decimal,
    Bool,
    String,
    Guid,
    Bytes,
    DateTime,
    DateTimeOffset,
    Duration,
    Entity,
}

impl ValueKind {
    /// Reference-like kinds, which row counting does not apply to.
    pub fn is_structured(self) -> bool {
        matches!(self, ValueKind::String | ValueKind::Bytes | ValueKind::Entity)
    }

    /// Implicit database type for CAST / CONVERT without an explicit target.
    pub fn db_type(self) -> Option<DbType> {
        match self {
            ValueKind::Int16 => Some(DbType::SmallInt),
            ValueKind::Int32 => Some(DbType::Int),
            ValueKind::Int64 => Some(DbType::BigInt),
            ValueKind::DateTime => Some(DbType::DateTime2),
            ValueKind::DateTimeOffset => Some(DbType::DateTimeOffset),
            ValueKind::Double => Some(DbType::Decimal),
            ValueKind::Duration => Some(DbType::Time),
            _ => None,
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// SQL Server column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DbType {
    BigInt,
    Binary,
    Bit,
    Char,
    Date,
    DateTime,
    DateTime2,
    DateTimeOffset,
    Decimal,
    Float,
    Image,
    Int,
    Money,
    NChar,
    NText,
    NVarChar,
    Real,
    SmallDateTime,
    SmallInt,
    SmallMoney,
    Text,
    Time,
    Timestamp,
    TinyInt,
    UniqueIdentifier,
    VarBinary,
    VarChar,
    Variant,
    Xml,
}

impl DbType {
    /// Keyword as written in T-SQL.
    pub fn keyword(self) -> &'static str {
        match self {
            DbType::BigInt => "BIGINT",
            DbType::Binary => "BINARY",
            DbType::Bit => "BIT",
            DbType::Char => "CHAR",
            DbType::Date => "DATE",
            DbType::DateTime => "DATETIME",
            DbType::DateTime2 => "DATETIME2",
            DbType::DateTimeOffset => "DATETIMEOFFSET",
            DbType::Decimal => "DECIMAL",
            DbType::Float => "FLOAT",
            DbType::Image => "IMAGE",
            DbType::Int => "INT",
            DbType::Money => "MONEY",
            DbType::NChar => "NCHAR",
            DbType::NText => "NTEXT",
            DbType::NVarChar => "NVARCHAR",
            DbType::Real => "REAL",
            DbType::SmallDateTime => "SMALLDATETIME",
            DbType::SmallInt => "SMALLINT",
            DbType::SmallMoney => "SMALLMONEY",
            DbType::Text => "TEXT",
            DbType::Time => "TIME",
            DbType::Timestamp => "TIMESTAMP",
            DbType::TinyInt => "TINYINT",
            DbType::UniqueIdentifier => "UNIQUEIDENTIFIER",
            DbType::VarBinary => "VARBINARY",
            DbType::VarChar => "VARCHAR",
            DbType::Variant => "SQL_VARIANT",
            DbType::Xml => "XML",
        }
    }
}

impl std::fmt::Display for DbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Lock mode argument of APPLOCK_TEST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockMode {
    Shared,
    Update,
    IntentShared,
    IntentExclusive,
    Exclusive,
}

impl LockMode {
    pub fn name(self) -> &'static str {
        match self {
            LockMode::Shared => "Shared",
            LockMode::Update => "Update",
            LockMode::IntentShared => "IntentShared",
            LockMode::IntentExclusive => "IntentExclusive",
            LockMode::Exclusive => "Exclusive",
        }
    }
}

/// Lock owner argument of APPLOCK_TEST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockOwner {
    Transaction,
    Session,
}

impl LockOwner {
    pub fn name(self) -> &'static str {
        match self {
            LockOwner::Transaction => "Transaction",
            LockOwner::Session => "Session",
        }
    }
}
