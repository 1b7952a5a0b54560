//! Error types for sqlexpress.

use thiserror::Error;

use crate::ast::{Category, EntityId, MemberId, Operation};

/// Errors raised while compiling a fragment sequence.
///
/// Every variant aborts the whole compile; no partial SQL is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// A node kind the translator cannot express.
    #[error("Unsupported construct: {0}")]
    UnsupportedConstruct(String),

    /// Binary operator outside the translation table.
    #[error("The binary operator '{0}' is not supported")]
    UnsupportedOperator(String),

    /// Operation not present in its category table.
    #[error("The operation '{operation}' of category '{category}' is not supported")]
    UnsupportedOperation {
        category: Category,
        operation: Operation,
    },

    /// No implicit database type exists for the declared return type.
    #[error("The implicit conversion of '{0}' into a database type is not supported")]
    UnsupportedImplicitConversion(String),

    /// An entity maps to a table name that does not parse.
    #[error("The table '{table}' mapped for the entity '{entity}' is not a valid table name")]
    InvalidTableName { entity: EntityId, table: String },

    /// Two CTE fragments declare the same entity.
    #[error("Multiple declaration of CTE tables for the entity '{0}' is not supported")]
    DuplicateCteDeclaration(EntityId),

    /// A placeholder name was registered twice.
    #[error("Parameter '{0}' is already declared")]
    DuplicateParameter(String),

    /// A root-less or captured member access could not be evaluated.
    #[error("The member '{owner}.{member}' could not be evaluated")]
    UnresolvedMember { owner: EntityId, member: MemberId },

    /// The node does not have the argument shape its operation expects.
    #[error("Invalid arguments for '{operation}': {reason}")]
    InvalidArguments {
        operation: Operation,
        reason: String,
    },
}

impl CompileError {
    /// Create an unsupported operation error.
    pub fn unsupported(category: Category, operation: Operation) -> Self {
        Self::UnsupportedOperation {
            category,
            operation,
        }
    }

    /// Create an invalid arguments error.
    pub fn invalid_args(operation: Operation, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            operation,
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for the configuration shape.
    #[error("Configuration error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A mapped table name could not be parsed.
    #[error("Invalid table name '{name}': {message}")]
    InvalidTableName { name: String, message: String },
}

/// Result type alias for compile operations.
pub type CompileResult<T> = Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CompileError::unsupported(Category::String, Operation::Sum);
        assert_eq!(
            err.to_string(),
            "The operation 'Sum' of category 'string' is not supported"
        );
    }

    #[test]
    fn test_duplicate_cte_display() {
        let err = CompileError::DuplicateCteDeclaration(EntityId::new("Orders"));
        assert_eq!(
            err.to_string(),
            "Multiple declaration of CTE tables for the entity 'Orders' is not supported"
        );
    }

    #[test]
    fn test_invalid_table_name_display() {
        let err = CompileError::InvalidTableName {
            entity: EntityId::new("Order"),
            table: "bad name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "The table 'bad name' mapped for the entity 'Order' is not a valid table name"
        );
    }
}
