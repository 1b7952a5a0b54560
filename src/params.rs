//! Bind parameter collection.
//!
//! One [`ParameterBuilder`] lives for exactly one compile. Placeholders are
//! unique within the statement and parameters keep first-use order, which
//! is part of the compiled contract handed to the executor.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ast::Value;
use crate::error::{CompileError, CompileResult};

/// Direction of a bind parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterDirection {
    #[default]
    In,
    Out,
    InOut,
}

impl ParameterDirection {
    /// Out and InOut parameters are marked OUTPUT in EXEC calls.
    pub fn is_output(self) -> bool {
        matches!(self, ParameterDirection::Out | ParameterDirection::InOut)
    }
}

/// A collected bind parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlQueryParameter {
    /// Placeholder token, e.g. `@p0`
    pub name: String,
    pub value: Value,
    pub direction: ParameterDirection,
}

/// Allocates placeholders and collects their values.
#[derive(Debug, Default)]
pub struct ParameterBuilder {
    params: Vec<SqlQueryParameter>,
    names: HashSet<String>,
}

impl ParameterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a literal value under the next sequential placeholder.
    ///
    /// Duplicate values get distinct placeholders.
    pub fn add_literal(&mut self, value: Value) -> CompileResult<String> {
        let name = format!("@p{}", self.params.len());
        self.push(name, value, ParameterDirection::In)
    }

    /// Register a stored procedure argument under a caller-chosen name.
    pub fn add_directional(
        &mut self,
        name: &str,
        value: Value,
        direction: ParameterDirection,
    ) -> CompileResult<String> {
        self.push(format!("@{}", name), value, direction)
    }

    fn push(
        &mut self,
        name: String,
        value: Value,
        direction: ParameterDirection,
    ) -> CompileResult<String> {
        if !self.names.insert(name.clone()) {
            return Err(CompileError::DuplicateParameter(name));
        }
        self.params.push(SqlQueryParameter {
            name: name.clone(),
            value,
            direction,
        });
        Ok(name)
    }

    pub fn get(&self, name: &str) -> Option<&SqlQueryParameter> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SqlQueryParameter> {
        self.params.iter()
    }

    pub fn into_parameters(self) -> Vec<SqlQueryParameter> {
        self.params
    }
}
