//! Expression translator.
//!
//! Turns one AST node into T-SQL text. Each node yields its own string, so
//! there is no shared output buffer; the only per-compile state is the
//! parameter builder and the table resolver owned by the [`Translator`].
//!
//! Call nodes are dispatched on their [`Category`] tag, one module per
//! category family under `ops/`. Fragment translation lives in `fragments`.

mod fragments;
mod ops;

#[cfg(test)]
mod tests;

use crate::ast::*;
use crate::config::CompileOptions;
use crate::error::{CompileError, CompileResult};
use crate::params::{ParameterBuilder, SqlQueryParameter};
use crate::schema::{Catalog, TableResolver};

/// Per-compile translator.
pub struct Translator<'c> {
    params: ParameterBuilder,
    tables: TableResolver<'c>,
    options: CompileOptions,
}

impl<'c> Translator<'c> {
    pub fn new(catalog: &'c Catalog, options: CompileOptions) -> Self {
        Self {
            params: ParameterBuilder::new(),
            tables: TableResolver::new(catalog),
            options,
        }
    }

    /// Translate one expression node.
    pub fn translate(&mut self, expr: &Expr) -> CompileResult<String> {
        match expr {
            Expr::Constant(value) => self.translate_constant(value),
            Expr::Parameter(entity) => self.tables.resolve_alias(entity),
            Expr::MemberAccess {
                target,
                owner,
                member,
            } => self.translate_member(target.as_deref(), owner, member),
            Expr::Binary { op, left, right } => self.translate_binary(*op, left, right),
            Expr::Call {
                category,
                operation,
                target,
                args,
                returns,
            } => {
                let call = Call {
                    category: *category,
                    operation: *operation,
                    target: target.as_deref(),
                    args,
                    returns: *returns,
                };
                self.translate_call(&call)
            }
            Expr::ListInit(elements) => self.translate_list_init(elements),
            Expr::ArrayInit(elements) => self.translate_array_init(elements),
        }
    }

    pub fn parameters(&self) -> &ParameterBuilder {
        &self.params
    }

    pub fn tables_mut(&mut self) -> &mut TableResolver<'c> {
        &mut self.tables
    }

    pub fn into_parameters(self) -> Vec<SqlQueryParameter> {
        self.params.into_parameters()
    }

    fn translate_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> CompileResult<String> {
        let op_text = binary_operator(op, right)?;
        let left = self.translate(left)?;
        let right = self.translate(right)?;

        match op {
            BinaryOp::In | BinaryOp::NotIn => Ok(format!("({} {} ({}))", left, op_text, right)),
            _ => Ok(format!("({} {} {})", left, op_text, right)),
        }
    }

    fn translate_constant(&mut self, value: &Value) -> CompileResult<String> {
        match value {
            Value::Null => Ok("NULL".to_string()),
            Value::Table(entity) => self.tables.resolve_alias(entity),
            Value::DbType(db_type) => Ok(db_type.keyword().to_string()),
            Value::LockMode(mode) => Ok(format!("'{}'", mode.name())),
            Value::LockOwner(owner) => Ok(format!("'{}'", owner.name())),
            Value::List(items) if items.is_empty() => Err(CompileError::invalid_args(
                Operation::In,
                "an empty value list has no T-SQL form",
            )),
            Value::List(items) => {
                let mut names = Vec::with_capacity(items.len());
                for item in items {
                    names.push(self.params.add_literal(item.clone())?);
                }
                Ok(names.join(", "))
            }
            Value::Record(_) => Err(CompileError::UnsupportedConstruct(
                "captured container used as a value".to_string(),
            )),
            other => self.params.add_literal(other.clone()),
        }
    }

    fn translate_member(
        &mut self,
        target: Option<&Expr>,
        owner: &EntityId,
        member: &MemberId,
    ) -> CompileResult<String> {
        match target {
            Some(Expr::Parameter(entity)) => {
                let alias = self.tables.resolve_alias(entity)?;
                let column = self.tables.resolve_column(owner, member);
                Ok(format!("{}.{}", alias, column))
            }
            Some(Expr::Constant(container)) => {
                let value = captured_member(container, owner, member)?;
                self.translate_constant(&value)
            }
            Some(Expr::MemberAccess {
                target: Some(inner),
                owner: wrapper_owner,
                member: wrapper_member,
            }) => match inner.as_ref() {
                Expr::Constant(container) => {
                    let wrapper = captured_member(container, wrapper_owner, wrapper_member)?;
                    let value = captured_member(&wrapper, owner, member)?;
                    self.translate_constant(&value)
                }
                _ => Err(unsupported_member(owner, member)),
            },
            Some(Expr::Call {
                category: Category::Date,
                operation: Operation::Subtract,
                target: Some(end),
                args,
                ..
            }) => self.translate_date_diff(end, args, member),
            Some(_) => Err(unsupported_member(owner, member)),
            None => {
                let value = self.tables.constant(owner, member).ok_or_else(|| {
                    CompileError::UnresolvedMember {
                        owner: owner.clone(),
                        member: member.clone(),
                    }
                })?;
                self.translate_constant(&value)
            }
        }
    }

    fn translate_list_init(&mut self, elements: &[Expr]) -> CompileResult<String> {
        match materialize(elements) {
            Some(list) => self.translate_constant(&list),
            None => Err(CompileError::UnsupportedConstruct(
                "list initializer with a non-constant element".to_string(),
            )),
        }
    }

    fn translate_array_init(&mut self, elements: &[Expr]) -> CompileResult<String> {
        match materialize(elements) {
            Some(list) => self.translate_constant(&list),
            // Column lists (ORDER BY a, b)
            None => self.join(elements),
        }
    }

    fn translate_call(&mut self, call: &Call<'_>) -> CompileResult<String> {
        match call.category {
            Category::String => self.translate_string_call(call),
            Category::Date => self.translate_date_call(call),
            Category::Conditional => self.translate_conditional_call(call),
            Category::Condition => self.translate_condition_call(call),
            Category::Selection => self.translate_selection_call(call),
            Category::Conversion => self.translate_conversion_call(call),
            Category::Definition => self.translate_definition_call(call),
            Category::Pagination => self.translate_pagination_call(call),
            Category::Aggregate => self.translate_aggregate_call(call),
            Category::Assignment => self.translate_assignment_call(call),
            Category::Counting => self.translate_counting_call(call),
            Category::RowNumbering => self.translate_row_number_call(call),
            Category::AppLock => self.translate_applock_call(call),
        }
    }

    /// `FUNC(<expr>)`
    fn wrap(&mut self, function: &str, expr: &Expr) -> CompileResult<String> {
        Ok(format!("{}({})", function, self.translate(expr)?))
    }

    /// Comma-joined translations, in order.
    fn join(&mut self, exprs: &[Expr]) -> CompileResult<String> {
        let mut parts = Vec::with_capacity(exprs.len());
        for expr in exprs {
            parts.push(self.translate(expr)?);
        }
        Ok(parts.join(", "))
    }
}

/// Borrowed view of a call node.
pub(crate) struct Call<'a> {
    pub category: Category,
    pub operation: Operation,
    pub target: Option<&'a Expr>,
    pub args: &'a [Expr],
    pub returns: Option<ValueKind>,
}

impl<'a> Call<'a> {
    fn unsupported(&self) -> CompileError {
        CompileError::unsupported(self.category, self.operation)
    }

    fn arg(&self, index: usize) -> CompileResult<&'a Expr> {
        self.args.get(index).ok_or_else(|| {
            CompileError::invalid_args(self.operation, format!("missing argument {}", index))
        })
    }

    fn target(&self) -> CompileResult<&'a Expr> {
        self.target
            .ok_or_else(|| CompileError::invalid_args(self.operation, "missing target"))
    }

    /// Constant argument spliced into the SQL verbatim.
    fn raw_arg(&self, index: usize) -> CompileResult<String> {
        match self.arg(index)? {
            Expr::Constant(value) => value.raw_text().ok_or_else(|| {
                CompileError::invalid_args(
                    self.operation,
                    format!("argument {} has no literal form", index),
                )
            }),
            _ => Err(CompileError::invalid_args(
                self.operation,
                format!("argument {} must be a constant", index),
            )),
        }
    }
}

fn binary_operator(op: BinaryOp, right: &Expr) -> CompileResult<&'static str> {
    let text = match op {
        BinaryOp::Add => "+",
        BinaryOp::AddAssign => "+=",
        BinaryOp::Subtract => "-",
        BinaryOp::SubtractAssign => "-=",
        BinaryOp::And | BinaryOp::AndAlso => "AND",
        BinaryOp::Or | BinaryOp::OrElse => "OR",
        BinaryOp::Equal if right.is_null_constant() => "IS",
        BinaryOp::Equal => "=",
        BinaryOp::NotEqual if right.is_null_constant() => "IS NOT",
        BinaryOp::NotEqual => "<>",
        BinaryOp::LessThan => "<",
        BinaryOp::LessThanOrEqual => "<=",
        BinaryOp::GreaterThan => ">",
        BinaryOp::GreaterThanOrEqual => ">=",
        BinaryOp::Modulo => "%",
        BinaryOp::In => "IN",
        BinaryOp::NotIn => "NOT IN",
        other => return Err(CompileError::UnsupportedOperator(other.to_string())),
    };
    Ok(text)
}

fn captured_member(container: &Value, owner: &EntityId, member: &MemberId) -> CompileResult<Value> {
    match container {
        Value::Record(fields) => fields.get(member.as_str()).cloned(),
        _ => None,
    }
    .ok_or_else(|| CompileError::UnresolvedMember {
        owner: owner.clone(),
        member: member.clone(),
    })
}

/// Collapse constant elements into one list value.
fn materialize(elements: &[Expr]) -> Option<Value> {
    elements
        .iter()
        .map(|e| match e {
            Expr::Constant(v) => Some(v.clone()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .map(Value::List)
}

fn unsupported_member(owner: &EntityId, member: &MemberId) -> CompileError {
    CompileError::UnsupportedConstruct(format!("member access '{}.{}'", owner, member))
}
