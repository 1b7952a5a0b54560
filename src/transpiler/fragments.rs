//! Fragment translation.
//!
//! A fragment that yields an empty string (e.g. `Values(vec![])`) is dropped
//! by the compiler, so no separator is emitted for it.

use crate::ast::{EntityId, Expr, Fragment, ProcedureArgument};
use crate::error::{CompileError, CompileResult};
use crate::schema::TableAlias;
use crate::transpiler::Translator;

impl Translator<'_> {
    /// Translate one clause-level fragment.
    pub fn translate_fragment(&mut self, fragment: &Fragment) -> CompileResult<String> {
        match fragment {
            Fragment::Cte { entity, .. } => Err(CompileError::UnsupportedConstruct(format!(
                "CTE '{}' declared outside the WITH block",
                entity
            ))),
            Fragment::Select {
                distinct,
                top,
                columns,
            } => {
                let mut sql = String::from("SELECT ");
                if *distinct {
                    sql.push_str("DISTINCT ");
                }
                if let Some(top) = top {
                    sql.push_str(&format!("TOP ({}) ", self.translate(top)?));
                }
                if columns.is_empty() {
                    sql.push('*');
                } else {
                    sql.push_str(&self.join(columns)?);
                }
                Ok(sql)
            }
            Fragment::From { entity } => {
                let table = self.table(entity)?;
                Ok(format!("FROM {} AS {}", table.qualified_name(), table.alias))
            }
            Fragment::Join { kind, entity, on } => {
                let table = self.table(entity)?;
                let mut sql = format!("{} {} AS {}", kind, table.qualified_name(), table.alias);
                if let Some(on) = on {
                    sql.push_str(" ON ");
                    sql.push_str(&self.translate(on)?);
                }
                Ok(sql)
            }
            Fragment::Where(predicate) => Ok(format!("WHERE {}", self.translate(predicate)?)),
            Fragment::GroupBy(columns) => self.clause("GROUP BY", columns),
            Fragment::Having(predicate) => Ok(format!("HAVING {}", self.translate(predicate)?)),
            Fragment::OrderBy(columns) => self.clause("ORDER BY", columns),
            Fragment::Paginate(expr) => self.translate(expr),
            Fragment::Insert { entity, columns } => {
                let table = self.table(entity)?.qualified_name();
                if columns.is_empty() {
                    return Ok(format!("INSERT INTO {}", table));
                }
                let mut names = Vec::with_capacity(columns.len());
                for column in columns {
                    match column {
                        Expr::MemberAccess { owner, member, .. } => {
                            names.push(self.tables.resolve_column(owner, member))
                        }
                        _ => {
                            return Err(CompileError::UnsupportedConstruct(
                                "INSERT column must be a member access".to_string(),
                            ));
                        }
                    }
                }
                Ok(format!("INSERT INTO {} ({})", table, names.join(", ")))
            }
            Fragment::Values(rows) => {
                if rows.is_empty() {
                    return Ok(String::new());
                }
                let mut tuples = Vec::with_capacity(rows.len());
                for row in rows {
                    tuples.push(format!("({})", self.join(row)?));
                }
                Ok(format!("VALUES {}", tuples.join(", ")))
            }
            Fragment::Output(columns) => self.clause("OUTPUT", columns),
            Fragment::Update { entity } => {
                Ok(format!("UPDATE {}", self.tables.resolve_alias(entity)?))
            }
            Fragment::Set(assignments) => self.clause("SET", assignments),
            Fragment::Delete { entity } => {
                Ok(format!("DELETE {}", self.tables.resolve_alias(entity)?))
            }
            Fragment::Exec {
                procedure,
                arguments,
            } => self.translate_exec(procedure, arguments),
            Fragment::Combine(op) => Ok(op.to_string()),
            Fragment::Batch => Ok("\nGO\n".to_string()),
            Fragment::MultipleResultSets => Ok(";\n".to_string()),
        }
    }

    /// `<KEYWORD> a, b, ...`, or nothing for an empty list.
    fn clause(&mut self, keyword: &str, exprs: &[Expr]) -> CompileResult<String> {
        if exprs.is_empty() {
            return Ok(String::new());
        }
        Ok(format!("{} {}", keyword, self.join(exprs)?))
    }

    fn table(&mut self, entity: &EntityId) -> CompileResult<TableAlias> {
        Ok(self.tables.resolve_table(entity)?.clone())
    }

    /// `EXEC <proc> @a = @a, @b = @b OUTPUT`
    fn translate_exec(
        &mut self,
        procedure: &EntityId,
        arguments: &[ProcedureArgument],
    ) -> CompileResult<String> {
        let name = self.tables.resolve_procedure(procedure)?;
        let mut parts = Vec::with_capacity(arguments.len());
        for argument in arguments {
            let placeholder =
                self.params
                    .add_directional(&argument.name, argument.value.clone(), argument.direction)?;
            let mut part = format!("{} = {}", placeholder, placeholder);
            if argument.direction.is_output() {
                part.push_str(" OUTPUT");
            }
            parts.push(part);
        }
        if parts.is_empty() {
            Ok(format!("EXEC {}", name))
        } else {
            Ok(format!("EXEC {} {}", name, parts.join(", ")))
        }
    }
}
