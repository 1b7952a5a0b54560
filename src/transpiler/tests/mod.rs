//! Translator test modules.
//!
//! Tests are organized by area:
//! - `core`: Constants, binary operators, member access, list literals
//! - `operations`: The per-category operation tables
//! - `fragments`: Clause-level fragment translation

mod fragments;

use crate::ast::{Expr, Value};
use crate::config::CompileOptions;
use crate::error::CompileResult;
use crate::params::SqlQueryParameter;
use crate::schema::Catalog;
use crate::transpiler::Translator;

/// Translate one expression against an empty catalog.
fn translate(expr: &Expr) -> CompileResult<(String, Vec<SqlQueryParameter>)> {
    translate_with(expr, CompileOptions::default())
}

fn translate_with(
    expr: &Expr,
    options: CompileOptions,
) -> CompileResult<(String, Vec<SqlQueryParameter>)> {
    let catalog = Catalog::new();
    let mut translator = Translator::new(&catalog, options);
    let sql = translator.translate(expr)?;
    Ok((sql, translator.into_parameters()))
}

fn sql(expr: &Expr) -> String {
    translate(expr).unwrap().0
}

fn values(params: &[SqlQueryParameter]) -> Vec<Value> {
    params.iter().map(|p| p.value.clone()).collect()
}
