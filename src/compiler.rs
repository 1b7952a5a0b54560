//! Statement compiler.
//!
//! Runs one compile over a fragment sequence:
//!
//! 1. collect CTE fragments, rejecting duplicate entities before any
//!    translation happens
//! 2. emit the `WITH` block
//! 3. emit the remaining fragments in order, dropping empty ones
//!
//! Every call builds a fresh [`Translator`], so a [`Compiler`] can be shared
//! between threads and compiles never observe each other's parameters.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ast::{EntityId, Fragment};
use crate::config::{CompileOptions, Config};
use crate::error::{CompileError, CompileResult};
use crate::params::SqlQueryParameter;
use crate::schema::Catalog;
use crate::transpiler::Translator;

/// SQL text plus its bind parameters, in first-use order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledStatement {
    pub text: String,
    pub parameters: Vec<SqlQueryParameter>,
}

impl CompiledStatement {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parameters(&self) -> &[SqlQueryParameter] {
        &self.parameters
    }

    /// Look up a parameter by placeholder.
    pub fn parameter(&self, name: &str) -> Option<&SqlQueryParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

impl std::fmt::Display for CompiledStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Compiles fragment sequences against one catalog.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    catalog: Catalog,
    options: CompileOptions,
}

impl Compiler {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            options: CompileOptions::default(),
        }
    }

    pub fn from_config(config: Config) -> Self {
        Self {
            catalog: config.schema,
            options: config.compiler,
        }
    }

    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> CompileOptions {
        self.options
    }

    /// Compile a fragment sequence into one statement.
    pub fn compile(&self, fragments: &[Fragment]) -> CompileResult<CompiledStatement> {
        let ctes: Vec<(&EntityId, &[Fragment])> = fragments
            .iter()
            .filter_map(|fragment| match fragment {
                Fragment::Cte { entity, body } => Some((entity, body.as_slice())),
                _ => None,
            })
            .collect();
        check_duplicate_ctes(&ctes)?;
        tracing::debug!("Compiling {} fragments ({} CTEs)", fragments.len(), ctes.len());

        let mut translator = Translator::new(&self.catalog, self.options);
        for (entity, _) in &ctes {
            translator.tables_mut().declare_cte(entity);
        }

        let mut sql = String::new();
        for (index, (entity, body)) in ctes.iter().enumerate() {
            let header = translator.tables_mut().resolve_table(entity)?.qualified_name();
            let mut lines = vec![format!("{} AS (", header)];
            for fragment in body.iter() {
                let text = translator.translate_fragment(fragment)?;
                if !text.trim().is_empty() {
                    lines.push(text);
                }
            }

            sql.push_str(if index == 0 { "WITH " } else { "\n" });
            sql.push_str(&lines.join("\n"));
            sql.push_str(if index + 1 < ctes.len() { "\n), " } else { "\n) \n" });
        }

        let mut previous: Option<&Fragment> = None;
        for fragment in fragments.iter().filter(|f| !matches!(f, Fragment::Cte { .. })) {
            let text = translator.translate_fragment(fragment)?;
            tracing::trace!("{:?} => {:?}", fragment.kind(), text);
            if text.trim().is_empty() {
                continue;
            }
            if let Some(previous) = previous {
                if !previous.is_terminator() && !fragment.is_terminator() {
                    sql.push('\n');
                }
            }
            sql.push_str(&text);
            previous = Some(fragment);
        }

        let parameters = translator.into_parameters();
        tracing::debug!(
            "Compiled {} bytes of SQL with {} parameters",
            sql.len(),
            parameters.len()
        );

        Ok(CompiledStatement {
            text: sql,
            parameters,
        })
    }
}

fn check_duplicate_ctes(ctes: &[(&EntityId, &[Fragment])]) -> CompileResult<()> {
    let mut seen = HashSet::new();
    for (entity, _) in ctes {
        if !seen.insert(*entity) {
            tracing::warn!("Duplicate CTE declaration for '{}'", entity);
            return Err(CompileError::DuplicateCteDeclaration((*entity).clone()));
        }
    }
    Ok(())
}

/// Compile with an empty catalog and default options.
pub fn compile(fragments: &[Fragment]) -> CompileResult<CompiledStatement> {
    Compiler::default().compile(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builders::*;
    use crate::ast::{Category, Expr, Operation, Value};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cte_block() {
        let big_orders = Query::new()
            .select([col("Order", "Id")])
            .from("Order")
            .filter(gt(col("Order", "Total"), 100));
        let big_customers = Query::new()
            .select([col("BigOrders", "Id")])
            .from("BigOrders");
        let stmt = Query::new()
            .with_cte("BigOrders", big_orders)
            .with_cte("BigCustomers", big_customers)
            .select([])
            .from("BigCustomers")
            .compile()
            .unwrap();

        assert_eq!(
            stmt.text,
            "WITH [BigOrders] AS (\n\
             SELECT _t1.[Id]\n\
             FROM [Order] AS _t1\n\
             WHERE (_t1.[Total] > @p0)\n\
             ), \n\
             [BigCustomers] AS (\n\
             SELECT _t0.[Id]\n\
             FROM [BigOrders] AS _t0\n\
             ) \n\
             SELECT *\n\
             FROM [BigCustomers] AS _t2"
        );
        assert_eq!(stmt.parameters.len(), 1);
        assert_eq!(stmt.parameters[0].value, Value::Int(100));
    }

    #[test]
    fn test_cte_is_never_schema_qualified() {
        let catalog = Catalog {
            default_schema: Some("dbo".to_string()),
            ..Catalog::default()
        };
        let stmt = Query::new()
            .with_cte("Recent", Query::new().select([]).from("Order"))
            .select([])
            .from("Recent")
            .compile_with(&Compiler::new(catalog))
            .unwrap();
        assert_eq!(
            stmt.text,
            "WITH [Recent] AS (\nSELECT *\nFROM [dbo].[Order] AS _t1\n) \nSELECT *\nFROM [Recent] AS _t0"
        );
    }

    #[test]
    fn test_duplicate_cte_rejected_before_translation() {
        // The body would fail on its own; the duplicate check must come first
        let broken = Query::new().filter(Expr::call(Category::Counting, Operation::Sum, vec![]));
        let result = Query::new()
            .with_cte("Top", broken.clone())
            .with_cte("Top", broken)
            .compile();
        assert_eq!(
            result.unwrap_err(),
            CompileError::DuplicateCteDeclaration(EntityId::new("Top"))
        );
    }

    #[test]
    fn test_terminators_suppress_separator() {
        let stmt = Query::new()
            .select([])
            .from("Order")
            .next_result_set()
            .select([])
            .from("Customer")
            .batch()
            .select([])
            .from("Product")
            .compile()
            .unwrap();
        assert_eq!(
            stmt.text,
            "SELECT *\nFROM [Order] AS _t0;\nSELECT *\nFROM [Customer] AS _t1\nGO\nSELECT *\nFROM [Product] AS _t2"
        );
    }

    #[test]
    fn test_empty_fragments_dropped() {
        let stmt = Query::new()
            .select([])
            .group_by([])
            .from("Order")
            .order_by([])
            .compile()
            .unwrap();
        assert_eq!(stmt.text, "SELECT *\nFROM [Order] AS _t0");
    }

    #[test]
    fn test_union() {
        let stmt = Query::new()
            .select([col("Supplier", "City")])
            .from("Supplier")
            .union()
            .select([col("Customer", "City")])
            .from("Customer")
            .compile()
            .unwrap();
        assert_eq!(
            stmt.text,
            "SELECT _t0.[City]\nFROM [Supplier] AS _t0\nUNION\nSELECT _t1.[City]\nFROM [Customer] AS _t1"
        );
    }

    #[test]
    fn test_pagination_parameters_in_traversal_order() {
        let stmt = Query::new()
            .select([])
            .from("Order")
            .filter(eq(col("Order", "Status"), "open"))
            .order_by([col("Order", "OrderDate")])
            .paginate(offset_fetch(5, 10))
            .compile()
            .unwrap();
        assert!(stmt.text.ends_with(
            "ORDER BY _t0.[OrderDate]\nOFFSET @p1 ROWS FETCH NEXT @p2 ROWS ONLY"
        ));
        let names: Vec<&str> = stmt.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["@p0", "@p1", "@p2"]);
        assert_eq!(stmt.parameters[1].value, Value::Int(5));
        assert_eq!(stmt.parameters[2].value, Value::Int(10));
    }

    #[test]
    fn test_compile_is_deterministic() {
        let query = Query::new()
            .select([col("Product", "Name"), count_all()])
            .from("Product")
            .filter(and(
                col("Product", "Name").starts_with("C"),
                is_in(col("Product", "CategoryId"), [1, 2]),
            ))
            .group_by([col("Product", "Name")]);
        let compiler = Compiler::default();
        let first = query.compile_with(&compiler).unwrap();
        let second = query.compile_with(&compiler).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_compiles_do_not_share_state() {
        let compiler = Compiler::default();
        let query = Query::new()
            .select([])
            .from("Order")
            .filter(eq(col("Order", "Id"), 1));
        let expected = query.compile_with(&compiler).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| query.compile_with(&compiler).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_compiler_from_config() {
        let config = Config::from_toml_str(
            r#"
            [compiler]
            legacy_trim_end = true

            [schema]
            default_schema = "dbo"

            [schema.entities.Product]
            table = "Products"
            columns = { Name = "ProductName" }
            "#,
        )
        .unwrap();
        let stmt = Query::new()
            .select([col("Product", "Name").trim_end()])
            .from("Product")
            .compile_with(&Compiler::from_config(config))
            .unwrap();
        assert_eq!(
            stmt.to_string(),
            "SELECT LTRIM(_t0.[ProductName])\nFROM [dbo].[Products] AS _t0"
        );
    }

    #[test]
    fn test_hand_built_catalog_with_bad_table_fails() {
        let mut catalog = Catalog::new();
        catalog.add_entity(
            "Order",
            crate::schema::EntityMapping {
                table: Some("bad name here".to_string()),
                ..Default::default()
            },
        );
        let result = Query::new()
            .select([])
            .from("Order")
            .compile_with(&Compiler::new(catalog));
        assert_eq!(
            result.unwrap_err(),
            CompileError::InvalidTableName {
                entity: EntityId::new("Order"),
                table: "bad name here".to_string(),
            }
        );
    }

    #[test]
    fn test_exec_does_not_shift_aliases() {
        let stmt = Query::new()
            .exec("DoWork", [])
            .next_result_set()
            .select([col("Order", "Id")])
            .from("Order")
            .compile()
            .unwrap();
        assert_eq!(stmt.text, "EXEC [DoWork];\nSELECT _t0.[Id]\nFROM [Order] AS _t0");
    }

    #[test]
    fn test_failure_returns_no_partial_output() {
        let result = Query::new()
            .select([])
            .from("Order")
            .filter(Expr::binary(
                col("Order", "Total"),
                crate::ast::BinaryOp::Multiply,
                lit(2),
            ))
            .compile();
        assert_eq!(
            result.unwrap_err(),
            CompileError::UnsupportedOperator("Multiply".to_string())
        );
    }
}
