//! Clause-level fragment translation.

use pretty_assertions::assert_eq;

use crate::ast::builders::*;
use crate::ast::{EntityId, Fragment, JoinKind, ProcedureArgument, SetOperator, Value};
use crate::config::CompileOptions;
use crate::error::{CompileError, CompileResult};
use crate::params::{ParameterDirection, SqlQueryParameter};
use crate::schema::Catalog;
use crate::transpiler::Translator;

fn catalog() -> Catalog {
    Catalog::from_toml_str(
        r#"
        default_schema = "dbo"

        [entities.OrderDetail]
        table = "[Sales].[Order Details]"
        columns = { UnitPrice = "Unit Price" }
        "#,
    )
    .unwrap()
}

/// Translate fragments one by one, sharing the per-compile state.
fn translate_all(fragments: &[Fragment]) -> CompileResult<(Vec<String>, Vec<SqlQueryParameter>)> {
    let catalog = catalog();
    let mut translator = Translator::new(&catalog, CompileOptions::default());
    let mut texts = Vec::new();
    for fragment in fragments {
        texts.push(translator.translate_fragment(fragment)?);
    }
    Ok((texts, translator.into_parameters()))
}

fn one(fragment: Fragment) -> String {
    translate_all(&[fragment]).unwrap().0.remove(0)
}

#[test]
fn test_select_variants() {
    assert_eq!(
        one(Fragment::Select {
            distinct: false,
            top: None,
            columns: vec![],
        }),
        "SELECT *"
    );
    assert_eq!(
        one(Fragment::Select {
            distinct: true,
            top: Some(lit(10)),
            columns: vec![col("Product", "Name"), col("Product", "Price")],
        }),
        "SELECT DISTINCT TOP (@p0) _t0.[Name], _t0.[Price]"
    );
}

#[test]
fn test_from_and_join_use_catalog() {
    let fragments = Query::new()
        .from("Order")
        .join(
            JoinKind::Inner,
            "OrderDetail",
            eq(col("OrderDetail", "OrderId"), col("Order", "Id")),
        )
        .cross_join("Region")
        .into_fragments();
    let (texts, _) = translate_all(&fragments).unwrap();
    assert_eq!(
        texts,
        vec![
            "FROM [dbo].[Order] AS _t0",
            "INNER JOIN [Sales].[Order Details] AS _t1 ON (_t1.[OrderId] = _t0.[Id])",
            "CROSS JOIN [dbo].[Region] AS _t2",
        ]
    );
}

#[test]
fn test_column_mapping_applies() {
    assert_eq!(
        one(Fragment::Where(gt(col("OrderDetail", "UnitPrice"), 10))),
        "WHERE (_t0.[Unit Price] > @p0)"
    );
}

#[test]
fn test_grouping_and_ordering() {
    let fragments = Query::new()
        .group_by([col("Order", "CustomerId")])
        .having(gt(count_all(), 5))
        .order_by([col("Order", "CustomerId").asc(), sum(col("Order", "Total")).desc()])
        .into_fragments();
    let (texts, _) = translate_all(&fragments).unwrap();
    assert_eq!(
        texts,
        vec![
            "GROUP BY _t0.[CustomerId]",
            "HAVING (COUNT(*) > @p0)",
            "ORDER BY _t0.[CustomerId] ASC, SUM(_t0.[Total]) DESC",
        ]
    );
}

#[test]
fn test_empty_lists_translate_to_nothing() {
    assert_eq!(one(Fragment::GroupBy(vec![])), "");
    assert_eq!(one(Fragment::OrderBy(vec![])), "");
    assert_eq!(one(Fragment::Values(vec![])), "");
    assert_eq!(one(Fragment::Set(vec![])), "");
    assert_eq!(one(Fragment::Output(vec![])), "");
}

#[test]
fn test_insert_values_output() {
    let fragments = Query::new()
        .insert("Product", [col("Product", "Name"), col("Product", "Price")])
        .output([inserted(col("Product", "Id"))])
        .values([vec![lit("Chai"), lit(18)], vec![lit("Chang"), lit(19)]])
        .into_fragments();
    let (texts, params) = translate_all(&fragments).unwrap();
    assert_eq!(
        texts,
        vec![
            "INSERT INTO [dbo].[Product] ([Name], [Price])",
            "OUTPUT INSERTED.[Id]",
            "VALUES (@p0, @p1), (@p2, @p3)",
        ]
    );
    assert_eq!(params.len(), 4);
    assert_eq!(params[2].value, Value::from("Chang"));
}

#[test]
fn test_insert_column_must_be_member() {
    let result = translate_all(&[Fragment::Insert {
        entity: EntityId::new("Product"),
        columns: vec![lit(1)],
    }]);
    assert!(matches!(result, Err(CompileError::UnsupportedConstruct(_))));
}

#[test]
fn test_update_and_delete_target_alias() {
    let fragments = Query::new()
        .update("Product")
        .set([
            set(col("Product", "Price"), 20),
            set(col("Product", "Discontinued"), true),
        ])
        .from("Product")
        .delete("Product")
        .into_fragments();
    let (texts, params) = translate_all(&fragments).unwrap();
    assert_eq!(
        texts,
        vec![
            "UPDATE _t0",
            "SET _t0.[Price] = @p0, _t0.[Discontinued] = @p1",
            "FROM [dbo].[Product] AS _t0",
            "DELETE _t0",
        ]
    );
    assert_eq!(params[1].value, Value::Bool(true));
}

#[test]
fn test_exec_with_directional_parameters() {
    let (texts, params) = translate_all(&[Fragment::Exec {
        procedure: EntityId::new("PlaceOrder"),
        arguments: vec![
            ProcedureArgument::input("CustomerId", 42),
            ProcedureArgument::output("OrderId"),
            ProcedureArgument::input_output("Total", 0),
        ],
    }])
    .unwrap();
    assert_eq!(
        texts[0],
        "EXEC [dbo].[PlaceOrder] @CustomerId = @CustomerId, @OrderId = @OrderId OUTPUT, @Total = @Total OUTPUT"
    );
    let directions: Vec<ParameterDirection> = params.iter().map(|p| p.direction).collect();
    assert_eq!(
        directions,
        vec![
            ParameterDirection::In,
            ParameterDirection::Out,
            ParameterDirection::InOut
        ]
    );
}

#[test]
fn test_exec_duplicate_argument() {
    let result = translate_all(&[Fragment::Exec {
        procedure: EntityId::new("PlaceOrder"),
        arguments: vec![
            ProcedureArgument::input("Id", 1),
            ProcedureArgument::input("Id", 2),
        ],
    }]);
    assert_eq!(
        result.unwrap_err(),
        CompileError::DuplicateParameter("@Id".to_string())
    );
}

#[test]
fn test_terminators_and_set_operators() {
    assert_eq!(one(Fragment::Batch), "\nGO\n");
    assert_eq!(one(Fragment::MultipleResultSets), ";\n");
    assert_eq!(one(Fragment::Combine(SetOperator::UnionAll)), "UNION ALL");
    assert_eq!(one(Fragment::Combine(SetOperator::Except)), "EXCEPT");
}

#[test]
fn test_cte_outside_compiler_rejected() {
    let result = translate_all(&[Fragment::Cte {
        entity: EntityId::new("Top"),
        body: vec![],
    }]);
    assert!(matches!(result, Err(CompileError::UnsupportedConstruct(_))));
}

#[test]
fn test_exec_resolves_procedure_without_alias() {
    let fragments = Query::new()
        .exec("PlaceOrder", [ProcedureArgument::input("Id", 1)])
        .from("Order")
        .into_fragments();
    let (texts, _) = translate_all(&fragments).unwrap();
    assert_eq!(
        texts,
        vec![
            "EXEC [dbo].[PlaceOrder] @Id = @Id",
            "FROM [dbo].[Order] AS _t0",
        ]
    );
}
