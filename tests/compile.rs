//! End-to-end compiles through the public API.

use pretty_assertions::assert_eq;
use sqlexpress::prelude::*;

fn northwind() -> Config {
    Config::from_toml_str(
        r#"
        [schema]
        default_schema = "dbo"

        [schema.entities.OrderDetail]
        table = "[Order Details]"
        columns = { UnitPrice = "Unit Price" }

        [schema.entities.Product]
        table = "Sales.Products"
        "#,
    )
    .unwrap()
}

#[test]
fn test_join_with_catalog_mapping() {
    let compiler = Compiler::from_config(northwind());
    let stmt = Query::new()
        .select([col("Product", "Name"), col("OrderDetail", "UnitPrice")])
        .from("Product")
        .join(
            JoinKind::Inner,
            "OrderDetail",
            eq(col("OrderDetail", "ProductId"), col("Product", "Id")),
        )
        .filter(col("Product", "Name").contains("tea"))
        .compile_with(&compiler)
        .unwrap();

    assert_eq!(
        stmt.text,
        "SELECT _t0.[Name], _t1.[Unit Price]\n\
         FROM [Sales].[Products] AS _t0\n\
         INNER JOIN [dbo].[Order Details] AS _t1 ON (_t1.[ProductId] = _t0.[Id])\n\
         WHERE (_t0.[Name] LIKE @p0)"
    );
    assert_eq!(stmt.parameter("@p0").unwrap().value, Value::from("%tea%"));
}

#[test]
fn test_fragments_survive_json() {
    let query = Query::new()
        .select([
            col("Order", "CustomerId"),
            sum(col("Order", "Total")).alias_as(col("Order", "Total")),
        ])
        .from("Order")
        .filter(and(
            ge(col("Order", "Total"), 250.5),
            is_not_null(col("Order", "ShippedAt")),
        ))
        .group_by([col("Order", "CustomerId")]);

    let json = serde_json::to_string(query.fragments()).unwrap();
    let fragments: Vec<Fragment> = serde_json::from_str(&json).unwrap();
    assert_eq!(fragments.as_slice(), query.fragments());

    let stmt = sqlexpress::compile(&fragments).unwrap();
    assert_eq!(
        stmt.text,
        "SELECT _t0.[CustomerId], SUM(_t0.[Total]) AS [Total]\n\
         FROM [Order] AS _t0\n\
         WHERE ((_t0.[Total] >= @p0) AND (_t0.[ShippedAt] IS NOT NULL))\n\
         GROUP BY _t0.[CustomerId]"
    );
    assert_eq!(stmt.parameters[0].value, Value::Float(250.5));
}

#[test]
fn test_statement_serializes() {
    let stmt = Query::new()
        .exec(
            "GetOrders",
            [
                ProcedureArgument::input("CustomerId", 7),
                ProcedureArgument::output("Count"),
            ],
        )
        .compile()
        .unwrap();

    assert_eq!(
        stmt.text,
        "EXEC [GetOrders] @CustomerId = @CustomerId, @Count = @Count OUTPUT"
    );
    let json = serde_json::to_string(&stmt).unwrap();
    let back: CompiledStatement = serde_json::from_str(&json).unwrap();
    assert_eq!(back, stmt);
    assert_eq!(back.parameter("@Count").unwrap().direction, ParameterDirection::Out);
}

#[test]
fn test_searched_case_in_projection() {
    let tier = case_when(gt(col("Customer", "Spend"), 1000))
        .then("gold")
        .when(gt(col("Customer", "Spend"), 100))
        .then("silver")
        .otherwise(lit("bronze"));
    let stmt = Query::new()
        .select([col("Customer", "Name"), tier.alias_as(col("Customer", "Tier"))])
        .from("Customer")
        .compile()
        .unwrap();

    assert_eq!(
        stmt.text,
        "SELECT _t0.[Name], CASE WHEN (_t0.[Spend] > @p0) THEN @p1 WHEN (_t0.[Spend] > @p2) THEN @p3 ELSE @p4 END AS [Tier]\n\
         FROM [Customer] AS _t0"
    );
    assert_eq!(stmt.parameters.len(), 5);
}

#[test]
fn test_error_carries_no_output() {
    let err = Query::new()
        .select([col("Order", "Customer")])
        .from("Order")
        .filter(eq(col("Order", "Id"), 1))
        .paginate(Expr::call(Category::Pagination, Operation::Over, vec![]))
        .compile()
        .unwrap_err();
    assert!(matches!(err, CompileError::InvalidArguments { .. }), "{err:?}");
}
