//! Entity catalog and per-compile table/alias resolution.
//!
//! The catalog maps entity and member identities to table and column names.
//! Anything the catalog does not mention resolves by convention: the table
//! is named after the entity, the column after the member.
//!
//! # Example
//! ```
//! use sqlexpress::schema::Catalog;
//!
//! let catalog = Catalog::from_toml_str(r#"
//!     default_schema = "dbo"
//!
//!     [entities.OrderDetail]
//!     table = "[Sales].[Order Details]"
//!     columns = { UnitPrice = "Unit Price" }
//! "#).unwrap();
//!
//! let mapping = catalog.entity("OrderDetail").unwrap();
//! assert_eq!(mapping.columns["UnitPrice"], "Unit Price");
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::ast::{EntityId, MemberId, Value};
use crate::error::{CompileError, CompileResult, ConfigError};
use crate::parser::parse_qualified_name;

/// Entity mappings and static member values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Schema used for entities whose mapping names none
    #[serde(default)]
    pub default_schema: Option<String>,
    #[serde(default)]
    pub entities: BTreeMap<String, EntityMapping>,
    /// Values of static members, keyed by owner then member
    #[serde(default)]
    pub constants: BTreeMap<String, BTreeMap<String, Value>>,
}

/// How one entity maps onto the database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityMapping {
    /// Table name, optionally schema-qualified
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    /// Member to column overrides
    #[serde(default)]
    pub columns: BTreeMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check that every mapped table name parses.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for mapping in self.entities.values() {
            if let Some(table) = &mapping.table {
                parse_qualified_name(table)?;
            }
        }
        Ok(())
    }

    pub fn entity(&self, name: &str) -> Option<&EntityMapping> {
        self.entities.get(name)
    }

    /// Add or replace an entity mapping.
    pub fn add_entity(&mut self, name: &str, mapping: EntityMapping) {
        self.entities.insert(name.to_string(), mapping);
    }

    /// Register the value of a static member.
    pub fn add_constant(&mut self, owner: &str, member: &str, value: impl Into<Value>) {
        self.constants
            .entry(owner.to_string())
            .or_default()
            .insert(member.to_string(), value.into());
    }

    /// Value of a static member: catalog first, then the built-ins.
    pub fn constant(&self, owner: &EntityId, member: &MemberId) -> Option<Value> {
        self.constants
            .get(owner.as_str())
            .and_then(|members| members.get(member.as_str()))
            .cloned()
            .or_else(|| builtin_constant(owner.as_str(), member.as_str()))
    }

    /// `(schema, table)` for an entity; a mapping whose table does not parse
    /// is an error, never a silent fallback to the entity name.
    fn table_name(&self, entity: &EntityId) -> CompileResult<(Option<String>, String)> {
        let mapping = self.entity(entity.as_str());
        let parsed = match mapping.and_then(|m| m.table.as_deref()) {
            Some(table) => Some(parse_qualified_name(table).map_err(|_| {
                CompileError::InvalidTableName {
                    entity: entity.clone(),
                    table: table.to_string(),
                }
            })?),
            None => None,
        };

        let (schema, name) = match parsed {
            Some(q) => (q.schema, q.name),
            None => (None, entity.as_str().to_string()),
        };
        let schema = schema
            .or_else(|| mapping.and_then(|m| m.schema.clone()))
            .or_else(|| self.default_schema.clone());
        Ok((schema, name))
    }

    fn column_name(&self, owner: &EntityId, member: &MemberId) -> String {
        self.entity(owner.as_str())
            .and_then(|m| m.columns.get(member.as_str()))
            .cloned()
            .unwrap_or_else(|| member.as_str().to_string())
    }
}

fn builtin_constant(owner: &str, member: &str) -> Option<Value> {
    match (owner, member) {
        ("String", "Empty") => Some(Value::String(String::new())),
        ("Guid", "Empty") => Some(Value::Guid(uuid::Uuid::nil())),
        ("Int16", "MinValue") => Some(Value::Int(i16::MIN as i64)),
        ("Int16", "MaxValue") => Some(Value::Int(i16::MAX as i64)),
        ("Int32", "MinValue") => Some(Value::Int(i32::MIN as i64)),
        ("Int32", "MaxValue") => Some(Value::Int(i32::MAX as i64)),
        ("Int64", "MinValue") => Some(Value::Int(i64::MIN)),
        ("Int64", "MaxValue") => Some(Value::Int(i64::MAX)),
        _ => None,
    }
}

/// Bracket-quote an identifier.
pub fn quote_identifier(id: &str) -> String {
    format!("[{}]", id.replace(']', "]]"))
}

/// Resolved table reference of one entity within one compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableAlias {
    pub table_name: String,
    pub schema_name: Option<String>,
    pub alias: String,
}

impl TableAlias {
    /// `[schema].[table]`, or `[table]` when unqualified.
    pub fn qualified_name(&self) -> String {
        qualified_name(self.schema_name.as_deref(), &self.table_name)
    }
}

fn qualified_name(schema: Option<&str>, name: &str) -> String {
    match schema {
        Some(schema) => format!("{}.{}", quote_identifier(schema), quote_identifier(name)),
        None => quote_identifier(name),
    }
}

/// Resolves entities and members for one compile, caching every answer.
///
/// Alias tokens are `_t0`, `_t1`, ... in first-seen order, so the same
/// entity always gets the same token and distinct entities never share one.
#[derive(Debug)]
pub struct TableResolver<'c> {
    catalog: &'c Catalog,
    tables: HashMap<EntityId, TableAlias>,
    columns: HashMap<(EntityId, MemberId), String>,
    ctes: HashSet<EntityId>,
}

impl<'c> TableResolver<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            tables: HashMap::new(),
            columns: HashMap::new(),
            ctes: HashSet::new(),
        }
    }

    /// Mark an entity as a CTE; it then resolves without a schema.
    pub fn declare_cte(&mut self, entity: &EntityId) {
        self.ctes.insert(entity.clone());
    }

    pub fn is_cte(&self, entity: &EntityId) -> bool {
        self.ctes.contains(entity)
    }

    pub fn resolve_table(&mut self, entity: &EntityId) -> CompileResult<&TableAlias> {
        if !self.tables.contains_key(entity) {
            let (schema, name) = self.catalog.table_name(entity)?;
            let schema = if self.ctes.contains(entity) { None } else { schema };
            let alias = TableAlias {
                table_name: name,
                schema_name: schema,
                alias: format!("_t{}", self.tables.len()),
            };
            self.tables.insert(entity.clone(), alias);
        }
        Ok(&self.tables[entity])
    }

    pub fn resolve_alias(&mut self, entity: &EntityId) -> CompileResult<String> {
        Ok(self.resolve_table(entity)?.alias.clone())
    }

    /// Qualified name of a stored procedure; procedures take no alias.
    pub fn resolve_procedure(&self, procedure: &EntityId) -> CompileResult<String> {
        let (schema, name) = self.catalog.table_name(procedure)?;
        Ok(qualified_name(schema.as_deref(), &name))
    }

    /// Quoted column name of `member` on `owner`.
    pub fn resolve_column(&mut self, owner: &EntityId, member: &MemberId) -> String {
        let key = (owner.clone(), member.clone());
        if let Some(column) = self.columns.get(&key) {
            return column.clone();
        }
        let column = quote_identifier(&self.catalog.column_name(owner, member));
        self.columns.insert(key, column.clone());
        column
    }

    pub fn constant(&self, owner: &EntityId, member: &MemberId) -> Option<Value> {
        self.catalog.constant(owner, member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_toml_str(
            r#"
            default_schema = "dbo"

            [entities.OrderDetail]
            table = "[Sales].[Order Details]"
            columns = { UnitPrice = "Unit Price" }

            [entities.Customer]
            table = "Customers"

            [constants.Paging]
            Size = { Int = 25 }
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_alias_stable_and_injective() {
        let catalog = catalog();
        let mut resolver = TableResolver::new(&catalog);
        let a = resolver.resolve_alias(&EntityId::new("Customer")).unwrap();
        let b = resolver.resolve_alias(&EntityId::new("OrderDetail")).unwrap();
        let a_again = resolver.resolve_alias(&EntityId::new("Customer")).unwrap();
        assert_eq!(a, "_t0");
        assert_eq!(b, "_t1");
        assert_eq!(a, a_again);
    }

    #[test]
    fn test_table_mapping() {
        let catalog = catalog();
        let mut resolver = TableResolver::new(&catalog);
        let details = resolver.resolve_table(&EntityId::new("OrderDetail")).unwrap().clone();
        assert_eq!(details.qualified_name(), "[Sales].[Order Details]");
        let customers = resolver.resolve_table(&EntityId::new("Customer")).unwrap().clone();
        assert_eq!(customers.qualified_name(), "[dbo].[Customers]");
        let unmapped = resolver.resolve_table(&EntityId::new("Product")).unwrap().clone();
        assert_eq!(unmapped.qualified_name(), "[dbo].[Product]");
    }

    #[test]
    fn test_cte_is_unqualified() {
        let catalog = catalog();
        let mut resolver = TableResolver::new(&catalog);
        let cte = EntityId::new("TopCustomers");
        resolver.declare_cte(&cte);
        assert_eq!(resolver.resolve_table(&cte).unwrap().qualified_name(), "[TopCustomers]");
    }

    #[test]
    fn test_column_mapping() {
        let catalog = catalog();
        let mut resolver = TableResolver::new(&catalog);
        let owner = EntityId::new("OrderDetail");
        assert_eq!(
            resolver.resolve_column(&owner, &MemberId::new("UnitPrice")),
            "[Unit Price]"
        );
        assert_eq!(
            resolver.resolve_column(&owner, &MemberId::new("Quantity")),
            "[Quantity]"
        );
    }

    #[test]
    fn test_constants() {
        let catalog = catalog();
        assert_eq!(
            catalog.constant(&EntityId::new("Paging"), &MemberId::new("Size")),
            Some(Value::Int(25))
        );
        assert_eq!(
            catalog.constant(&EntityId::new("String"), &MemberId::new("Empty")),
            Some(Value::String(String::new()))
        );
        assert_eq!(
            catalog.constant(&EntityId::new("Paging"), &MemberId::new("Missing")),
            None
        );
    }

    #[test]
    fn test_invalid_table_rejected() {
        let result = Catalog::from_toml_str(
            r#"
            [entities.Broken]
            table = "dbo.Products extra"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unparsable_mapping_fails_resolution() {
        let mut catalog = Catalog::new();
        catalog.add_entity(
            "Order",
            EntityMapping {
                table: Some("bad name here".to_string()),
                ..EntityMapping::default()
            },
        );
        let mut resolver = TableResolver::new(&catalog);
        assert_eq!(
            resolver.resolve_table(&EntityId::new("Order")).unwrap_err(),
            CompileError::InvalidTableName {
                entity: EntityId::new("Order"),
                table: "bad name here".to_string(),
            }
        );
        assert!(resolver.resolve_procedure(&EntityId::new("Order")).is_err());
    }

    #[test]
    fn test_procedure_takes_no_alias() {
        let catalog = catalog();
        let mut resolver = TableResolver::new(&catalog);
        assert_eq!(
            resolver.resolve_procedure(&EntityId::new("GetOrders")).unwrap(),
            "[dbo].[GetOrders]"
        );
        assert_eq!(resolver.resolve_alias(&EntityId::new("Order")).unwrap(), "_t0");
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("a]b"), "[a]]b]");
    }
}
