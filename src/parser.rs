//! Table name parser using nom.
//!
//! Catalog files name tables in any of the forms SQL Server accepts:
//!
//! ```text
//! Products            -> (None, "Products")
//! dbo.Products        -> (Some("dbo"), "Products")
//! [Sales].[Order Details]
//! ─┬───── ─┬───────────────
//!  │       └── Name (brackets allow spaces; `]]` escapes `]`)
//!  └── Schema
//! ```

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0, none_of},
    combinator::{map, opt},
    multi::many0,
    sequence::{delimited, preceded},
    IResult,
};

use crate::error::ConfigError;

/// A possibly schema-qualified table name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub schema: Option<String>,
    pub name: String,
}

/// Parse a complete table name.
pub fn parse_qualified_name(input: &str) -> Result<QualifiedName, ConfigError> {
    let trimmed = input.trim();

    match qualified_name(trimmed) {
        Ok(("", name)) => Ok(name),
        Ok((remaining, _)) => Err(ConfigError::InvalidTableName {
            name: input.to_string(),
            message: format!("unexpected trailing content: '{}'", remaining),
        }),
        Err(e) => Err(ConfigError::InvalidTableName {
            name: input.to_string(),
            message: format!("parse failed: {:?}", e),
        }),
    }
}

fn qualified_name(input: &str) -> IResult<&str, QualifiedName> {
    let (input, first) = name_part(input)?;
    let (input, second) = opt(preceded(
        delimited(multispace0, char('.'), multispace0),
        name_part,
    ))(input)?;

    let name = match second {
        Some(name) => QualifiedName {
            schema: Some(first),
            name,
        },
        None => QualifiedName {
            schema: None,
            name: first,
        },
    };
    Ok((input, name))
}

fn name_part(input: &str) -> IResult<&str, String> {
    alt((bracketed, plain))(input)
}

/// Parse a plain identifier.
fn plain(input: &str) -> IResult<&str, String> {
    map(
        take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '$' || c == '#' || c == '@'),
        |s: &str| s.to_string(),
    )(input)
}

/// Parse a bracket-quoted identifier.
fn bracketed(input: &str) -> IResult<&str, String> {
    map(
        delimited(
            char('['),
            many0(alt((map(tag("]]"), |_| ']'), none_of("]")))),
            char(']'),
        ),
        |chars: Vec<char>| chars.into_iter().collect(),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        let name = parse_qualified_name("Products").unwrap();
        assert_eq!(name.schema, None);
        assert_eq!(name.name, "Products");
    }

    #[test]
    fn test_schema_qualified() {
        let name = parse_qualified_name("dbo.Products").unwrap();
        assert_eq!(name.schema.as_deref(), Some("dbo"));
        assert_eq!(name.name, "Products");
    }

    #[test]
    fn test_bracketed_with_spaces() {
        let name = parse_qualified_name("[Sales].[Order Details]").unwrap();
        assert_eq!(name.schema.as_deref(), Some("Sales"));
        assert_eq!(name.name, "Order Details");
    }

    #[test]
    fn test_escaped_bracket() {
        let name = parse_qualified_name("[odd]]name]").unwrap();
        assert_eq!(name.name, "odd]name");
    }

    #[test]
    fn test_trailing_garbage() {
        assert!(parse_qualified_name("dbo.Products extra").is_err());
        assert!(parse_qualified_name("").is_err());
    }
}
