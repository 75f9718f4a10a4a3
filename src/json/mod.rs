//! # JSON Support
//!
//! The `gql_typed::json` module loads type definitions from JSON documents and converts between
//! `serde_json` values and this crate's [Value](crate::value::Value)s.
//!
//! Definitions in JSON are an array of objects tagged by their `kind`, which mirror the
//! [definition](crate::definition) structs with camel-cased keys. Resolver-backed fields and
//! scalar functions can't be expressed in JSON and are left empty.
//!
//! ```
//! use gql_typed::{context::SchemaContext, schema::*};
//!
//! let builder = SchemaBuilder::new()
//!     .register_json(r#"[
//!         { "kind": "object", "name": "Query",
//!           "fields": { "hello": { "type": { "nullable": false, "type": "String" } } } },
//!         { "kind": "object", "name": "Mutation" }
//!     ]"#)
//!     .unwrap();
//!
//! let ctx = SchemaContext::new();
//! let schema = builder.build(&ctx).unwrap();
//! assert_eq!(schema.print(), "type Query {\n  hello: String!\n}\n\ntype Mutation");
//! ```
//!
//! - [definitions_from_json] parses a JSON document into [TypeDefinition](crate::definition::TypeDefinition)s.
//! - [ValueToJson] converts a [Value](crate::value::Value) to a [serde_json::Value].
//! - `Value::from` converts a [serde_json::Value] to a [Value](crate::value::Value).

#[cfg(feature = "json")]
extern crate serde_json;

#[cfg(feature = "json")]
extern crate serde;

mod conversion;
mod definitions;

pub use conversion::*;
pub use definitions::*;
