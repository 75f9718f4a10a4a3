//! # Building Schemas
//!
//! The `gql_typed::schema` module links registered [type definitions](crate::definition) into a
//! [Schema]. A [SchemaBuilder] holds the definitions, and [SchemaBuilder::build] resolves every
//! one of them into a node allocated in a [SchemaContext](crate::context::SchemaContext). Types
//! may refer to each other in any order and in cycles; each named type is materialized exactly
//! once per build, so all references to a name point at the same node.
//!
//! ```
//! use gql_typed::{context::SchemaContext, definition::*, schema::*};
//!
//! let builder = SchemaBuilder::new()
//!     .register([
//!         ObjectDefinition::new("Query")
//!             .field("user", FieldDefinition::new(TypeDescriptor::named("User"))),
//!         ObjectDefinition::new("Mutation"),
//!         ObjectDefinition::new("User")
//!             .field("friends", FieldDefinition::new("[User!]".parse().unwrap())),
//!     ])
//!     .unwrap();
//!
//! let ctx = SchemaContext::new();
//! let schema = builder.build(&ctx).unwrap();
//! let user = schema.get_type("User").unwrap().object().unwrap();
//! let friends = user.get_field("friends").unwrap();
//! assert_eq!(friends.output_type.of_type(), SchemaType::Object(user));
//! assert_eq!(friends.output_type.to_string(), "[User!]");
//! ```
//!
//! [More information on the Schema struct.](Schema)

mod builder;
mod printer;
mod resolver;
#[allow(clippy::module_inception)]
pub mod schema;

#[cfg(test)]
mod tests;

pub use builder::SchemaBuilder;
pub use printer::PrintNode;
pub use schema::*;
