//! `gql_typed`
//! =========
//!
//! _Declarative GraphQL types, linked into one cycle-safe schema graph._
//!
//! The **`gql_typed`** library follows two goals:
//!
//! - To let GraphQL types be declared as plain data that only refers to other types by name
//! - To link those declarations into a schema without the caller having to order them
//!
//! Types are declared as [definitions](definition), registered with a
//! [SchemaBuilder](schema::SchemaBuilder), and built into a [Schema](schema::Schema) whose nodes
//! live in the arena of a [SchemaContext](context::SchemaContext). Types may refer to themselves
//! and to each other in cycles. Every named type becomes exactly one node per build, so all
//! references to a name are the very same node.
//!
//! This crate doesn't execute queries. Resolvers and custom scalar functions are carried over to
//! the schema untouched, so that an execution engine may call them.
//!
//! [A good place to start learning more about this crate is the `schema` module...](schema)

pub mod context;
pub mod definition;
pub mod error;
pub mod schema;
pub mod value;

pub use bumpalo;

#[cfg(feature = "json")]
pub mod json;
