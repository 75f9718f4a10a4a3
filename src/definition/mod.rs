//! # Declaring Types
//!
//! The `gql_typed::definition` module contains the plain, declarative descriptions of GraphQL
//! types that are registered with a [SchemaBuilder](crate::schema::SchemaBuilder). Definitions
//! refer to other types only by name, using [TypeDescriptor]s, so they may be declared in any
//! order and may refer to each other in cycles.
//!
//! ```
//! use gql_typed::definition::*;
//!
//! let user = ObjectDefinition::new("User")
//!     .field("id", FieldDefinition::new(TypeDescriptor::non_null("ID")))
//!     .field(
//!         "friends",
//!         FieldDefinition::new(TypeDescriptor::list(TypeDescriptor::non_null("User")))
//!             .description("Users this user follows"),
//!     );
//!
//! assert_eq!(user.fields["friends"].of_type.to_string(), "[User!]");
//! ```

#[allow(clippy::module_inception)]
mod definition;
mod descriptor;
mod functions;
mod lexer;

pub use definition::*;
pub use descriptor::*;
pub use functions::*;
