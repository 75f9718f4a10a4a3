use super::resolver::{IncompleteSchema, Registry};
use super::schema::*;
use crate::context::SchemaContext;
use crate::definition::TypeDefinition;
use crate::error::{Error, ErrorKind, Result};
use bumpalo::collections::Vec;
use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, HashMap};
use std::sync::Arc;
use tracing::debug;

/// The registry of type definitions a [Schema] is built from.
///
/// A builder is a flat, insertion ordered table of definitions keyed by name. Registering never
/// mutates a builder and instead returns a new one, so a builder may be extended in several
/// directions and each result built on its own. Definitions are shared between builders and are
/// only linked to each other once [SchemaBuilder::build] is called.
///
/// ```
/// use gql_typed::{context::SchemaContext, definition::*, schema::*};
///
/// let builder = SchemaBuilder::new()
///     .register([
///         ObjectDefinition::new("Query")
///             .field("me", FieldDefinition::new(TypeDescriptor::named("User"))),
///         ObjectDefinition::new("Mutation"),
///         ObjectDefinition::new("User")
///             .field("id", FieldDefinition::new(TypeDescriptor::non_null("ID"))),
///     ])
///     .unwrap();
///
/// let ctx = SchemaContext::new();
/// let schema = builder.build(&ctx).unwrap();
/// let me = schema.query_type().get_field("me").unwrap();
/// assert_eq!(me.output_type.of_type(), schema.get_type("User").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    definitions: Registry,
}

impl SchemaBuilder {
    /// Creates a builder without any definitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new builder with the given definitions merged in by name.
    ///
    /// A definition replaces an earlier registered definition of the same name, which keeps its
    /// position in the registration order. Two definitions of the same name within one call, or a
    /// definition named like a built-in scalar, are rejected with [ErrorKind::DuplicateName].
    pub fn register<I, D>(&self, definitions: I) -> Result<SchemaBuilder>
    where
        I: IntoIterator<Item = D>,
        D: Into<TypeDefinition>,
    {
        let mut added = Registry::new();
        for definition in definitions {
            let definition: TypeDefinition = definition.into();
            let name = definition.name().to_owned();
            if is_builtin_scalar(&name) || added.contains_key(&name) {
                return Err(Error::new(ErrorKind::DuplicateName { name }));
            }
            added.insert(name, Arc::new(definition));
        }

        debug!(
            added = added.len(),
            registered = self.definitions.len(),
            "Registering type definitions"
        );

        let mut definitions = self.definitions.clone();
        definitions.extend(added);
        Ok(SchemaBuilder { definitions })
    }

    /// Returns the definition registered under the given name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.definitions.get(name).map(Arc::as_ref)
    }

    /// Returns the number of registered definitions.
    #[inline]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterates over the names of all registered definitions in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.definitions.keys().map(String::as_str)
    }

    /// Links all registered definitions into a [Schema] allocated in the given context.
    ///
    /// Every registered type is materialized, whether or not the root types reach it. The build
    /// fails if any type refers to an unknown name or to a type of the wrong kind, and if `Query`
    /// or `Mutation` isn't an object type. Each call creates an entirely new set of nodes.
    pub fn build<'a>(&'a self, ctx: &'a SchemaContext) -> Result<&'a Schema<'a>> {
        debug!(types = self.definitions.len(), "Building schema");

        let mut incomplete = IncompleteSchema::new(ctx, &self.definitions);
        let mut types = Vec::with_capacity_in(self.definitions.len(), &ctx.arena);
        for name in self.definitions.keys() {
            types.push(incomplete.get_named_type(name)?);
            incomplete.complete()?;
        }

        let type_map = incomplete.assume_complete();
        let query_type = get_root_type(&type_map, OperationKind::Query)?;
        let mutation_type = get_root_type(&type_map, OperationKind::Mutation)?;

        debug!(
            types = types.len(),
            allocated_bytes = ctx.allocated_bytes(),
            "Built schema"
        );

        Ok(ctx.alloc(Schema {
            query_type,
            mutation_type,
            types,
            type_map,
        }))
    }
}

fn get_root_type<'a>(
    type_map: &HashMap<&'a str, SchemaType<'a>, DefaultHashBuilder, &'a Bump>,
    root: OperationKind,
) -> Result<&'a SchemaObject<'a>> {
    match type_map.get(root.type_name()) {
        Some(SchemaType::Object(object)) => Ok(*object),
        found => Err(Error::new(ErrorKind::MissingRootType {
            root,
            found: found.map(SchemaType::kind),
        })),
    }
}
