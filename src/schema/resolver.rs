use super::schema::*;
use crate::context::SchemaContext;
use crate::definition::*;
use crate::error::{Error, ErrorKind, ExpectedKind, Result};
use bumpalo::collections::Vec;
use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, HashMap};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::trace;

/// Registered definitions by name, in registration order.
pub(crate) type Registry = IndexMap<String, Arc<TypeDefinition>>;

/// The resolver engine of a single build.
///
/// The engine turns [TypeDescriptor]s into linked [TypeRef]s and type names into linked nodes.
/// Every named type is materialized at most once: its node is created, put into the cache, and
/// queued. Its fields, interfaces or members are only linked once [IncompleteSchema::complete]
/// drains the queue, so resolving a name never recurses into another named type and a type that
/// refers back to a type that's still queued finds the cached node.
pub(crate) struct IncompleteSchema<'a> {
    ctx: &'a SchemaContext,
    definitions: &'a Registry,
    types: HashMap<&'a str, SchemaType<'a>, DefaultHashBuilder, &'a Bump>,
    pending: std::vec::Vec<PendingBody<'a>>,
}

/// A cached node whose body hasn't been linked yet, next to the definition it's built from.
#[derive(Clone, Copy)]
pub(crate) enum PendingBody<'a> {
    Object(&'a ObjectDefinition, &'a SchemaObject<'a>),
    Interface(&'a InterfaceDefinition, &'a SchemaInterface<'a>),
    Union(&'a UnionDefinition, &'a SchemaUnion<'a>),
    Input(&'a InputDefinition, &'a SchemaInputObject<'a>),
}

impl<'a> IncompleteSchema<'a> {
    pub(crate) fn new(ctx: &'a SchemaContext, definitions: &'a Registry) -> Self {
        IncompleteSchema {
            ctx,
            definitions,
            types: HashMap::new_in(&ctx.arena),
            pending: std::vec::Vec::new(),
        }
    }

    #[inline]
    fn arena(&self) -> &'a Bump {
        &self.ctx.arena
    }

    /// Resolves a descriptor to a linked type reference, wrapping it in non-null and list types
    /// exactly in the order the descriptor declares them.
    pub(crate) fn get_type(&mut self, descriptor: &'a TypeDescriptor) -> Result<&'a TypeRef<'a>> {
        let ctx = self.ctx;
        let nullable_type = self.get_nullable_type(&descriptor.of_type)?;
        if descriptor.nullable {
            Ok(nullable_type)
        } else {
            Ok(ctx.alloc(TypeRef::NonNull(nullable_type)))
        }
    }

    fn get_nullable_type(&mut self, of_type: &'a DescriptorType) -> Result<&'a TypeRef<'a>> {
        let ctx = self.ctx;
        let type_ref = match of_type {
            DescriptorType::List(item) => TypeRef::List(self.get_type(item)?),
            DescriptorType::Named(name) => TypeRef::Named(self.get_named_type(name)?),
        };
        Ok(ctx.alloc(type_ref))
    }

    /// Resolves a type name to its node, materializing the node on first use.
    pub(crate) fn get_named_type(&mut self, name: &str) -> Result<SchemaType<'a>> {
        if let Some(scalar) = builtin_scalar(name) {
            return Ok(SchemaType::Scalar(scalar));
        }
        if let Some(schema_type) = self.types.get(name) {
            return Ok(*schema_type);
        }

        let definitions = self.definitions;
        let definition = definitions.get(name).ok_or_else(|| {
            Error::new(ErrorKind::UnknownType {
                name: name.to_owned(),
            })
        })?;

        trace!(type_name = name, kind = %definition.kind(), "Materializing type");
        match definition.as_ref() {
            TypeDefinition::Object(object) => self.link(object),
            TypeDefinition::Interface(interface) => self.link(interface),
            TypeDefinition::Scalar(scalar) => self.link(scalar),
            TypeDefinition::Enum(enum_type) => self.link(enum_type),
            TypeDefinition::Input(input) => self.link(input),
            TypeDefinition::Union(union_type) => self.link(union_type),
        }
    }

    /// Creates the node of a definition, caches it, and queues its body for linking.
    fn link<D>(&mut self, definition: &'a D) -> Result<SchemaType<'a>>
    where
        D: BuildSchemaType<'a>,
        SchemaType<'a>: From<&'a D::Node>,
    {
        let ctx = self.ctx;
        let node: &'a D::Node = ctx.alloc(definition.on_create(ctx));
        let schema_type = SchemaType::from(node);
        self.types.insert(definition.type_name(), schema_type);
        if let Some(body) = definition.pending(node) {
            self.pending.push(body);
        }
        Ok(schema_type)
    }

    /// Links the body of every queued node, including nodes that linking itself materializes.
    pub(crate) fn complete(&mut self) -> Result<()> {
        while let Some(body) = self.pending.pop() {
            match body {
                PendingBody::Object(definition, node) => definition.on_populate(node, self)?,
                PendingBody::Interface(definition, node) => definition.on_populate(node, self)?,
                PendingBody::Union(definition, node) => definition.on_populate(node, self)?,
                PendingBody::Input(definition, node) => definition.on_populate(node, self)?,
            }
        }
        Ok(())
    }

    /// Consumes the engine and returns every type materialized so far.
    pub(crate) fn assume_complete(
        self,
    ) -> HashMap<&'a str, SchemaType<'a>, DefaultHashBuilder, &'a Bump> {
        debug_assert!(self.pending.is_empty());
        self.types
    }

    fn get_output_type(&mut self, descriptor: &'a TypeDescriptor) -> Result<&'a TypeRef<'a>> {
        let type_ref = self.get_type(descriptor)?;
        let named_type = type_ref.of_type();
        if named_type.is_output_type() {
            Ok(type_ref)
        } else {
            Err(kind_mismatch(named_type, ExpectedKind::OutputType))
        }
    }

    fn get_input_type(&mut self, descriptor: &'a TypeDescriptor) -> Result<&'a TypeRef<'a>> {
        let type_ref = self.get_type(descriptor)?;
        let named_type = type_ref.of_type();
        if named_type.is_input_type() {
            Ok(type_ref)
        } else {
            Err(kind_mismatch(named_type, ExpectedKind::InputType))
        }
    }

    fn link_interfaces(
        &mut self,
        type_name: &str,
        names: &'a [String],
    ) -> Result<Vec<'a, &'a SchemaInterface<'a>>> {
        let mut interfaces = Vec::with_capacity_in(names.len(), self.arena());
        for name in names {
            let interface = match self.get_named_type(name) {
                Ok(SchemaType::Interface(interface)) => Ok(interface),
                Ok(other) => Err(kind_mismatch(
                    other,
                    ExpectedKind::Exactly(TypeKind::Interface),
                )),
                Err(error) => Err(error),
            }
            .map_err(|error| error.in_context(|| format!("interfaces of `{}`", type_name)))?;
            interfaces.push(interface);
        }
        Ok(interfaces)
    }

    fn link_fields(
        &mut self,
        type_name: &str,
        definitions: &'a IndexMap<String, FieldDefinition>,
    ) -> Result<Vec<'a, SchemaField<'a>>> {
        let mut fields = Vec::with_capacity_in(definitions.len(), self.arena());
        for (name, field) in definitions.iter() {
            let output_type = self
                .get_output_type(&field.of_type)
                .map_err(|error| error.in_context(|| format!("field `{}.{}`", type_name, name)))?;
            fields.push(SchemaField {
                name,
                description: field.description.as_deref(),
                deprecation_reason: field.deprecation_reason.as_deref(),
                arguments: Vec::new_in(self.arena()),
                output_type,
                resolve: None,
            });
        }
        Ok(fields)
    }

    fn link_resolver(
        &mut self,
        type_name: &str,
        name: &'a str,
        resolver: &'a ResolverDefinition,
    ) -> Result<SchemaField<'a>> {
        let output_type = self
            .get_output_type(&resolver.of_type)
            .map_err(|error| error.in_context(|| format!("field `{}.{}`", type_name, name)))?;

        let mut arguments = Vec::with_capacity_in(resolver.args.len(), self.arena());
        for (arg_name, arg) in resolver.args.iter() {
            let argument = self.link_input_field(arg_name, arg).map_err(|error| {
                error.in_context(|| format!("argument `{}.{}({}:)`", type_name, name, arg_name))
            })?;
            arguments.push(argument);
        }

        Ok(SchemaField {
            name,
            description: resolver.description.as_deref(),
            deprecation_reason: resolver.deprecation_reason.as_deref(),
            arguments,
            output_type,
            resolve: Some(&resolver.resolve),
        })
    }

    fn link_input_field(
        &mut self,
        name: &'a str,
        field: &'a InputFieldDefinition,
    ) -> Result<SchemaInputField<'a>> {
        Ok(SchemaInputField {
            name,
            description: field.description.as_deref(),
            deprecation_reason: field.deprecation_reason.as_deref(),
            default_value: field.default_value.as_ref(),
            input_type: self.get_input_type(&field.of_type)?,
        })
    }
}

fn kind_mismatch(found: SchemaType<'_>, expected: ExpectedKind) -> Error {
    Error::new(ErrorKind::KindMismatch {
        name: found.name().to_owned(),
        expected,
        found: found.kind(),
    })
}

/// Materializes one kind of definition in two phases.
///
/// `on_create` returns the node with everything that can't refer to other types, and
/// `on_populate` links the rest once the node is cached. Kinds with a body to link queue it
/// through `pending`.
pub(crate) trait BuildSchemaType<'a> {
    type Node: 'a;

    fn type_name(&'a self) -> &'a str;

    fn on_create(&'a self, ctx: &'a SchemaContext) -> Self::Node;

    fn pending(&'a self, _node: &'a Self::Node) -> Option<PendingBody<'a>> {
        None
    }

    fn on_populate(
        &'a self,
        _node: &'a Self::Node,
        _incomplete: &mut IncompleteSchema<'a>,
    ) -> Result<()> {
        Ok(())
    }
}

impl<'a> BuildSchemaType<'a> for ObjectDefinition {
    type Node = SchemaObject<'a>;

    #[inline]
    fn type_name(&'a self) -> &'a str {
        &self.name
    }

    #[inline]
    fn on_create(&'a self, _ctx: &'a SchemaContext) -> SchemaObject<'a> {
        SchemaObject::new(&self.name, self.description.as_deref())
    }

    #[inline]
    fn pending(&'a self, node: &'a SchemaObject<'a>) -> Option<PendingBody<'a>> {
        Some(PendingBody::Object(self, node))
    }

    fn on_populate(
        &'a self,
        node: &'a SchemaObject<'a>,
        incomplete: &mut IncompleteSchema<'a>,
    ) -> Result<()> {
        let interfaces = incomplete.link_interfaces(&self.name, &self.implements_interfaces)?;
        node.interfaces.get_or_init(|| interfaces);

        let mut fields = incomplete.link_fields(&self.name, &self.fields)?;
        for (name, resolver) in self.field_resolvers.iter() {
            let field = incomplete.link_resolver(&self.name, name, resolver)?;
            match fields.iter_mut().find(|existing| existing.name == name.as_str()) {
                Some(existing) => *existing = field,
                None => fields.push(field),
            }
        }
        node.fields.get_or_init(|| fields);
        Ok(())
    }
}

impl<'a> BuildSchemaType<'a> for InterfaceDefinition {
    type Node = SchemaInterface<'a>;

    #[inline]
    fn type_name(&'a self) -> &'a str {
        &self.name
    }

    #[inline]
    fn on_create(&'a self, _ctx: &'a SchemaContext) -> SchemaInterface<'a> {
        SchemaInterface::new(&self.name, self.description.as_deref())
    }

    #[inline]
    fn pending(&'a self, node: &'a SchemaInterface<'a>) -> Option<PendingBody<'a>> {
        Some(PendingBody::Interface(self, node))
    }

    fn on_populate(
        &'a self,
        node: &'a SchemaInterface<'a>,
        incomplete: &mut IncompleteSchema<'a>,
    ) -> Result<()> {
        let interfaces = incomplete.link_interfaces(&self.name, &self.implements_interfaces)?;
        node.interfaces.get_or_init(|| interfaces);

        let fields = incomplete.link_fields(&self.name, &self.fields)?;
        node.fields.get_or_init(|| fields);
        Ok(())
    }
}

impl<'a> BuildSchemaType<'a> for UnionDefinition {
    type Node = SchemaUnion<'a>;

    #[inline]
    fn type_name(&'a self) -> &'a str {
        &self.name
    }

    #[inline]
    fn on_create(&'a self, _ctx: &'a SchemaContext) -> SchemaUnion<'a> {
        SchemaUnion::new(&self.name, self.description.as_deref())
    }

    #[inline]
    fn pending(&'a self, node: &'a SchemaUnion<'a>) -> Option<PendingBody<'a>> {
        Some(PendingBody::Union(self, node))
    }

    fn on_populate(
        &'a self,
        node: &'a SchemaUnion<'a>,
        incomplete: &mut IncompleteSchema<'a>,
    ) -> Result<()> {
        let mut possible_types = Vec::with_capacity_in(self.types.len(), incomplete.arena());
        for name in self.types.iter() {
            let object = match incomplete.get_named_type(name) {
                Ok(SchemaType::Object(object)) => Ok(object),
                Ok(other) => Err(kind_mismatch(other, ExpectedKind::Exactly(TypeKind::Object))),
                Err(error) => Err(error),
            }
            .map_err(|error| error.in_context(|| format!("members of `{}`", self.name)))?;
            possible_types.push(object);
        }
        node.possible_types.get_or_init(|| possible_types);
        Ok(())
    }
}

impl<'a> BuildSchemaType<'a> for InputDefinition {
    type Node = SchemaInputObject<'a>;

    #[inline]
    fn type_name(&'a self) -> &'a str {
        &self.name
    }

    #[inline]
    fn on_create(&'a self, _ctx: &'a SchemaContext) -> SchemaInputObject<'a> {
        SchemaInputObject::new(&self.name, self.description.as_deref())
    }

    #[inline]
    fn pending(&'a self, node: &'a SchemaInputObject<'a>) -> Option<PendingBody<'a>> {
        Some(PendingBody::Input(self, node))
    }

    fn on_populate(
        &'a self,
        node: &'a SchemaInputObject<'a>,
        incomplete: &mut IncompleteSchema<'a>,
    ) -> Result<()> {
        let mut fields = Vec::with_capacity_in(self.fields.len(), incomplete.arena());
        for (name, field) in self.fields.iter() {
            let input_field = incomplete.link_input_field(name, field).map_err(|error| {
                error.in_context(|| format!("input field `{}.{}`", self.name, name))
            })?;
            fields.push(input_field);
        }
        node.fields.get_or_init(|| fields);
        Ok(())
    }
}

impl<'a> BuildSchemaType<'a> for EnumDefinition {
    type Node = SchemaEnum<'a>;

    #[inline]
    fn type_name(&'a self) -> &'a str {
        &self.name
    }

    fn on_create(&'a self, ctx: &'a SchemaContext) -> SchemaEnum<'a> {
        let mut values = Vec::with_capacity_in(self.values.len(), &ctx.arena);
        for (name, value) in self.values.iter() {
            values.push(SchemaEnumValue {
                name,
                description: value.description.as_deref(),
                deprecation_reason: value.deprecation_reason.as_deref(),
            });
        }
        SchemaEnum {
            name: &self.name,
            description: self.description.as_deref(),
            values,
        }
    }
}

impl<'a> BuildSchemaType<'a> for ScalarDefinition {
    type Node = SchemaScalar<'a>;

    #[inline]
    fn type_name(&'a self) -> &'a str {
        &self.name
    }

    #[inline]
    fn on_create(&'a self, _ctx: &'a SchemaContext) -> SchemaScalar<'a> {
        SchemaScalar {
            name: &self.name,
            description: self.description.as_deref(),
            specified_by_url: self.specified_by_url.as_deref(),
            serialize: self.serialize.as_ref(),
            parse_value: self.parse_value.as_ref(),
            parse_literal: self.parse_literal.as_ref(),
        }
    }
}
