use super::descriptor::TypeDescriptor;
use super::functions::{Arguments, FieldResult, ResolveFn, ScalarFn};
use crate::schema::TypeKind;
use crate::value::Value;
use indexmap::IndexMap;
use std::any::Any;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

/// The reason printed for a bare `@deprecated` directive.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// A declarative definition of one named type.
///
/// Definitions only name the types they refer to and are linked into a schema graph by
/// [SchemaBuilder::build](crate::schema::SchemaBuilder::build). In JSON the kind of a definition
/// is given by its `kind` key, which is one of `object`, `interface`, `scalar`, `enum`, `input`
/// or `union`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(tag = "kind", rename_all = "lowercase"))]
pub enum TypeDefinition {
    Object(ObjectDefinition),
    Interface(InterfaceDefinition),
    Scalar(ScalarDefinition),
    Enum(EnumDefinition),
    Input(InputDefinition),
    Union(UnionDefinition),
}

impl TypeDefinition {
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Object(x) => &x.name,
            TypeDefinition::Interface(x) => &x.name,
            TypeDefinition::Scalar(x) => &x.name,
            TypeDefinition::Enum(x) => &x.name,
            TypeDefinition::Input(x) => &x.name,
            TypeDefinition::Union(x) => &x.name,
        }
    }

    #[inline]
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeDefinition::Object(_) => TypeKind::Object,
            TypeDefinition::Interface(_) => TypeKind::Interface,
            TypeDefinition::Scalar(_) => TypeKind::Scalar,
            TypeDefinition::Enum(_) => TypeKind::Enum,
            TypeDefinition::Input(_) => TypeKind::InputObject,
            TypeDefinition::Union(_) => TypeKind::Union,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            TypeDefinition::Object(x) => x.description.as_deref(),
            TypeDefinition::Interface(x) => x.description.as_deref(),
            TypeDefinition::Scalar(x) => x.description.as_deref(),
            TypeDefinition::Enum(x) => x.description.as_deref(),
            TypeDefinition::Input(x) => x.description.as_deref(),
            TypeDefinition::Union(x) => x.description.as_deref(),
        }
    }
}

impl From<ObjectDefinition> for TypeDefinition {
    fn from(definition: ObjectDefinition) -> Self {
        TypeDefinition::Object(definition)
    }
}

impl From<InterfaceDefinition> for TypeDefinition {
    fn from(definition: InterfaceDefinition) -> Self {
        TypeDefinition::Interface(definition)
    }
}

impl From<ScalarDefinition> for TypeDefinition {
    fn from(definition: ScalarDefinition) -> Self {
        TypeDefinition::Scalar(definition)
    }
}

impl From<EnumDefinition> for TypeDefinition {
    fn from(definition: EnumDefinition) -> Self {
        TypeDefinition::Enum(definition)
    }
}

impl From<InputDefinition> for TypeDefinition {
    fn from(definition: InputDefinition) -> Self {
        TypeDefinition::Input(definition)
    }
}

impl From<UnionDefinition> for TypeDefinition {
    fn from(definition: UnionDefinition) -> Self {
        TypeDefinition::Union(definition)
    }
}

/// A plain output field of an object or interface type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct FieldDefinition {
    #[cfg_attr(feature = "json", serde(rename = "type"))]
    pub of_type: TypeDescriptor,
    #[cfg_attr(feature = "json", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "json", serde(default, skip_serializing_if = "Option::is_none"))]
    pub deprecation_reason: Option<String>,
}

impl FieldDefinition {
    pub fn new(of_type: TypeDescriptor) -> Self {
        FieldDefinition {
            of_type,
            description: None,
            deprecation_reason: None,
        }
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deprecated<S: Into<String>>(mut self, reason: S) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }
}

/// An argument of a resolver-backed field, or a field of an input object type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct InputFieldDefinition {
    #[cfg_attr(feature = "json", serde(rename = "type"))]
    pub of_type: TypeDescriptor,
    #[cfg_attr(feature = "json", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "json", serde(default, skip_serializing_if = "Option::is_none"))]
    pub deprecation_reason: Option<String>,
    #[cfg_attr(feature = "json", serde(default, skip_serializing_if = "Option::is_none"))]
    pub default_value: Option<Value>,
}

impl InputFieldDefinition {
    pub fn new(of_type: TypeDescriptor) -> Self {
        InputFieldDefinition {
            of_type,
            description: None,
            deprecation_reason: None,
            default_value: None,
        }
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deprecated<S: Into<String>>(mut self, reason: S) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn default_value<V: Into<Value>>(mut self, value: V) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// A resolver-backed field of an object type.
///
/// Resolver-backed fields take arguments and carry the function computing their value. When an
/// object declares a plain field and a resolver-backed field of the same name, the resolver-backed
/// field wins.
#[derive(Debug, Clone)]
pub struct ResolverDefinition {
    pub of_type: TypeDescriptor,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
    pub args: IndexMap<String, InputFieldDefinition>,
    pub resolve: ResolveFn,
}

impl ResolverDefinition {
    pub fn new<F>(of_type: TypeDescriptor, resolve: F) -> Self
    where
        F: Fn(&Value, &Arguments, &dyn Any) -> FieldResult + Send + Sync + 'static,
    {
        Self::with_resolve_fn(of_type, ResolveFn::new(resolve))
    }

    /// Creates a resolver-backed field from an existing, possibly shared, [ResolveFn].
    pub fn with_resolve_fn(of_type: TypeDescriptor, resolve: ResolveFn) -> Self {
        ResolverDefinition {
            of_type,
            description: None,
            deprecation_reason: None,
            args: IndexMap::new(),
            resolve,
        }
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deprecated<S: Into<String>>(mut self, reason: S) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn arg<S: Into<String>>(mut self, name: S, arg: InputFieldDefinition) -> Self {
        self.args.insert(name.into(), arg);
        self
    }
}

/// An object type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug, Clone)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct ObjectDefinition {
    pub name: String,
    #[cfg_attr(feature = "json", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "json", serde(default))]
    pub implements_interfaces: Vec<String>,
    #[cfg_attr(feature = "json", serde(default))]
    pub fields: IndexMap<String, FieldDefinition>,
    /// Functions can't be expressed in JSON, so resolver-backed fields are never (de)serialized.
    #[cfg_attr(feature = "json", serde(skip))]
    pub field_resolvers: IndexMap<String, ResolverDefinition>,
}

impl ObjectDefinition {
    pub fn new<S: Into<String>>(name: S) -> Self {
        ObjectDefinition {
            name: name.into(),
            description: None,
            implements_interfaces: Vec::new(),
            fields: IndexMap::new(),
            field_resolvers: IndexMap::new(),
        }
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn implements<S: Into<String>>(mut self, interface: S) -> Self {
        self.implements_interfaces.push(interface.into());
        self
    }

    pub fn field<S: Into<String>>(mut self, name: S, field: FieldDefinition) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    pub fn resolver<S: Into<String>>(mut self, name: S, resolver: ResolverDefinition) -> Self {
        self.field_resolvers.insert(name.into(), resolver);
        self
    }
}

/// An interface type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct InterfaceDefinition {
    pub name: String,
    #[cfg_attr(feature = "json", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "json", serde(default))]
    pub implements_interfaces: Vec<String>,
    #[cfg_attr(feature = "json", serde(default))]
    pub fields: IndexMap<String, FieldDefinition>,
}

impl InterfaceDefinition {
    pub fn new<S: Into<String>>(name: S) -> Self {
        InterfaceDefinition {
            name: name.into(),
            description: None,
            implements_interfaces: Vec::new(),
            fields: IndexMap::new(),
        }
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn implements<S: Into<String>>(mut self, interface: S) -> Self {
        self.implements_interfaces.push(interface.into());
        self
    }

    pub fn field<S: Into<String>>(mut self, name: S, field: FieldDefinition) -> Self {
        self.fields.insert(name.into(), field);
        self
    }
}

/// A custom scalar type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, Clone)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct ScalarDefinition {
    pub name: String,
    #[cfg_attr(feature = "json", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(
        feature = "json",
        serde(
            default,
            rename = "specifiedByURL",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub specified_by_url: Option<String>,
    #[cfg_attr(feature = "json", serde(skip))]
    pub serialize: Option<ScalarFn>,
    #[cfg_attr(feature = "json", serde(skip))]
    pub parse_value: Option<ScalarFn>,
    #[cfg_attr(feature = "json", serde(skip))]
    pub parse_literal: Option<ScalarFn>,
}

impl ScalarDefinition {
    pub fn new<S: Into<String>>(name: S) -> Self {
        ScalarDefinition {
            name: name.into(),
            description: None,
            specified_by_url: None,
            serialize: None,
            parse_value: None,
            parse_literal: None,
        }
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn specified_by_url<S: Into<String>>(mut self, url: S) -> Self {
        self.specified_by_url = Some(url.into());
        self
    }

    pub fn serialize(mut self, serialize: ScalarFn) -> Self {
        self.serialize = Some(serialize);
        self
    }

    pub fn parse_value(mut self, parse_value: ScalarFn) -> Self {
        self.parse_value = Some(parse_value);
        self
    }

    pub fn parse_literal(mut self, parse_literal: ScalarFn) -> Self {
        self.parse_literal = Some(parse_literal);
        self
    }
}

/// A single value of an enum type definition.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct EnumValueDefinition {
    #[cfg_attr(feature = "json", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "json", serde(default, skip_serializing_if = "Option::is_none"))]
    pub deprecation_reason: Option<String>,
}

impl EnumValueDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deprecated<S: Into<String>>(mut self, reason: S) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }
}

/// An enum type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enums)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct EnumDefinition {
    pub name: String,
    #[cfg_attr(feature = "json", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    pub values: IndexMap<String, EnumValueDefinition>,
}

impl EnumDefinition {
    pub fn new<S: Into<String>>(name: S) -> Self {
        EnumDefinition {
            name: name.into(),
            description: None,
            values: IndexMap::new(),
        }
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn value<S: Into<String>>(mut self, name: S, value: EnumValueDefinition) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Adds several values without descriptions.
    pub fn values<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.values.insert(name.into(), EnumValueDefinition::new());
        }
        self
    }
}

/// An input object type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct InputDefinition {
    pub name: String,
    #[cfg_attr(feature = "json", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    pub fields: IndexMap<String, InputFieldDefinition>,
}

impl InputDefinition {
    pub fn new<S: Into<String>>(name: S) -> Self {
        InputDefinition {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
        }
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field<S: Into<String>>(mut self, name: S, field: InputFieldDefinition) -> Self {
        self.fields.insert(name.into(), field);
        self
    }
}

/// A union type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct UnionDefinition {
    pub name: String,
    #[cfg_attr(feature = "json", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    pub types: Vec<String>,
}

impl UnionDefinition {
    pub fn new<S: Into<String>>(name: S) -> Self {
        UnionDefinition {
            name: name.into(),
            description: None,
            types: Vec::new(),
        }
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn member<S: Into<String>>(mut self, object: S) -> Self {
        self.types.push(object.into());
        self
    }
}
