use crate::definition::{ResolveFn, ScalarFn, DEFAULT_DEPRECATION_REASON};
use crate::value::Value;
use bumpalo::collections::Vec;
use bumpalo::Bump;
use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::HashMap;
use std::cell::OnceCell;
use std::{fmt, ptr};

/// Names of the scalars that every schema contains without registering them.
pub const BUILTIN_SCALARS: [&str; 5] = ["String", "ID", "Boolean", "Int", "Float"];

static STRING_TYPE: SchemaScalar<'static> = SchemaScalar::builtin("String");
static ID_TYPE: SchemaScalar<'static> = SchemaScalar::builtin("ID");
static BOOLEAN_TYPE: SchemaScalar<'static> = SchemaScalar::builtin("Boolean");
static INT_TYPE: SchemaScalar<'static> = SchemaScalar::builtin("Int");
static FLOAT_TYPE: SchemaScalar<'static> = SchemaScalar::builtin("Float");

/// Returns the process-wide node of a built-in scalar.
#[inline]
pub fn builtin_scalar(name: &str) -> Option<&'static SchemaScalar<'static>> {
    match name {
        "String" => Some(&STRING_TYPE),
        "ID" => Some(&ID_TYPE),
        "Boolean" => Some(&BOOLEAN_TYPE),
        "Int" => Some(&INT_TYPE),
        "Float" => Some(&FLOAT_TYPE),
        _ => None,
    }
}

#[inline]
pub fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.contains(&name)
}

/// The two root operation types every schema must define.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    /// Returns the name the root object type must be registered under.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        match self {
            OperationKind::Query => "Query",
            OperationKind::Mutation => "Mutation",
        }
    }
}

/// The kind of a named type.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TypeKind {
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    Scalar,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TypeKind::Object => "an object type",
            TypeKind::Interface => "an interface type",
            TypeKind::Union => "a union type",
            TypeKind::Enum => "an enum type",
            TypeKind::InputObject => "an input object type",
            TypeKind::Scalar => "a scalar type",
        })
    }
}

/// Schema Definition
///
/// A schema is the terminal result of a build. It holds every registered type as a linked node,
/// in registration order, and the two root object types. A schema is never mutated after it has
/// been built.
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
#[derive(Debug)]
pub struct Schema<'a> {
    pub(crate) query_type: &'a SchemaObject<'a>,
    pub(crate) mutation_type: &'a SchemaObject<'a>,
    pub(crate) types: Vec<'a, SchemaType<'a>>,
    pub(crate) type_map: HashMap<&'a str, SchemaType<'a>, DefaultHashBuilder, &'a Bump>,
}

impl<'a> Schema<'a> {
    /// Returns the root object type for query operations
    #[inline]
    pub fn query_type(&self) -> &'a SchemaObject<'a> {
        self.query_type
    }

    /// Returns the root object type for mutation operations
    #[inline]
    pub fn mutation_type(&self) -> &'a SchemaObject<'a> {
        self.mutation_type
    }

    /// Returns the appropriate object type depending on the passed operation kind
    #[inline]
    pub fn get_root_type(&self, operation_kind: OperationKind) -> &'a SchemaObject<'a> {
        match operation_kind {
            OperationKind::Query => self.query_type,
            OperationKind::Mutation => self.mutation_type,
        }
    }

    /// Retrieves a type by name from the registered types or the built-in scalars.
    #[inline]
    pub fn get_type(&self, name: &str) -> Option<SchemaType<'a>> {
        self.type_map
            .get(name)
            .copied()
            .or_else(|| builtin_scalar(name).map(SchemaType::Scalar))
    }

    /// Iterates over all registered types in registration order. Built-in scalars aren't
    /// included.
    pub fn types(&self) -> impl Iterator<Item = SchemaType<'a>> + '_ {
        self.types.iter().copied()
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Checks whether a given type is a sub type of another.
    ///
    /// This is typically used for return types of fields. A return type may be any given sub type
    /// of the return type of said field.
    pub fn is_sub_type(&self, abstract_type: SchemaType<'a>, sub_type: SchemaType<'a>) -> bool {
        match abstract_type {
            SchemaType::Union(schema_union) => schema_union.is_sub_type(sub_type),
            SchemaType::Interface(schema_interface) => schema_interface.is_sub_type(sub_type),
            SchemaType::Object(schema_object) => {
                matches!(sub_type, SchemaType::Object(sub_object) if ptr::eq(sub_object, schema_object))
            }
            _ => false,
        }
    }

    /// Iterates over the object types that may be returned in place of a union or interface.
    pub fn possible_types(
        &self,
        abstract_type: SchemaType<'a>,
    ) -> impl Iterator<Item = &'a SchemaObject<'a>> + '_ {
        self.types.iter().filter_map(move |schema_type| match schema_type {
            SchemaType::Object(object) if self.is_sub_type(abstract_type, *schema_type) => {
                Some(*object)
            }
            _ => None,
        })
    }
}

/// Generic trait for any schema type that implements fields
pub trait SchemaFields<'a>: Sized {
    /// Get all fields in declaration order
    fn get_fields(&self) -> &[SchemaField<'a>];

    /// Get a known field by name
    fn get_field(&self, name: &str) -> Option<&SchemaField<'a>> {
        self.get_fields().iter().find(|field| field.name == name)
    }
}

/// Generic trait for any schema type that implements interfaces
pub trait SchemaInterfaces<'a>: Sized {
    /// Get list of implemented [SchemaInterface]s
    fn get_interfaces(&self) -> &[&'a SchemaInterface<'a>];

    /// Checks whether this type declares to implement the given interface
    #[inline]
    fn implements_interface(&self, schema_interface: &SchemaInterface<'a>) -> bool {
        self.get_interfaces()
            .iter()
            .any(|interface| ptr::eq(*interface, schema_interface))
    }
}

/// Generic trait for any schema type that has a list of possible object types
pub trait SchemaPossibleTypes<'a>: Sized {
    /// Get list of possible [SchemaObject] types
    fn get_possible_types(&self) -> &[&'a SchemaObject<'a>];

    /// Get a specific possible type by name if it exists on the type
    #[inline]
    fn get_possible_type(&self, name: &str) -> Option<&'a SchemaObject<'a>> {
        self.get_possible_types()
            .iter()
            .find(|possible_type| possible_type.name == name)
            .copied()
    }

    /// Checks whether given [SchemaObject] is a possible subtype
    #[inline]
    fn is_possible_type(&self, schema_object: &SchemaObject<'a>) -> bool {
        self.get_possible_types()
            .iter()
            .any(|possible_type| ptr::eq(*possible_type, schema_object))
    }
}

/// Generic trait for any schema type that may be a super type of other types
pub trait SchemaSuperType<'a>: Sized {
    /// Checks whether a given type is a sub type of the current super type.
    fn is_sub_type(&self, subtype: SchemaType<'a>) -> bool;
}

/// An Object type definition.
///
/// Most types in GraphQL are objects and define a set of fields and the interfaces they implement.
/// The node exists before its fields and interfaces are linked, which is how objects may refer to
/// themselves or to types that refer back to them.
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
pub struct SchemaObject<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub(crate) fields: OnceCell<Vec<'a, SchemaField<'a>>>,
    pub(crate) interfaces: OnceCell<Vec<'a, &'a SchemaInterface<'a>>>,
}

impl<'a> SchemaObject<'a> {
    #[inline]
    pub(crate) fn new(name: &'a str, description: Option<&'a str>) -> Self {
        SchemaObject {
            name,
            description,
            fields: OnceCell::new(),
            interfaces: OnceCell::new(),
        }
    }
}

impl<'a> SchemaFields<'a> for SchemaObject<'a> {
    #[inline]
    fn get_fields(&self) -> &[SchemaField<'a>] {
        self.fields
            .get()
            .map(|fields| fields.as_slice())
            .unwrap_or_default()
    }
}

impl<'a> SchemaInterfaces<'a> for SchemaObject<'a> {
    #[inline]
    fn get_interfaces(&self) -> &[&'a SchemaInterface<'a>] {
        self.interfaces
            .get()
            .map(|interfaces| interfaces.as_slice())
            .unwrap_or_default()
    }
}

impl<'a> fmt::Debug for SchemaObject<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaObject")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("interfaces", &NamedList(self.get_interfaces()))
            .field("fields", &self.get_fields())
            .finish()
    }
}

/// An Interface type definition.
///
/// Any object or other interfaces may implement one or more interfaces and must then adhere to the
/// definition of this interface. A field that returns an interface as its return type may return
/// any object that implements this interface.
/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
pub struct SchemaInterface<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub(crate) fields: OnceCell<Vec<'a, SchemaField<'a>>>,
    pub(crate) interfaces: OnceCell<Vec<'a, &'a SchemaInterface<'a>>>,
}

impl<'a> SchemaInterface<'a> {
    #[inline]
    pub(crate) fn new(name: &'a str, description: Option<&'a str>) -> Self {
        SchemaInterface {
            name,
            description,
            fields: OnceCell::new(),
            interfaces: OnceCell::new(),
        }
    }
}

impl<'a> SchemaFields<'a> for SchemaInterface<'a> {
    #[inline]
    fn get_fields(&self) -> &[SchemaField<'a>] {
        self.fields
            .get()
            .map(|fields| fields.as_slice())
            .unwrap_or_default()
    }
}

impl<'a> SchemaInterfaces<'a> for SchemaInterface<'a> {
    #[inline]
    fn get_interfaces(&self) -> &[&'a SchemaInterface<'a>] {
        self.interfaces
            .get()
            .map(|interfaces| interfaces.as_slice())
            .unwrap_or_default()
    }
}

impl<'a> SchemaSuperType<'a> for SchemaInterface<'a> {
    #[inline]
    fn is_sub_type(&self, sub_type: SchemaType<'a>) -> bool {
        match sub_type {
            SchemaType::Object(schema_object) => schema_object.implements_interface(self),
            SchemaType::Interface(schema_interface) => schema_interface.implements_interface(self),
            _ => false,
        }
    }
}

impl<'a> fmt::Debug for SchemaInterface<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaInterface")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("interfaces", &NamedList(self.get_interfaces()))
            .field("fields", &self.get_fields())
            .finish()
    }
}

/// An object Field type definition.
///
/// A field is like a function that given its arguments as input values produces an output value.
/// Resolver-backed fields carry the function that computes this value.
/// [Reference](https://spec.graphql.org/October2021/#FieldsDefinition)
#[derive(Debug, Clone)]
pub struct SchemaField<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub deprecation_reason: Option<&'a str>,
    pub arguments: Vec<'a, SchemaInputField<'a>>,
    pub output_type: &'a TypeRef<'a>,
    pub resolve: Option<&'a ResolveFn>,
}

impl<'a> SchemaField<'a> {
    #[inline]
    pub fn get_argument(&self, name: &str) -> Option<&SchemaInputField<'a>> {
        self.arguments.iter().find(|arg| arg.name == name)
    }

    #[inline]
    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }
}

/// An argument of a field, or a field of an input object type.
///
/// [Reference](https://spec.graphql.org/October2021/#InputValueDefinition)
#[derive(Debug, Clone, Copy)]
pub struct SchemaInputField<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub deprecation_reason: Option<&'a str>,
    pub default_value: Option<&'a Value>,
    pub input_type: &'a TypeRef<'a>,
}

impl<'a> SchemaInputField<'a> {
    #[inline]
    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }
}

/// A Union type definition.
///
/// A union contains a list of possible types that can be returned in its stead when its defined as
/// an output type.
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
pub struct SchemaUnion<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub(crate) possible_types: OnceCell<Vec<'a, &'a SchemaObject<'a>>>,
}

impl<'a> SchemaUnion<'a> {
    #[inline]
    pub(crate) fn new(name: &'a str, description: Option<&'a str>) -> Self {
        SchemaUnion {
            name,
            description,
            possible_types: OnceCell::new(),
        }
    }
}

impl<'a> SchemaPossibleTypes<'a> for SchemaUnion<'a> {
    #[inline]
    fn get_possible_types(&self) -> &[&'a SchemaObject<'a>] {
        self.possible_types
            .get()
            .map(|possible_types| possible_types.as_slice())
            .unwrap_or_default()
    }
}

impl<'a> SchemaSuperType<'a> for SchemaUnion<'a> {
    #[inline]
    fn is_sub_type(&self, sub_type: SchemaType<'a>) -> bool {
        if let SchemaType::Object(schema_object) = sub_type {
            self.is_possible_type(schema_object)
        } else {
            false
        }
    }
}

impl<'a> fmt::Debug for SchemaUnion<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaUnion")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("possible_types", &NamedList(self.get_possible_types()))
            .finish()
    }
}

/// A Scalar type definition.
///
/// Scalars represent primitive leaf values in GraphQL that are represented with a specific
/// serializer and deserializer, which makes the values returnable to a GraphQL client or readable
/// by a GraphQL API. The functions of custom scalars are carried over from their definitions as
/// they are.
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, Clone)]
pub struct SchemaScalar<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub specified_by_url: Option<&'a str>,
    pub serialize: Option<&'a ScalarFn>,
    pub parse_value: Option<&'a ScalarFn>,
    pub parse_literal: Option<&'a ScalarFn>,
}

impl<'a> SchemaScalar<'a> {
    const fn builtin(name: &'a str) -> Self {
        SchemaScalar {
            name,
            description: None,
            specified_by_url: None,
            serialize: None,
            parse_value: None,
            parse_literal: None,
        }
    }

    /// Returns whether this is one of the [BUILTIN_SCALARS].
    #[inline]
    pub fn is_builtin(&self) -> bool {
        is_builtin_scalar(self.name)
    }
}

/// An Enum type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enums)
#[derive(Debug, Clone)]
pub struct SchemaEnum<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub values: Vec<'a, SchemaEnumValue<'a>>,
}

impl<'a> SchemaEnum<'a> {
    #[inline]
    pub fn get_value(&self, name: &str) -> Option<&SchemaEnumValue<'a>> {
        self.values.iter().find(|value| value.name == name)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SchemaEnumValue<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub deprecation_reason: Option<&'a str>,
}

/// An Input Object type definition.
///
/// Inputs, such as arguments, may sometimes be nested and accept objects that must adhere to the
/// shape of an Input Object definition. This is often used to represent more complex inputs.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[derive(Debug)]
pub struct SchemaInputObject<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub(crate) fields: OnceCell<Vec<'a, SchemaInputField<'a>>>,
}

impl<'a> SchemaInputObject<'a> {
    #[inline]
    pub(crate) fn new(name: &'a str, description: Option<&'a str>) -> Self {
        SchemaInputObject {
            name,
            description,
            fields: OnceCell::new(),
        }
    }

    /// Get all input fields in declaration order
    #[inline]
    pub fn get_fields(&self) -> &[SchemaInputField<'a>] {
        self.fields
            .get()
            .map(|fields| fields.as_slice())
            .unwrap_or_default()
    }

    #[inline]
    pub fn get_field(&self, name: &str) -> Option<&SchemaInputField<'a>> {
        self.get_fields().iter().find(|field| field.name == name)
    }
}

/// A named type enum that represents all possible GraphQL definition types.
///
/// Two `SchemaType`s are equal only when they refer to the very same node.
/// [Reference](https://spec.graphql.org/October2021/#sec-Types)
#[derive(Debug, Clone, Copy)]
pub enum SchemaType<'a> {
    InputObject(&'a SchemaInputObject<'a>),
    Object(&'a SchemaObject<'a>),
    Union(&'a SchemaUnion<'a>),
    Interface(&'a SchemaInterface<'a>),
    Scalar(&'a SchemaScalar<'a>),
    Enum(&'a SchemaEnum<'a>),
}

impl<'a> SchemaType<'a> {
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            SchemaType::InputObject(x) => x.name,
            SchemaType::Object(x) => x.name,
            SchemaType::Union(x) => x.name,
            SchemaType::Interface(x) => x.name,
            SchemaType::Scalar(x) => x.name,
            SchemaType::Enum(x) => x.name,
        }
    }

    #[inline]
    pub fn kind(&self) -> TypeKind {
        match self {
            SchemaType::InputObject(_) => TypeKind::InputObject,
            SchemaType::Object(_) => TypeKind::Object,
            SchemaType::Union(_) => TypeKind::Union,
            SchemaType::Interface(_) => TypeKind::Interface,
            SchemaType::Scalar(_) => TypeKind::Scalar,
            SchemaType::Enum(_) => TypeKind::Enum,
        }
    }

    pub fn description(&self) -> Option<&'a str> {
        match self {
            SchemaType::InputObject(x) => x.description,
            SchemaType::Object(x) => x.description,
            SchemaType::Union(x) => x.description,
            SchemaType::Interface(x) => x.description,
            SchemaType::Scalar(x) => x.description,
            SchemaType::Enum(x) => x.description,
        }
    }

    pub fn object(&self) -> Option<&'a SchemaObject<'a>> {
        match self {
            SchemaType::Object(x) => Some(x),
            _ => None,
        }
    }

    pub fn input_object(&self) -> Option<&'a SchemaInputObject<'a>> {
        match self {
            SchemaType::InputObject(x) => Some(x),
            _ => None,
        }
    }

    pub fn interface(&self) -> Option<&'a SchemaInterface<'a>> {
        match self {
            SchemaType::Interface(x) => Some(x),
            _ => None,
        }
    }

    pub fn union_type(&self) -> Option<&'a SchemaUnion<'a>> {
        match self {
            SchemaType::Union(x) => Some(x),
            _ => None,
        }
    }

    pub fn enum_type(&self) -> Option<&'a SchemaEnum<'a>> {
        match self {
            SchemaType::Enum(x) => Some(x),
            _ => None,
        }
    }

    pub fn scalar(&self) -> Option<&'a SchemaScalar<'a>> {
        match self {
            SchemaType::Scalar(x) => Some(x),
            _ => None,
        }
    }

    /// Returns whether this type may be used for arguments and input fields.
    #[inline]
    pub fn is_input_type(&self) -> bool {
        matches!(
            self,
            SchemaType::Scalar(_) | SchemaType::Enum(_) | SchemaType::InputObject(_)
        )
    }

    /// Returns whether this type may be returned by fields.
    #[inline]
    pub fn is_output_type(&self) -> bool {
        !matches!(self, SchemaType::InputObject(_))
    }
}

impl<'a> PartialEq for SchemaType<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SchemaType::InputObject(left), SchemaType::InputObject(right)) => ptr::eq(*left, *right),
            (SchemaType::Object(left), SchemaType::Object(right)) => ptr::eq(*left, *right),
            (SchemaType::Union(left), SchemaType::Union(right)) => ptr::eq(*left, *right),
            (SchemaType::Interface(left), SchemaType::Interface(right)) => ptr::eq(*left, *right),
            (SchemaType::Scalar(left), SchemaType::Scalar(right)) => ptr::eq(*left, *right),
            (SchemaType::Enum(left), SchemaType::Enum(right)) => ptr::eq(*left, *right),
            _ => false,
        }
    }
}

impl<'a> From<&'a SchemaObject<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_object: &'a SchemaObject<'a>) -> Self {
        SchemaType::Object(schema_object)
    }
}

impl<'a> From<&'a SchemaInterface<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_interface: &'a SchemaInterface<'a>) -> Self {
        SchemaType::Interface(schema_interface)
    }
}

impl<'a> From<&'a SchemaUnion<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_union: &'a SchemaUnion<'a>) -> Self {
        SchemaType::Union(schema_union)
    }
}

impl<'a> From<&'a SchemaScalar<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_scalar: &'a SchemaScalar<'a>) -> Self {
        SchemaType::Scalar(schema_scalar)
    }
}

impl<'a> From<&'a SchemaEnum<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_enum: &'a SchemaEnum<'a>) -> Self {
        SchemaType::Enum(schema_enum)
    }
}

impl<'a> From<&'a SchemaInputObject<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_input_object: &'a SchemaInputObject<'a>) -> Self {
        SchemaType::InputObject(schema_input_object)
    }
}

/// A linked type reference, wrapping a named type in lists and non-null constraints.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Wrapping-Types)
#[derive(Clone, Copy)]
pub enum TypeRef<'a> {
    Named(SchemaType<'a>),
    List(&'a TypeRef<'a>),
    NonNull(&'a TypeRef<'a>),
}

impl<'a> TypeRef<'a> {
    /// Returns the innermost named type.
    #[inline]
    pub fn of_type(&self) -> SchemaType<'a> {
        match self {
            TypeRef::Named(of_type) => *of_type,
            TypeRef::List(of_type) => of_type.of_type(),
            TypeRef::NonNull(of_type) => of_type.of_type(),
        }
    }

    #[inline]
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    /// Returns whether this is a list, possibly wrapped in a non-null constraint.
    #[inline]
    pub fn is_list(&self) -> bool {
        match self {
            TypeRef::List(_) => true,
            TypeRef::NonNull(of_type) => of_type.is_list(),
            TypeRef::Named(_) => false,
        }
    }
}

/// This implementation is necessary to circuit break circular types.
/// Without this impl, `Debug` would print on and on, overflowing the stack as it's bouncing between types over and over.
impl<'a> fmt::Debug for TypeRef<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(arg0) => f.debug_tuple("Named").field(&arg0.name()).finish(),
            Self::List(arg0) => f.debug_tuple("List").field(arg0).finish(),
            Self::NonNull(arg0) => f.debug_tuple("NonNull").field(arg0).finish(),
        }
    }
}

impl<'a> fmt::Display for TypeRef<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(of_type) => f.write_str(of_type.name()),
            Self::List(of_type) => write!(f, "[{}]", of_type),
            Self::NonNull(of_type) => write!(f, "{}!", of_type),
        }
    }
}

impl<'a> PartialEq for TypeRef<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Named(left), Self::Named(right)) => left == right,
            (Self::List(left), Self::List(right)) => left == right,
            (Self::NonNull(left), Self::NonNull(right)) => left == right,
            _ => false,
        }
    }
}

/// Returns whether a deprecation reason is the one implied by a bare `@deprecated`.
#[inline]
pub(crate) fn is_default_deprecation(reason: &str) -> bool {
    reason == DEFAULT_DEPRECATION_REASON
}

/// Helper trait to print lists of linked types by name only.
trait Named {
    fn name(&self) -> &str;
}

impl<'a> Named for &'a SchemaInterface<'a> {
    fn name(&self) -> &str {
        self.name
    }
}

impl<'a> Named for &'a SchemaObject<'a> {
    fn name(&self) -> &str {
        self.name
    }
}

struct NamedList<'l, T: Named>(&'l [T]);

impl<'l, T: Named> fmt::Debug for NamedList<'l, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|item| item.name()))
            .finish()
    }
}
