use super::*;
use crate::context::SchemaContext;
use crate::definition::*;
use crate::error::{ErrorKind, ExpectedKind};
use crate::value::Value;
use indoc::indoc;
use std::ptr;

fn roots() -> [TypeDefinition; 2] {
    [
        ObjectDefinition::new("Query").into(),
        ObjectDefinition::new("Mutation").into(),
    ]
}

fn field(descriptor: &str) -> FieldDefinition {
    FieldDefinition::new(descriptor.parse().unwrap())
}

fn builder_with<D: Into<TypeDefinition>>(definitions: Vec<D>) -> SchemaBuilder {
    SchemaBuilder::new()
        .register(roots())
        .unwrap()
        .register(definitions)
        .unwrap()
}

fn user_by_id() -> ResolverDefinition {
    ResolverDefinition::new(TypeDescriptor::named("User"), |_, args, _| {
        Ok(args.get("id").cloned().unwrap_or_default())
    })
    .arg(
        "id",
        InputFieldDefinition::new(TypeDescriptor::non_null("ID")).description("user id"),
    )
    .deprecated("use user instead")
}

#[test]
fn materializes_each_name_once() {
    let builder = builder_with(vec![ObjectDefinition::new("User")
        .field("friend", field("User"))
        .field("friends", field("[User!]!"))]);
    let ctx = SchemaContext::new();
    let schema = builder.build(&ctx).unwrap();

    let user = schema.get_type("User").unwrap().object().unwrap();
    let friend = user.get_field("friend").unwrap().output_type.of_type();
    let friends = user.get_field("friends").unwrap().output_type.of_type();
    assert!(ptr::eq(friend.object().unwrap(), user));
    assert!(ptr::eq(friends.object().unwrap(), user));
    assert_eq!(schema.len(), 3);
}

#[test]
fn resolves_mutual_references() {
    let builder = builder_with(vec![
        ObjectDefinition::new("A").field("b", field("B!")),
        ObjectDefinition::new("B").field("a", field("[A]")),
    ]);
    let ctx = SchemaContext::new();
    let schema = builder.build(&ctx).unwrap();

    let a = schema.get_type("A").unwrap().object().unwrap();
    let b = schema.get_type("B").unwrap().object().unwrap();
    let a_to_b = a.get_field("b").unwrap().output_type;
    let b_to_a = b.get_field("a").unwrap().output_type;
    assert!(ptr::eq(a_to_b.of_type().object().unwrap(), b));
    assert!(ptr::eq(b_to_a.of_type().object().unwrap(), a));
    assert!(a_to_b.is_non_null());
    assert!(b_to_a.is_list());
}

#[test]
fn nests_wrappers_in_declared_order() {
    let descriptor = TypeDescriptor {
        nullable: false,
        of_type: DescriptorType::List(Box::new(TypeDescriptor {
            nullable: true,
            of_type: DescriptorType::List(Box::new(TypeDescriptor::non_null("String"))),
        })),
    };
    let builder = builder_with(vec![
        ObjectDefinition::new("Grid").field("cells", FieldDefinition::new(descriptor))
    ]);
    let ctx = SchemaContext::new();
    let schema = builder.build(&ctx).unwrap();

    let grid = schema.get_type("Grid").unwrap().object().unwrap();
    let cells = grid.get_field("cells").unwrap().output_type;
    assert_eq!(cells.to_string(), "[[String!]]!");

    let TypeRef::NonNull(TypeRef::List(TypeRef::List(TypeRef::NonNull(TypeRef::Named(string))))) =
        cells
    else {
        panic!("unexpected wrapping: {:?}", cells);
    };
    assert_eq!(*string, schema.get_type("String").unwrap());
}

#[test]
fn non_null_list_of_non_null_items() {
    let descriptor = TypeDescriptor {
        nullable: false,
        of_type: DescriptorType::List(Box::new(TypeDescriptor::non_null("String"))),
    };
    let builder = builder_with(vec![
        ObjectDefinition::new("Tags").field("names", FieldDefinition::new(descriptor))
    ]);
    let ctx = SchemaContext::new();
    let schema = builder.build(&ctx).unwrap();

    let tags = schema.get_type("Tags").unwrap().object().unwrap();
    let names = tags.get_field("names").unwrap().output_type;
    assert_eq!(names.to_string(), "[String!]!");
    assert!(names.is_list());
    assert!(names.is_non_null());
}

#[test]
fn builtin_scalars_are_shared() {
    let builder = builder_with(vec![ObjectDefinition::new("User").field("id", field("ID"))]);
    let first_ctx = SchemaContext::new();
    let second_ctx = SchemaContext::new();
    let first = builder.build(&first_ctx).unwrap();
    let second = builder.build(&second_ctx).unwrap();

    assert_eq!(user_id_type(first), user_id_type(second));
    assert!(user_id_type(first).scalar().unwrap().is_builtin());
}

fn user_id_type<'a>(schema: &Schema<'a>) -> SchemaType<'a> {
    let user = schema.get_type("User").unwrap().object().unwrap();
    user.get_field("id").unwrap().output_type.of_type()
}

#[test]
fn builds_create_distinct_nodes() {
    let builder = builder_with(Vec::<TypeDefinition>::new());
    let first_ctx = SchemaContext::new();
    let second_ctx = SchemaContext::new();
    let first = builder.build(&first_ctx).unwrap();
    let second = builder.build(&second_ctx).unwrap();
    assert!(!ptr::eq(first.query_type(), second.query_type()));
    assert_ne!(
        SchemaType::Object(first.query_type()),
        SchemaType::Object(second.query_type())
    );
}

#[test]
fn requires_a_mutation_type() {
    let builder = SchemaBuilder::new()
        .register([ObjectDefinition::new("Query")])
        .unwrap();
    let ctx = SchemaContext::new();
    let error = builder.build(&ctx).unwrap_err();
    assert_eq!(
        *error.kind(),
        ErrorKind::MissingRootType {
            root: OperationKind::Mutation,
            found: None,
        }
    );

    let builder = builder
        .register([ScalarDefinition::new("Mutation")])
        .unwrap();
    let error = builder.build(&ctx).unwrap_err();
    assert_eq!(
        error.print(true),
        "Schema Error: Root type \"Mutation\" must be an object type, but is a scalar type"
    );
}

#[test]
fn requires_a_query_type_first() {
    let builder = SchemaBuilder::new()
        .register([TypeDefinition::from(EnumDefinition::new("Query").values(["A"]))])
        .unwrap();
    let ctx = SchemaContext::new();
    let error = builder.build(&ctx).unwrap_err();
    assert_eq!(
        *error.kind(),
        ErrorKind::MissingRootType {
            root: OperationKind::Query,
            found: Some(TypeKind::Enum),
        }
    );
}

#[test]
fn register_leaves_receiver_unchanged() {
    let base = SchemaBuilder::new().register(roots()).unwrap();
    let extended = base
        .register([ObjectDefinition::new("User").field("id", field("ID!"))])
        .unwrap();

    assert_eq!(base.len(), 2);
    assert!(base.get("User").is_none());
    assert_eq!(extended.len(), 3);
    assert_eq!(
        extended.names().collect::<Vec<_>>(),
        ["Query", "Mutation", "User"]
    );
}

#[test]
fn later_registrations_override() {
    let builder = SchemaBuilder::new()
        .register([
            TypeDefinition::from(ObjectDefinition::new("Query")),
            ObjectDefinition::new("User").field("id", field("ID!")).into(),
            ObjectDefinition::new("Mutation").into(),
        ])
        .unwrap()
        .register([ObjectDefinition::new("User").field("name", field("String"))])
        .unwrap();

    assert_eq!(
        builder.names().collect::<Vec<_>>(),
        ["Query", "User", "Mutation"]
    );

    let ctx = SchemaContext::new();
    let schema = builder.build(&ctx).unwrap();
    let user = schema.get_type("User").unwrap().object().unwrap();
    let names: Vec<&str> = user.get_fields().iter().map(|field| field.name).collect();
    assert_eq!(names, ["name"]);
}

#[test]
fn rejects_duplicate_names() {
    let error = SchemaBuilder::new()
        .register([ObjectDefinition::new("User"), ObjectDefinition::new("User")])
        .unwrap_err();
    assert_eq!(
        *error.kind(),
        ErrorKind::DuplicateName {
            name: "User".into()
        }
    );

    let error = SchemaBuilder::new()
        .register([ScalarDefinition::new("String")])
        .unwrap_err();
    assert_eq!(error.message(), "Type \"String\" is defined more than once");
}

#[test]
fn resolver_fields_take_precedence() {
    let resolve = ResolveFn::new(|_, _, _| Ok(Value::from("someone@example.com")));
    let builder = builder_with(vec![ObjectDefinition::new("User")
        .field("email", field("String"))
        .field("name", field("String"))
        .resolver(
            "email",
            ResolverDefinition::with_resolve_fn(TypeDescriptor::non_null("String"), resolve.clone()),
        )]);
    let ctx = SchemaContext::new();
    let schema = builder.build(&ctx).unwrap();

    let user = schema.get_type("User").unwrap().object().unwrap();
    let fields = user.get_fields();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name, "email");
    assert_eq!(fields[0].output_type.to_string(), "String!");
    assert!(fields[0].resolve.unwrap().ptr_eq(&resolve));
    assert!(fields[1].resolve.is_none());
}

#[test]
fn forwards_functions_untouched() {
    let serialize = ScalarFn::new(|value| Ok(value.clone()));
    let builder = builder_with(vec![
        TypeDefinition::from(ScalarDefinition::new("Date").serialize(serialize.clone())),
        ObjectDefinition::new("Event")
            .resolver(
                "at",
                ResolverDefinition::new(TypeDescriptor::named("Date"), |parent, _, _| {
                    Ok(parent.clone())
                }),
            )
            .into(),
    ]);
    let ctx = SchemaContext::new();
    let schema = builder.build(&ctx).unwrap();

    let date = schema.get_type("Date").unwrap().scalar().unwrap();
    assert!(date.serialize.unwrap().ptr_eq(&serialize));
    assert!(date.parse_value.is_none());

    let event = schema.get_type("Event").unwrap().object().unwrap();
    let at = event.get_field("at").unwrap().resolve.unwrap();
    let parent = Value::from("2024-01-01");
    assert_eq!(at.call(&parent, &Arguments::new(), &()), Ok(parent.clone()));
}

#[test]
fn builds_unreachable_types() {
    let builder = builder_with(vec![ObjectDefinition::new("Orphan").field("a", field("Int"))]);
    let ctx = SchemaContext::new();
    let schema = builder.build(&ctx).unwrap();
    let names: Vec<&str> = schema.types().map(|t| t.name()).collect();
    assert_eq!(names, ["Query", "Mutation", "Orphan"]);
}

#[test]
fn reports_unknown_types_where_referenced() {
    let builder = SchemaBuilder::new()
        .register([
            ObjectDefinition::new("Query").field("me", field("User")),
            ObjectDefinition::new("Mutation"),
            ObjectDefinition::new("User").field("friend", field("[Frend]")),
        ])
        .unwrap();
    let ctx = SchemaContext::new();
    let error = builder.build(&ctx).unwrap_err();
    assert_eq!(
        *error.kind(),
        ErrorKind::UnknownType {
            name: "Frend".into()
        }
    );
    assert_eq!(error.context(), Some("field `User.friend`"));
}

#[test]
fn reports_arguments_of_output_types() {
    let builder = builder_with(vec![
        ObjectDefinition::new("User"),
        ObjectDefinition::new("Search").resolver(
            "user",
            ResolverDefinition::new(TypeDescriptor::named("User"), |_, _, _| Ok(Value::Null))
                .arg("by", InputFieldDefinition::new(TypeDescriptor::named("User"))),
        ),
    ]);
    let ctx = SchemaContext::new();
    let error = builder.build(&ctx).unwrap_err();
    assert_eq!(
        *error.kind(),
        ErrorKind::KindMismatch {
            name: "User".into(),
            expected: ExpectedKind::InputType,
            found: TypeKind::Object,
        }
    );
    assert_eq!(
        error.print(true),
        "Schema Error: Type \"User\" must be an input type, but is an object type (in argument `Search.user(by:)`)"
    );
}

#[test]
fn reports_fields_of_input_types() {
    let builder = builder_with(vec![
        TypeDefinition::from(InputDefinition::new("Filter").field(
            "limit",
            InputFieldDefinition::new(TypeDescriptor::named("Int")),
        )),
        ObjectDefinition::new("Page").field("filter", field("Filter")).into(),
    ]);
    let ctx = SchemaContext::new();
    let error = builder.build(&ctx).unwrap_err();
    assert_eq!(
        *error.kind(),
        ErrorKind::KindMismatch {
            name: "Filter".into(),
            expected: ExpectedKind::OutputType,
            found: TypeKind::InputObject,
        }
    );
    assert_eq!(error.context(), Some("field `Page.filter`"));
}

#[test]
fn reports_interfaces_of_the_wrong_kind() {
    let builder = builder_with(vec![
        ObjectDefinition::new("Node"),
        ObjectDefinition::new("User").implements("Node"),
    ]);
    let ctx = SchemaContext::new();
    let error = builder.build(&ctx).unwrap_err();
    assert_eq!(
        *error.kind(),
        ErrorKind::KindMismatch {
            name: "Node".into(),
            expected: ExpectedKind::Exactly(TypeKind::Interface),
            found: TypeKind::Object,
        }
    );
    assert_eq!(error.context(), Some("interfaces of `User`"));
}

#[test]
fn reports_union_members_of_the_wrong_kind() {
    let builder = builder_with(vec![
        TypeDefinition::from(InterfaceDefinition::new("Node")),
        UnionDefinition::new("Result").member("Node").into(),
    ]);
    let ctx = SchemaContext::new();
    let error = builder.build(&ctx).unwrap_err();
    assert_eq!(
        *error.kind(),
        ErrorKind::KindMismatch {
            name: "Node".into(),
            expected: ExpectedKind::Exactly(TypeKind::Object),
            found: TypeKind::Interface,
        }
    );
    assert_eq!(error.context(), Some("members of `Result`"));
}

#[test]
fn links_abstract_types() {
    let builder = builder_with(vec![
        TypeDefinition::from(InterfaceDefinition::new("Node").field("id", field("ID!"))),
        InterfaceDefinition::new("Named")
            .implements("Node")
            .field("id", field("ID!"))
            .field("name", field("String"))
            .into(),
        ObjectDefinition::new("User")
            .implements("Node")
            .implements("Named")
            .field("id", field("ID!"))
            .field("name", field("String"))
            .into(),
        ObjectDefinition::new("Post").field("id", field("ID!")).into(),
        UnionDefinition::new("SearchResult")
            .member("User")
            .member("Post")
            .into(),
    ]);
    let ctx = SchemaContext::new();
    let schema = builder.build(&ctx).unwrap();

    let node = schema.get_type("Node").unwrap();
    let named = schema.get_type("Named").unwrap();
    let user = schema.get_type("User").unwrap();
    let post = schema.get_type("Post").unwrap();
    let search_result = schema.get_type("SearchResult").unwrap();

    assert!(user.object().unwrap().implements_interface(node.interface().unwrap()));
    assert!(schema.is_sub_type(node, user));
    assert!(schema.is_sub_type(node, named));
    assert!(!schema.is_sub_type(node, post));
    assert!(schema.is_sub_type(search_result, post));
    assert!(schema.is_sub_type(user, user));

    let implementations: Vec<&str> =
        schema.possible_types(node).map(|object| object.name).collect();
    assert_eq!(implementations, ["User"]);

    let union_type = search_result.union_type().unwrap();
    assert!(union_type.get_possible_type("Post").is_some());
    assert!(union_type.is_possible_type(user.object().unwrap()));
}

#[test]
fn links_recursive_input_objects() {
    let builder = builder_with(vec![InputDefinition::new("Filter")
        .field(
            "limit",
            InputFieldDefinition::new(TypeDescriptor::named("Int")).default_value(10),
        )
        .field(
            "and",
            InputFieldDefinition::new(TypeDescriptor::list(TypeDescriptor::non_null("Filter"))),
        )]);
    let ctx = SchemaContext::new();
    let schema = builder.build(&ctx).unwrap();

    let filter = schema.get_type("Filter").unwrap().input_object().unwrap();
    let limit = filter.get_field("limit").unwrap();
    assert_eq!(limit.default_value, Some(&Value::Int(10)));
    let and = filter.get_field("and").unwrap();
    assert!(ptr::eq(and.input_type.of_type().input_object().unwrap(), filter));
}

#[test]
fn builds_query_user_and_mutation() {
    let user = ObjectDefinition::new("User")
        .field("id", field("ID!"))
        .field("name", field("String"));
    let query = ObjectDefinition::new("Query").resolver(
        "userById",
        ResolverDefinition::new(TypeDescriptor::named("User"), |_, _, _| Ok(Value::Null))
            .arg("id", InputFieldDefinition::new(TypeDescriptor::non_null("ID"))),
    );
    let builder = SchemaBuilder::new()
        .register([query, user, ObjectDefinition::new("Mutation")])
        .unwrap();
    let ctx = SchemaContext::new();
    let schema = builder.build(&ctx).unwrap();

    assert_eq!(schema.len(), 3);
    assert!(ptr::eq(
        schema.query_type(),
        schema.get_type("Query").unwrap().object().unwrap()
    ));
    assert!(ptr::eq(
        schema.mutation_type(),
        schema.get_type("Mutation").unwrap().object().unwrap()
    ));

    let user_by_id = schema.query_type().get_field("userById").unwrap();
    assert_eq!(user_by_id.arguments.len(), 1);
    assert_eq!(user_by_id.arguments[0].name, "id");
    assert_eq!(user_by_id.arguments[0].input_type.to_string(), "ID!");
    assert_eq!(user_by_id.output_type.to_string(), "User");
    assert_eq!(
        user_by_id.output_type.of_type(),
        schema.get_type("User").unwrap()
    );
}

#[test]
fn end_to_end() {
    let user = ObjectDefinition::new("User")
        .field("id", field("ID!"))
        .field("name", field("String!").description("login name"))
        .resolver(
            "email",
            ResolverDefinition::new(TypeDescriptor::named("String"), |_, _, _| {
                Ok(Value::Null)
            }),
        );
    let query = ObjectDefinition::new("Query").resolver("userById", user_by_id());
    let mutation = ObjectDefinition::new("Mutation");
    let my_enum = EnumDefinition::new("MyEnum")
        .values(["a", "b"])
        .description("tset enum");

    let builder = SchemaBuilder::new()
        .register([query, user, mutation])
        .unwrap()
        .register([my_enum])
        .unwrap();
    let ctx = SchemaContext::new();
    let schema = builder.build(&ctx).unwrap();

    assert_eq!(schema.len(), 4);
    let resolver = schema.query_type().get_field("userById").unwrap();
    assert_eq!(resolver.arguments.len(), 1);
    assert_eq!(resolver.get_argument("id").unwrap().input_type.to_string(), "ID!");
    assert_eq!(resolver.deprecation_reason, Some("use user instead"));
    assert_eq!(
        resolver.output_type.of_type(),
        schema.get_type("User").unwrap()
    );
    assert!(schema.mutation_type().get_fields().is_empty());

    assert_eq!(
        schema.print(),
        indoc! {r#"
            type Query {
              userById(
                """
                user id
                """
                id: ID!
              ): User @deprecated(reason: "use user instead")
            }

            type User {
              id: ID!
              """
              login name
              """
              name: String!
              email: String
            }

            type Mutation

            """
            tset enum
            """
            enum MyEnum {
              a
              b
            }"#}
    );
}

#[test]
fn prints_parseable_sdl() {
    let builder = builder_with(vec![
        TypeDefinition::from(InterfaceDefinition::new("Node").field("id", field("ID!"))),
        ObjectDefinition::new("User")
            .implements("Node")
            .description("A person\nwith an account")
            .field("greeting", field("String").description("Says \"hi\""))
            .field("id", field("ID!"))
            .field("friends", field("[User!]").deprecated(DEFAULT_DEPRECATION_REASON))
            .into(),
        ScalarDefinition::new("Date")
            .specified_by_url("https://tools.ietf.org/html/rfc3339")
            .into(),
        UnionDefinition::new("Search").member("User").into(),
        InputDefinition::new("Filter")
            .field(
                "name",
                InputFieldDefinition::new(TypeDescriptor::named("String"))
                    .default_value("it's \"quoted\""),
            )
            .into(),
    ]);
    let ctx = SchemaContext::new();
    let sdl = builder.build(&ctx).unwrap().print();
    let document = graphql_parser::parse_schema::<&str>(&sdl).unwrap();
    assert_eq!(document.definitions.len(), 7);
}

#[test]
fn prints_descriptions_ending_in_quotes() {
    let builder = builder_with(vec![ObjectDefinition::new("User")
        .description("Says \"hi\"")
        .field("id", field("ID!"))]);
    let ctx = SchemaContext::new();
    let schema = builder.build(&ctx).unwrap();
    let user = schema.get_type("User").unwrap();
    assert_eq!(
        user.print(),
        indoc! {r#"
            """
            Says "hi"
            """
            type User {
              id: ID!
            }"#}
    );

    let sdl = schema.print();
    let document = graphql_parser::parse_schema::<&str>(&sdl).unwrap();
    assert_eq!(document.definitions.len(), 3);
}

#[test]
fn links_long_chains_of_references() {
    const CHAIN: usize = 10_000;
    let chain = (0..CHAIN).map(|index| {
        ObjectDefinition::new(format!("T{}", index))
            .field("next", field(&format!("T{}", (index + 1) % CHAIN)))
    });
    let builder = SchemaBuilder::new()
        .register(roots())
        .unwrap()
        .register(chain)
        .unwrap();
    let ctx = SchemaContext::new();
    let schema = builder.build(&ctx).unwrap();
    assert_eq!(schema.len(), CHAIN + 2);

    let first = schema.get_type("T0").unwrap().object().unwrap();
    let mut current = first;
    for _ in 0..CHAIN {
        current = current
            .get_field("next")
            .unwrap()
            .output_type
            .of_type()
            .object()
            .unwrap();
    }
    assert!(ptr::eq(current, first));
    let last = schema.get_type(&format!("T{}", CHAIN - 1)).unwrap();
    assert_eq!(last.object().unwrap().get_fields()[0].output_type.to_string(), "T0");
}
