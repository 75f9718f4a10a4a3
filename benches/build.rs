#[macro_use]
extern crate bencher;

use bencher::Bencher;
use gql_typed::{context::SchemaContext, definition::*, schema::*};

const TYPES: usize = 500;

/// A ring of object types where every type refers to its neighbours and to itself.
fn ring_builder() -> SchemaBuilder {
    let mut query = ObjectDefinition::new("Query");
    let mut definitions = Vec::with_capacity(TYPES + 2);
    for index in 0..TYPES {
        let name = format!("Node{}", index);
        let next = format!("Node{}", (index + 1) % TYPES);
        let previous = format!("Node{}", (index + TYPES - 1) % TYPES);
        query = query.field(
            name.to_lowercase(),
            FieldDefinition::new(TypeDescriptor::named(name.as_str())),
        );
        definitions.push(TypeDefinition::from(
            ObjectDefinition::new(name.as_str())
                .description("A node of the ring")
                .field("id", FieldDefinition::new(TypeDescriptor::non_null("ID")))
                .field("next", FieldDefinition::new(TypeDescriptor::non_null(next)))
                .field(
                    "previous",
                    FieldDefinition::new(TypeDescriptor::named(previous)).deprecated("Use next"),
                )
                .field(
                    "siblings",
                    FieldDefinition::new(TypeDescriptor::list(TypeDescriptor::non_null(name))),
                ),
        ));
    }
    definitions.push(query.into());
    definitions.push(ObjectDefinition::new("Mutation").into());
    SchemaBuilder::new().register(definitions).unwrap()
}

fn gql_typed_build_ring(bench: &mut Bencher) {
    let builder = ring_builder();
    bench.iter(|| {
        let ctx = SchemaContext::new();
        builder.build(&ctx).map(|schema| schema.len()).ok()
    });
}

fn gql_typed_print_ring(bench: &mut Bencher) {
    let builder = ring_builder();
    let ctx = SchemaContext::new();
    let schema = builder.build(&ctx).unwrap();
    bench.iter(|| schema.print());
}

fn gql_typed_register_ring(bench: &mut Bencher) {
    let builder = ring_builder();
    bench.iter(|| {
        builder
            .register([ObjectDefinition::new("Node0")])
            .map(|builder| builder.len())
            .ok()
    });
}

benchmark_group!(
    build,
    gql_typed_build_ring,
    gql_typed_print_ring,
    gql_typed_register_ring
);

benchmark_main!(build);
