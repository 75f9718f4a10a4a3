use crate::definition::TypeDefinition;
use crate::error::{print_span, Error, Location, Result};
use crate::schema::SchemaBuilder;

/// Parses a JSON array of kind-tagged type definitions.
///
/// Malformed JSON, or JSON that doesn't describe definitions, results in a syntax error that
/// carries the location of the problem and a snippet of the source.
pub fn definitions_from_json(source: &str) -> Result<Vec<TypeDefinition>> {
    serde_json::from_str(source).map_err(|error| json_error(source, error))
}

impl SchemaBuilder {
    /// Returns a new builder with the definitions of a JSON document merged in.
    ///
    /// This behaves like [SchemaBuilder::register] for the definitions parsed by
    /// [definitions_from_json].
    pub fn register_json(&self, source: &str) -> Result<SchemaBuilder> {
        self.register(definitions_from_json(source)?)
    }
}

fn json_error(source: &str, error: serde_json::Error) -> Error {
    let syntax_error = Error::syntax(error.to_string());
    if error.line() == 0 {
        return syntax_error;
    }

    let location = Location {
        line: error.line(),
        column: error.column().saturating_sub(1),
    };
    let offset = source
        .split_inclusive('\n')
        .take(location.line - 1)
        .map(str::len)
        .sum::<usize>()
        + location.column;
    let offset = offset.min(source.len());
    let syntax_error = syntax_error.at(location);
    if source.is_char_boundary(offset) {
        syntax_error.in_context(|| print_span(source, offset..offset))
    } else {
        syntax_error
    }
}
