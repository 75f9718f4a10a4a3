//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's returned by registration, by schema
//! builds, and by the parsers for type references and JSON definitions.

use crate::schema::{OperationKind, TypeKind};
use logos::Span;
use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure.
///
/// The error is split into an [ErrorKind] and a context string. For parsing the context string is
/// populated with a snippet of the source text, while for schema builds it names the field,
/// argument, or type that referenced the offending type.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) kind: ErrorKind,
    pub(crate) location: Option<Location>,
    pub(crate) context: Option<String>,
}

/// What went wrong, independent of where it happened.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// A type reference names a type that's neither registered nor a built-in scalar.
    #[error("Unknown type \"{name}\"")]
    UnknownType { name: String },

    /// A type reference resolved to a type of the wrong kind.
    #[error("Type \"{name}\" must be {expected}, but is {found}")]
    KindMismatch {
        name: String,
        expected: ExpectedKind,
        found: TypeKind,
    },

    /// A root type is absent or isn't an object type. `found` is the kind that was registered
    /// under the root's name, if any.
    #[error("{}", missing_root_message(*root, *found))]
    MissingRootType {
        root: OperationKind,
        found: Option<TypeKind>,
    },

    /// Two definitions share a name.
    #[error("Type \"{name}\" is defined more than once")]
    DuplicateName { name: String },

    /// Input text couldn't be parsed.
    #[error("{message}")]
    Syntax { message: String },
}

fn missing_root_message(root: OperationKind, found: Option<TypeKind>) -> String {
    match found {
        Some(kind) => format!(
            "Root type \"{}\" must be an object type, but is {}",
            root.type_name(),
            kind
        ),
        None => format!("Root type \"{}\" is not defined", root.type_name()),
    }
}

/// The kind of type a reference requires.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ExpectedKind {
    Exactly(TypeKind),
    /// A scalar, enum or input object type.
    InputType,
    /// Any type but an input object type.
    OutputType,
}

impl fmt::Display for ExpectedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedKind::Exactly(kind) => kind.fmt(f),
            ExpectedKind::InputType => f.write_str("an input type"),
            ExpectedKind::OutputType => f.write_str("an output type"),
        }
    }
}

impl Error {
    /// Create a new Error from an [ErrorKind] without location or context.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            location: None,
            context: None,
        }
    }

    /// Create a new Error with a location and a context string.
    pub fn new_with_context<S: Into<String>>(
        kind: ErrorKind,
        location: Option<Location>,
        context: S,
    ) -> Self {
        Self {
            kind,
            location,
            context: Some(context.into()),
        }
    }

    pub(crate) fn syntax<S: Into<String>>(message: S) -> Self {
        Self::new(ErrorKind::Syntax {
            message: message.into(),
        })
    }

    pub(crate) fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Attaches a context string unless one is already present, so the innermost reference
    /// wins when an error travels up through nested type resolutions.
    pub(crate) fn in_context<F: FnOnce() -> String>(mut self, context: F) -> Self {
        if self.context.is_none() {
            self.context = Some(context());
        }
        self
    }

    /// Returns the kind of the current error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Returns the location of the current error.
    pub fn location(&self) -> &Option<Location> {
        &self.location
    }

    /// Returns the context of the current error.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line for syntax errors.
    pub fn print(&self, include_ctx: bool) -> String {
        let formatted = match self.kind {
            ErrorKind::Syntax { .. } => format!("Syntax Error: {}", self.kind),
            _ => format!("Schema Error: {}", self.kind),
        };

        match self.context {
            Some(ref context) if include_ctx => match self.kind {
                ErrorKind::Syntax { .. } => format!("{}\n{}", formatted, context),
                _ => format!("{} (in {})", formatted, context),
            },
            _ => formatted,
        }
    }
}

pub(crate) fn print_span(source: &str, span: Span) -> String {
    let mut out = String::new();
    let start_line = source[..span.start].matches('\n').count() + 1;

    let start = source[..span.start]
        .rfind('\n')
        .and_then(|start| source[..start].rfind('\n'))
        .map_or(0, |idx| idx + 1);

    let end = source[span.end..]
        .find('\n')
        .map_or(source.len(), |idx| idx + span.end);

    let snippet = &source[start..end];
    let line_num_pad = (start_line + snippet.lines().count().max(1) - 1)
        .to_string()
        .len();
    for (index, line) in snippet.lines().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let line_num = (start_line + index).to_string();
        out.push_str(&" ".repeat(line_num_pad - line_num.len() + 1));
        out.push_str(&line_num);
        out.push_str(" | ");
        out.push_str(line);
    }
    if !source[span.start..span.end].contains('\n') {
        let start = source[..span.start].rfind('\n').map_or(0, |idx| idx + 1);
        out.push('\n');
        out.push_str(&" ".repeat(line_num_pad + 1));
        out.push_str(" | ");
        out.push_str(&" ".repeat(span.start - start));
        out.push_str(&"^".repeat((span.end - span.start).max(1)));
    };

    out
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

pub(crate) fn get_location(source: &str, span: Span) -> Location {
    let line = source[..span.start].matches('\n').count() + 1;
    let column = source[..span.start]
        .rfind('\n')
        .map_or(span.start, |idx| span.start - idx - 1);

    Location { line, column }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_schema_errors_with_context() {
        let error = Error::new(ErrorKind::UnknownType {
            name: "Usr".into(),
        })
        .in_context(|| "field `Query.me`".into())
        .in_context(|| "interfaces of `Query`".into());

        assert_eq!(error.print(false), "Schema Error: Unknown type \"Usr\"");
        assert_eq!(
            error.print(true),
            "Schema Error: Unknown type \"Usr\" (in field `Query.me`)"
        );
    }

    #[test]
    fn prints_missing_roots() {
        let missing = Error::new(ErrorKind::MissingRootType {
            root: OperationKind::Mutation,
            found: None,
        });
        assert_eq!(missing.message(), "Root type \"Mutation\" is not defined");

        let mismatched = Error::new(ErrorKind::MissingRootType {
            root: OperationKind::Query,
            found: Some(TypeKind::Scalar),
        });
        assert_eq!(
            mismatched.message(),
            "Root type \"Query\" must be an object type, but is a scalar type"
        );
    }

    #[test]
    fn prints_source_snippets() {
        let source = "[String!";
        let span = 8..8;
        assert_eq!(get_location(source, span.clone()), Location { line: 1, column: 8 });
        assert_eq!(print_span(source, span), " 1 | [String!\n   |         ^");
    }
}
