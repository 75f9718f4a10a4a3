use super::lexer::Token;
use crate::error::{get_location, print_span, Error, Result};
use logos::{Lexer, Logos, Span};
use std::{fmt, str::FromStr};

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

/// Describes a type reference: a named type or a list, either of which may be non-null.
///
/// A descriptor is a finite tree. It only ever names other types, so cycles between types are
/// only possible at the level of named types and never inside of one descriptor.
///
/// In JSON a descriptor is written as `{ "nullable": false, "type": "String" }`, where `type` is
/// either a type name or a nested descriptor for a list's items. A missing `nullable` key is read
/// as `true`.
///
/// Descriptors may also be parsed from and printed as the SDL shorthand:
///
/// ```
/// use gql_typed::definition::TypeDescriptor;
///
/// let descriptor: TypeDescriptor = "[String!]!".parse().unwrap();
/// assert_eq!(
///     descriptor,
///     TypeDescriptor::list(TypeDescriptor::non_null("String")).required()
/// );
/// assert_eq!(descriptor.to_string(), "[String!]!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
pub struct TypeDescriptor {
    #[cfg_attr(feature = "json", serde(default = "nullable_by_default"))]
    pub nullable: bool,
    #[cfg_attr(feature = "json", serde(rename = "type"))]
    pub of_type: DescriptorType,
}

/// The target of a [TypeDescriptor]: either a type name or the descriptor of a list's items.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(untagged))]
pub enum DescriptorType {
    Named(String),
    List(Box<TypeDescriptor>),
}

#[cfg(feature = "json")]
fn nullable_by_default() -> bool {
    true
}

impl TypeDescriptor {
    /// A nullable reference to a named type.
    pub fn named<S: Into<String>>(name: S) -> Self {
        TypeDescriptor {
            nullable: true,
            of_type: DescriptorType::Named(name.into()),
        }
    }

    /// A non-null reference to a named type.
    pub fn non_null<S: Into<String>>(name: S) -> Self {
        Self::named(name).required()
    }

    /// A nullable list of `item`s.
    pub fn list(item: TypeDescriptor) -> Self {
        TypeDescriptor {
            nullable: true,
            of_type: DescriptorType::List(Box::new(item)),
        }
    }

    /// Marks this reference as non-null.
    pub fn required(mut self) -> Self {
        self.nullable = false;
        self
    }

    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self.of_type, DescriptorType::List(_))
    }

    /// Returns the name of the innermost named type.
    pub fn named_type(&self) -> &str {
        match self.of_type {
            DescriptorType::Named(ref name) => name,
            DescriptorType::List(ref item) => item.named_type(),
        }
    }

    /// Parses the SDL shorthand for a type reference, e.g. `[ID!]`.
    pub fn parse(source: &str) -> Result<Self> {
        let mut parser = DescriptorParser::new(source);
        let descriptor = parser.parse_type()?;
        match parser.next() {
            (Token::End, _) => Ok(descriptor),
            (_, span) => Err(parser.error("Unexpected token after type reference", span)),
        }
    }
}

impl FromStr for TypeDescriptor {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        TypeDescriptor::parse(source)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.of_type {
            DescriptorType::Named(ref name) => f.write_str(name)?,
            DescriptorType::List(ref item) => write!(f, "[{}]", item)?,
        }
        if !self.nullable {
            f.write_str("!")?;
        }
        Ok(())
    }
}

struct DescriptorParser<'a> {
    lexer: Lexer<'a, Token<'a>>,
    peek: Option<(Token<'a>, Span)>,
}

impl<'a> DescriptorParser<'a> {
    fn new(source: &'a str) -> Self {
        DescriptorParser {
            lexer: Token::lexer(source),
            peek: None,
        }
    }

    fn next(&mut self) -> (Token<'a>, Span) {
        if let Some(token) = self.peek.take() {
            return token;
        }
        match self.lexer.next() {
            Some(token) => (token, self.lexer.span()),
            None => {
                let end = self.lexer.source().len();
                (Token::End, end..end)
            }
        }
    }

    fn error(&self, message: &str, span: Span) -> Error {
        let source = self.lexer.source();
        Error::syntax(message)
            .at(get_location(source, span.clone()))
            .in_context(|| print_span(source, span))
    }

    fn parse_type(&mut self) -> Result<TypeDescriptor> {
        let descriptor = match self.next() {
            (Token::BracketOpen, _) => {
                let item = self.parse_type()?;
                match self.next() {
                    (Token::BracketClose, _) => TypeDescriptor::list(item),
                    (_, span) => return Err(self.error("Expected closing bracket", span)),
                }
            }
            (Token::Name(name), _) => TypeDescriptor::named(name),
            (_, span) => return Err(self.error("Expected a type name or a list type", span)),
        };

        match self.next() {
            (Token::Exclam, _) => Ok(descriptor.required()),
            token => {
                self.peek = Some(token);
                Ok(descriptor)
            }
        }
    }
}
