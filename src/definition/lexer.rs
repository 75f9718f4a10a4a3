use logos::Logos;

/// Tokens of the SDL type reference shorthand, e.g. `[String!]!`.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub(crate) enum Token<'a> {
    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("!")]
    Exclam,

    #[regex(r"[_a-zA-Z][_0-9a-zA-Z]*", |lex| lex.slice())]
    Name(&'a str),

    #[error]
    #[regex(r"[ ,\t\n\r\f]+", logos::skip)]
    Error,

    /// Token indicates the end of the input
    End,
}
