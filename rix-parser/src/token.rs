use rix_span::Span;
use std::fmt;

/// The coarse category of a token, matching the tokenizer's contract
/// (§3/§6 of the token data model): a pre-lexed stream this parser only
/// consumes, never produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum TokenKind {
    Number,
    String,
    Identifier,
    Symbol,
    PlaceHolder,
    SemicolonSequence,
    End,
}

/// Subkind of an `Identifier` token: whether the oracle recognizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum IdentifierKind {
    User,
    System,
}

/// Subkind of a `String` token. Backtick strings route to the
/// embedded-language header parser rather than becoming a `StringLiteral`
/// node; comments become standalone `Comment` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum TokenStringKind {
    Quote,
    Backtick,
    Comment,
}

/// A single lexical token. `value` holds the literal text for numbers,
/// strings (interior only, delimiters stripped), identifiers, and symbols.
/// `place` is populated only for `PlaceHolder` tokens (`_k`); `count` only
/// for `SemicolonSequence` tokens (run length, always >= 2).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub identifier_kind: Option<IdentifierKind>,
    pub string_kind: Option<TokenStringKind>,
    pub value: String,
    pub place: Option<i64>,
    pub count: Option<u32>,
    pub pos: Span,
    pub original: String,
}

impl Token {
    pub fn end(pos: Span) -> Self {
        Token {
            kind: TokenKind::End,
            identifier_kind: None,
            string_kind: None,
            value: String::new(),
            place: None,
            count: None,
            pos,
            original: String::new(),
        }
    }

    pub fn symbol(value: impl Into<String>, pos: Span) -> Self {
        let value = value.into();
        Token {
            kind: TokenKind::Symbol,
            identifier_kind: None,
            string_kind: None,
            original: value.clone(),
            value,
            place: None,
            count: None,
            pos,
        }
    }

    pub fn is_symbol(&self, text: &str) -> bool {
        self.kind == TokenKind::Symbol && self.value == text
    }

    pub fn is_one_of_symbols(&self, texts: &[&str]) -> bool {
        self.kind == TokenKind::Symbol && texts.contains(&self.value.as_str())
    }

    /// Tokens that terminate an expression without being consumed by it
    /// (§4.1): `;`, `,`, closing brackets, semicolon runs, and comments.
    pub fn is_expression_terminator(&self) -> bool {
        match self.kind {
            TokenKind::End => true,
            TokenKind::SemicolonSequence => true,
            TokenKind::String => self.string_kind == Some(TokenStringKind::Comment),
            TokenKind::Symbol => matches!(self.value.as_str(), ";" | "," | ")" | "]" | "}" | "}}"),
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}
