//! A minimal tokenizer used ONLY by this crate's own test suite.
//!
//! The tokenizer is an external collaborator per the parser's contract
//! (§6): the shipped crate never lexes source text. This module exists
//! purely so unit/integration tests can exercise the parser against literal
//! source strings instead of hand-built token vectors, and is compiled
//! only under `#[cfg(test)]`.

#![cfg(test)]

use crate::token::{IdentifierKind, Token, TokenKind, TokenStringKind};
use rix_span::Span;

/// Longest-match-first; order matters within a shared prefix.
const SYMBOLS: &[&str] = &[
    ":=>", ":->", ":=:", ":<=:", ":>=:", ":<:", ":>:", ":=", "=>", "||>", "|>>", "|>?", "|>:", "|>", "|+", "|*", "|:", "|;",
    "|^", "|?", "->", "?<=", "?>=", "?<", "?>", "?=", "<=", ">=", "==", "!=", "//", "/^", "/~", "/%", "**", "..", "{{", "}}",
    "^", "+", "-", "*", "/", "%", "<", ">", "=", "?", ":", ";", ",", "(", ")", "[", "]", "{", "}", "'", ".",
];

pub(crate) fn lex(source: &str) -> Vec<Token> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0usize;
    let mut line = 1u32;

    while i < bytes.len() {
        let c = bytes[i] as char;

        if c == '\n' {
            line += 1;
            i += 1;
            continue;
        }
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c == ';' {
            let start = i;
            let mut j = i;
            while j < bytes.len() && bytes[j] as char == ';' {
                j += 1;
            }
            let count = (j - start) as u32;
            let text = &source[start..j];
            if count >= 2 {
                tokens.push(Token {
                    kind: TokenKind::SemicolonSequence,
                    identifier_kind: None,
                    string_kind: None,
                    value: text.to_string(),
                    place: None,
                    count: Some(count),
                    pos: Span::new(start as u32, j as u32, line),
                    original: text.to_string(),
                });
            } else {
                tokens.push(Token::symbol(";", Span::new(start as u32, j as u32, line)));
            }
            i = j;
            continue;
        }

        if c == '/' && i + 1 < bytes.len() && bytes[i + 1] as char == '/' {
            let start = i;
            let mut j = i;
            while j < bytes.len() && bytes[j] as char != '\n' {
                j += 1;
            }
            push_comment(&mut tokens, &source[start + 2..j], source, start, j, line);
            i = j;
            continue;
        }

        if c == '/' && i + 1 < bytes.len() && bytes[i + 1] as char == '*' {
            let start = i;
            let mut depth = 1i32;
            let mut j = i + 2;
            while j < bytes.len() && depth > 0 {
                if source[j..].starts_with("/*") {
                    depth += 1;
                    j += 2;
                } else if source[j..].starts_with("*/") {
                    depth -= 1;
                    j += 2;
                } else {
                    if bytes[j] as char == '\n' {
                        line += 1;
                    }
                    j += 1;
                }
            }
            let interior_end = j.saturating_sub(2).max(start + 2);
            push_comment(&mut tokens, &source[start + 2..interior_end], source, start, j, line);
            i = j;
            continue;
        }

        if c == '`' {
            let start = i;
            let mut depth = 1i32;
            let mut j = i + 1;
            while j < bytes.len() && depth > 0 {
                match bytes[j] as char {
                    '`' => {
                        depth -= 1;
                        j += 1;
                    }
                    '\n' => {
                        line += 1;
                        j += 1;
                    }
                    _ => j += 1,
                }
            }
            let interior_end = j.saturating_sub(1).max(start + 1);
            let text = &source[start + 1..interior_end];
            tokens.push(Token {
                kind: TokenKind::String,
                identifier_kind: None,
                string_kind: Some(TokenStringKind::Backtick),
                value: text.to_string(),
                place: None,
                count: None,
                pos: Span::new(start as u32, j as u32, line),
                original: source[start..j].to_string(),
            });
            i = j;
            continue;
        }

        if c == '"' || c == '\'' {
            let quote = c;
            let start = i;
            let mut j = i + 1;
            while j < bytes.len() && bytes[j] as char != quote {
                if bytes[j] as char == '\\' && j + 1 < bytes.len() {
                    j += 2;
                } else {
                    j += 1;
                }
            }
            let text = &source[start + 1..j];
            let end = (j + 1).min(bytes.len());
            tokens.push(Token {
                kind: TokenKind::String,
                identifier_kind: None,
                string_kind: Some(TokenStringKind::Quote),
                value: text.to_string(),
                place: None,
                count: None,
                pos: Span::new(start as u32, end as u32, line),
                original: source[start..end].to_string(),
            });
            i = end;
            continue;
        }

        if c.is_ascii_digit() {
            let start = i;
            let mut j = i;
            while j < bytes.len() && (bytes[j] as char).is_ascii_digit() {
                j += 1;
            }
            if j < bytes.len() && bytes[j] as char == '.' && j + 1 < bytes.len() && (bytes[j + 1] as char).is_ascii_digit() {
                j += 1;
                while j < bytes.len() && (bytes[j] as char).is_ascii_digit() {
                    j += 1;
                }
            }
            let text = &source[start..j];
            tokens.push(Token {
                kind: TokenKind::Number,
                identifier_kind: None,
                string_kind: None,
                value: text.to_string(),
                place: None,
                count: None,
                pos: Span::new(start as u32, j as u32, line),
                original: text.to_string(),
            });
            i = j;
            continue;
        }

        if c == '_' || c.is_alphabetic() {
            let start = i;
            let mut j = i;
            while j < bytes.len() && {
                let ch = bytes[j] as char;
                ch == '_' || ch == '\'' || ch.is_alphanumeric()
            } {
                j += 1;
            }
            let text = &source[start..j];
            if let Some(digits) = text.strip_prefix('_') {
                if !digits.is_empty() && digits.chars().all(|d| d.is_ascii_digit()) {
                    let place: i64 = digits.parse().unwrap();
                    tokens.push(Token {
                        kind: TokenKind::PlaceHolder,
                        identifier_kind: None,
                        string_kind: None,
                        value: text.to_string(),
                        place: Some(place),
                        count: None,
                        pos: Span::new(start as u32, j as u32, line),
                        original: text.to_string(),
                    });
                    i = j;
                    continue;
                }
            }
            let is_system = text.chars().next().map(|c| c.is_uppercase()).unwrap_or(false);
            tokens.push(Token {
                kind: TokenKind::Identifier,
                identifier_kind: Some(if is_system { IdentifierKind::System } else { IdentifierKind::User }),
                string_kind: None,
                value: text.to_string(),
                place: None,
                count: None,
                pos: Span::new(start as u32, j as u32, line),
                original: text.to_string(),
            });
            i = j;
            continue;
        }

        let rest = &source[i..];
        if let Some(sym) = SYMBOLS.iter().find(|s| rest.starts_with(**s)) {
            let end = i + sym.len();
            tokens.push(Token::symbol(*sym, Span::new(i as u32, end as u32, line)));
            i = end;
            continue;
        }

        i += 1;
    }

    tokens.push(Token::end(Span::new(bytes.len() as u32, bytes.len() as u32, line)));
    tokens
}

fn push_comment(tokens: &mut Vec<Token>, interior: &str, source: &str, start: usize, end: usize, line: u32) {
    tokens.push(Token {
        kind: TokenKind::String,
        identifier_kind: None,
        string_kind: Some(TokenStringKind::Comment),
        value: interior.to_string(),
        place: None,
        count: None,
        pos: Span::new(start as u32, end as u32, line),
        original: source[start..end].to_string(),
    });
}
