use crate::oracle::SystemSymbolOracle;
use crate::token::{Token, TokenKind};
use rix_ast::SystemInfo;
use rix_errors::{ParseError, Result};
use rix_span::Span;

/// The parser's cursor over the token stream, plus the oracle it consults
/// for system-symbol metadata.
///
/// Tokens are stored reversed so the "current + lookahead" window pops
/// from the back in O(1); `bump` is the only place tokens are consumed.
/// There is no backtracking: every lookahead in this parser is either a
/// bounded peek (`look_ahead`) or an explicit pre-scan that does not
/// advance `self.token`/`self.prev_token`.
pub struct ParserContext<'a, O: SystemSymbolOracle> {
    pub(crate) oracle: &'a O,
    /// The full source text, kept only so a composite node's `original`
    /// field can be sliced out by span once its children are known. Token
    /// text itself already carries its own verbatim `original`.
    source: &'a str,
    tokens: Vec<Token>,
    pub(crate) token: Token,
    pub(crate) prev_token: Token,
}

impl<'a, O: SystemSymbolOracle> ParserContext<'a, O> {
    pub fn new(mut tokens: Vec<Token>, source: &'a str, oracle: &'a O) -> Self {
        let end_pos = tokens.last().map(|t| Span::new(t.pos.end, t.pos.end, t.pos.line)).unwrap_or_default();
        if !matches!(tokens.last(), Some(t) if t.kind == TokenKind::End) {
            tokens.push(Token::end(end_pos));
        }
        tokens.reverse();
        let first = tokens.pop().unwrap_or_else(|| Token::end(end_pos));
        ParserContext { oracle, source, tokens, prev_token: first.clone(), token: first }
    }

    /// Slices the verbatim source text covered by `span`. Used to build the
    /// `original` field of every composite node from its merged span.
    pub fn text(&self, span: Span) -> String {
        let start = span.start as usize;
        let end = span.end as usize;
        self.source.get(start..end).unwrap_or_default().to_string()
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Consults the oracle for `name`. The oracle is treated as pure
    /// (§9: "implementers should treat the oracle as pure"), so callers may
    /// look the same name up more than once rather than threading a cache.
    pub(crate) fn oracle_lookup(&self, name: &str) -> SystemInfo {
        self.oracle.lookup(name)
    }

    pub fn prev_token(&self) -> &Token {
        &self.prev_token
    }

    pub fn has_next(&self) -> bool {
        self.token.kind != TokenKind::End
    }

    /// Advances the cursor by one token, synthesizing `End` tokens forever
    /// once the stream is exhausted so callers never have to special-case
    /// running off the end.
    pub fn bump(&mut self) {
        let next = self.tokens.pop().unwrap_or_else(|| Token::end(self.token.pos));
        self.prev_token = std::mem::replace(&mut self.token, next);
    }

    pub fn check_symbol(&self, text: &str) -> bool {
        self.token.is_symbol(text)
    }

    pub fn eat_symbol(&mut self, text: &str) -> bool {
        if self.check_symbol(text) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub fn expect_symbol(&mut self, text: &str) -> Result<Span> {
        if self.check_symbol(text) {
            let span = self.token.pos;
            self.bump();
            Ok(span)
        } else {
            Err(ParseError::unexpected_token(format!("`{text}`"), self.token.original.clone(), self.token.pos))
        }
    }

    /// Like [`Self::expect_symbol`], but for a closing delimiter whose
    /// opener's span is already known — reports `UnmatchedDelimiter`
    /// pointing back at `opened_at` instead of a generic unexpected-token
    /// error (§7: "unmatched `)`, `]`, `}`, `}}`").
    pub fn expect_closing(&mut self, delimiter: &str, opened_at: Span) -> Result<Span> {
        if self.check_symbol(delimiter) {
            let span = self.token.pos;
            self.bump();
            Ok(span)
        } else {
            Err(ParseError::unmatched_opening(delimiter, opened_at, self.token.pos))
        }
    }

    /// Peeks `dist` tokens ahead (0 = current) without consuming anything.
    pub fn look_ahead<R>(&self, dist: usize, func: impl FnOnce(&Token) -> R) -> R {
        if dist == 0 {
            return func(&self.token);
        }
        let len = self.tokens.len();
        match len.checked_sub(dist) {
            Some(idx) => func(&self.tokens[idx]),
            None => func(self.tokens.first().unwrap_or(&self.token)),
        }
    }

    pub fn eat_identifier(&mut self) -> Option<Token> {
        if self.token.kind == TokenKind::Identifier {
            let tok = self.token.clone();
            self.bump();
            Some(tok)
        } else {
            None
        }
    }

    pub fn expect_identifier(&mut self) -> Result<Token> {
        self.eat_identifier().ok_or_else(|| ParseError::unexpected_token("an identifier", self.token.original.clone(), self.token.pos))
    }
}
