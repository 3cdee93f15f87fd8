//! Embedded-language header parsing (§4.7): given the already-stripped
//! interior of a backtick string, splits it into `language`, optional
//! `context`, and verbatim `body`.

use rix_errors::{ParseError, Result};
use rix_span::Span;

pub struct Header {
    pub language: String,
    pub context: Option<String>,
    pub body: String,
}

/// Finds the header colon: if `content` opens with `(`, the header colon
/// is the first `:` after the matching `)`; otherwise — or if that `(`
/// never finds its matching `)` at all, so there is no "after the close"
/// to search — it is the first `:` in the content at all (§4.7 step 2:
/// "if no such colon or no opening `(`, use the first `:` in the
/// content"). The unmatched-paren case itself is still caught later, in
/// `parse_header`'s step-4 header pass, once `header` is sliced out using
/// this fallback colon.
fn find_header_colon(content: &str) -> Option<usize> {
    let bytes = content.as_bytes();
    if bytes.first() == Some(&b'(') {
        let mut depth = 0i32;
        let mut close_at = None;
        for (i, b) in bytes.iter().enumerate() {
            match *b as char {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        close_at = Some(i);
                        break;
                    }
                }
                _ => {}
            }
        }
        match close_at {
            Some(close_at) => content[close_at + 1..].find(':').map(|off| close_at + 1 + off),
            None => content.find(':'),
        }
    } else {
        content.find(':')
    }
}

/// Parses the interior text of a backtick string into an
/// [`EmbeddedLanguage`](rix_ast::EmbeddedLanguage) header/body pair.
/// `span` is used only to attribute errors to the whole backtick token.
pub fn parse_header(content: &str, span: Span) -> Result<Header> {
    if content.starts_with(':') || !content.contains(':') {
        let body = content.strip_prefix(':').unwrap_or(content);
        return Ok(Header { language: "RiX-String".to_string(), context: None, body: body.to_string() });
    }

    let colon = match find_header_colon(content) {
        Some(c) => c,
        None => {
            let body = content.strip_prefix(':').unwrap_or(content);
            return Ok(Header { language: "RiX-String".to_string(), context: None, body: body.to_string() });
        }
    };

    let header = content[..colon].trim();
    let body = content[colon + 1..].to_string();

    if let Some(open) = header.find('(') {
        let bytes = header.as_bytes();
        let mut depth = 0i32;
        let mut close_idx = None;
        for (i, b) in bytes.iter().enumerate().skip(open) {
            match *b as char {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        close_idx = Some(i);
                        break;
                    }
                }
                _ => {}
            }
        }
        match close_idx {
            None => Err(ParseError::unmatched_opening_paren(span)),
            Some(close) => {
                let trailing = &header[close + 1..];
                if !trailing.is_empty() {
                    if trailing.contains('(') {
                        return Err(ParseError::multiple_parenthetical_groups(span));
                    }
                    return Err(ParseError::invalid_header_format(span));
                }
                let language = header[..open].trim().to_string();
                let context = header[open + 1..close].trim().to_string();
                Ok(Header { language, context: Some(context), body })
            }
        }
    } else if header.contains(')') {
        Err(ParseError::unmatched_closing_paren(span))
    } else {
        Ok(Header { language: header.to_string(), context: None, body })
    }
}
