//! Errors raised while parsing a RiX program.
//!
//! The parser does not recover: the first error aborts parsing and is
//! returned to the caller. [`ParseError`] is the single error type that
//! crosses that boundary; [`ParseErrorKind`] enumerates the categories the
//! parser can raise, each constructed through a named helper so call sites
//! read like `ParseError::unmatched_delimiter(")", span)` rather than
//! building variants by hand.

use rix_span::Span;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// A parse failure: a message, the kind it was raised under, and the span
/// of the token that triggered it.
///
/// `related` optionally points at an earlier span relevant to the error
/// (e.g. the opening delimiter that was never closed).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub related: Option<(String, Span)>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span, related: None }
    }

    pub fn with_related(kind: ParseErrorKind, span: Span, related_message: impl Into<String>, related_span: Span) -> Self {
        Self { kind, span, related: Some((related_message.into(), related_span)) }
    }

    pub fn unmatched_delimiter(delimiter: impl Into<String>, span: Span) -> Self {
        Self::new(ParseErrorKind::UnmatchedDelimiter { delimiter: delimiter.into() }, span)
    }

    pub fn unmatched_opening(delimiter: impl Into<String>, opened_at: Span, found_at: Span) -> Self {
        Self::with_related(
            ParseErrorKind::UnmatchedDelimiter { delimiter: delimiter.into() },
            found_at,
            "unclosed delimiter opened here",
            opened_at,
        )
    }

    pub fn unexpected_prefix(found: impl Into<String>, span: Span) -> Self {
        Self::new(ParseErrorKind::UnexpectedPrefix { found: found.into() }, span)
    }

    pub fn unexpected_token(expected: impl Into<String>, found: impl Into<String>, span: Span) -> Self {
        Self::new(ParseErrorKind::UnexpectedToken { expected: expected.into(), found: found.into() }, span)
    }

    pub fn consecutive_commas(span: Span) -> Self {
        Self::new(ParseErrorKind::ConsecutiveCommas, span)
    }

    pub fn expected_parameter_name(span: Span) -> Self {
        Self::new(ParseErrorKind::ExpectedParameterName, span)
    }

    pub fn keyword_parameter_needs_default(name: impl Into<String>, span: Span) -> Self {
        Self::new(ParseErrorKind::KeywordParameterNeedsDefault { name: name.into() }, span)
    }

    pub fn pattern_matching_needs_array_syntax(span: Span) -> Self {
        Self::new(ParseErrorKind::PatternMatchingNeedsArraySyntax, span)
    }

    pub fn system_requires_equations_only(span: Span) -> Self {
        Self::new(ParseErrorKind::SystemRequiresEquationsOnly, span)
    }

    pub fn system_requires_semicolons(span: Span) -> Self {
        Self::new(ParseErrorKind::SystemRequiresSemicolons, span)
    }

    pub fn map_requires_key_value_pairs(span: Span) -> Self {
        Self::new(ParseErrorKind::MapRequiresKeyValuePairs, span)
    }

    pub fn cannot_mix_equations(span: Span) -> Self {
        Self::new(ParseErrorKind::CannotMixEquations, span)
    }

    pub fn metadata_key_must_be_identifier_or_string(span: Span) -> Self {
        Self::new(ParseErrorKind::MetadataKeyMustBeIdentifierOrString, span)
    }

    pub fn cannot_mix_array_elements_with_metadata(span: Span) -> Self {
        Self::new(ParseErrorKind::CannotMixArrayElementsWithMetadata, span)
    }

    pub fn cannot_mix_matrix_with_metadata(span: Span) -> Self {
        Self::new(ParseErrorKind::CannotMixMatrixWithMetadata, span)
    }

    pub fn expected_function_name_after_integral(span: Span) -> Self {
        Self::new(ParseErrorKind::ExpectedFunctionNameAfterIntegral, span)
    }

    pub fn expected_variable_name(span: Span) -> Self {
        Self::new(ParseErrorKind::ExpectedVariableName, span)
    }

    pub fn expected_comma_or_closing_bracket(span: Span) -> Self {
        Self::new(ParseErrorKind::ExpectedCommaOrClosingBracket, span)
    }

    pub fn expected_closing_bracket_after_variables(span: Span) -> Self {
        Self::new(ParseErrorKind::ExpectedClosingBracketAfterVariables, span)
    }

    pub fn unmatched_opening_paren(span: Span) -> Self {
        Self::new(ParseErrorKind::UnmatchedOpeningParenInHeader, span)
    }

    pub fn unmatched_closing_paren(span: Span) -> Self {
        Self::new(ParseErrorKind::UnmatchedClosingParenInHeader, span)
    }

    pub fn multiple_parenthetical_groups(span: Span) -> Self {
        Self::new(ParseErrorKind::MultipleParentheticalGroups, span)
    }

    pub fn invalid_header_format(span: Span) -> Self {
        Self::new(ParseErrorKind::InvalidHeaderFormat, span)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.kind, self.span)
    }
}

impl std::error::Error for ParseError {}

/// The specific kind of parse failure, grouped the way the grammar groups
/// its own failure modes: structural, tuple, parameter list, brace
/// classification, array/matrix, calculus, embedded-language header.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("unmatched `{delimiter}`")]
    UnmatchedDelimiter { delimiter: String },

    #[error("unexpected `{found}` in prefix position")]
    UnexpectedPrefix { found: String },

    #[error("expected {expected}, found `{found}`")]
    UnexpectedToken { expected: String, found: String },

    #[error("consecutive commas are not allowed")]
    ConsecutiveCommas,

    #[error("expected a parameter name")]
    ExpectedParameterName,

    #[error("keyword-only parameter `{name}` must have a default value")]
    KeywordParameterNeedsDefault { name: String },

    #[error("pattern matching should use array syntax `[...]`, not brace syntax")]
    PatternMatchingNeedsArraySyntax,

    #[error("system containers must contain only equations, separated by `;`")]
    SystemRequiresEquationsOnly,

    #[error("system containers require `;` separation between equations")]
    SystemRequiresSemicolons,

    #[error("map containers must contain only key-value pairs")]
    MapRequiresKeyValuePairs,

    #[error("cannot mix equations with other assignment types")]
    CannotMixEquations,

    #[error("metadata key must be an identifier or a string")]
    MetadataKeyMustBeIdentifierOrString,

    #[error("cannot mix array elements with metadata")]
    CannotMixArrayElementsWithMetadata,

    #[error("cannot mix matrix/tensor syntax with metadata")]
    CannotMixMatrixWithMetadata,

    #[error("expected a function name after the integral operator")]
    ExpectedFunctionNameAfterIntegral,

    #[error("expected a variable name")]
    ExpectedVariableName,

    #[error("expected `,` or a closing bracket")]
    ExpectedCommaOrClosingBracket,

    #[error("expected a closing bracket after the variable list")]
    ExpectedClosingBracketAfterVariables,

    #[error("unmatched opening parenthesis in embedded-language header")]
    UnmatchedOpeningParenInHeader,

    #[error("unmatched closing parenthesis in embedded-language header")]
    UnmatchedClosingParenInHeader,

    #[error("multiple parenthetical groups in embedded-language header")]
    MultipleParentheticalGroups,

    #[error("invalid embedded-language header format")]
    InvalidHeaderFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_span() {
        let err = ParseError::consecutive_commas(Span::new(3, 4, 1));
        assert_eq!(err.to_string(), "consecutive commas are not allowed (at 1:3-4)");
    }

    #[test]
    fn unmatched_opening_carries_related_span() {
        let err = ParseError::unmatched_opening("(", Span::new(0, 1, 1), Span::new(10, 11, 1));
        let (msg, span) = err.related.unwrap();
        assert_eq!(msg, "unclosed delimiter opened here");
        assert_eq!(span, Span::new(0, 1, 1));
    }
}
