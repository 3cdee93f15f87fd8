//! The oracle adapter: turns a host-supplied `systemLookup` into
//! parser-visible operator descriptors.
//!
//! The oracle itself is an external collaborator (§6) — this module only
//! defines the trait the parser calls through, plus the handful of
//! conveniences every caller needs (a no-op oracle for tests, a blanket
//! impl so a plain closure can serve as an oracle).

pub use rix_ast::{Associativity, Fixity, OperatorDescriptor, SystemInfo, SystemSymbolKind};

/// `systemLookup(name) -> SystemInfo`. Implementations must be total: an
/// unrecognized name returns `SystemInfo::unknown_identifier()`, never an
/// error. The parser treats the oracle as pure and calls it once per
/// identifier token.
pub trait SystemSymbolOracle {
    fn lookup(&self, name: &str) -> SystemInfo;
}

impl<F> SystemSymbolOracle for F
where
    F: Fn(&str) -> SystemInfo,
{
    fn lookup(&self, name: &str) -> SystemInfo {
        self(name)
    }
}

/// An oracle that recognizes nothing; every name comes back as a plain
/// identifier. Useful for parsing expressions with no host-defined
/// operators, and as the default in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullOracle;

impl SystemSymbolOracle for NullOracle {
    fn lookup(&self, _name: &str) -> SystemInfo {
        SystemInfo::unknown_identifier()
    }
}

/// Resolves an `Operator` descriptor's precedence, defaulting to the
/// multiplication level (90) when the oracle omitted it (§6).
pub const ORACLE_DEFAULT_PRECEDENCE: u16 = 90;

pub fn operator_binding(descriptor: &OperatorDescriptor) -> (u16, Associativity, Fixity) {
    (descriptor.precedence.unwrap_or(ORACLE_DEFAULT_PRECEDENCE), descriptor.associativity, descriptor.fixity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_oracle_reports_unknown_identifier() {
        let info = NullOracle.lookup("foo");
        assert!(matches!(info.kind, SystemSymbolKind::Identifier));
        assert!(info.operator.is_none());
    }

    #[test]
    fn closure_oracle_works() {
        let oracle = |name: &str| {
            if name == "AND" {
                SystemInfo {
                    kind: SystemSymbolKind::Operator,
                    operator: Some(OperatorDescriptor { precedence: Some(40), associativity: Associativity::Left, fixity: Fixity::Infix }),
                }
            } else {
                SystemInfo::unknown_identifier()
            }
        };
        let info = SystemSymbolOracle::lookup(&oracle, "AND");
        assert!(info.operator.is_some());
    }

    #[test]
    fn default_precedence_is_multiplication_level() {
        let d = OperatorDescriptor { precedence: None, associativity: Associativity::Left, fixity: Fixity::Infix };
        assert_eq!(operator_binding(&d).0, 90);
    }
}
