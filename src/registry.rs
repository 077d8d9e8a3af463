//! The closed set of diagnostic codes this engine knows how to emit.
//!
//! A code enum carrying a letter prefix used to derive severity, and a plain
//! `Diagnostic { kind, range }` pair built directly by each rule rather than going through a
//! per-rule struct-that-implements-a-trait layer.

use std::fmt;

use crate::position::Range;

/// Severity derived purely from a code's letter prefix, matching the reference linter's
/// category scheme (`C`onvention, `R`efactor, `W`arning, `E`rror).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Convention,
    Refactor,
    Warning,
    Error,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Convention => "convention",
            Severity::Refactor => "refactor",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! define_rules {
    ($($variant:ident => ($code:literal, $symbol:literal, $severity:expr)),+ $(,)?) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Rule {
            $($variant,)+
        }

        impl Rule {
            pub const ALL: &'static [Rule] = &[$(Rule::$variant,)+];

            pub const fn code(self) -> &'static str {
                match self {
                    $(Rule::$variant => $code,)+
                }
            }

            pub const fn symbol(self) -> &'static str {
                match self {
                    $(Rule::$variant => $symbol,)+
                }
            }

            pub const fn severity(self) -> Severity {
                match self {
                    $(Rule::$variant => $severity,)+
                }
            }

            pub fn from_code(code: &str) -> Option<Rule> {
                match code {
                    $($code => Some(Rule::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

define_rules! {
    InitIsGenerator => ("E0100", "init-is-generator", Severity::Error),
    ReturnInInit => ("E0101", "return-in-init", Severity::Error),
    FunctionRedefined => ("E0102", "function-redefined", Severity::Error),
    NotInLoop => ("E0103", "not-in-loop", Severity::Error),
    ReturnOutsideFunction => ("E0104", "return-outside-function", Severity::Error),
    YieldOutsideFunction => ("E0105", "yield-outside-function", Severity::Error),
    ReturnArgInGenerator => ("E0106", "return-arg-in-generator", Severity::Error),
    NonexistentOperator => ("E0107", "nonexistent-operator", Severity::Error),
    DuplicateArgumentName => ("E0108", "duplicate-argument-name", Severity::Error),
    DuplicateKey => ("E0109", "duplicate-key", Severity::Error),
    BadReversedSequence => ("E0111", "bad-reversed-sequence", Severity::Error),
    TooManyStarExpressions => ("E0112", "too-many-star-expressions", Severity::Error),
    NonlocalAndGlobal => ("E0115", "nonlocal-and-global", Severity::Error),
    ContinueNotInLoop => ("E0116", "continue-not-in-loop", Severity::Error),
    NonlocalWithoutBinding => ("E0117", "nonlocal-without-binding", Severity::Error),
    UsedPriorGlobalDeclaration => ("E0118", "used-prior-global-declaration", Severity::Error),
    MisplacedFormatFunction => ("E0119", "misplaced-format-function", Severity::Error),
    NoMethodArgument => ("E0211", "no-method-argument", Severity::Error),
    NoSelfArgument => ("E0213", "no-self-argument", Severity::Error),
    UndefinedVariable => ("E0602", "undefined-variable", Severity::Error),
    PossiblyUsedBeforeAssignment => ("E0606", "possibly-used-before-assignment", Severity::Warning),
    MisplacedBareRaise => ("E0704", "misplaced-bare-raise", Severity::Error),
    NotimplementedRaised => ("E0711", "notimplemented-raised", Severity::Error),
    AwaitOutsideAsync => ("E1142", "await-outside-async", Severity::Error),
    UnparsableFile => ("E0001", "unparsable-file", Severity::Error),
    UnreadableFile => ("E0002", "unreadable-file", Severity::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticKind {
    pub rule: Rule,
    pub message: String,
}

/// A diagnostic tied to a range within a single file; the file itself is attached later by
/// the linter driver, which pairs it with a path into a run-level `Message` (see
/// `src/message/mod.rs`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub range: Range,
}

impl Diagnostic {
    pub fn new(rule: Rule, message: impl Into<String>, range: Range) -> Self {
        Self {
            kind: DiagnosticKind {
                rule,
                message: message.into(),
            },
            range,
        }
    }

    pub const fn rule(&self) -> Rule {
        self.kind.rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_round_trips_through_its_code() {
        for &rule in Rule::ALL {
            assert_eq!(Rule::from_code(rule.code()), Some(rule));
        }
    }

    #[test]
    fn severity_follows_code_prefix() {
        assert_eq!(Rule::DuplicateKey.severity(), Severity::Error);
        assert_eq!(Rule::PossiblyUsedBeforeAssignment.severity(), Severity::Warning);
    }
}
