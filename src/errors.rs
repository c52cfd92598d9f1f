//! Usage-error types for the gettext rewrite pass.
//!
//! Every error here represents a static misuse of a recognized gettext call
//! form: the rewrite of the offending node is abandoned and the whole pass is
//! reported as failed, so a build pipeline can point at the exact source
//! location instead of crashing mid-transform. Names that are not in the
//! registry are never errors; those nodes are simply left alone.

use swc_common::{SourceMap, Span};

/// A 1-indexed line/column position, resolved against a source map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A static misuse of a recognized gettext call form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// A recognized call form was invoked with the wrong number of arguments.
    WrongArgumentCount {
        callee: &'static str,
        expected: usize,
        found: usize,
        span: Span,
    },

    /// An interpolation slot held a computed expression where only a direct
    /// variable reference is permitted (the singular/plural text pair).
    ExpectedIdentifier { callee: &'static str, span: Span },

    /// An argument in a text position had a shape the extractor cannot
    /// process (not a string, template, or tagged template; a spread
    /// argument; or a template segment with an invalid escape).
    UnsupportedArgument {
        callee: &'static str,
        found: &'static str,
        span: Span,
    },
}

impl RewriteError {
    /// The span of the offending node.
    pub fn span(&self) -> Span {
        match self {
            RewriteError::WrongArgumentCount { span, .. }
            | RewriteError::ExpectedIdentifier { span, .. }
            | RewriteError::UnsupportedArgument { span, .. } => *span,
        }
    }

    /// Resolve the error position against the source map the module was
    /// parsed with.
    pub fn location(&self, source_map: &SourceMap) -> SourceLocation {
        let loc = source_map.lookup_char_pos(self.span().lo);
        SourceLocation {
            line: loc.line,
            column: loc.col_display + 1,
        }
    }
}

impl std::fmt::Display for RewriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RewriteError::WrongArgumentCount {
                callee,
                expected,
                found,
                ..
            } => {
                write!(
                    f,
                    "{}() expects {} argument{}, found {}",
                    callee,
                    expected,
                    if *expected == 1 { "" } else { "s" },
                    found
                )
            }
            RewriteError::ExpectedIdentifier { callee, .. } => {
                write!(
                    f,
                    "interpolated values in {}() singular/plural text must be plain variable references",
                    callee
                )
            }
            RewriteError::UnsupportedArgument { callee, found, .. } => {
                write!(f, "unsupported argument to {}(): {}", callee, found)
            }
        }
    }
}

impl std::error::Error for RewriteError {}

/// All usage errors collected during one rewrite pass.
///
/// The rewriter keeps traversing after the first misuse so that a single run
/// reports every offending call site; a non-empty collection means the
/// partially-rewritten tree must be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteErrors(Vec<RewriteError>);

impl RewriteErrors {
    pub fn new(errors: Vec<RewriteError>) -> Self {
        Self(errors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RewriteError> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<RewriteError> {
        self.0
    }
}

impl std::fmt::Display for RewriteErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} gettext rewrite error{}",
            self.0.len(),
            if self.0.len() == 1 { "" } else { "s" }
        )?;
        for (i, err) in self.0.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}", sep, err)?;
        }
        Ok(())
    }
}

impl std::error::Error for RewriteErrors {}
