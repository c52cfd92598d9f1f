//! The rewrite pass: traversal, dispatch, and the idempotency guard.
//!
//! The visitor walks every expression top-down. A call whose callee is a
//! recognized name, or a tagged template with a recognized tag, is replaced
//! by the assembled runtime call, and traversal then descends into the
//! replacement so pass-through arguments and substitution values are still
//! processed.
//!
//! Everything the rewriter synthesizes carries `DUMMY_SP`, and any call or
//! tagged template with a dummy span is skipped on entry. Parsed input
//! always has real spans, so the dummy span cleanly separates engine output
//! from user input and keeps the pass from rewriting its own results.

use swc_ecma_ast::{Callee, Expr, Module};
use swc_ecma_visit::{VisitMut, VisitMutWith};

use crate::errors::{RewriteError, RewriteErrors};
use crate::registry;

pub mod builder;

#[cfg(test)]
mod tests;

/// Tree-rewrite visitor for gettext-family calls and tags.
///
/// Collects every usage error it encounters instead of stopping at the
/// first, so one pass can report all offending call sites. A node that
/// errors is left unmodified.
#[derive(Default)]
pub struct GettextRewriter {
    rewritten: usize,
    errors: Vec<RewriteError>,
}

impl GettextRewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes replaced so far.
    pub fn rewritten(&self) -> usize {
        self.rewritten
    }

    /// Usage errors collected so far.
    pub fn errors(&self) -> &[RewriteError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<RewriteError> {
        self.errors
    }

    fn try_rewrite(&self, expr: &Expr) -> Result<Option<Expr>, RewriteError> {
        match expr {
            Expr::Call(call) => {
                // Dummy span: this call is our own output.
                if call.span.is_dummy() {
                    return Ok(None);
                }
                let Callee::Expr(callee) = &call.callee else {
                    return Ok(None);
                };
                let Expr::Ident(callee_ident) = &**callee else {
                    return Ok(None);
                };
                let Some(rule) = registry::lookup(callee_ident.sym.as_str()) else {
                    return Ok(None);
                };
                let Some(build) = rule.call_builder else {
                    return Ok(None);
                };
                build(rule, call).map(Some)
            }
            Expr::TaggedTpl(tagged) => {
                if tagged.span.is_dummy() {
                    return Ok(None);
                }
                let Expr::Ident(tag) = &*tagged.tag else {
                    return Ok(None);
                };
                let Some(rule) = registry::lookup(tag.sym.as_str()) else {
                    return Ok(None);
                };
                let Some(build) = rule.template_builder else {
                    return Ok(None);
                };
                build(rule, tagged).map(Some)
            }
            _ => Ok(None),
        }
    }
}

impl VisitMut for GettextRewriter {
    fn visit_mut_expr(&mut self, expr: &mut Expr) {
        match self.try_rewrite(expr) {
            Ok(Some(replacement)) => {
                *expr = replacement;
                self.rewritten += 1;
            }
            Ok(None) => {}
            Err(err) => self.errors.push(err),
        }

        expr.visit_mut_children_with(self);
    }
}

/// Rewrite every recognized gettext construct in the module.
///
/// Returns the number of replaced nodes. On error the module has been
/// partially rewritten and must be discarded; the collected errors cover
/// every misused call site found in the pass.
pub fn rewrite_module(module: &mut Module) -> Result<usize, RewriteErrors> {
    let mut rewriter = GettextRewriter::new();
    module.visit_mut_with(&mut rewriter);

    if rewriter.errors.is_empty() {
        Ok(rewriter.rewritten)
    } else {
        Err(RewriteErrors::new(rewriter.into_errors()))
    }
}
