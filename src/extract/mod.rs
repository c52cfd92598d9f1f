//! Text extraction from string literals, template literals, and tagged
//! templates.
//!
//! This is where localizable text gets its final shape: interpolation slots
//! become `%(name)s` placeholders, slot expressions are recorded as named
//! substitutions for the runtime `interpolate` call, and the rule's
//! whitespace policy is applied to the assembled text. Raw rules keep the
//! source layout byte-for-byte so translators see exactly what was written;
//! normalized rules collapse whitespace so catalog entries stay on one line.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use swc_common::Spanned;
use swc_ecma_ast::{Expr, Ident, Lit, TaggedTpl, Tpl, TplElement};

use crate::errors::RewriteError;
use crate::registry::{CallShapeRule, lookup};

#[cfg(test)]
mod tests;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// One interpolation slot, keyed for the runtime substitution map.
///
/// The key is the variable name for bare identifier slots, or `value<N>`
/// (1-based slot position) for anything more complex. The value is the
/// original slot expression, moved untouched into the interpolation object
/// so it still evaluates at the call site.
#[derive(Debug, Clone)]
pub struct Substitution {
    pub key: String,
    pub value: Box<Expr>,
}

/// Result of extracting one textual node.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    /// The assembled text, placeholders included, whitespace policy applied.
    pub text: String,
    /// Set when the source was a tagged template whose tag is not one of
    /// ours (e.g. `dedent`): the rebuilt text node keeps that tag so the
    /// host toolchain can still apply it in a later pass.
    pub preserved_tag: Option<Ident>,
    /// Substitutions in slot order, unique by key (first occurrence wins).
    pub substitutions: Vec<Substitution>,
}

/// Collapse every whitespace run (newlines included) to a single space and
/// trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_owned()
}

fn apply_policy(rule: &CallShapeRule, text: &str) -> String {
    if rule.raw {
        text.to_owned()
    } else {
        normalize_whitespace(text)
    }
}

fn unsupported(rule: &CallShapeRule, found: &'static str, span: swc_common::Span) -> RewriteError {
    RewriteError::UnsupportedArgument {
        callee: rule.name,
        found,
        span,
    }
}

fn cooked_text<'a>(rule: &CallShapeRule, quasi: &'a TplElement) -> Result<&'a str, RewriteError> {
    quasi
        .cooked
        .as_ref()
        .and_then(|cooked| cooked.as_str())
        .ok_or_else(|| unsupported(rule, "template segment with invalid escape", quasi.span))
}

/// Extract text and substitutions from a textual argument node.
///
/// Accepts a plain string literal, a template literal, or a tagged template.
/// With `allow_expressions` false, interpolation slots are restricted to
/// bare variable references; this is used for the singular/plural text pair
/// so both forms end up referencing the same substitution keys.
pub fn extract(
    rule: &CallShapeRule,
    expr: &Expr,
    allow_expressions: bool,
) -> Result<ExtractedText, RewriteError> {
    match expr {
        Expr::Lit(Lit::Str(s)) => {
            let text = s
                .value
                .as_str()
                .ok_or_else(|| unsupported(rule, "string literal with lone surrogates", s.span))?;
            Ok(ExtractedText {
                text: apply_policy(rule, text),
                preserved_tag: None,
                substitutions: Vec::new(),
            })
        }
        Expr::Tpl(tpl) => extract_template(rule, tpl, None, allow_expressions),
        Expr::TaggedTpl(tagged) => extract_tagged(rule, tagged, allow_expressions),
        other => Err(unsupported(rule, expr_kind(other), other.span())),
    }
}

/// Extract from a tagged template.
///
/// A tag that is absent from the registry is preserved onto the rebuilt text
/// node; one of our own tags (the tagged-template call forms) is absorbed,
/// leaving a plain string.
pub fn extract_tagged(
    rule: &CallShapeRule,
    tagged: &TaggedTpl,
    allow_expressions: bool,
) -> Result<ExtractedText, RewriteError> {
    let Expr::Ident(tag) = &*tagged.tag else {
        return Err(unsupported(rule, "template with a non-identifier tag", tagged.span));
    };

    let preserved_tag = if lookup(tag.sym.as_str()).is_some() {
        None
    } else {
        Some(tag.clone())
    };

    extract_template(rule, &tagged.tpl, preserved_tag, allow_expressions)
}

fn extract_template(
    rule: &CallShapeRule,
    tpl: &Tpl,
    preserved_tag: Option<Ident>,
    allow_expressions: bool,
) -> Result<ExtractedText, RewriteError> {
    if tpl.exprs.is_empty() {
        // No interpolation, so a single quasi holds all the text.
        let quasi = tpl
            .quasis
            .first()
            .ok_or_else(|| unsupported(rule, "template without text segments", tpl.span))?;
        return Ok(ExtractedText {
            text: apply_policy(rule, cooked_text(rule, quasi)?),
            preserved_tag,
            substitutions: Vec::new(),
        });
    }

    // Name every slot, reusing variable names where possible and falling
    // back to the slot's 1-based position otherwise.
    let mut keys = Vec::with_capacity(tpl.exprs.len());
    let mut seen = HashSet::new();
    let mut substitutions = Vec::new();

    for (i, slot) in tpl.exprs.iter().enumerate() {
        let key = match &**slot {
            Expr::Ident(ident) => ident.sym.to_string(),
            other if !allow_expressions => {
                return Err(RewriteError::ExpectedIdentifier {
                    callee: rule.name,
                    span: other.span(),
                });
            }
            _ => format!("value{}", i + 1),
        };

        if seen.insert(key.clone()) {
            substitutions.push(Substitution {
                key: key.clone(),
                value: slot.clone(),
            });
        }
        keys.push(key);
    }

    // Weave literal segments and placeholders back together in slot order.
    let mut parts = Vec::with_capacity(tpl.quasis.len() * 2);
    for (i, quasi) in tpl.quasis.iter().enumerate() {
        parts.push(cooked_text(rule, quasi)?.to_owned());
        if !quasi.tail
            && let Some(key) = keys.get(i)
        {
            parts.push(format!("%({})s", key));
        }
    }

    Ok(ExtractedText {
        text: apply_policy(rule, &parts.concat()),
        preserved_tag,
        substitutions,
    })
}

/// Merge the substitution lists of the singular/plural text pair.
///
/// First-seen order is preserved; later entries whose key already appeared
/// are dropped. Both texts reference the same variables, so the first
/// occurrence is authoritative.
pub fn merge_substitutions(
    lists: impl IntoIterator<Item = Vec<Substitution>>,
) -> Vec<Substitution> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for list in lists {
        for substitution in list {
            if seen.insert(substitution.key.clone()) {
                merged.push(substitution);
            }
        }
    }

    merged
}

fn expr_kind(expr: &Expr) -> &'static str {
    match expr {
        Expr::Lit(Lit::Num(_)) => "number literal",
        Expr::Lit(_) => "non-string literal",
        Expr::Ident(_) => "bare identifier",
        Expr::Call(_) => "call expression",
        Expr::Bin(_) => "binary expression",
        Expr::Member(_) => "member expression",
        Expr::Arrow(_) | Expr::Fn(_) => "function expression",
        Expr::Object(_) => "object literal",
        Expr::Array(_) => "array literal",
        _ => "expression",
    }
}
