//! Replacement-call assembly.
//!
//! Each recognized shape has a transform that validates the argument list,
//! runs text extraction on the message positions, and assembles the direct
//! runtime call, wrapping it in an `interpolate` call when any substitutions
//! were collected. Context and count arguments are moved over verbatim with
//! their original spans, so nested recognized constructs inside them are
//! still visited after the replacement.
//!
//! Every node synthesized here carries `DUMMY_SP`; the dummy span is the
//! rewriter's "already transformed" mark.

use swc_common::{DUMMY_SP, SyntaxContext};
use swc_ecma_ast::{
    Bool, CallExpr, Callee, Expr, ExprOrSpread, Ident, KeyValueProp, Lit, ObjectLit, Prop,
    PropName, PropOrSpread, Str, TaggedTpl, Tpl, TplElement,
};

use crate::errors::RewriteError;
use crate::extract::{ExtractedText, Substitution, extract, extract_tagged, merge_substitutions};
use crate::registry::CallShapeRule;

/// Runtime helper that resolves `%(name)s` placeholders at evaluation time.
const INTERPOLATE_FN: &str = "interpolate";

fn ident(name: &str) -> Ident {
    Ident::new(name.into(), DUMMY_SP, SyntaxContext::empty())
}

fn call_expression(fn_name: &str, args: Vec<Expr>) -> CallExpr {
    CallExpr {
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
        callee: Callee::Expr(Box::new(Expr::Ident(ident(fn_name)))),
        args: args
            .into_iter()
            .map(|expr| ExprOrSpread {
                spread: None,
                expr: Box::new(expr),
            })
            .collect(),
        type_args: None,
    }
}

/// Build the text node for processed text: a plain string literal, or a
/// single-quasi tagged template when an unrecognized tag (e.g. `dedent`) is
/// being preserved for a later pass of the host toolchain.
fn build_text_node(text: String, preserved_tag: Option<Ident>) -> Expr {
    match preserved_tag {
        Some(tag) => Expr::TaggedTpl(TaggedTpl {
            span: DUMMY_SP,
            ctxt: SyntaxContext::empty(),
            tag: Box::new(Expr::Ident(tag)),
            type_params: None,
            tpl: Box::new(Tpl {
                span: DUMMY_SP,
                exprs: Vec::new(),
                quasis: vec![TplElement {
                    span: DUMMY_SP,
                    tail: true,
                    cooked: Some(text.clone().into()),
                    raw: text.into(),
                }],
            }),
        }),
        None => Expr::Lit(Lit::Str(Str {
            span: DUMMY_SP,
            value: text.into(),
            raw: None,
        })),
    }
}

/// Assemble the replacement for one recognized call.
///
/// With substitutions present the direct call becomes the format-string
/// argument of a 3-argument `interpolate` call: the substitution object maps
/// each key to its original slot expression, and the trailing `true` selects
/// named mode.
fn build_gettext_call(
    rule: &CallShapeRule,
    args: Vec<Expr>,
    substitutions: Vec<Substitution>,
) -> Expr {
    let direct = Expr::Call(call_expression(rule.target, args));

    if substitutions.is_empty() {
        return direct;
    }

    let props = substitutions
        .into_iter()
        .map(|substitution| {
            PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
                key: PropName::Str(Str {
                    span: DUMMY_SP,
                    value: substitution.key.into(),
                    raw: None,
                }),
                value: substitution.value,
            })))
        })
        .collect();

    Expr::Call(call_expression(
        INTERPOLATE_FN,
        vec![
            direct,
            Expr::Object(ObjectLit {
                span: DUMMY_SP,
                props,
            }),
            Expr::Lit(Lit::Bool(Bool {
                span: DUMMY_SP,
                value: true,
            })),
        ],
    ))
}

/// Validate arity and reject spread arguments, returning the plain argument
/// expressions.
fn call_args<'a>(
    rule: &CallShapeRule,
    call: &'a CallExpr,
    expected: usize,
) -> Result<Vec<&'a Expr>, RewriteError> {
    if call.args.len() != expected {
        return Err(RewriteError::WrongArgumentCount {
            callee: rule.name,
            expected,
            found: call.args.len(),
            span: call.span,
        });
    }

    call.args
        .iter()
        .map(|arg| match arg.spread {
            Some(spread_span) => Err(RewriteError::UnsupportedArgument {
                callee: rule.name,
                found: "spread argument",
                span: spread_span,
            }),
            None => Ok(&*arg.expr),
        })
        .collect()
}

/// gettext(message) / gettext_noop(message).
pub(crate) fn transform_gettext_call(
    rule: &CallShapeRule,
    call: &CallExpr,
) -> Result<Expr, RewriteError> {
    let args = call_args(rule, call, 1)?;
    let ExtractedText {
        text,
        preserved_tag,
        substitutions,
    } = extract(rule, args[0], true)?;

    Ok(build_gettext_call(
        rule,
        vec![build_text_node(text, preserved_tag)],
        substitutions,
    ))
}

/// pgettext(context, message) — the context passes through unprocessed.
pub(crate) fn transform_pgettext_call(
    rule: &CallShapeRule,
    call: &CallExpr,
) -> Result<Expr, RewriteError> {
    let args = call_args(rule, call, 2)?;
    let context = args[0].clone();
    let ExtractedText {
        text,
        preserved_tag,
        substitutions,
    } = extract(rule, args[1], true)?;

    Ok(build_gettext_call(
        rule,
        vec![context, build_text_node(text, preserved_tag)],
        substitutions,
    ))
}

/// ngettext(singular, plural, count) — both texts restricted to plain
/// variable slots, substitutions merged, count passed through.
pub(crate) fn transform_ngettext_call(
    rule: &CallShapeRule,
    call: &CallExpr,
) -> Result<Expr, RewriteError> {
    let args = call_args(rule, call, 3)?;
    let singular = extract(rule, args[0], false)?;
    let plural = extract(rule, args[1], false)?;
    let count = args[2].clone();

    let substitutions = merge_substitutions([singular.substitutions, plural.substitutions]);

    Ok(build_gettext_call(
        rule,
        vec![
            build_text_node(singular.text, singular.preserved_tag),
            build_text_node(plural.text, plural.preserved_tag),
            count,
        ],
        substitutions,
    ))
}

/// npgettext(context, singular, plural, count).
pub(crate) fn transform_npgettext_call(
    rule: &CallShapeRule,
    call: &CallExpr,
) -> Result<Expr, RewriteError> {
    let args = call_args(rule, call, 4)?;
    let context = args[0].clone();
    let singular = extract(rule, args[1], false)?;
    let plural = extract(rule, args[2], false)?;
    let count = args[3].clone();

    let substitutions = merge_substitutions([singular.substitutions, plural.substitutions]);

    Ok(build_gettext_call(
        rule,
        vec![
            context,
            build_text_node(singular.text, singular.preserved_tag),
            build_text_node(plural.text, plural.preserved_tag),
            count,
        ],
        substitutions,
    ))
}

/// The tagged-template form: `` gettext`...` ``, `` _`...` ``, and friends.
/// The tag's own template is the single message argument.
pub(crate) fn transform_gettext_template(
    rule: &CallShapeRule,
    tagged: &TaggedTpl,
) -> Result<Expr, RewriteError> {
    let ExtractedText {
        text,
        preserved_tag,
        substitutions,
    } = extract_tagged(rule, tagged, true)?;

    Ok(build_gettext_call(
        rule,
        vec![build_text_node(text, preserved_tag)],
        substitutions,
    ))
}
