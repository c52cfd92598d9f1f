//! The call-shape registry.
//!
//! Maps every recognized surface name to its processing rule: the runtime
//! function the rewritten call targets, the whitespace policy, and the
//! builders that apply to call and tagged-template forms. Built once,
//! read-only thereafter; lookups that miss mean the node is not ours and is
//! left untouched.

use std::collections::HashMap;
use std::sync::LazyLock;

use swc_ecma_ast::{CallExpr, Expr, TaggedTpl};

use crate::errors::RewriteError;
use crate::rewrite::builder::{
    transform_gettext_call, transform_gettext_template, transform_ngettext_call,
    transform_npgettext_call, transform_pgettext_call,
};

pub type CallBuilder = fn(&CallShapeRule, &CallExpr) -> Result<Expr, RewriteError>;
pub type TemplateBuilder = fn(&CallShapeRule, &TaggedTpl) -> Result<Expr, RewriteError>;

/// Processing rule for one recognized surface name.
pub struct CallShapeRule {
    /// The surface name this rule matches.
    pub name: &'static str,
    /// The runtime function the rewritten call targets.
    pub target: &'static str,
    /// Raw rules keep source whitespace verbatim; all others collapse runs of
    /// whitespace to single spaces and trim.
    pub raw: bool,
    /// Builder for the call form, absent when only the tag form is valid.
    pub call_builder: Option<CallBuilder>,
    /// Builder for the tagged-template form, absent for the plural shapes.
    pub template_builder: Option<TemplateBuilder>,
}

static RULES: LazyLock<HashMap<&'static str, CallShapeRule>> = LazyLock::new(|| {
    [
        // gettext variants
        CallShapeRule {
            name: "_",
            target: "gettext",
            raw: false,
            call_builder: None,
            template_builder: Some(transform_gettext_template as TemplateBuilder),
        },
        CallShapeRule {
            name: "gettext",
            target: "gettext",
            raw: false,
            call_builder: Some(transform_gettext_call as CallBuilder),
            template_builder: Some(transform_gettext_template),
        },
        CallShapeRule {
            name: "gettext_raw",
            target: "gettext",
            raw: true,
            call_builder: Some(transform_gettext_call as CallBuilder),
            template_builder: Some(transform_gettext_template),
        },
        // gettext_noop variants
        CallShapeRule {
            name: "gettext_noop",
            target: "gettext_noop",
            raw: false,
            call_builder: Some(transform_gettext_call as CallBuilder),
            template_builder: Some(transform_gettext_template),
        },
        CallShapeRule {
            name: "gettext_noop_raw",
            target: "gettext_noop",
            raw: true,
            call_builder: Some(transform_gettext_call as CallBuilder),
            template_builder: Some(transform_gettext_template),
        },
        // ngettext variants
        CallShapeRule {
            name: "N_",
            target: "ngettext",
            raw: false,
            call_builder: Some(transform_ngettext_call as CallBuilder),
            template_builder: None,
        },
        CallShapeRule {
            name: "ngettext",
            target: "ngettext",
            raw: false,
            call_builder: Some(transform_ngettext_call as CallBuilder),
            template_builder: None,
        },
        CallShapeRule {
            name: "ngettext_raw",
            target: "ngettext",
            raw: true,
            call_builder: Some(transform_ngettext_call as CallBuilder),
            template_builder: None,
        },
        // pgettext variants
        CallShapeRule {
            name: "pgettext",
            target: "pgettext",
            raw: false,
            call_builder: Some(transform_pgettext_call as CallBuilder),
            template_builder: None,
        },
        CallShapeRule {
            name: "pgettext_raw",
            target: "pgettext",
            raw: true,
            call_builder: Some(transform_pgettext_call as CallBuilder),
            template_builder: None,
        },
        // npgettext variants
        CallShapeRule {
            name: "npgettext",
            target: "npgettext",
            raw: false,
            call_builder: Some(transform_npgettext_call as CallBuilder),
            template_builder: None,
        },
        CallShapeRule {
            name: "npgettext_raw",
            target: "npgettext",
            raw: true,
            call_builder: Some(transform_npgettext_call as CallBuilder),
            template_builder: None,
        },
    ]
    .into_iter()
    .map(|rule| (rule.name, rule))
    .collect()
});

/// Look up the rule for a surface name. `None` means the name is not ours.
pub fn lookup(name: &str) -> Option<&'static CallShapeRule> {
    RULES.get(name)
}
