//! Tests for traversal, dispatch, and the idempotency guard.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use swc_common::SourceMap;
use swc_ecma_ast::Module;

use super::*;
use crate::errors::RewriteError;
use crate::parser::{ParsedSource, parse_source};

fn parse_module(code: &str) -> Module {
    parse_source(code.to_string(), "test.js", Arc::new(SourceMap::default()))
        .expect("failed to parse test source")
        .module
}

#[test]
fn test_unregistered_call_left_untouched() {
    let mut module = parse_module("foo('text');");
    let original = module.clone();

    let rewritten = rewrite_module(&mut module).unwrap();

    assert_eq!(rewritten, 0);
    assert_eq!(module, original);
}

#[test]
fn test_unregistered_tagged_template_left_untouched() {
    let mut module = parse_module("dedent`some ${value} text`;");
    let original = module.clone();

    let rewritten = rewrite_module(&mut module).unwrap();

    assert_eq!(rewritten, 0);
    assert_eq!(module, original);
}

#[test]
fn test_underscore_call_form_ignored() {
    // `_` is registered for the tag form only; the call form is not ours.
    let mut module = parse_module("_('this is a test');");
    let original = module.clone();

    let rewritten = rewrite_module(&mut module).unwrap();

    assert_eq!(rewritten, 0);
    assert_eq!(module, original);
}

#[test]
fn test_plural_tag_form_ignored() {
    // ngettext has no template builder, so its tag form passes through.
    let mut module = parse_module("ngettext`values`;");
    let original = module.clone();

    let rewritten = rewrite_module(&mut module).unwrap();

    assert_eq!(rewritten, 0);
    assert_eq!(module, original);
}

#[test]
fn test_second_pass_rewrites_nothing() {
    let mut module = parse_module(
        "gettext(`Oh, ${greeting}`);\n\
         N_('one\\nvalue', 'many\\nvalues', count);",
    );

    let first = rewrite_module(&mut module).unwrap();
    assert_eq!(first, 2);

    let after_first = module.clone();
    let second = rewrite_module(&mut module).unwrap();

    assert_eq!(second, 0);
    assert_eq!(module, after_first);
}

#[test]
fn test_wrong_arity_reported_and_node_untouched() {
    let mut module = parse_module("ngettext('a', 'b');");
    let original = module.clone();

    let errors = rewrite_module(&mut module).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors.iter().next().unwrap(),
        RewriteError::WrongArgumentCount {
            callee: "ngettext",
            expected: 3,
            found: 2,
            ..
        }
    ));
    assert_eq!(module, original);
}

#[test]
fn test_all_misuses_collected_in_one_pass() {
    let mut module = parse_module("gettext('a', 'b');\npgettext('ctx');");

    let errors = rewrite_module(&mut module).unwrap_err();

    assert_eq!(errors.len(), 2);
}

#[test]
fn test_error_location_resolves_against_source_map() {
    let source_map = Arc::new(SourceMap::default());
    let ParsedSource {
        mut module,
        source_map,
    } = parse_source(
        "const x = 1;\nngettext('a', 'b');".to_string(),
        "test.js",
        source_map,
    )
    .unwrap();

    let errors = rewrite_module(&mut module).unwrap_err();
    let location = errors.iter().next().unwrap().location(&source_map);

    assert_eq!(location.line, 2);
    assert_eq!(location.column, 1);
}

#[test]
fn test_visitor_exposes_progress() {
    use swc_ecma_visit::VisitMutWith;

    let mut module = parse_module("gettext('hello   there');");
    let mut rewriter = GettextRewriter::new();
    module.visit_mut_with(&mut rewriter);

    assert_eq!(rewriter.rewritten(), 1);
    assert!(rewriter.errors().is_empty());
}
