//! Tests for text extraction and substitution naming.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use swc_common::{DUMMY_SP, SourceMap, SyntaxContext};
use swc_ecma_ast::{Expr, Ident, ModuleItem, Stmt};

use super::*;
use crate::errors::RewriteError;
use crate::parser::parse_source;
use crate::registry::lookup;

fn parse_expr(code: &str) -> Box<Expr> {
    let parsed = parse_source(code.to_string(), "test.js", Arc::new(SourceMap::default()))
        .expect("failed to parse test source");
    match parsed.module.body.into_iter().next() {
        Some(ModuleItem::Stmt(Stmt::Expr(stmt))) => stmt.expr,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

fn substitution(key: &str) -> Substitution {
    Substitution {
        key: key.to_owned(),
        value: Box::new(Expr::Ident(Ident::new(
            key.into(),
            DUMMY_SP,
            SyntaxContext::empty(),
        ))),
    }
}

#[test]
fn test_normalize_whitespace_collapses_runs() {
    assert_eq!(normalize_whitespace("\n\nthis is a    test\n\n"), "this is a test");
    assert_eq!(normalize_whitespace("  one\ttwo\r\nthree  "), "one two three");
    assert_eq!(normalize_whitespace("   "), "");
}

#[test]
fn test_plain_string_normalizes() {
    let rule = lookup("gettext").unwrap();
    let expr = parse_expr(r"'\n\nthis is a    test\n\n'");

    let info = extract(rule, &expr, true).unwrap();

    assert_eq!(info.text, "this is a test");
    assert!(info.substitutions.is_empty());
    assert!(info.preserved_tag.is_none());
}

#[test]
fn test_raw_rule_keeps_text_verbatim() {
    let rule = lookup("gettext_raw").unwrap();
    let expr = parse_expr(r"'\n\nthis is a    test\n\n'");

    let info = extract(rule, &expr, true).unwrap();

    assert_eq!(info.text, "\n\nthis is a    test\n\n");
}

#[test]
fn test_template_without_slots() {
    let rule = lookup("gettext").unwrap();
    let expr = parse_expr("`\n\n    this is a\n    test\n\n    `");

    let info = extract(rule, &expr, true).unwrap();

    assert_eq!(info.text, "this is a test");
    assert!(info.substitutions.is_empty());
}

#[test]
fn test_slot_keys_reuse_variable_names_or_fall_back_to_position() {
    let rule = lookup("gettext").unwrap();
    let expr = parse_expr(r#"`Oh, ${greeting} ${subject + "!"}`"#);

    let info = extract(rule, &expr, true).unwrap();

    assert_eq!(info.text, "Oh, %(greeting)s %(value2)s");
    let keys: Vec<&str> = info.substitutions.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, ["greeting", "value2"]);
    assert!(matches!(&*info.substitutions[0].value, Expr::Ident(_)));
    assert!(matches!(&*info.substitutions[1].value, Expr::Bin(_)));
}

#[test]
fn test_repeated_variable_recorded_once() {
    let rule = lookup("gettext").unwrap();
    let expr = parse_expr("`${count} out of ${count}`");

    let info = extract(rule, &expr, true).unwrap();

    assert_eq!(info.text, "%(count)s out of %(count)s");
    assert_eq!(info.substitutions.len(), 1);
    assert_eq!(info.substitutions[0].key, "count");
}

#[test]
fn test_plural_pair_rejects_computed_expressions() {
    let rule = lookup("ngettext").unwrap();
    let expr = parse_expr("`there are ${count + 1} values`");

    let err = extract(rule, &expr, false).unwrap_err();

    assert!(matches!(
        err,
        RewriteError::ExpectedIdentifier { callee: "ngettext", .. }
    ));
}

#[test]
fn test_plural_pair_accepts_plain_variables() {
    let rule = lookup("ngettext").unwrap();
    let expr = parse_expr("`there are ${count} values`");

    let info = extract(rule, &expr, false).unwrap();

    assert_eq!(info.text, "there are %(count)s values");
    assert_eq!(info.substitutions.len(), 1);
}

#[test]
fn test_unknown_tag_is_preserved() {
    let rule = lookup("gettext_raw").unwrap();
    let expr = parse_expr("dedent`This is a ${thing}.`");

    let info = extract(rule, &expr, true).unwrap();

    assert_eq!(info.text, "This is a %(thing)s.");
    let tag = info.preserved_tag.expect("tag should be preserved");
    assert_eq!(tag.sym.as_str(), "dedent");
}

#[test]
fn test_recognized_tag_is_absorbed() {
    let rule = lookup("gettext").unwrap();
    let expr = parse_expr("gettext`  hello   world  `");

    let info = extract(rule, &expr, true).unwrap();

    assert_eq!(info.text, "hello world");
    assert!(info.preserved_tag.is_none());
}

#[test]
fn test_non_text_argument_rejected() {
    let rule = lookup("gettext").unwrap();
    let expr = parse_expr("42");

    let err = extract(rule, &expr, true).unwrap_err();

    assert!(matches!(
        err,
        RewriteError::UnsupportedArgument {
            callee: "gettext",
            found: "number literal",
            ..
        }
    ));
}

#[test]
fn test_merge_keeps_first_occurrence() {
    let merged = merge_substitutions([
        vec![substitution("count"), substitution("kind")],
        vec![substitution("count"), substitution("total")],
    ]);

    let keys: Vec<&str> = merged.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, ["count", "kind", "total"]);
}
