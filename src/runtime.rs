//! Model of the target runtime's `interpolate` contract.
//!
//! The rewritten calls produce format strings that Django's JavaScript i18n
//! runtime resolves at evaluation time: named mode substitutes `%(key)s`
//! placeholders from a value map, positional mode substitutes `%s`
//! placeholders consuming values left to right. This module mirrors that
//! contract so the produced format strings can be exercised end to end.
//!
//! A placeholder with no matching value is left in place.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static NAMED_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%\((\w+)\)s").unwrap());
static POSITIONAL_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%s").unwrap());

/// Substitution values for one `interpolate` call.
pub enum InterpolateValues<'a> {
    /// Named mode: `%(key)s` placeholders resolved from the map.
    Named(HashMap<&'a str, &'a str>),
    /// Positional mode: `%s` placeholders consume values left to right.
    Positional(Vec<&'a str>),
}

/// Resolve the placeholders of a format string.
pub fn interpolate(fmt: &str, values: &InterpolateValues<'_>) -> String {
    match values {
        InterpolateValues::Named(map) => NAMED_PLACEHOLDER
            .replace_all(fmt, |caps: &Captures<'_>| -> String {
                match map.get(&caps[1]) {
                    Some(value) => (*value).to_owned(),
                    None => caps[0].to_owned(),
                }
            })
            .into_owned(),
        InterpolateValues::Positional(list) => {
            let mut remaining = list.iter();
            POSITIONAL_PLACEHOLDER
                .replace_all(fmt, |caps: &Captures<'_>| -> String {
                    match remaining.next() {
                        Some(value) => (*value).to_owned(),
                        None => caps[0].to_owned(),
                    }
                })
                .into_owned()
        }
    }
}
