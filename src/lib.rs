//! Gettext call rewriter for Django-style JavaScript i18n.
//!
//! Rewrites gettext-family calls and tagged templates (`gettext`, `ngettext`,
//! `pgettext`, `npgettext`, their `_noop`/`_raw` variants, and the `_` tag)
//! found in a parsed module into direct calls against the Django JavaScript
//! i18n runtime. Template interpolation is converted into `%(name)s` format
//! strings, with the interpolated expressions deferred to the runtime's
//! `interpolate` helper.
//!
//! The crate operates on swc syntax trees and never parses, prints, or touches
//! the filesystem on its own; `parser` is a thin helper for embedders and
//! tests.
//!
//! ## Module Structure
//!
//! - `errors`: usage-error taxonomy with source-location rendering
//! - `extract`: text extraction, whitespace policy, and substitution naming
//! - `parser`: swc parse helper
//! - `registry`: the call-shape rule table
//! - `rewrite`: the `VisitMut` rewriter and replacement-call assembly
//! - `runtime`: model of the runtime `interpolate` contract

pub mod errors;
pub mod extract;
pub mod parser;
pub mod registry;
pub mod rewrite;
pub mod runtime;

pub use errors::{RewriteError, RewriteErrors};
pub use rewrite::{GettextRewriter, rewrite_module};
