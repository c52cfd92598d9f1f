//! Thin parse helper around swc.
//!
//! The rewriter itself only consumes a `Module`; this helper exists so
//! embedders and tests can get from source text to a tree without wiring up
//! the parser themselves. Accepts a shared SourceMap so error locations can
//! be resolved by the caller afterwards.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, GLOBALS, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Parse JS/TSX source into a module.
pub fn parse_source(code: String, file_path: &str, source_map: Arc<SourceMap>) -> Result<ParsedSource> {
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("failed to parse {}: {:?}", file_path, e))?;

        Ok(ParsedSource { module, source_map })
    })
}
