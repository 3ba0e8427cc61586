//! Module docstrings of Python migration files.
//!
//! The whole module is parsed, so a file that is not valid Python yields an
//! error even when its first statement is a well-formed string.

use rustpython_parser::{Mode, ast, parse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("source contains a null byte")]
    NulByte,

    #[error("{0}")]
    Syntax(rustpython_parser::ParseError),
}

/// Extract the module docstring from Python source.
///
/// Returns `Ok(None)` when the first statement is not a plain string literal
/// (bytes and f-strings included), and `Err` when the source does not parse.
pub fn module_docstring(source: &str, source_path: &str) -> Result<Option<String>, ParseError> {
    if source.contains('\0') {
        return Err(ParseError::NulByte);
    }

    // Text-mode reads see a BOM-free source with universal newlines
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let source = source.replace("\r\n", "\n").replace('\r', "\n");

    let module = parse(&source, Mode::Module, source_path).map_err(ParseError::Syntax)?;
    let ast::Mod::Module(module) = module else {
        return Ok(None);
    };

    Ok(module.body.first().and_then(string_statement))
}

fn string_statement(statement: &ast::Stmt) -> Option<String> {
    let ast::Stmt::Expr(ast::StmtExpr { value, .. }) = statement else {
        return None;
    };

    match value.as_ref() {
        ast::Expr::Constant(ast::ExprConstant {
            value: ast::Constant::Str(docstring),
            ..
        }) => Some(docstring.clone()),
        _ => None,
    }
}
