//! `from module import name` translation.
//!
//! Imports are resolved against the module registry at translation time.
//! Native symbols become plain using-aliases into the runtime module's
//! namespace; proxy-wrapped symbols become using-aliases to their wrapper
//! implementation and join the local-function set for the remainder of the
//! current function, so bare references to them lower as deferred calls.

use molt_core::ast::ImportAlias;
use molt_core::{Span, TranslationError};

use super::{Result, StmtTranslator};
use crate::cxx::CxxStmt;

pub(super) fn translate_import_from(
    tr: &mut StmtTranslator<'_, '_>,
    module: Option<&str>,
    names: &[ImportAlias],
    level: u32,
    span: Span,
) -> Result<CxxStmt> {
    if level != 0 {
        return Err(TranslationError::unsupported(
            "specifying a level in an import",
            span,
        ));
    }
    let Some(module) = module else {
        return Err(TranslationError::unsupported(
            "the import-from syntax without a module",
            span,
        ));
    };
    if tr.ctx_mut().registry().lookup(module).is_none() {
        return Err(TranslationError::unsupported(
            format!("unknown module '{module}'"),
            span,
        ));
    }
    if names.iter().any(|alias| alias.asname.is_some()) {
        return Err(TranslationError::unsupported(
            "renaming using the 'as' keyword in an import",
            span,
        ));
    }

    let mut usings = Vec::with_capacity(names.len());
    for alias in names {
        // The lookup above pinned the module; re-borrow per symbol so the
        // proxy branch can mutate the local-function set.
        let is_native = tr
            .ctx_mut()
            .registry()
            .lookup(module)
            .and_then(|symbols| symbols.is_native(&alias.name));
        match is_native {
            Some(true) => usings.push(format!("using {module}::{}", alias.name)),
            Some(false) => {
                tr.ctx_mut().add_local_function(&alias.name);
                usings.push(format!("using proxy::{}", alias.name));
            }
            None => {
                return Err(TranslationError::unsupported(
                    format!("module '{module}' has no symbol '{}'", alias.name),
                    span,
                ));
            }
        }
    }
    Ok(CxxStmt::Line(usings.join("; ")))
}
