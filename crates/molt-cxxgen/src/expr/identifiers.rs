//! Identifier resolution.
//!
//! An identifier is classified as exactly one of four things, with fixed
//! precedence:
//!
//! 1. a local of the function currently being translated — emitted verbatim;
//! 2. a built-in — emitted as a zero-argument call to its `proxy::` wrapper;
//! 3. a top-level function of the module, or a proxy-imported name — emitted
//!    as a zero-argument call, deferring invocation until a call site
//!    supplies arguments (functions are represented as callable objects);
//! 4. anything else — emitted verbatim and left for the target compiler to
//!    resolve (a constant, a member, ...).

use super::{ExprTranslator, Result};

/// Resolve an identifier against the four overlapping namespaces.
pub(super) fn translate_name(tr: &ExprTranslator<'_, '_>, name: &str) -> Result<String> {
    let ctx = tr.ctx();
    if ctx.scopes().is_local(name) {
        Ok(name.to_string())
    } else if ctx.registry().is_builtin(name) {
        Ok(format!("proxy::{name}()"))
    } else if ctx.is_global_function(name) || ctx.is_local_function(name) {
        Ok(format!("{name}()"))
    } else {
        Ok(name.to_string())
    }
}
