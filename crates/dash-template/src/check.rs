//! Syntax checking for generated expressions

use minijinja::Environment;
use tracing::debug;

use crate::error::TemplateResult;

/// Compile `expr` without rendering it
///
/// Filters, tests and functions only the host provides (`relative_time`,
/// `float(0)`) are resolved at render time, so they do not fail the check.
pub fn check_syntax(expr: &str) -> TemplateResult<()> {
    let env = Environment::new();
    env.template_from_str(expr).map_err(|e| {
        debug!(error = %e, "expression failed to compile");
        e
    })?;
    Ok(())
}
