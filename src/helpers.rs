//! Small crate-internal helpers

use std::sync::OnceLock;

/// Check if tracing is enabled via environment variable (cached)
///
/// Set `POLY_TRACE=1` (or `true`) to get `[TRACE]` lines on stderr from the
/// token reader.
pub(crate) fn trace_enabled() -> bool {
    static TRACE: OnceLock<bool> = OnceLock::new();
    *TRACE.get_or_init(|| {
        std::env::var("POLY_TRACE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    })
}

/// Emit a trace line when `POLY_TRACE` is set
pub(crate) fn trace(args: std::fmt::Arguments<'_>) {
    if trace_enabled() {
        eprintln!("[TRACE] {}", args);
    }
}
