//! Tracing and logging setup shared by every binary and test harness.

/// Initialize process-wide tracing.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize tracing with an explicit default filter (used when `RUST_LOG` is unset).
pub fn init_with_default(filter: &str) {
    tracing::init_with_default(filter);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
