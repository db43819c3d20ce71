// ============================================================================
// Logging Setup
// Optional tracing-subscriber installation for binaries and demos
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "strict_decimal=info";

/// Install a formatting subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when a global subscriber was already installed, so it is
/// safe to call more than once.
pub fn init_tracing() -> bool {
    init_tracing_with(DEFAULT_FILTER)
}

/// Like [`init_tracing`], with an explicit fallback filter.
pub fn init_tracing_with(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let _first = init_tracing();
        assert!(!init_tracing());
    }
}
