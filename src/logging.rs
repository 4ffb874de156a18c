use tracing_subscriber::EnvFilter;

/// Initialize tracing and bridge `log` to `tracing`.
/// Calling this multiple times is safe (subsequent attempts are ignored).
pub fn init_tracing(enable_debug: bool) {
    // Application code logs through the `log` macros
    let _ = tracing_log::LogTracer::init();

    // Explicit debug flag wins, otherwise RUST_LOG, otherwise warn
    let env_filter = if enable_debug {
        EnvFilter::new("kanapad=debug,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_names(false)
        .try_init()
        .ok();
}

/// True when `--debug` or `-d` was passed on the command line.
pub fn debug_flag<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .any(|arg| matches!(arg.as_ref(), "--debug" | "-d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag() {
        assert!(debug_flag(["kanapad", "--debug"]));
        assert!(debug_flag(["kanapad", "-d"]));
        assert!(!debug_flag(["kanapad"]));
        assert!(!debug_flag(["kanapad", "--debugger"]));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_tracing(false);
        init_tracing(true);
    }
}
