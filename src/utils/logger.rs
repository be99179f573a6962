use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` still wins over both arguments.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, level)));

    // Interactive output goes to stdout, so the log layer writes to stderr.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// `--verbose` raises the crate to at least debug; `logging.level` otherwise applies as is.
pub fn filter_directive(verbose: bool, level: Option<&str>) -> String {
    let level = level.map(str::to_ascii_lowercase);
    match level.as_deref() {
        Some("trace") => "small_shop=trace,info".to_string(),
        _ if verbose => "small_shop=debug,info".to_string(),
        Some(level) => format!("small_shop={}", level),
        None => "small_shop=info".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(filter_directive(false, None), "small_shop=info");
        assert_eq!(filter_directive(true, None), "small_shop=debug,info");
    }

    #[test]
    fn test_configured_level_is_honoured() {
        assert_eq!(filter_directive(false, Some("warn")), "small_shop=warn");
        assert_eq!(filter_directive(false, Some("ERROR")), "small_shop=error");
        assert_eq!(filter_directive(false, Some("trace")), "small_shop=trace,info");
    }

    #[test]
    fn test_verbose_overrides_quieter_levels() {
        assert_eq!(filter_directive(true, Some("warn")), "small_shop=debug,info");
        assert_eq!(filter_directive(true, Some("trace")), "small_shop=trace,info");
    }

    #[test]
    fn test_directive_parses_as_env_filter() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(EnvFilter::try_new(filter_directive(false, Some(level))).is_ok());
        }
    }
}
