// CocosProject - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output always goes to stderr so that report output on stdout (including
// --json) stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default.
fn filter_directive(env: Option<String>, debug_flag: bool, config_level: Option<&str>) -> String {
    if let Some(env) = env {
        env
    } else if debug_flag {
        "debug".to_string()
    } else if let Some(level) = config_level {
        level.to_string()
    } else {
        super::constants::DEFAULT_LOG_LEVEL.to_string()
    }
}

/// Initialise the logging subsystem. Call once, early in `main`.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the validated level from config.toml, if any.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let directive = filter_directive(std::env::var("RUST_LOG").ok(), debug_flag, config_level);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&directive))
        .with_writer(std::io::stderr)
        .with_target(debug_flag)
        .compact()
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        filter = %directive,
        "Logging initialised"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_priority() {
        assert_eq!(
            filter_directive(Some("trace".into()), true, Some("warn")),
            "trace"
        );
        assert_eq!(filter_directive(None, true, Some("warn")), "debug");
        assert_eq!(filter_directive(None, false, Some("warn")), "warn");
        assert_eq!(filter_directive(None, false, None), "info");
    }
}
