use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Directive added by `-v`.
const VERBOSE_DIRECTIVE: &str = "ulcompress=debug";

/// Directives used when `RUST_LOG` is unset.
const QUIET_DIRECTIVES: &str = "warn";

/// Sends trace output to stdout, plain text without timestamps.
///
/// `RUST_LOG` sets the base filter. `-v` always turns on this crate's debug
/// trace on top of it.
pub fn setup_logging(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let main_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(EnvFilter::new(directives(verbose, env.as_deref())))
        .with(main_layer)
        .init()
}

fn directives(verbose: bool, env: Option<&str>) -> String {
    let base = match env.map(str::trim) {
        Some(env) if !env.is_empty() => env,
        _ => QUIET_DIRECTIVES,
    };
    if verbose {
        format!("{base},{VERBOSE_DIRECTIVE}")
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_without_env() {
        assert_eq!(directives(false, None), "warn");
        assert_eq!(directives(false, Some("  ")), "warn");
    }

    #[test]
    fn test_env_sets_base() {
        assert_eq!(directives(false, Some("error")), "error");
    }

    #[test]
    fn test_verbose_survives_env() {
        assert_eq!(directives(true, None), "warn,ulcompress=debug");
        assert_eq!(directives(true, Some("error")), "error,ulcompress=debug");
    }
}
