use crate::args::LogLevel;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber. `RUST_LOG` wins over `--log-level`.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    // A second init (e.g. from tests driving `run`) is not an error.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

fn default_directives(level: LogLevel) -> String {
    format!("warn,folio={0},folio_runtime={0},folio_core={0}", level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_scope_level_to_folio_crates() {
        assert_eq!(
            default_directives(LogLevel::Debug),
            "warn,folio=debug,folio_runtime=debug,folio_core=debug"
        );
    }
}
