//! Tracing setup shared by the server and the CLI.

use tracing::Subscriber;
use tracing_subscriber::{fmt, fmt::MakeWriter, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Default directives when `RUST_LOG` is unset
fn default_filter(level: &str) -> String {
    format!("hostscope={level},tower_http={level}")
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level. `format = "json"` switches to
/// one JSON object per line; anything else prints human-readable lines.
/// Calling this twice is harmless: the second install is ignored.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.level)));

    let result = if config.format.eq_ignore_ascii_case("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_thread_ids(false))
            .try_init()
    };

    if let Err(e) = result {
        tracing::debug!("Logging already initialized: {}", e);
    }
}

/// Run `f` with a temporary stderr subscriber at `info`.
///
/// Used while the config is being loaded, before the configured subscriber
/// can be installed.
pub fn with_bootstrap_logging<T>(f: impl FnOnce() -> T) -> T {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter("info")));
    tracing::subscriber::with_default(bootstrap_subscriber(filter, std::io::stderr), f)
}

fn bootstrap_subscriber<W>(
    filter: EnvFilter,
    writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(writer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_default_filter_covers_http_layer() {
        assert_eq!(default_filter("debug"), "hostscope=debug,tower_http=debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(&LoggingConfig::default());
        init_logging(&LoggingConfig {
            level: "warn".to_string(),
            format: "json".to_string(),
        });
    }

    #[test]
    fn test_config_load_warnings_reach_bootstrap_subscriber() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("config.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();

        let captured = Captured::default();
        let subscriber = bootstrap_subscriber(EnvFilter::new("hostscope=info"), captured.clone());
        let config =
            tracing::subscriber::with_default(subscriber, || Config::load_first(&[broken]));

        assert_eq!(config.server.port, 8501);
        let logs = captured.text();
        assert!(logs.contains("Failed to load config from"));
        assert!(logs.contains("config.toml"));
        assert!(logs.contains("Using default config"));
    }
}
