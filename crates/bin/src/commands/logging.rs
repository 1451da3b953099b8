//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

const VERBOSE_FILTER: &str = "stayprice=debug,stayprice_artifacts=debug,stayprice_encoder=debug,\
                              stayprice_model=debug,stayprice_output=debug";

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug output and
/// the default is warnings only. Logs go to stderr so stdout carries results.
pub(crate) fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
