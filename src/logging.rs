// Logging setup shared by both binaries. Events go to stderr so they never
// mix with the summaries printed on stdout.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. Request failures are logged at
/// `info`, below this, since the form already prints them as results.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the stderr log subscriber. `RUST_LOG` overrides `DEFAULT_FILTER`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
