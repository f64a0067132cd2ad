use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that overrides the log filter.
const LOG_ENV: &str = "HUDDLE_LOG";

/// Install a compact stderr subscriber.
///
/// `HUDDLE_LOG` wins when set; otherwise `verbose` raises the huddle crates to
/// debug and everything else stays at warn.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("huddle=debug,huddle_core=debug,huddle_draw=debug,huddle_group=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
