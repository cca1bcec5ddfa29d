use tracing::Level;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

/// Install the stderr subscriber. `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("doomtok={level},warn")));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    Registry::default().with(env_filter).with(fmt_layer).init();
}
