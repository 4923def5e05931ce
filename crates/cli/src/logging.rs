use std::io;
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Crates whose events `-v` turns up
const WORKSPACE_TARGETS: [&str; 3] = ["enumgen", "enumgen_codegen", "enumgen_core"];

/// Filter used when `RUST_LOG` is not set. Dependencies stay at `warn`.
fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => return "warn".to_string(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let mut filter = String::from("warn");
    for target in WORKSPACE_TARGETS {
        filter.push_str(&format!(",{}={}", target, level));
    }
    filter
}

/// Install the global subscriber. Logs go to stderr so generated source on
/// stdout stays clean.
pub fn init(verbosity: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&default_filter(verbosity)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let result = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(Layer::new().with_writer(io::stderr).json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(Layer::new().with_writer(io::stderr).with_target(false).without_time())
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("warning: logging already initialized: {}", e);
    }
}
