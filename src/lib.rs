#![forbid(unsafe_code)]
#![deny(missing_debug_implementations)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Generate TypeScript interface definitions from Confluence API
//! documentation pages.
//!
//! The pipeline is a single synchronous pass: resolve page content (cache or
//! one authenticated GET), walk the documentation blocks and tables, lower
//! each usable table into the TypeScript IR, and emit the joined interface
//! blocks.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub mod common;
pub mod config;
pub mod content;
pub mod extract;
pub mod heading;
pub mod ir;
pub mod typemap;

/// Initialize the tracing subscriber.
///
/// `TYGEN_LOG` controls the log level: "trace", "debug", "info", "warn",
/// "error", or a full tracing filter spec like "tygen=debug,reqwest=warn".
pub fn init_tracing() {
    let crate_root = module_path!().to_string();

    let filter = match std::env::var("TYGEN_LOG") {
        Ok(level) if is_plain_level(&level) => format!("{crate_root}={level}"),
        Ok(spec) => spec,
        Err(_) => format!("{crate_root}=info"),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}

/// Run a fallible async entrypoint, mapping the result to an exit code.
pub async fn run_cli_async<F, Fut>(f: F) -> i32
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<(), String>>,
{
    match f().await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}
