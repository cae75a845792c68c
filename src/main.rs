//! # News Index
//!
//! Rebuilds `index.html` from `index_template.html` and the Markdown articles
//! found under the current directory.
//!
//! ## Usage
//!
//! ```sh
//! news_index
//! news_index --root site --output site/index.html
//! ```
//!
//! Prints one line to stdout: the folder and article counts on success, or a
//! diagnostic on failure. Logs go to stderr; set `RUST_LOG` to change verbosity.

use clap::Parser;
use news_index::cli::Cli;
use news_index::pipeline::failure_line;
use news_index::{run, Settings};
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_index starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let settings = match Settings::resolve(&args) {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "Failed to resolve settings");
            let output = args
                .output
                .clone()
                .unwrap_or_else(|| Settings::default().output_path);
            println!("{}", failure_line(&output, &e));
            return;
        }
    };

    let ok = run(&settings).await;

    let elapsed = start_time.elapsed();
    info!(
        ok,
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
}
