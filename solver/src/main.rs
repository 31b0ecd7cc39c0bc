//! Solver binary entry point
//!
//! Speaks newline-delimited JSON: requests on stdin, acknowledgments and
//! notifications on stdout, logs on stderr.

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use shared::{SolverAck, SolverRequest};
use solver::{Coordinator, StdoutSink, DEFAULT_RESULT_CAP};

#[derive(Parser)]
#[command(name = "solver")]
#[command(about = "Searches priced items for combinations meeting a target price")]
struct Args {
    /// Maximum number of combinations returned per search
    #[arg(long, default_value_t = DEFAULT_RESULT_CAP)]
    result_cap: usize,

    /// Log level for the solver crates (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    shared::logging::init_tracing(args.log_level.as_deref());

    let sink = StdoutSink::new();
    let coordinator = Coordinator::with_result_cap(sink.clone(), args.result_cap);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading request line")? {
        if line.trim().is_empty() {
            continue;
        }

        let ack = match SolverRequest::from_json(&line) {
            Ok(request) => coordinator.handle(request),
            Err(e) => {
                debug!(error = %e, "rejecting malformed request line");
                SolverAck::rejected(e.to_string())
            }
        };
        sink.send_ack(&ack).await;
    }

    // Let an in-flight search publish its terminal notification before exit
    while coordinator.is_busy() {
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }

    debug!("stdin closed, shutting down");
    Ok(())
}
