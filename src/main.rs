//! # playbook
//!
//! Command-line companion to `playbook-ui`. It reads the same built-in
//! catalog and drives the same tab/overlay controller, so content and
//! behaviour can be checked from a terminal or CI.
//!
//! ## Error Handling
//!
//! Every command returns `anyhow::Result`; any failure is printed with its
//! context chain and the process exits non-zero.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod cli;
mod commands;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::commands::{execute_command, load_config};

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    debug!(command = ?cli.command, "parsed command line");

    let config = load_config(cli.config.as_deref())?;
    let stdout = io::stdout();
    execute_command(cli.command, &config, &mut stdout.lock())
}

/// Initialize tracing subscriber with environment filter.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
