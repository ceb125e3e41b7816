//! CLI command definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Business playbook catalog tool
#[derive(Parser, Debug)]
#[command(name = "playbook")]
#[command(version)]
#[command(about = "Inspect, validate, and export the built-in business playbooks")]
#[command(
    long_about = "Works on the same catalog and state machine the web UI renders, so page content and tab/overlay behaviour can be checked without a browser."
)]
pub struct Cli {
    /// Site config (TOML); defaults apply when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all playbook pages
    List,

    /// Show a page's tabs and topics
    Show {
        /// Page slug
        slug: String,

        /// Only show this tab (unknown ids follow the lookup policy)
        #[arg(short, long)]
        tab: Option<String>,
    },

    /// Validate the catalog and config
    Validate,

    /// Print a page as JSON
    Export {
        /// Page slug
        slug: String,

        /// Pretty-print the JSON
        #[arg(short, long, default_value_t = false)]
        pretty: bool,
    },

    /// Drive a page's tab/overlay controller and print each transition
    Replay {
        /// Page slug
        slug: String,

        /// Events: tab:<id>, open:<id>, close, backdrop, panel, escape
        #[arg(required = true)]
        events: Vec<String>,
    },
}
