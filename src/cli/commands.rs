//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// OrderTime Gateway CLI
#[derive(Parser, Debug)]
#[command(name = "ordertime-gateway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Upstream base URL (overrides OT_BASE_URL)
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search an entity by free text
    Search {
        /// Entity to search
        entity: EntityArg,

        /// Search text (required for customers)
        #[arg(default_value = "")]
        query: String,

        /// Page number
        #[arg(long, default_value = "1")]
        page: u32,

        /// Rows per page
        #[arg(long, default_value = "25")]
        take: u32,

        /// Rows to skip before the first returned row
        #[arg(long, default_value = "0")]
        skip: u32,
    },

    /// Fetch one record by id
    Get {
        /// Entity kind
        entity: EntityArg,

        /// Record id
        id: i64,
    },

    /// Probe upstream reachability with a one-row sample query
    Ping,

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

/// Entity kinds addressable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EntityArg {
    /// Customer records
    Customers,
    /// Part item records
    Items,
    /// Sales order records
    SalesOrders,
}
