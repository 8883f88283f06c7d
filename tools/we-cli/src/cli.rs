//! Command line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Record energy consumption readings on the ledger.
#[derive(Parser, Debug)]
#[command(name = "we", version)]
#[command(about = "Submit and query we transactions")]
pub struct Cli {
    /// Enable more verbose output (repeat for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// REST API URL [env: WE_URL] [default: http://127.0.0.1:8008]
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Private key file, overriding --key-dir and --username
    #[arg(long, global = true)]
    pub keyfile: Option<PathBuf>,

    /// Key name inside the key directory
    #[arg(long, default_value = "my_key", global = true)]
    pub username: String,

    /// Directory holding `<username>.priv` [default: ~/.sawtooth/keys]
    #[arg(long, global = true)]
    pub key_dir: Option<PathBuf>,

    /// Basic auth user [env: WE_AUTH_USER]
    #[arg(long, global = true)]
    pub auth_user: Option<String>,

    /// Basic auth password [env: WE_AUTH_PASSWORD]
    #[arg(long, global = true)]
    pub auth_password: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send a transaction recording the readings of one date and hour
    Set(SetArgs),
    /// Show the record stored for one date and hour
    Get(GetArgs),
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Date and hour of the recorded consumption, without spaces
    #[arg(short, long)]
    pub name: String,

    /// Id of each consumer/producer
    #[arg(long = "list-id", alias = "listId", num_args = 1.., required = true)]
    pub list_id: Vec<u64>,

    /// Consumption of each participant, in the same order as the ids
    #[arg(
        long = "list-consumption",
        alias = "listConsumption",
        num_args = 1..,
        required = true
    )]
    pub list_consumption: Vec<u64>,

    /// Seconds to wait for the batch to commit (0 returns immediately)
    #[arg(long, default_value_t = 0)]
    pub wait: u64,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Date and hour to look up
    #[arg(short, long)]
    pub name: String,
}
