//! CLI argument definitions.

use clap::{ArgAction, Parser, Subcommand};

use crate::config::DeploymentMode;

/// Resaka - chat with the Malagasy assistant from the terminal
#[derive(Parser, Debug)]
#[command(name = "resaka")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Backend to talk to
    #[arg(long, value_enum, env = "RESAKA_MODE", default_value_t = DeploymentMode::Development)]
    pub mode: DeploymentMode,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (defaults to `chat`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive conversation
    Chat,

    /// Send a single message and print the reply
    Send {
        /// Continue an existing conversation
        #[arg(long)]
        conversation_id: Option<String>,

        /// Message to send
        #[arg(trailing_var_arg = true, required = true)]
        message: Vec<String>,
    },

    /// Probe the backend and print the connectivity badge
    Health,
}
