use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "emissary",
    version,
    about = "Personal career-assistant chat service"
)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP chat server
    Serve {
        /// Bind host override
        #[arg(long)]
        host: Option<String>,

        /// Bind port override
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Chat with a running server from the terminal
    Chat {
        /// Base URL of the chat server
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        url: String,
    },
}
