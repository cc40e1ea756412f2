pub mod discover;
pub mod files;
pub mod shares;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lanscout")]
#[command(about = "Browse files shared across the local network.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Discover hosts: sweep a /24 segment if given, else read the browse list
    #[command(alias = "d")]
    Discover {
        /// First three octets of the segment to sweep, e.g. 192.168.1
        segment: Option<String>,
    },
    /// List the disk shares a host exposes
    #[command(alias = "sh")]
    Shares {
        /// Host path, e.g. \\HOST1
        computer: String,
    },
    /// List files one level below a share path
    #[command(alias = "f")]
    Files {
        share: String,
        #[arg(long, default_value = "")]
        path: String,
    },
    /// Download a single file from a share
    #[command(alias = "get")]
    Fetch {
        share: String,
        #[arg(long)]
        path: String,
        /// Write here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Upload a local file into a share
    #[command(alias = "put")]
    Upload {
        share: String,
        #[arg(long)]
        file: PathBuf,
        /// Destination directory inside the share
        #[arg(long, default_value = "")]
        path: String,
    },
    /// List this machine's own share root, creating it if missing
    #[command(alias = "l")]
    Local {
        #[arg(long, default_value = "shared-files")]
        root: PathBuf,
        #[arg(long, default_value = "")]
        path: String,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
