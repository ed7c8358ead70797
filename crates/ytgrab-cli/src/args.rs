use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ytgrab")]
#[command(author, version, about = "YouTube video downloader with a single-page web UI")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web UI (default when no command is given)
    Serve {
        /// Address to bind, e.g. 127.0.0.1:8501
        #[arg(short, long, env = "YTGRAB_LISTEN")]
        listen: Option<String>,
    },

    /// Show title, channel, duration and available qualities
    Info {
        /// YouTube URL
        url: String,
    },

    /// Download a video in the chosen quality
    Download {
        /// YouTube URL
        url: String,

        /// Quality label, e.g. 720p (defaults to the first listed quality)
        #[arg(short, long)]
        quality: Option<String>,

        /// Output directory (defaults to ~/Downloads)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check external dependencies
    Doctor,

    /// Show configuration
    Config,
}
