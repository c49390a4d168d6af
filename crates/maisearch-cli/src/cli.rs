//! CLI argument definitions for maisearch.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "maisearch")]
#[command(about = "maimai DX song catalog search", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "maisearch.toml", env = "MAISEARCH_CONFIG")]
    pub config: PathBuf,

    /// Override the music data file from the config
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Override the local alias file from the config
    #[arg(long, value_name = "FILE")]
    pub aliases: Option<PathBuf>,

    /// Do not contact the alias or cover services
    #[arg(long)]
    pub offline: bool,

    /// Rows per listing page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Scope (chat group) the query comes from, for guessing-game checks
    #[arg(long, env = "MAISEARCH_SCOPE")]
    pub scope: Option<String>,

    /// Treat the scope as having a guessing game in progress
    #[arg(long, requires = "scope")]
    pub guessing: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search song titles
    Search {
        /// Title text
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: usize,
    },
    /// List charts by constant: <c> [page] | <low> <high> [page]
    Base {
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        args: Vec<String>,
    },
    /// List songs by BPM: <bpm> | <low> <high> [page]
    Bpm {
        #[arg(required = true, num_args = 1..)]
        args: Vec<String>,
    },
    /// List songs by artist: <name> [page]
    Artist {
        #[arg(required = true, num_args = 1..)]
        args: Vec<String>,
    },
    /// List songs by charter: <name> [page]
    Charter {
        #[arg(required = true, num_args = 1..)]
        args: Vec<String>,
    },
    /// Resolve an alias, id or title to a song
    What {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Show a song by id
    Id { id: String },
    /// Fetch a song jacket
    Cover {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Output file path (defaults to <file id>.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List local aliases of a song
    Aliases { song_id: String },
}
