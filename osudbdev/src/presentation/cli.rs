use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "osu!.db inspector (dev)", long_about = None)]
pub struct Cli {
    /// Accept bytes left over after the declared records
    #[arg(long, global = true)]
    pub lenient: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print header fields and aggregate counts
    Summary { db: PathBuf },

    /// List beatmaps, one per line
    List {
        db: PathBuf,
        /// Game mode byte to keep (0 osu, 1 taiko, 2 fruits, 3 mania)
        #[arg(long)]
        mode: Option<u8>,
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print one beatmap as JSON
    Show { db: PathBuf, md5: String },

    /// Print the whole database as JSON
    Dump { db: PathBuf },
}
