pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use osudb_core::DecodeOptions;
use osudb_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let opts = DecodeOptions {
        require_exhausted: !cli.lenient,
    };
    match cli.command {
        Commands::Summary { db } => handlers::handle_summary(&db, &opts),
        Commands::List { db, mode, limit } => handlers::handle_list(&db, &opts, mode, limit),
        Commands::Show { db, md5 } => handlers::handle_show(&db, &opts, &md5),
        Commands::Dump { db } => handlers::handle_dump(&db, &opts),
    }
}
