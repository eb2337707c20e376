mod cli;
mod commands;
mod compiler;
mod config;
mod ident;
mod job;
mod logging;
mod ninja;
mod registry;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::AddJob(args) => {
            logging::init(&args.common);
            commands::add_job::run(&args)
        }
        Commands::RunBuild(args) => {
            logging::init(&args.common);
            commands::run_build::run(&args)
        }
    }
}
