use clap::{Parser, Subcommand};

use crate::job::CiStage;

/// Gantry - incremental job-graph builder
///
/// Gantry accumulates shell-command jobs in a persistent registry across
/// independent invocations, then compiles the whole registry into a Ninja
/// build file for the external executor to run.
#[derive(Parser, Debug)]
#[command(name = "gantry")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Incrementally build up a dependency graph of jobs to execute", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared across subcommands
#[derive(Parser, Debug, Clone)]
pub struct CommonArgs {
    /// Directory holding the job registry
    #[arg(long, env = "GANTRY_STATE_DIR")]
    pub state_dir: Option<String>,

    /// Verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose output
    #[arg(short = 'w', long)]
    pub very_verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register one job in the shared registry
    AddJob(AddJobArgs),

    /// Compile the accumulated registry into a Ninja build file
    RunBuild(RunBuildArgs),
}

#[derive(Parser, Debug)]
pub struct AddJobArgs {
    /// Files that this job depends on
    #[arg(short = 'i', long, value_name = "F", num_args = 1.., required = true)]
    pub inputs: Vec<String>,

    /// Command to run once all dependencies are satisfied
    #[arg(short = 'c', long, value_name = "C")]
    pub command: String,

    /// Files that this job generates
    #[arg(short = 'o', long, value_name = "F", num_args = 1.., required = true)]
    pub outputs: Vec<String>,

    /// Pipeline this job is a member of
    #[arg(short = 'p', long, value_name = "P")]
    pub pipeline_name: Option<String>,

    /// CI stage this job should execute in
    #[arg(short = 's', long, value_name = "S", value_enum)]
    pub ci_stage: Option<CiStage>,

    /// Max number of seconds this job should run for
    #[arg(long, value_name = "N")]
    pub timeout: Option<u64>,

    /// If the job times out, terminate it and return success
    #[arg(long)]
    pub timeout_ok: bool,

    /// Return codes that should be considered successful
    #[arg(long, value_name = "RC", num_args = 1..)]
    pub ok_returns: Option<Vec<i32>>,

    /// String to print when this job is being run
    #[arg(long, value_name = "DESC")]
    pub description: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
pub struct RunBuildArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}
