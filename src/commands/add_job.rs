/// `gantry add-job` command implementation
///
/// Builds a job record from the typed CLI arguments and appends it to the
/// shared registry.
use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::AddJobArgs;
use crate::config::Config;
use crate::job::JobRecord;
use crate::registry::Registry;

pub fn run(args: &AddJobArgs) -> Result<()> {
    let config = Config::resolve(args.common.state_dir.as_deref());
    let registry = Registry::new(config.registry_path);

    let record = JobRecord {
        inputs: Some(args.inputs.clone()),
        outputs: Some(args.outputs.clone()),
        command: Some(args.command.clone()),
        description: args.description.clone(),
        pipeline: args.pipeline_name.clone(),
        ci_stage: args.ci_stage,
        timeout: args.timeout,
        timeout_ok: args.timeout_ok,
        ok_returns: args.ok_returns.clone(),
    };

    registry
        .append(record)
        .context("failed to register job")?;

    debug!(
        operation = "add_job",
        status = "success",
        command = %args.command,
        "registered job"
    );

    Ok(())
}
