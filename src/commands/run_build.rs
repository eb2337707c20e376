/// `gantry run-build` command implementation
///
/// Loads the full registry, compiles it, and writes the Ninja build file.
/// The file is only written after the whole registry compiled cleanly, so a
/// failed validation leaves no partial output behind.
use anyhow::{Context, Result};
use std::fs;
use tracing::info;

use crate::cli::RunBuildArgs;
use crate::compiler;
use crate::config::Config;
use crate::ninja;
use crate::registry::Registry;

pub fn run(args: &RunBuildArgs) -> Result<()> {
    let config = Config::resolve(args.common.state_dir.as_deref());
    let registry = Registry::new(config.registry_path);

    let jobs = registry.load()?;
    let graph = compiler::compile(&jobs)?;
    let rendered = ninja::render(&graph);

    fs::write(&config.output_path, rendered).with_context(|| {
        format!(
            "failed to write build file to {}",
            config.output_path.display()
        )
    })?;

    info!(
        operation = "run_build",
        status = "success",
        job_count = jobs.len(),
        rule_count = graph.rules.len(),
        build_count = graph.builds.len(),
        output = %config.output_path.display(),
        "wrote build file"
    );

    Ok(())
}
