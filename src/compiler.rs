//! Graph compiler
//!
//! Turns the loaded registry into ordered rule and build-edge sequences for
//! the Ninja writer. Compilation is all-or-nothing: the first invalid record
//! aborts the whole run and nothing is handed to the writer, so a partial
//! graph can never reach disk.

use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use crate::ident;
use crate::job::JobRecord;

#[derive(Debug, Error, PartialEq)]
pub enum CompileError {
    #[error("job record is missing required field `{field}`: {record}")]
    MissingField { field: &'static str, record: String },

    #[error("command {command:?} sanitizes to an empty rule name")]
    EmptyRuleName { command: String },

    #[error("rule name `{name}` is derived from conflicting jobs: {first:?} vs {second:?}")]
    DuplicateRuleName {
        name: String,
        first: String,
        second: String,
    },
}

/// Named command template derived from a job
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub name: String,
    pub description: String,
    pub command: String,
}

/// Association between a job's files and the rule that produces them
#[derive(Debug, Clone, PartialEq)]
pub struct BuildEdge {
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub rule: String,
}

/// Compiled declaration sequences, in registry order
#[derive(Debug, Default, PartialEq)]
pub struct BuildGraph {
    pub rules: Vec<Rule>,
    pub builds: Vec<BuildEdge>,
}

/// Compile the full registry into rule and build-edge sequences.
///
/// Identical jobs sanitizing to the same name share a single rule
/// declaration; two *different* commands (or descriptions) sanitizing to the
/// same name are a hard error rather than the silent last-declaration-wins
/// behavior Ninja would otherwise apply.
pub fn compile(jobs: &[JobRecord]) -> Result<BuildGraph, CompileError> {
    let mut graph = BuildGraph::default();
    let mut rules_by_name: HashMap<String, usize> = HashMap::new();

    for job in jobs {
        let inputs = require_paths(job, "inputs", &job.inputs)?;
        let outputs = require_paths(job, "outputs", &job.outputs)?;
        let command = match job.command.as_deref() {
            Some(command) if !command.is_empty() => command,
            _ => return Err(missing_field(job, "command")),
        };

        let description = match &job.description {
            Some(description) => description.clone(),
            None => format!("Running '{command}...'"),
        };

        let name = ident::rule_name(command);
        if name.is_empty() {
            return Err(CompileError::EmptyRuleName {
                command: command.to_string(),
            });
        }

        match rules_by_name.get(&name) {
            Some(&index) => {
                let existing = &graph.rules[index];
                if existing.command != command || existing.description != description {
                    return Err(CompileError::DuplicateRuleName {
                        name,
                        first: existing.command.clone(),
                        second: command.to_string(),
                    });
                }
                // Identical job repeated: keep the single rule declaration
            }
            None => {
                rules_by_name.insert(name.clone(), graph.rules.len());
                graph.rules.push(Rule {
                    name: name.clone(),
                    description,
                    command: command.to_string(),
                });
            }
        }

        graph.builds.push(BuildEdge {
            inputs: inputs.to_vec(),
            outputs: outputs.to_vec(),
            rule: name,
        });
    }

    debug!(
        operation = "compile",
        status = "success",
        job_count = jobs.len(),
        rule_count = graph.rules.len(),
        build_count = graph.builds.len(),
        "compiled registry"
    );

    Ok(graph)
}

fn require_paths<'a>(
    job: &JobRecord,
    field: &'static str,
    value: &'a Option<Vec<String>>,
) -> Result<&'a [String], CompileError> {
    match value.as_deref() {
        Some(paths) if !paths.is_empty() => Ok(paths),
        _ => Err(missing_field(job, field)),
    }
}

fn missing_field(job: &JobRecord, field: &'static str) -> CompileError {
    let record = serde_json::to_string(job)
        .unwrap_or_else(|_| "<unprintable job record>".to_string());
    CompileError::MissingField { field, record }
}
