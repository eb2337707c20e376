//! Ninja build-file writer
//!
//! Owns the Ninja grammar so the compiler never has to: it takes the compiled
//! rule/edge sequences and renders them into the declarative syntax the
//! external executor consumes. Rules come first, then build statements, both
//! in compilation order.

use crate::compiler::{BuildEdge, BuildGraph, Rule};

/// Render a compiled graph as the contents of a Ninja build file.
pub fn render(graph: &BuildGraph) -> String {
    let mut out = String::new();

    for rule in &graph.rules {
        render_rule(&mut out, rule);
    }
    for edge in &graph.builds {
        render_build(&mut out, edge);
    }

    out
}

fn render_rule(out: &mut String, rule: &Rule) {
    // Variable values run to end of line in Ninja, so the command and
    // description are emitted verbatim.
    out.push_str(&format!("rule {}\n", rule.name));
    out.push_str(&format!("  command = {}\n", rule.command));
    out.push_str(&format!("  description = {}\n", rule.description));
    out.push('\n');
}

fn render_build(out: &mut String, edge: &BuildEdge) {
    let outputs: Vec<String> = edge.outputs.iter().map(|p| escape_path(p)).collect();
    let inputs: Vec<String> = edge.inputs.iter().map(|p| escape_path(p)).collect();

    out.push_str(&format!(
        "build {}: {} {}\n",
        outputs.join(" "),
        edge.rule,
        inputs.join(" ")
    ));
}

/// Escape a path for use in a build statement.
///
/// Ninja's lexer treats space, colon and `$` specially on build lines.
fn escape_path(path: &str) -> String {
    path.replace('$', "$$")
        .replace(' ', "$ ")
        .replace(':', "$:")
}
