//! Well-known paths for the registry and the compiled build file.
//!
//! The registry lives under a per-user state directory following the XDG Base
//! Directory Specification:
//! - `$GANTRY_STATE_DIR` if set (also exposed as `--state-dir`)
//! - `$XDG_STATE_HOME/gantry`
//! - `$HOME/.local/state/gantry` otherwise
//!
//! The compiled build file is written to `gantry.ninja` in the current
//! directory, which is where the external executor expects to pick it up.

use std::path::PathBuf;

/// File name of the compiled Ninja build file
pub const OUTPUT_FILE: &str = "gantry.ninja";

/// File name of the registry document inside the state directory
pub const REGISTRY_FILE: &str = "jobs.json";

/// Resolved locations for one invocation
#[derive(Debug, Clone)]
pub struct Config {
    pub registry_path: PathBuf,
    pub output_path: PathBuf,
}

impl Config {
    /// Resolve paths, honoring an explicit state-dir override from the CLI.
    pub fn resolve(state_dir_override: Option<&str>) -> Self {
        let state_dir = match state_dir_override {
            Some(dir) => PathBuf::from(dir),
            None => default_state_dir(),
        };

        Self {
            registry_path: state_dir.join(REGISTRY_FILE),
            output_path: PathBuf::from(OUTPUT_FILE),
        }
    }
}

/// Get the gantry state directory (for the shared job registry)
///
/// Respects the XDG_STATE_HOME environment variable and falls back to
/// `$HOME/.local/state/gantry` on Unix.
fn default_state_dir() -> PathBuf {
    if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
        PathBuf::from(xdg_state).join("gantry")
    } else if let Some(home) = dirs::home_dir() {
        // XDG spec default: $HOME/.local/state
        home.join(".local").join("state").join("gantry")
    } else {
        // Fallback to current directory (should rarely happen)
        PathBuf::from(".gantry-state")
    }
}
