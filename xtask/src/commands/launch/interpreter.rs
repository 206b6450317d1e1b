//! Interpreter discovery.

use super::settings::LaunchSettings;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::runtime::process::ProcessRunner;
use std::path::Path;

/// Ordered interpreter candidates for the given settings.
///
/// An explicit `PYTHON` override is the only candidate when present.
pub fn candidates(settings: &LaunchSettings) -> Vec<String> {
    if let Some(python) = &settings.python_override {
        return vec![python.clone()];
    }

    let mut found = Vec::new();
    if let Some(venv) = &settings.virtual_env {
        found.push(venv_python(venv));
    }
    found.push("python3".to_string());
    found.push("python".to_string());
    found
}

/// Pick the first candidate that answers `--version`.
pub fn resolve_interpreter(
    process: &ProcessRunner,
    settings: &LaunchSettings,
) -> XtaskResult<String> {
    let candidates = candidates(settings);
    candidates
        .iter()
        .find(|candidate| process.command_available(candidate))
        .cloned()
        .ok_or_else(|| {
            XtaskError::environment(format!(
                "no usable Python interpreter (tried {})",
                candidates.join(", ")
            ))
            .with_operation("resolve interpreter")
            .with_hint("install Python 3 or point PYTHON at an interpreter")
        })
}

fn venv_python(venv: &Path) -> String {
    let relative = if cfg!(windows) {
        "Scripts/python.exe"
    } else {
        "bin/python"
    };
    venv.join(relative).display().to_string()
}
