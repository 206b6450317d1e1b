//! Launch configuration: optional TOML file merged with environment inputs.

use crate::runtime::env::EnvHelper;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Workspace-relative path of the optional launch file.
pub const LAUNCH_CONFIG_PATH: &str = "tools/launch.toml";
/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: &str = "8501";
/// Bind address used when `BIND_ADDRESS` is unset.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Contents of `tools/launch.toml`. Every field is optional.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchFile {
    /// Dashboard script, relative to the workspace root.
    pub entry: PathBuf,
    /// Requirements file installed when the framework module is missing.
    pub requirements: PathBuf,
    /// Python module that runs the dashboard.
    pub framework_module: String,
    /// Python module whose presence enables headless-browser provisioning.
    pub browser_module: String,
    /// Browser name passed to the provisioning command.
    pub browser: String,
    /// Whether provisioning is attempted at all.
    pub provision_browser: bool,
    /// Directory the dashboard loads the widget bundle from.
    pub widget_build_dir: PathBuf,
}

impl Default for LaunchFile {
    fn default() -> Self {
        Self {
            entry: PathBuf::from("weathermonitor.py"),
            requirements: PathBuf::from("requirements.txt"),
            framework_module: "streamlit".to_string(),
            browser_module: "playwright".to_string(),
            browser: "chromium".to_string(),
            provision_browser: true,
            widget_build_dir: PathBuf::from("mobile_detect/frontend/build"),
        }
    }
}

/// Fully resolved launch inputs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LaunchSettings {
    /// File-backed settings.
    pub file: LaunchFile,
    /// Port, passed to the dashboard verbatim.
    pub port: String,
    /// Bind address, passed to the dashboard verbatim.
    pub bind_address: String,
    /// Explicit interpreter from `PYTHON`.
    pub python_override: Option<String>,
    /// Active virtual environment from `VIRTUAL_ENV`.
    pub virtual_env: Option<PathBuf>,
}

impl LaunchSettings {
    /// Merge the launch file with environment values read through `lookup`.
    ///
    /// Blank variables count as unset. Port and bind address are not parsed.
    pub fn resolve(file: LaunchFile, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| EnvHelper::non_blank(lookup(key));
        Self {
            file,
            port: read("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string()),
            bind_address: read("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            python_override: read("PYTHON"),
            virtual_env: read("VIRTUAL_ENV").map(PathBuf::from),
        }
    }

    /// Interpreter arguments that start the dashboard server.
    pub fn dashboard_args(&self, root: &Path, passthrough: &[String]) -> Vec<String> {
        let mut args = vec![
            "-m".to_string(),
            self.file.framework_module.clone(),
            "run".to_string(),
            root.join(&self.file.entry).display().to_string(),
            "--server.port".to_string(),
            self.port.clone(),
            "--server.address".to_string(),
            self.bind_address.clone(),
            "--server.headless".to_string(),
            "true".to_string(),
        ];
        args.extend(passthrough.iter().cloned());
        args
    }
}
