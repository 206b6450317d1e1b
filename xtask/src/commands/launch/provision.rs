//! Dependency and headless-browser provisioning.

use super::settings::LaunchFile;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::runtime::process::ProcessRunner;
use std::path::Path;

/// Result of the optional browser provisioning step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BrowserProvision {
    /// Disabled by configuration or flag.
    Disabled,
    /// The browser-automation module is not installed; nothing to provision.
    ModuleAbsent,
    /// Browser binary installed (or already present).
    Installed,
    /// Provisioning ran and failed. Startup continues.
    Failed(String),
}

/// Install requirements only when the dashboard framework cannot be imported.
pub fn ensure_framework(
    process: &ProcessRunner,
    root: &Path,
    python: &str,
    file: &LaunchFile,
) -> XtaskResult<()> {
    if module_importable(process, python, &file.framework_module) {
        return Ok(());
    }

    let requirements = root.join(&file.requirements);
    if !requirements.is_file() {
        return Err(XtaskError::environment(format!(
            "python module `{}` is not installed and no requirements file was found",
            file.framework_module
        ))
        .with_path(&requirements)
        .with_hint("create the requirements file or install the dashboard framework manually"));
    }

    process
        .run_owned(
            root,
            python,
            vec![
                "-m".to_string(),
                "pip".to_string(),
                "install".to_string(),
                "-r".to_string(),
                requirements.display().to_string(),
            ],
        )
        .map_err(|err| err.with_operation("install requirements"))
}

/// Provision the headless browser when its automation module is importable.
///
/// Never fails; the caller reports [`BrowserProvision::Failed`] as a warning.
pub fn provision_browser(
    process: &ProcessRunner,
    root: &Path,
    python: &str,
    file: &LaunchFile,
    enabled: bool,
) -> BrowserProvision {
    if !enabled || !file.provision_browser {
        return BrowserProvision::Disabled;
    }
    if !module_importable(process, python, &file.browser_module) {
        return BrowserProvision::ModuleAbsent;
    }

    let args = vec![
        "-m".to_string(),
        file.browser_module.clone(),
        "install".to_string(),
        file.browser.clone(),
    ];
    match process.run_owned(root, python, args) {
        Ok(()) => BrowserProvision::Installed,
        Err(err) => BrowserProvision::Failed(err.to_string()),
    }
}

fn module_importable(process: &ProcessRunner, python: &str, module: &str) -> bool {
    process.command_succeeds(python, &["-c", &format!("import {module}")])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::error::XtaskErrorCategory;
    use pretty_assertions::assert_eq;

    #[test]
    fn disabled_provisioning_skips_import_check() {
        let file = LaunchFile {
            provision_browser: false,
            ..LaunchFile::default()
        };
        assert_eq!(
            provision_browser(
                &ProcessRunner::new(),
                Path::new("."),
                "definitely-not-a-real-python",
                &file,
                true,
            ),
            BrowserProvision::Disabled
        );
    }

    #[test]
    fn unusable_interpreter_counts_as_module_absent() {
        assert_eq!(
            provision_browser(
                &ProcessRunner::new(),
                Path::new("."),
                "definitely-not-a-real-python",
                &LaunchFile::default(),
                true,
            ),
            BrowserProvision::ModuleAbsent
        );
    }

    #[test]
    fn missing_framework_without_requirements_is_environment_error() {
        let root = std::env::temp_dir().join("xtask-provision-missing-requirements");
        let file = LaunchFile {
            requirements: "does-not-exist.txt".into(),
            ..LaunchFile::default()
        };
        let err = ensure_framework(
            &ProcessRunner::new(),
            &root,
            "definitely-not-a-real-python",
            &file,
        )
        .expect_err("framework check should fail");
        assert_eq!(err.category, XtaskErrorCategory::Environment);
        assert!(err.to_string().contains("does-not-exist.txt"));
    }
}
