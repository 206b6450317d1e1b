//! `cargo xtask build-widget` and `cargo xtask serve-widget`: trunk workflows for the viewport
//! widget bundle.

use crate::commands::launch::load_settings;
use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::XtaskCommand;
use std::path::{Path, PathBuf};

/// Port the dashboard expects the development widget server on.
pub const DEV_SERVER_PORT: u16 = 3001;

/// Environment switch that makes the dashboard load the widget from the development server.
pub const DEV_MODE_ENV: &str = "MOBILE_DETECT_DEV";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum BuildProfile {
    Dev,
    Release,
}

/// Parsed `build-widget` options.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuildWidgetOptions {
    profile: BuildProfile,
    trunk_args: Vec<String>,
}

/// `cargo xtask build-widget`
pub struct BuildWidgetCommand;

impl XtaskCommand for BuildWidgetCommand {
    type Options = BuildWidgetOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        let mut profile = BuildProfile::Release;
        let mut trunk_args = Vec::new();
        for arg in args {
            if arg == "--dev" {
                profile = BuildProfile::Dev;
            } else {
                trunk_args.push(arg.clone());
            }
        }
        Ok(BuildWidgetOptions {
            profile,
            trunk_args,
        })
    }

    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()> {
        ctx.process().ensure_command(
            "trunk",
            "Install it with `cargo install trunk` and add the `wasm32-unknown-unknown` target",
        )?;
        let settings = load_settings(ctx)?;
        let dist = ctx.root().join(&settings.file.widget_build_dir);
        ctx.process().run_trunk(
            &widget_dir(ctx.root()),
            trunk_build_args(&dist, options.profile, options.trunk_args),
        )
    }
}

/// Parsed `serve-widget` options.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServeWidgetOptions {
    port: u16,
    trunk_args: Vec<String>,
}

/// `cargo xtask serve-widget`
pub struct ServeWidgetCommand;

impl XtaskCommand for ServeWidgetCommand {
    type Options = ServeWidgetOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        let mut port = DEV_SERVER_PORT;
        let mut trunk_args = Vec::new();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if arg == "--port" {
                let value = iter
                    .next()
                    .ok_or_else(|| XtaskError::validation("`--port` requires a value"))?;
                port = parse_port(value)?;
            } else if let Some(value) = arg.strip_prefix("--port=") {
                port = parse_port(value)?;
            } else {
                trunk_args.push(arg.clone());
            }
        }
        Ok(ServeWidgetOptions { port, trunk_args })
    }

    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()> {
        ctx.process().ensure_command(
            "trunk",
            "Install it with `cargo install trunk` and add the `wasm32-unknown-unknown` target",
        )?;
        if options.port == DEV_SERVER_PORT {
            println!("start the dashboard with {DEV_MODE_ENV}=1 to load the widget from this server");
        } else {
            eprintln!(
                "warning: the dashboard only loads a development widget from port {DEV_SERVER_PORT}"
            );
        }
        ctx.process().run_trunk(
            &widget_dir(ctx.root()),
            trunk_serve_args(options.port, options.trunk_args),
        )
    }
}

fn parse_port(raw: &str) -> XtaskResult<u16> {
    raw.parse::<u16>()
        .map_err(|_| XtaskError::validation(format!("invalid port `{raw}`")))
}

pub(crate) fn widget_dir(root: &Path) -> PathBuf {
    root.join("crates/viewport_widget")
}

fn trunk_build_args(dist: &Path, profile: BuildProfile, extra: Vec<String>) -> Vec<String> {
    let mut args = vec!["build".to_string(), "index.html".to_string()];
    if profile == BuildProfile::Release {
        args.push("--release".to_string());
    }
    if !extra.iter().any(|arg| arg == "--dist" || arg.starts_with("--dist=")) {
        args.push("--dist".to_string());
        args.push(dist.display().to_string());
    }
    args.extend(extra);
    args
}

fn trunk_serve_args(port: u16, extra: Vec<String>) -> Vec<String> {
    let mut args = vec![
        "serve".to_string(),
        "index.html".to_string(),
        "--port".to_string(),
        port.to_string(),
    ];
    args.extend(extra);
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn release_build_targets_component_directory() {
        let args = trunk_build_args(Path::new("/app/build"), BuildProfile::Release, Vec::new());
        assert_eq!(
            args,
            vec![
                "build",
                "index.html",
                "--release",
                "--dist",
                "/app/build",
            ]
        );
    }

    #[test]
    fn explicit_dist_overrides_configured_directory() {
        let options =
            BuildWidgetCommand::parse(&["--dev".to_string(), "--dist=out".to_string()])
                .expect("parse");
        assert_eq!(options.profile, BuildProfile::Dev);

        let args = trunk_build_args(Path::new("/app/build"), options.profile, options.trunk_args);
        assert_eq!(args, vec!["build", "index.html", "--dist=out"]);
    }

    #[test]
    fn serve_defaults_to_dashboard_dev_port() {
        let options = ServeWidgetCommand::parse(&[]).expect("parse");
        assert_eq!(
            trunk_serve_args(options.port, options.trunk_args),
            vec!["serve", "index.html", "--port", "3001"]
        );
    }

    #[test]
    fn serve_accepts_port_override_and_passes_other_args() {
        let options = ServeWidgetCommand::parse(&[
            "--port=4000".to_string(),
            "--open".to_string(),
        ])
        .expect("parse");
        assert_eq!(
            trunk_serve_args(options.port, options.trunk_args),
            vec!["serve", "index.html", "--port", "4000", "--open"]
        );
    }

    #[test]
    fn serve_rejects_invalid_port() {
        let err = ServeWidgetCommand::parse(&["--port".to_string(), "http".to_string()])
            .expect_err("invalid port");
        assert_eq!(err.message, "invalid port `http`");
        assert!(ServeWidgetCommand::parse(&["--port".to_string()]).is_err());
    }
}
