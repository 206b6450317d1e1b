//! `cargo xtask launch` and `cargo xtask print-config`.
//!
//! The launcher is operational glue: it finds an interpreter, installs the dashboard framework
//! when it is missing, optionally provisions a headless browser, and starts the dashboard in the
//! foreground with the port and bind address from the environment.

pub mod interpreter;
pub mod provision;
pub mod settings;

use self::provision::BrowserProvision;
use self::settings::{LaunchFile, LaunchSettings, LAUNCH_CONFIG_PATH};
use crate::runtime::config::ConfigLoader;
use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::XtaskCommand;

/// Parsed `launch` options.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LaunchOptions {
    /// Skip the framework import check and requirements install.
    pub skip_install: bool,
    /// Skip headless-browser provisioning.
    pub no_browser: bool,
    /// Extra arguments appended to the dashboard command.
    pub passthrough: Vec<String>,
}

/// `cargo xtask launch`
pub struct LaunchCommand;

impl XtaskCommand for LaunchCommand {
    type Options = LaunchOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        let mut options = LaunchOptions::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--skip-install" => options.skip_install = true,
                "--no-browser" => options.no_browser = true,
                "--" => {
                    options.passthrough = iter.by_ref().cloned().collect();
                }
                other => {
                    return Err(XtaskError::validation(format!(
                        "unknown `launch` argument: {other}"
                    ))
                    .with_hint("pass dashboard flags after `--`"));
                }
            }
        }
        Ok(options)
    }

    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()> {
        let settings = load_settings(ctx)?;
        let process = ctx.process();
        let python = interpreter::resolve_interpreter(process, &settings)?;
        println!(
            "using interpreter `{python}` ({})",
            process.capture_stdout_line(&python, &["--version"])
        );

        let entry = ctx.root().join(&settings.file.entry);
        if !entry.is_file() {
            return Err(XtaskError::config("dashboard entry script not found")
                .with_path(&entry)
                .with_hint(format!("set `entry` in {LAUNCH_CONFIG_PATH}")));
        }

        if !options.skip_install {
            provision::ensure_framework(process, ctx.root(), &python, &settings.file)?;
        }

        match provision::provision_browser(
            process,
            ctx.root(),
            &python,
            &settings.file,
            !options.no_browser,
        ) {
            BrowserProvision::Failed(reason) => {
                eprintln!("warning: headless browser provisioning failed: {reason}");
            }
            BrowserProvision::ModuleAbsent => {
                println!(
                    "`{}` not installed; skipping headless browser provisioning",
                    settings.file.browser_module
                );
            }
            BrowserProvision::Disabled | BrowserProvision::Installed => {}
        }

        let widget_index = ctx
            .root()
            .join(&settings.file.widget_build_dir)
            .join("index.html");
        if !widget_index.is_file() {
            eprintln!(
                "warning: widget bundle missing at {}; run `cargo xtask build-widget`",
                widget_index.display()
            );
        }

        process
            .run_owned(
                ctx.root(),
                &python,
                settings.dashboard_args(ctx.root(), &options.passthrough),
            )
            .map_err(|err| err.with_operation("run dashboard"))
    }
}

/// `cargo xtask print-config`
pub struct PrintConfigCommand;

impl XtaskCommand for PrintConfigCommand {
    type Options = ();

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        if args.is_empty() {
            Ok(())
        } else {
            Err(XtaskError::validation(
                "`cargo xtask print-config` does not accept extra arguments",
            ))
        }
    }

    fn run(ctx: &CommandContext, _: Self::Options) -> XtaskResult<()> {
        let settings = load_settings(ctx)?;
        let interpreter = interpreter::resolve_interpreter(ctx.process(), &settings)
            .unwrap_or_else(|err| format!("unresolved ({err})"));

        println!("config file:      {LAUNCH_CONFIG_PATH}");
        println!("entry:            {}", settings.file.entry.display());
        println!("port:             {}", settings.port);
        println!("bind address:     {}", settings.bind_address);
        println!("interpreter:      {interpreter}");
        println!("framework module: {}", settings.file.framework_module);
        println!(
            "browser:          {} via `{}` (enabled: {})",
            settings.file.browser, settings.file.browser_module, settings.file.provision_browser
        );
        println!(
            "widget build dir: {}",
            settings.file.widget_build_dir.display()
        );
        Ok(())
    }
}

/// Load `tools/launch.toml` (if any) and merge the process environment.
pub fn load_settings(ctx: &CommandContext) -> XtaskResult<LaunchSettings> {
    let file = ConfigLoader::<LaunchFile>::new(ctx.root(), LAUNCH_CONFIG_PATH).load_or_default()?;
    let env = *ctx.process().env();
    Ok(LaunchSettings::resolve(file, |key| env.var(key)))
}
