//! Dashboard launcher and widget bundle commands (`cargo xtask`).
//!
//! The crate is a small CLI layer over a shared runtime. Command modules own workflow policy
//! (interpreter discovery, dependency provisioning, dashboard flags) while [`runtime`] owns
//! process execution, configuration loading, and environment normalization.

pub mod cli;
pub mod commands;
pub mod runtime;

use crate::cli::TopLevelCommand;
use crate::commands::launch::{LaunchCommand, PrintConfigCommand};
use crate::commands::widget::{BuildWidgetCommand, ServeWidgetCommand};
use crate::runtime::context::CommandContext;
use crate::runtime::error::XtaskResult;

/// Shared command contract for top-level xtask command families.
///
/// [`XtaskCommand::parse`] is a pure translation from raw CLI arguments into typed options;
/// side effects belong in [`XtaskCommand::run`].
pub trait XtaskCommand {
    /// Typed options produced by CLI parsing for the command family.
    type Options;

    /// Parse command-line arguments into typed options.
    ///
    /// Implementations should return [`XtaskError::validation`](crate::runtime::error::XtaskError::validation)
    /// for invalid user-facing argument shapes.
    fn parse(args: &[String]) -> XtaskResult<Self::Options>;

    /// Execute the command family using the shared runtime context.
    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()>;
}

/// Executes the `xtask` binary using the current process arguments.
pub fn execute_from_env() -> XtaskResult<()> {
    let parsed = cli::parse(std::env::args().skip(1).collect())?;
    let ctx = CommandContext::new()?;

    match parsed {
        TopLevelCommand::Launch(args) => LaunchCommand::run(&ctx, LaunchCommand::parse(&args)?),
        TopLevelCommand::BuildWidget(args) => {
            BuildWidgetCommand::run(&ctx, BuildWidgetCommand::parse(&args)?)
        }
        TopLevelCommand::ServeWidget(args) => {
            ServeWidgetCommand::run(&ctx, ServeWidgetCommand::parse(&args)?)
        }
        TopLevelCommand::PrintConfig(args) => {
            PrintConfigCommand::run(&ctx, PrintConfigCommand::parse(&args)?)
        }
        TopLevelCommand::Help => {
            cli::print_usage();
            Ok(())
        }
    }
}

/// Converts an xtask result into a stable process exit code.
///
/// All command failures map to exit code `1` after printing the formatted error to stderr.
pub fn exit_code(result: XtaskResult<()>) -> std::process::ExitCode {
    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::ExitCode::from(1)
        }
    }
}
