//! Shared process execution helpers.

use crate::runtime::env::EnvHelper;
use crate::runtime::error::{XtaskError, XtaskResult};
use std::path::Path;
use std::process::{Command, Stdio};

/// Shared process runner used by command modules.
///
/// This type centralizes command execution style for launcher workflows:
/// - print commands in a stable `+ ...` format
/// - run from a caller-provided working directory
/// - normalize error categorization into [`XtaskError`]
/// - provide lightweight availability/probe helpers for workflow gating
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessRunner {
    env: EnvHelper,
}

impl ProcessRunner {
    /// Create a process runner.
    pub fn new() -> Self {
        Self { env: EnvHelper }
    }

    /// Shared environment helper.
    pub fn env(&self) -> &EnvHelper {
        &self.env
    }

    /// Return whether the given program is available by checking `--version`.
    ///
    /// Probe failures are treated as `false` instead of surfacing an error.
    pub fn command_available(&self, program: &str) -> bool {
        self.command_succeeds(program, &["--version"])
    }

    /// Return whether a command succeeds with the provided arguments.
    ///
    /// Stdout and stderr are suppressed.
    pub fn command_succeeds(&self, program: &str, args: &[&str]) -> bool {
        Command::new(program)
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Require a command to exist.
    ///
    /// Returns an environment error with the supplied hint when the command is unavailable.
    pub fn ensure_command(&self, program: &str, hint: &str) -> XtaskResult<()> {
        if self.command_available(program) {
            Ok(())
        } else {
            Err(XtaskError::environment(format!(
                "required command `{program}` not found. {hint}"
            )))
        }
    }

    /// Run a process with owned string arguments.
    ///
    /// The process inherits the terminal stdio streams. Non-zero exits are converted into
    /// [`XtaskError::process_exit`].
    pub fn run_owned(&self, cwd: &Path, program: &str, args: Vec<String>) -> XtaskResult<()> {
        self.print_command(program, &args);
        let mut cmd = Command::new(program);
        cmd.current_dir(cwd).args(&args);
        Self::wait(program, &mut cmd)
    }

    /// Run trunk in the given crate directory with normalized environment.
    pub fn run_trunk(&self, cwd: &Path, args: Vec<String>) -> XtaskResult<()> {
        self.print_command("trunk", &args);
        let mut cmd = Command::new("trunk");
        cmd.current_dir(cwd).args(&args);
        self.env.apply_no_color_override(&mut cmd);
        Self::wait("trunk", &mut cmd)
    }

    /// Print a process invocation in a stable format.
    pub fn print_command(&self, program: &str, args: &[String]) {
        if args.is_empty() {
            println!("+ {program}");
        } else {
            println!("+ {program} {}", args.join(" "));
        }
    }

    /// Capture the first stdout line from a simple probe command.
    ///
    /// Returns `"unavailable"` when the command cannot be executed, exits unsuccessfully, or does
    /// not emit a first line of stdout.
    pub fn capture_stdout_line(&self, program: &str, args: &[&str]) -> String {
        let Ok(output) = Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
        else {
            return "unavailable".into();
        };
        if !output.status.success() {
            return "unavailable".into();
        }
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .unwrap_or("unavailable")
            .trim()
            .to_string()
    }

    fn wait(program: &str, cmd: &mut Command) -> XtaskResult<()> {
        let status = cmd.status().map_err(|err| {
            XtaskError::process_launch(format!("failed to start `{program}`: {err}"))
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(XtaskError::process_exit(format!(
                "`{program}` exited with status {status}"
            )))
        }
    }
}
