//! Top-level CLI parsing and help output.

use crate::runtime::error::{XtaskError, XtaskResult};

/// Top-level `xtask` command families.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TopLevelCommand {
    Launch(Vec<String>),
    BuildWidget(Vec<String>),
    ServeWidget(Vec<String>),
    PrintConfig(Vec<String>),
    Help,
}

/// Parse raw command-line arguments into a top-level command selection.
pub fn parse(args: Vec<String>) -> XtaskResult<TopLevelCommand> {
    let Some(cmd) = args.first().cloned() else {
        return Ok(TopLevelCommand::Help);
    };

    let rest = args[1..].to_vec();
    match cmd.as_str() {
        "launch" => Ok(TopLevelCommand::Launch(rest)),
        "build-widget" => Ok(TopLevelCommand::BuildWidget(rest)),
        "serve-widget" => Ok(TopLevelCommand::ServeWidget(rest)),
        "print-config" => Ok(TopLevelCommand::PrintConfig(rest)),
        "help" | "--help" | "-h" => Ok(TopLevelCommand::Help),
        other => Err(XtaskError::validation(format!(
            "unknown xtask command: {other}"
        ))),
    }
}

/// Print the canonical top-level usage text.
pub fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           launch [--skip-install] [--no-browser] [-- <dashboard args>]\n\
                              Resolve the interpreter, provision dependencies, start the dashboard\n\
           build-widget [--dev] [trunk args]\n\
                              Build the viewport widget bundle into the component build dir\n\
           serve-widget [--port N] [trunk args]\n\
                              Serve the widget for dashboard dev mode (default port 3001)\n\
           print-config        Show the resolved launch configuration\n\
         \n\
         Environment:\n\
           PORT                Dashboard port (default 8501)\n\
           BIND_ADDRESS        Dashboard bind address (default 0.0.0.0)\n\
           PYTHON              Interpreter override\n\
           MOBILE_DETECT_DEV=1 Dashboard loads the widget from `serve-widget`\n"
    );
}
