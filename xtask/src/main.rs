//! Launcher and widget bundle commands (`cargo xtask`).
//!
//! The binary is a thin shell over the library entrypoint so command families stay testable.

fn main() -> std::process::ExitCode {
    xtask::exit_code(xtask::execute_from_env())
}
