use std::process::ExitCode;

fn main() -> ExitCode {
    pcsim::app::startup::startup()
}
