//! shoes binary entry point.

use std::process::ExitCode;

use shoestock::ui::output;

fn main() -> ExitCode {
    match shoestock::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
