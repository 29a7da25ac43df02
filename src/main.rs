use std::process::ExitCode;

use routecrumbs::ui::output;

fn main() -> ExitCode {
    match routecrumbs::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
