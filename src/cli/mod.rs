//! Command-line interface layer.

pub mod args;
mod exit_status;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use crate::error::AppError;
use crate::reporter;

/// Run the parsed CLI command and translate its outcome into an exit
/// status. Hard failures are printed here, normalized through the error
/// taxonomy when possible.
pub fn run_cli(args: Arguments) -> ExitStatus {
    let Some(args) = args.with_command_or_help() else {
        return ExitStatus::Success;
    };

    match run::run(args) {
        Ok(result) if result.issues == 0 => ExitStatus::Success,
        Ok(_) => ExitStatus::Failure,
        Err(err) => {
            match err.downcast_ref::<AppError>() {
                Some(app_err) => {
                    reporter::failure(&app_err.user_message());
                    reporter::note(&err.to_string());
                    if app_err.is_retryable() {
                        reporter::note("this looks transient; retrying may help");
                    }
                }
                None => reporter::failure(&format!("{:#}", err)),
            }
            ExitStatus::Error
        }
    }
}
