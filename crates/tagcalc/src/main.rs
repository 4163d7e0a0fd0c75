//! tagcalc: formula calculator with tag chips.

use std::process::ExitCode;

use tagcalc_core::EvalError;
use tagcalc_lib::{app, config, errors, logging, version};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    let outcome = logging::init(&config).and_then(|()| {
        tracing::debug!(version = %version::full_version(), "starting");
        app::run(&config)
    });

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The presenter has already printed "Invalid expression".
            if !err.is::<EvalError>() {
                tagcalc_cli::ui::print_error(&format!("{err:#}"));
            }
            ExitCode::from(u8::try_from(errors::exit_code_for(&err)).unwrap_or(1))
        }
    }
}
