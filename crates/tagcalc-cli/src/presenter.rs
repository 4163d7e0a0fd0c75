//! CLI result presenter.

use std::io::{self, Write};

use tagcalc_core::currency::format_usd;
use tagcalc_core::{EvalError, INVALID_EXPRESSION};

use crate::output::format_bindings;
use crate::ui::styled_result;

/// Prints evaluation results in quiet, normal or verbose form.
pub struct CliResultPresenter {
    verbose: bool,
    quiet: bool,
    color: bool,
}

impl CliResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            color: false,
        }
    }

    /// Colour the result line in normal and verbose mode.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Write the result of evaluating `formula` with `bindings`.
    ///
    /// Quiet mode writes only the display string; a failed evaluation is
    /// always shown as `Invalid expression`.
    pub fn present_result(
        &self,
        out: &mut dyn Write,
        formula: &str,
        bindings: &[(String, String)],
        outcome: &Result<f64, EvalError>,
    ) -> io::Result<()> {
        let display = match outcome {
            Ok(value) => format_usd(*value),
            Err(_) => INVALID_EXPRESSION.to_string(),
        };

        if self.quiet {
            return writeln!(out, "{display}");
        }

        writeln!(out, "Formula: {formula}")?;
        if !bindings.is_empty() {
            writeln!(out, "Tags: {}", format_bindings(bindings))?;
        }
        if self.verbose {
            match outcome {
                Ok(value) => writeln!(out, "Value: {value}")?,
                Err(err) => writeln!(out, "Reason: {err}")?,
            }
        }
        writeln!(
            out,
            "Result: {}",
            styled_result(&display, outcome.is_err(), self.color)
        )
    }

    /// Convenience wrapper writing to stdout.
    pub fn print_result(
        &self,
        formula: &str,
        bindings: &[(String, String)],
        outcome: &Result<f64, EvalError>,
    ) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.present_result(&mut lock, formula, bindings, outcome)
    }
}
