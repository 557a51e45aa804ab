//! Result display.

use rpn_eval::Evaluator;

use crate::options::DriverOptions;

/// Shown when the stack does not reduce to a value.
pub const NO_RESULT: &str = "no result";

/// Format an evaluation result for display.
///
/// NaN and infinities ignore the precision setting.
pub fn format_result(result: Option<f64>, options: &DriverOptions) -> String {
    match (result, options.precision) {
        (None, _) => NO_RESULT.to_owned(),
        (Some(value), Some(places)) if value.is_finite() => format!("{value:.places$}"),
        (Some(value), _) => value.to_string(),
    }
}

/// Format the stack line printed by `--stack`.
pub fn format_stack(calc: &Evaluator) -> String {
    format!("[{calc}]")
}
