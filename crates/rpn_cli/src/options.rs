//! Driver options parsed from the command line.

use crate::error::CliError;

/// Options shared by the `eval` and `repl` commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverOptions {
    /// Print the stack after each result.
    pub show_stack: bool,
    /// Fixed number of decimal places for results; `None` prints the
    /// shortest exact representation.
    pub precision: Option<usize>,
}

impl DriverOptions {
    /// Split `args` into options and positional words.
    ///
    /// Flags are `--stack`/`-s` and `--precision=<n>`. Anything else that
    /// starts with `--` is rejected. Single-dash words other than `-s` are
    /// positional, so `-5` and `-` reach the tokenizer untouched.
    pub fn parse(args: &[String]) -> Result<(Self, Vec<String>), CliError> {
        let mut options = DriverOptions::default();
        let mut positional = Vec::new();

        for arg in args {
            if arg == "--stack" || arg == "-s" {
                options.show_stack = true;
            } else if let Some(value) = arg.strip_prefix("--precision=") {
                let places = value
                    .parse::<usize>()
                    .map_err(|_| CliError::InvalidPrecision(value.to_owned()))?;
                options.precision = Some(places);
            } else if arg.starts_with("--") {
                return Err(CliError::UnknownFlag(arg.clone()));
            } else {
                positional.push(arg.clone());
            }
        }

        Ok((options, positional))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

    use pretty_assertions::assert_eq;

    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_owned()).collect()
    }

    #[test]
    fn defaults() {
        let (options, rest) = DriverOptions::parse(&args(&["1", "2", "+"])).unwrap();
        assert_eq!(options, DriverOptions::default());
        assert_eq!(rest, args(&["1", "2", "+"]));
    }

    #[test]
    fn flags_anywhere() {
        let argv = args(&["1", "--stack", "2", "--precision=3", "-"]);
        let (options, rest) = DriverOptions::parse(&argv).unwrap();
        assert!(options.show_stack);
        assert_eq!(options.precision, Some(3));
        assert_eq!(rest, args(&["1", "2", "-"]));
    }

    #[test]
    fn short_stack_flag_and_negative_numbers() {
        let (options, rest) = DriverOptions::parse(&args(&["-s", "-5", "-2.5"])).unwrap();
        assert!(options.show_stack);
        assert_eq!(rest, args(&["-5", "-2.5"]));
    }

    #[test]
    fn bad_precision() {
        let argv = args(&["--precision=many"]);
        let err = DriverOptions::parse(&argv).unwrap_err();
        assert!(matches!(err, CliError::InvalidPrecision(ref v) if v == "many"));
    }

    #[test]
    fn unknown_flag() {
        let err = DriverOptions::parse(&args(&["--verbose"])).unwrap_err();
        assert_eq!(err.to_string(), "unknown flag `--verbose`");
    }
}
