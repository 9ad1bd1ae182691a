//! Output formatting for results and diagnostics.

use chrono::NaiveDate;
use console::style;

/// How the conversion result is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Full line with both currencies and the feed date.
    Human,
    /// Bare numeric result, for consumption by scripts.
    Scripting,
}

impl OutputMode {
    /// Scripting mode is selected by setting the `SCRIPTING` environment
    /// variable to any value.
    pub fn from_env() -> Self {
        if std::env::var_os("SCRIPTING").is_some() {
            OutputMode::Scripting
        } else {
            OutputMode::Human
        }
    }
}

/// Formats a conversion result line, two decimal places throughout.
pub fn format_conversion(
    mode: OutputMode,
    amount: f64,
    from: &str,
    result: f64,
    to: &str,
    date: NaiveDate,
) -> String {
    match mode {
        OutputMode::Human => format!("{amount:.2} {from} = {result:.2} {to}\t({date})"),
        OutputMode::Scripting => format!("{result:.2}"),
    }
}

/// Formats the sorted currency code listing for `--list`.
pub fn format_code_list(codes: &[&str]) -> String {
    format!("{}.", codes.join(", "))
}

/// Styles a diagnostic line for stderr.
pub fn error_line(message: &str) -> String {
    style(message).red().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        "2026-08-07".parse().unwrap()
    }

    #[test]
    fn test_human_output_has_both_sides_and_the_date() {
        let line = format_conversion(
            OutputMode::Human,
            150.0,
            "USD",
            138.888_888,
            "EUR",
            sample_date(),
        );
        assert_eq!(line, "150.00 USD = 138.89 EUR\t(2026-08-07)");
    }

    #[test]
    fn test_scripting_output_is_the_bare_result() {
        let line = format_conversion(
            OutputMode::Scripting,
            150.0,
            "USD",
            138.888_888,
            "EUR",
            sample_date(),
        );
        assert_eq!(line, "138.89");
    }

    #[test]
    fn test_code_list_is_comma_joined_with_a_period() {
        assert_eq!(format_code_list(&["EUR", "JPY", "USD"]), "EUR, JPY, USD.");
        assert_eq!(format_code_list(&[]), ".");
    }
}
