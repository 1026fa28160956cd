//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the reports and the CLI.

use crate::config::Settings;
use crate::models::Money;

/// Currency symbol and decimal separator used to render amounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormat {
    pub symbol: String,
    pub decimal_separator: char,
}

impl MoneyFormat {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            symbol: settings.currency_symbol.clone(),
            decimal_separator: settings.decimal_separator,
        }
    }

    /// Render an amount, e.g. `R$ 1000,00`
    pub fn format(&self, amount: Money) -> String {
        amount.format_with(&self.symbol, self.decimal_separator)
    }

    /// Render an amount with a terminal color for its sign
    pub fn format_colored(&self, amount: Money) -> String {
        let text = self.format(amount);
        if amount.is_negative() {
            format!("\x1b[31m{}\x1b[0m", text)
        } else if amount.is_positive() {
            format!("\x1b[32m{}\x1b[0m", text)
        } else {
            text
        }
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Format a percentage with one decimal, e.g. `70.0%`
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Center a title in a line of the given width
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to at most `max_len` characters, ending with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_format() {
        let format = MoneyFormat::default();
        assert_eq!(format.format(Money::from_cents(123456)), "R$ 1234,56");

        let dollars = MoneyFormat {
            symbol: "$".into(),
            decimal_separator: '.',
        };
        assert_eq!(dollars.format(Money::from_cents(-50)), "-$ 0.50");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(70.0), "70.0%");
        assert_eq!(format_percentage(-12.34), "-12.3%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Aluguel até março", 10), "Aluguel...");
        assert_eq!(truncate("Ação", 4), "Ação");
    }

    #[test]
    fn test_format_header() {
        assert_eq!(format_header("ab", 6), "  ab");
        assert_eq!(format_header("too long", 3), "too long");
    }
}
