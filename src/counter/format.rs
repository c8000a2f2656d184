//! Locale-aware number formatting for counter output.

use num_format::{Locale, ToFormattedString};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::CounterConfig;

/// Formats a number for display, including thousands grouping.
pub trait LocaleFormatter {
    /// Returns the display text for `value`.
    fn format(&self, value: Decimal) -> String;
}

/// Groups integer digits and marks the fraction the way a [`Locale`] does,
/// keeping at most `max_fraction_digits` fraction digits.
///
/// # Examples
///
/// ```
/// use backoffice_client::counter::{GroupingFormatter, Locale, LocaleFormatter};
/// use rust_decimal::Decimal;
///
/// let en = GroupingFormatter::default();
/// assert_eq!(en.format(Decimal::new(1_250_000, 0)), "1,250,000");
///
/// let de = GroupingFormatter::new(Locale::de, 2);
/// assert_eq!(de.format(Decimal::new(123_456_789, 3)), "123.456,79");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingFormatter {
    locale: Locale,
    max_fraction_digits: u32,
}

impl GroupingFormatter {
    /// Creates a formatter for `locale`.
    pub fn new(locale: Locale, max_fraction_digits: u32) -> Self {
        Self {
            locale,
            max_fraction_digits,
        }
    }

    /// Creates a formatter from the counter section of the configuration.
    pub fn from_config(config: &CounterConfig) -> Self {
        Self::new(config.locale, config.max_fraction_digits)
    }

    /// Returns the locale digits are grouped for.
    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl Default for GroupingFormatter {
    fn default() -> Self {
        Self::new(Locale::en, 3)
    }
}

impl LocaleFormatter for GroupingFormatter {
    fn format(&self, value: Decimal) -> String {
        let rounded = value
            .round_dp_with_strategy(self.max_fraction_digits, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        let magnitude = rounded.abs();

        // Decimal's 96-bit mantissa always fits in u128
        let integer = magnitude.trunc().to_u128().unwrap_or_default();

        let mut out = String::new();
        if rounded.is_sign_negative() && !rounded.is_zero() {
            out.push_str(self.locale.minus_sign());
        }
        out.push_str(&integer.to_formatted_string(&self.locale));

        let text = magnitude.to_string();
        if let Some((_, fraction)) = text.split_once('.') {
            out.push_str(self.locale.decimal());
            out.push_str(fraction);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_small_numbers_are_not_grouped() {
        let f = GroupingFormatter::default();
        assert_eq!(f.format(dec("0")), "0");
        assert_eq!(f.format(dec("7")), "7");
        assert_eq!(f.format(dec("999")), "999");
    }

    #[test]
    fn test_groups_of_three() {
        let f = GroupingFormatter::default();
        assert_eq!(f.format(dec("1000")), "1,000");
        assert_eq!(f.format(dec("12345")), "12,345");
        assert_eq!(f.format(dec("1250000")), "1,250,000");
        assert_eq!(f.format(dec("79228162514264337593543950335")), "79,228,162,514,264,337,593,543,950,335");
    }

    #[test]
    fn test_fraction_is_trimmed_and_rounded() {
        let f = GroupingFormatter::default();
        assert_eq!(f.format(dec("1234.50")), "1,234.5");
        assert_eq!(f.format(dec("1234.0005")), "1,234.001");
        assert_eq!(f.format(dec("1234.000")), "1,234");
        assert_eq!(f.format(dec("0.25")), "0.25");
    }

    #[test]
    fn test_negative_values() {
        let f = GroupingFormatter::default();
        assert_eq!(f.format(dec("-1234567")), "-1,234,567");
        assert_eq!(f.format(dec("-0.0001")), "0");
    }

    #[test]
    fn test_german_locale_swaps_marks() {
        let f = GroupingFormatter::new(Locale::de, 2);
        assert_eq!(f.format(dec("9876543.219")), "9.876.543,22");
    }

    #[test]
    fn test_indian_locale_groups_lakhs() {
        let f = GroupingFormatter::new(Locale::en_IN, 0);
        assert_eq!(f.format(dec("12345678")), "1,23,45,678");
    }

    #[test]
    fn test_from_config() {
        let f = GroupingFormatter::from_config(&CounterConfig::default());
        assert_eq!(f, GroupingFormatter::default());
        assert_eq!(f.locale(), Locale::en);
    }
}
