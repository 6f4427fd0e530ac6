//! Currency formatting and progress percentages

use tracing::warn;

use crate::error::{EngineError, Result};

const CURRENCY_SYMBOL: &str = "R$";
/// pt-BR places a non-breaking space between symbol and amount
const SYMBOL_SPACE: char = '\u{a0}';
const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

fn ensure_finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        warn!(value, "rejected non-finite amount");
        Err(EngineError::InvalidAmount { value })
    }
}

/// Group an ASCII digit string in threes from the right
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Two-decimal rendering of a non-negative amount, rounding exact half-cent
/// ties away from zero as pt-BR number formatting does.
///
/// `{:.2}` rounds ties to even. The only f64 values sitting exactly on a
/// half cent are odd multiples of 1/8 (x.125, x.375, x.625, x.875); their
/// kept cent digit is 2 or 7, so bumping it never carries.
fn fixed_two_decimals(abs: f64) -> String {
    let eighths = abs * 8.0;
    let is_tie = eighths.fract() == 0.0 && eighths % 2.0 == 1.0;
    if !is_tie {
        return format!("{:.2}", abs);
    }

    let mut digits = format!("{:.3}", abs).into_bytes();
    digits.pop();
    if let Some(last) = digits.last_mut() {
        *last += 1;
    }
    digits.into_iter().map(char::from).collect()
}

/// Format an amount in Brazilian Real, e.g. `R$ 1.234,50`
pub fn format_currency(value: f64) -> Result<String> {
    let value = ensure_finite(value)?;

    let fixed = fixed_two_decimals(value.abs());
    let (integer, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    // "-R$ 0,00" is never produced, even for tiny negatives or -0.0
    let negative = value < 0.0 && fixed != "0.00";

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(CURRENCY_SYMBOL);
    out.push(SYMBOL_SPACE);
    out.push_str(&group_thousands(integer));
    out.push(DECIMAL_SEPARATOR);
    out.push_str(cents);
    Ok(out)
}

/// Percentage of `target` reached by `current`, capped at 100.
///
/// Rounds half up like the dashboard always has. There is no lower clamp:
/// a negative `current` (or `target`) yields a negative percentage.
pub fn calculate_progress(current: f64, target: f64) -> Result<i64> {
    let current = ensure_finite(current)?;
    let target = ensure_finite(target)?;
    if target == 0.0 {
        warn!(current, "progress requested against a zero target");
        return Err(EngineError::InvalidTarget);
    }

    let percent = (current / target * 100.0 + 0.5).floor();
    Ok(percent.min(100.0) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brl(s: &str) -> String {
        s.replace(' ', "\u{a0}")
    }

    #[test]
    fn test_format_currency_basic() {
        assert_eq!(format_currency(1234.5).unwrap(), brl("R$ 1.234,50"));
        assert_eq!(format_currency(0.0).unwrap(), brl("R$ 0,00"));
        assert_eq!(format_currency(7.0).unwrap(), brl("R$ 7,00"));
        assert_eq!(format_currency(999.99).unwrap(), brl("R$ 999,99"));
    }

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(1000.0).unwrap(), brl("R$ 1.000,00"));
        assert_eq!(format_currency(123456.0).unwrap(), brl("R$ 123.456,00"));
        assert_eq!(format_currency(1234567.891).unwrap(), brl("R$ 1.234.567,89"));
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1234.5).unwrap(), brl("-R$ 1.234,50"));
        assert_eq!(format_currency(-0.0).unwrap(), brl("R$ 0,00"));
        assert_eq!(format_currency(-0.001).unwrap(), brl("R$ 0,00"));
    }

    #[test]
    fn test_format_currency_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                format_currency(value),
                Err(EngineError::InvalidAmount { .. })
            ));
        }
    }

    #[test]
    fn test_format_currency_half_cent_ties() {
        assert_eq!(format_currency(0.125).unwrap(), brl("R$ 0,13"));
        assert_eq!(format_currency(0.375).unwrap(), brl("R$ 0,38"));
        assert_eq!(format_currency(-0.125).unwrap(), brl("-R$ 0,13"));
        assert_eq!(format_currency(1234.125).unwrap(), brl("R$ 1.234,13"));
        assert_eq!(format_currency(999.875).unwrap(), brl("R$ 999,88"));
    }

    #[test]
    fn test_fixed_two_decimals() {
        // 1.005 is stored just below the half cent, so it is not a tie
        assert_eq!(fixed_two_decimals(1.005), "1.00");
        assert_eq!(fixed_two_decimals(0.125), "0.13");
        assert_eq!(fixed_two_decimals(0.625), "0.63");
        assert_eq!(fixed_two_decimals(0.875), "0.88");
        assert_eq!(fixed_two_decimals(2.0), "2.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1.234");
        assert_eq!(group_thousands("1234567"), "1.234.567");
    }

    #[test]
    fn test_progress_basic() {
        assert_eq!(calculate_progress(50.0, 100.0).unwrap(), 50);
        assert_eq!(calculate_progress(1.0, 3.0).unwrap(), 33);
        assert_eq!(calculate_progress(2.0, 3.0).unwrap(), 67);
        assert_eq!(calculate_progress(1.0, 200.0).unwrap(), 1);
    }

    #[test]
    fn test_progress_clamped_at_100() {
        assert_eq!(calculate_progress(150.0, 100.0).unwrap(), 100);
        assert_eq!(calculate_progress(100.0, 100.0).unwrap(), 100);
    }

    #[test]
    fn test_progress_negative_passes_through() {
        assert_eq!(calculate_progress(-5.0, 100.0).unwrap(), -5);
        assert_eq!(calculate_progress(5.0, -100.0).unwrap(), -5);
        assert_eq!(calculate_progress(-1.0, 200.0).unwrap(), 0);
    }

    #[test]
    fn test_progress_zero_target_rejected() {
        assert!(matches!(calculate_progress(5.0, 0.0), Err(EngineError::InvalidTarget)));
        assert!(matches!(calculate_progress(0.0, -0.0), Err(EngineError::InvalidTarget)));
    }

    #[test]
    fn test_progress_rejects_non_finite() {
        assert!(matches!(
            calculate_progress(f64::NAN, 100.0),
            Err(EngineError::InvalidAmount { .. })
        ));
        assert!(matches!(
            calculate_progress(10.0, f64::INFINITY),
            Err(EngineError::InvalidAmount { .. })
        ));
    }
}
