//! Amounts travel over the wire as integer **milliunits** (1/1000 of the
//! currency unit). This module only renders them.

/// Milliunits per currency unit.
pub const MILLIUNITS: i64 = 1000;

/// Formats a milliunit amount with two decimals, rounding half away from zero.
///
/// ```rust
/// use ynab::money::format_milliunits;
///
/// assert_eq!(format_milliunits(-12_340), "-12.34");
/// assert_eq!(format_milliunits(1_005), "1.01");
/// ```
pub fn format_milliunits(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    let cents = (abs + 5) / 10;
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_and_fractional() {
        assert_eq!(format_milliunits(0), "0.00");
        assert_eq!(format_milliunits(MILLIUNITS), "1.00");
        assert_eq!(format_milliunits(250_500), "250.50");
        assert_eq!(format_milliunits(-7), "-0.01");
    }

    #[test]
    fn handles_extremes() {
        assert_eq!(format_milliunits(i64::MIN).chars().next(), Some('-'));
    }
}
