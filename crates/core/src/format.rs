//! Display formatting for euro amounts

/// Group digits by thousands with spaces: `1234567` → `"1 234 567"`.
#[must_use]
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}

/// Price in euros, e.g. `"850 000 €"`.
#[must_use]
pub fn format_price(euros: i64) -> String {
    format!("{} €", group_thousands(euros))
}

/// Price per square metre, e.g. `"4 500 €/m²"`.
#[must_use]
pub fn format_price_per_m2(euros: i64) -> String {
    format!("{} €/m²", group_thousands(euros))
}

/// Surface in square metres; whole values drop the decimal part.
#[must_use]
pub fn format_surface(m2: f64) -> String {
    if m2.fract() == 0.0 {
        format!("{m2:.0} m²")
    } else {
        format!("{m2:.1} m²")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(850_000), "850 000 €");
        assert_eq!(format_price(1_250_000), "1 250 000 €");
        assert_eq!(format_price(950), "950 €");
        assert_eq!(format_price(0), "0 €");
    }

    #[test]
    fn test_format_negative_price() {
        assert_eq!(format_price(-35_000), "-35 000 €");
        assert_eq!(format_price(i64::MIN), "-9 223 372 036 854 775 808 €");
    }

    #[test]
    fn test_format_price_per_m2() {
        assert_eq!(format_price_per_m2(4500), "4 500 €/m²");
    }

    #[test]
    fn test_format_surface() {
        assert_eq!(format_surface(120.0), "120 m²");
        assert_eq!(format_surface(85.5), "85.5 m²");
    }
}
