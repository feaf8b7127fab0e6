//! pt-BR cell formatting shared by every table.

use chrono::NaiveDate;

/// Placeholder for absent values.
pub const MISSING: &str = "-";

/// `dd/mm/yyyy`, or `-` when the date is absent.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// `R$ 1.234,56`; an absent value renders as zero.
pub fn format_money(value: Option<f64>) -> String {
    let value = value.unwrap_or(0.0);
    let total_cents = (value.abs() * 100.0).round() as u64;
    let (units, cents) = (total_cents / 100, total_cents % 100);

    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && total_cents > 0 { "-" } else { "" };
    format!("R$ {sign}{grouped},{cents:02}")
}

/// Up to two decimals with a decimal comma and no trailing zeros.
pub fn format_decimal(value: Option<f64>) -> String {
    let fixed = format!("{:.2}", value.unwrap_or(0.0));
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };
    trimmed.replace('.', ",")
}

/// Text cell with the `-` placeholder for missing or blank values.
pub fn text_or_missing(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(MISSING)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_uses_brazilian_grouping() {
        assert_eq!(format_money(Some(1234.56)), "R$ 1.234,56");
        assert_eq!(format_money(Some(1_234_567.0)), "R$ 1.234.567,00");
        assert_eq!(format_money(Some(999.999)), "R$ 1.000,00");
        assert_eq!(format_money(Some(-50.5)), "R$ -50,50");
        assert_eq!(format_money(None), "R$ 0,00");
    }

    #[test]
    fn decimals_drop_trailing_zeros() {
        assert_eq!(format_decimal(Some(40.0)), "40");
        assert_eq!(format_decimal(Some(12.5)), "12,5");
        assert_eq!(format_decimal(Some(33.333)), "33,33");
        assert_eq!(format_decimal(None), "0");
    }

    #[test]
    fn dates_render_day_first() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 3, 7)), "07/03/2024");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn blank_text_is_missing() {
        assert_eq!(text_or_missing(Some("  ")), "-");
        assert_eq!(text_or_missing(Some("ERP")), "ERP");
        assert_eq!(text_or_missing(None), "-");
    }
}
