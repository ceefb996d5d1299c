use crate::types::Lang;

const NBSP: char = '\u{a0}';

/// Format a price as Canadian dollars with two decimals, in the locale of
/// `lang` (`en-CA`: `$1,234.56`, `fr-CA`: `1 234,56 $`).
///
/// Non-finite amounts format as zero.
pub fn format_cad(amount: f64, lang: Lang) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    let fraction = cents % 100;

    match lang {
        Lang::En => {
            let whole = group_thousands(cents / 100, ',');
            format!("{sign}${whole}.{fraction:02}")
        }
        Lang::Fr => {
            let whole = group_thousands(cents / 100, NBSP);
            format!("{sign}{whole},{fraction:02}{NBSP}$")
        }
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
