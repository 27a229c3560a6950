//! Currency amount to words conversion.
//!
//! Converts a net salary into its natural-language form for the payslip
//! footer, e.g. `1575.50` becomes
//! `"One Thousand Five Hundred Seventy-Five and 50/100"`. The grouping
//! convention is a configurable strategy: [`NumberingFormat::Indian`] groups
//! by thousand/lakh/crore, [`NumberingFormat::Western`] by
//! thousand/million/billion.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::calculation::round_money;
use crate::config::NumberingFormat;

const BELOW_TWENTY: [&str; 20] = [
    "Zero",
    "One",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

// Covers the full Decimal range (28-29 significant digits)
const WESTERN_SCALES: [&str; 10] = [
    "",
    "Thousand",
    "Million",
    "Billion",
    "Trillion",
    "Quadrillion",
    "Quintillion",
    "Sextillion",
    "Septillion",
    "Octillion",
];

/// Spells a number below 100.
fn two_digits(n: u128) -> String {
    debug_assert!(n < 100);
    if n < 20 {
        BELOW_TWENTY[n as usize].to_string()
    } else {
        let tens = TENS[(n / 10) as usize];
        if n % 10 == 0 {
            tens.to_string()
        } else {
            format!("{}-{}", tens, BELOW_TWENTY[(n % 10) as usize])
        }
    }
}

/// Spells a number below 1000.
fn three_digits(n: u128) -> String {
    debug_assert!(n < 1000);
    if n < 100 {
        two_digits(n)
    } else if n % 100 == 0 {
        format!("{} Hundred", BELOW_TWENTY[(n / 100) as usize])
    } else {
        format!(
            "{} Hundred {}",
            BELOW_TWENTY[(n / 100) as usize],
            two_digits(n % 100)
        )
    }
}

/// Spells a whole number with Western thousands grouping.
fn western_words(n: u128) -> String {
    if n == 0 {
        return BELOW_TWENTY[0].to_string();
    }

    let mut groups = Vec::new();
    let mut remaining = n;
    let mut scale = 0;
    while remaining > 0 {
        let group = remaining % 1000;
        if group > 0 {
            let words = three_digits(group);
            if WESTERN_SCALES[scale].is_empty() {
                groups.push(words);
            } else {
                groups.push(format!("{} {}", words, WESTERN_SCALES[scale]));
            }
        }
        remaining /= 1000;
        scale += 1;
    }

    groups.reverse();
    groups.join(" ")
}

/// Spells a whole number with Indian lakh/crore grouping.
fn indian_words(n: u128) -> String {
    if n == 0 {
        return BELOW_TWENTY[0].to_string();
    }

    let mut parts = Vec::new();

    let crores = n / 10_000_000;
    let after_crores = n % 10_000_000;
    if crores > 0 {
        // Crore counts above 99 recurse, so 1e9 reads "One Hundred Crore"
        parts.push(format!("{} Crore", indian_words(crores)));
    }

    let lakhs = after_crores / 100_000;
    if lakhs > 0 {
        parts.push(format!("{} Lakh", two_digits(lakhs)));
    }

    let thousands = (after_crores % 100_000) / 1000;
    if thousands > 0 {
        parts.push(format!("{} Thousand", two_digits(thousands)));
    }

    let rest = after_crores % 1000;
    if rest > 0 {
        parts.push(three_digits(rest));
    }

    parts.join(" ")
}

/// Converts a monetary amount into words with a `NN/100` fractional part.
///
/// The amount is rounded to 2 decimal places (half-up) first, matching the
/// engine's monetary rounding policy.
///
/// # Example
///
/// ```
/// use payslip_engine::assembler::amount_in_words;
/// use payslip_engine::config::NumberingFormat;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("1575.50").unwrap();
/// assert_eq!(
///     amount_in_words(amount, NumberingFormat::Indian),
///     "One Thousand Five Hundred Seventy-Five and 50/100"
/// );
/// ```
pub fn amount_in_words(amount: Decimal, format: NumberingFormat) -> String {
    let rounded = round_money(amount.abs());
    let whole = rounded
        .trunc()
        .to_u128()
        .expect("monetary amount out of range");
    let paise = ((rounded - rounded.trunc()) * Decimal::from(100))
        .to_u128()
        .expect("fractional part out of range");

    let words = match format {
        NumberingFormat::Indian => indian_words(whole),
        NumberingFormat::Western => western_words(whole),
    };

    format!("{} and {:02}/100", words, paise)
}
