//! Display formatting shared by the TUI and CLI.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// `$1,234`, whole dollars. Used for the revenue KPI.
pub fn money_whole(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    with_sign(rounded, |abs| group_thousands(&whole_digits(abs)))
}

/// `$1,234.56`
pub fn money(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    with_sign(rounded, |abs| {
        let whole = group_thousands(&whole_digits(abs));
        let cents = (abs.fract() * Decimal::ONE_HUNDRED)
            .trunc()
            .to_u64()
            .unwrap_or(0);
        format!("{whole}.{cents:02}")
    })
}

/// `1,234`
pub fn count(value: u64) -> String {
    group_thousands(&value.to_string())
}

fn with_sign(value: Decimal, body: impl Fn(Decimal) -> String) -> String {
    if value.is_sign_negative() && !value.is_zero() {
        format!("-${}", body(value.abs()))
    } else {
        format!("${}", body(value.abs()))
    }
}

fn whole_digits(abs: Decimal) -> String {
    abs.trunc().to_u128().unwrap_or(0).to_string()
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
