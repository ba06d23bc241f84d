//! Price formatting for the storefront.
//!
//! Prices are stored as integer centavos; this module turns them into the
//! Brazilian Real notation used on the site (`R$ 1.234,56`).

use rusty_money::{FormattableCurrency, Formatter, Money, Params, Position, iso};

/// Formats an amount in centavos as Brazilian Reais.
///
/// `1999` becomes `R$ 19,99` and `100000` becomes `R$ 1.000,00`. Negative
/// amounts get a leading minus sign.
pub fn format_cents_brl(cents: i64) -> String {
    let money = Money::from_minor(cents, iso::BRL);
    Formatter::money(&money, pt_br_params(money.currency()))
}

fn pt_br_params(currency: &iso::Currency) -> Params {
    Params {
        digit_separator: '.',
        exponent_separator: ',',
        separator_pattern: vec![3; 6],
        positions: vec![Position::Sign, Position::Symbol, Position::Space, Position::Amount],
        rounding: Some(currency.exponent()),
        symbol: Some(currency.symbol()),
        ..Default::default()
    }
}
