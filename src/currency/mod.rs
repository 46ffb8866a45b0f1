use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Currencies a transaction or budget can be denominated in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "String", into = "String")]
pub enum CurrencyCode {
    #[default]
    Usd,
    Eur,
    Gbp,
    Btc,
    Eth,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 5] = [
        CurrencyCode::Usd,
        CurrencyCode::Eur,
        CurrencyCode::Gbp,
        CurrencyCode::Btc,
        CurrencyCode::Eth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Btc => "BTC",
            CurrencyCode::Eth => "ETH",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "$",
            CurrencyCode::Eur => "€",
            CurrencyCode::Gbp => "£",
            CurrencyCode::Btc => "₿",
            CurrencyCode::Eth => "Ξ",
        }
    }

    /// Number of fractional digits shown when formatting amounts.
    pub fn minor_units(&self) -> usize {
        match self {
            CurrencyCode::Btc | CurrencyCode::Eth => 8,
            _ => 2,
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        CurrencyCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LedgerError::UnknownCurrency(value.to_string()))
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_string()
    }
}

/// Renders `amount` with the currency symbol, grouped thousands and a leading
/// minus for negative values, e.g. `-$1,234.50`. Values that round to zero
/// carry no sign.
pub fn format_amount(amount: f64, code: CurrencyCode) -> String {
    let body = format_number(amount.abs(), code.minor_units());
    let rounds_to_zero = !body.bytes().any(|b| matches!(b, b'1'..=b'9'));
    if amount < 0.0 && !rounds_to_zero {
        format!("-{}{}", code.symbol(), body)
    } else {
        format!("{}{}", code.symbol(), body)
    }
}

pub fn format_number(value: f64, precision: usize) -> String {
    let body = format!("{:.*}", precision, value);
    match body.split_once('.') {
        Some((int_part, fraction)) => format!("{}.{}", group_digits(int_part), fraction),
        None => group_digits(&body),
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
    }
    grouped
}
