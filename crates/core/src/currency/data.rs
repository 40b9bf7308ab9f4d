//! Built-in CLDR currency fraction data.
//!
//! Codes not listed in [`CLDR_FRACTIONS`] use CLDR's default of 2 digits, no
//! increment, cash equal to standard. Every entry carries cash values.

use std::collections::HashMap;

use centime_shared::{CurrencyCode, CurrencyFractions};
use once_cell::sync::Lazy;

/// Active ISO 4217 alphabetic codes.
pub(crate) const ISO_4217_CODES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN", "BAM", "BBD", "BDT",
    "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BOV", "BRL", "BSD", "BTN", "BWP", "BYN", "BZD",
    "CAD", "CDF", "CHE", "CHF", "CHW", "CLF", "CLP", "CNY", "COP", "COU", "CRC", "CUC", "CUP",
    "CVE", "CZK", "DJF", "DKK", "DOP", "DZD", "EGP", "ERN", "ETB", "EUR", "FJD", "FKP", "GBP",
    "GEL", "GHS", "GIP", "GMD", "GNF", "GTQ", "GYD", "HKD", "HNL", "HTG", "HUF", "IDR", "ILS",
    "INR", "IQD", "IRR", "ISK", "JMD", "JOD", "JPY", "KES", "KGS", "KHR", "KMF", "KPW", "KRW",
    "KWD", "KYD", "KZT", "LAK", "LBP", "LKR", "LRD", "LSL", "LYD", "MAD", "MDL", "MGA", "MKD",
    "MMK", "MNT", "MOP", "MRU", "MUR", "MVR", "MWK", "MXN", "MXV", "MYR", "MZN", "NAD", "NGN",
    "NIO", "NOK", "NPR", "NZD", "OMR", "PAB", "PEN", "PGK", "PHP", "PKR", "PLN", "PYG", "QAR",
    "RON", "RSD", "RUB", "RWF", "SAR", "SBD", "SCR", "SDG", "SEK", "SGD", "SHP", "SLE", "SLL",
    "SOS", "SRD", "SSP", "STN", "SVC", "SYP", "SZL", "THB", "TJS", "TMT", "TND", "TOP", "TRY",
    "TTD", "TWD", "TZS", "UAH", "UGX", "USD", "USN", "UYI", "UYU", "UYW", "UZS", "VED", "VES",
    "VND", "VUV", "WST", "XAF", "XAG", "XAU", "XBA", "XBB", "XBC", "XBD", "XCD", "XDR", "XOF",
    "XPD", "XPF", "XPT", "XSU", "XTS", "XUA", "XXX", "YER", "ZAR", "ZMW", "ZWL",
];

/// CLDR entries that differ from the default, including historic codes
/// CLDR still carries. `(code, digits, rounding, Some((cash_digits, cash_rounding)))`.
pub(crate) const CLDR_FRACTIONS: &[(&str, u32, u32, Option<(u32, u32)>)] = &[
    ("ADP", 0, 0, None),
    ("AFN", 0, 0, None),
    ("ALL", 0, 0, None),
    ("AMD", 2, 0, Some((0, 0))),
    ("BHD", 3, 0, None),
    ("BIF", 0, 0, None),
    ("BYR", 0, 0, None),
    ("CAD", 2, 0, Some((2, 5))),
    ("CHF", 2, 0, Some((2, 5))),
    ("CLF", 4, 0, None),
    ("CLP", 0, 0, None),
    ("COP", 2, 0, Some((0, 0))),
    ("CRC", 2, 0, Some((0, 0))),
    ("CZK", 2, 0, Some((0, 0))),
    ("DJF", 0, 0, None),
    ("DKK", 2, 0, Some((2, 50))),
    ("ESP", 0, 0, None),
    ("GNF", 0, 0, None),
    ("GYD", 2, 0, Some((0, 0))),
    ("HUF", 2, 0, Some((0, 0))),
    ("IDR", 2, 0, Some((0, 0))),
    ("IQD", 0, 0, None),
    ("IRR", 0, 0, None),
    ("ISK", 0, 0, None),
    ("ITL", 0, 0, None),
    ("JOD", 3, 0, None),
    ("JPY", 0, 0, None),
    ("KMF", 0, 0, None),
    ("KPW", 0, 0, None),
    ("KRW", 0, 0, None),
    ("KWD", 3, 0, None),
    ("LAK", 0, 0, None),
    ("LBP", 0, 0, None),
    ("LUF", 0, 0, None),
    ("LYD", 3, 0, None),
    ("MGA", 0, 0, None),
    ("MGF", 0, 0, None),
    ("MMK", 0, 0, None),
    ("MNT", 2, 0, Some((0, 0))),
    ("MRO", 0, 0, None),
    ("MUR", 2, 0, Some((0, 0))),
    ("NOK", 2, 0, Some((0, 0))),
    ("OMR", 3, 0, None),
    ("PKR", 2, 0, Some((0, 0))),
    ("PYG", 0, 0, None),
    ("RSD", 0, 0, None),
    ("RWF", 0, 0, None),
    ("SEK", 2, 0, Some((0, 0))),
    ("SLL", 0, 0, None),
    ("SOS", 0, 0, None),
    ("STD", 0, 0, None),
    ("SYP", 0, 0, None),
    ("TMM", 0, 0, None),
    ("TND", 3, 0, None),
    ("TRL", 0, 0, None),
    ("TWD", 2, 0, Some((0, 0))),
    ("TZS", 2, 0, Some((0, 0))),
    ("UGX", 0, 0, None),
    ("UYI", 0, 0, None),
    ("UYW", 4, 0, None),
    ("UZS", 2, 0, Some((0, 0))),
    ("VEF", 2, 0, Some((0, 0))),
    ("VND", 0, 0, None),
    ("VUV", 0, 0, None),
    ("XAF", 0, 0, None),
    ("XOF", 0, 0, None),
    ("XPF", 0, 0, None),
    ("YER", 0, 0, None),
    ("ZMK", 0, 0, None),
    ("ZWD", 0, 0, None),
];

/// CLDR's fallback for codes without a specific entry.
const DEFAULT_FRACTIONS: CurrencyFractions = CurrencyFractions::new(2, 0);

/// The built-in table, built on first use and immutable afterwards.
pub(crate) static CLDR_TABLE: Lazy<HashMap<CurrencyCode, CurrencyFractions>> =
    Lazy::new(build_table);

fn build_table() -> HashMap<CurrencyCode, CurrencyFractions> {
    let mut table: HashMap<CurrencyCode, CurrencyFractions> = ISO_4217_CODES
        .iter()
        .filter_map(|code| CurrencyCode::parse(code).ok())
        .map(|code| (code, DEFAULT_FRACTIONS))
        .collect();

    for &(code, digits, rounding, cash) in CLDR_FRACTIONS {
        let Ok(code) = CurrencyCode::parse(code) else {
            continue;
        };
        let standard = CurrencyFractions::new(digits, rounding);
        let fractions = match cash {
            Some((cash_digits, cash_rounding)) => standard.with_cash(cash_digits, cash_rounding),
            None => standard,
        };
        table.insert(code, fractions);
    }

    table
}
