// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::{NA_REPLACEMENT, NA_TEXT};

static TRAILING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)$").expect("static regex"));

/// Collapse whitespace runs inside each line to one space, drop blank lines,
/// keep line breaks between the rest.
pub fn normalize_lines(s: &str) -> String {
    let mut out = s!();
    for line in s.lines() {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else { continue };
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(first);
        for w in words {
            out.push(' ');
            out.push_str(w);
        }
    }
    out
}

/// Placeholder cells become the literal zero. Only exact matches.
pub fn replace_na(cell: String) -> String {
    if cell == NA_TEXT { s!(NA_REPLACEMENT) } else { cell }
}

/// `"$1,234.56"` → `Some(1234.56)`. Returns `None` for anything that
/// isn't a finite number once the currency decoration is gone.
/// At most one sign, either side of the currency symbol: `-$5` / `$-5`.
pub fn parse_currency(raw: &str) -> Option<f64> {
    let mut s = raw.trim();
    let mut sign = strip_sign(s);
    if let Some((_, rest)) = sign {
        s = rest;
    }
    if let Some(rest) = s.strip_prefix(['$', '£', '€']) {
        s = rest.trim_start();
        if let Some((negative, rest)) = strip_sign(s) {
            if sign.is_some() {
                return None;
            }
            sign = Some((negative, rest));
            s = rest;
        }
    }

    let digits: String = s.chars().filter(|&c| c != ',').collect();
    if digits.is_empty() || !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let v: f64 = digits.parse().ok()?;
    if !v.is_finite() {
        return None;
    }
    let negative = sign.is_some_and(|(neg, _)| neg);
    Some(if negative { -v } else { v })
}

/// Leading `-` / U+2212 / `+`: (is negative, remainder).
fn strip_sign(s: &str) -> Option<(bool, &str)> {
    if let Some(rest) = s.strip_prefix(['-', '\u{2212}']) {
        Some((true, rest.trim_start()))
    } else {
        s.strip_prefix('+').map(|rest| (false, rest.trim_start()))
    }
}

/// Season number from the trailing digit run of a source id.
/// `".../Storage_Wars_season_11"` → `Some(11)`; no trailing digits → `None`.
pub fn season_from_id(source_id: &str) -> Option<u32> {
    TRAILING_DIGITS
        .captures(source_id)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_plain_and_decorated() {
        assert_eq!(parse_currency("$1,234.56"), Some(1234.56));
        assert_eq!(parse_currency(" 500 "), Some(500.0));
        assert_eq!(parse_currency("0"), Some(0.0));
        assert_eq!(parse_currency("-$2,100"), Some(-2100.0));
        assert_eq!(parse_currency("$-75"), Some(-75.0));
        assert_eq!(parse_currency("\u{2212}$300"), Some(-300.0));
    }

    #[test]
    fn currency_absent_is_not_zero() {
        assert_eq!(parse_currency("N/A"), None);
        assert_eq!(parse_currency(""), None);
        assert_eq!(parse_currency("$"), None);
        assert_eq!(parse_currency("inf"), None);
        assert_eq!(parse_currency("NaN"), None);
        assert_eq!(parse_currency("TBD"), None);

        // one sign only, wherever it sits
        assert_eq!(parse_currency("--100"), None);
        assert_eq!(parse_currency("-$-100"), None);
        assert_eq!(parse_currency("+-5"), None);
        assert_eq!(parse_currency("$--100"), None);
        assert_eq!(parse_currency("+$+5"), None);
        assert_eq!(parse_currency("+$5"), Some(5.0));
    }

    #[test]
    fn na_replacement_is_exact() {
        assert_eq!(replace_na(s!("N/A")), "0");
        assert_eq!(replace_na(s!("N/A*")), "N/A*");
        assert_eq!(replace_na(s!("$10")), "$10");
    }

    #[test]
    fn season_inference() {
        assert_eq!(season_from_id("https://en.wikipedia.org/wiki/Storage_Wars_season_11"), Some(11));
        assert_eq!(season_from_id("page_3"), Some(3));
        assert_eq!(season_from_id("https://en.wikipedia.org/wiki/Storage_Wars"), None);
        assert_eq!(season_from_id("season_3/"), None);
        assert_eq!(season_from_id("n99999999999999999999"), None);
    }

    #[test]
    fn lines_trimmed_and_joined() {
        assert_eq!(normalize_lines("  Dave Hester \n\n  Spent "), "Dave Hester\nSpent");
        assert_eq!(normalize_lines("\n\t$1,000\n"), "$1,000");
        assert_eq!(normalize_lines("   "), "");
        assert_eq!(normalize_lines("Storage   Wars \t Finale\n Part  2"), "Storage Wars Finale\nPart 2");
    }
}
