//! # Numeral Normalization
//!
//! Converts numeral tokens, including "a/b" fraction notation, into numeric
//! quantity contributions. Anything that is not a clean numeral is reported
//! as "not a number" so the caller can keep the token as name text instead of
//! dropping it.

/// Parse a numeral token into a non-negative quantity contribution
///
/// Accepted shapes:
/// - a fraction with exactly one `/` and two non-empty halves, each parsing
///   as a float ("1/2" → 0.5, "1.5/3" → 0.5); a zero denominator is a parse
///   failure, never infinity
/// - a token consisting solely of ASCII digits ("4" → 4.0)
///
/// Everything else returns `None`. Zero is a valid quantity; `None` means the
/// token is not a numeral at all and must not touch the running total.
pub fn parse_numeral(token: &str) -> Option<f64> {
    let value = if let Some((numerator, denominator)) = split_fraction(token) {
        let numerator: f64 = numerator.parse().ok()?;
        let denominator: f64 = denominator.parse().ok()?;
        if denominator == 0.0 {
            return None;
        }
        numerator / denominator
    } else if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse::<f64>().ok()?
    } else {
        return None;
    };

    // Quantities accumulate additively and must stay non-negative
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Split a token on a single `/` into two non-empty halves
fn split_fraction(token: &str) -> Option<(&str, &str)> {
    let mut parts = token.splitn(3, '/');
    let numerator = parts.next()?;
    let denominator = parts.next()?;
    if parts.next().is_some() || numerator.is_empty() || denominator.is_empty() {
        return None;
    }
    Some((numerator, denominator))
}
