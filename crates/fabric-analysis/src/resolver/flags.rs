//! Alarm-flag parsing.

use fabric_core::types::Scalar;

/// Reads a flag word. Empty text and "n/a" are false; a leading `0x…`
/// token is read as hexadecimal, any other leading token as decimal; any
/// nonzero value is true. Unparsable text is false.
pub fn parse_flag(value: &Scalar) -> bool {
    match value {
        Scalar::Null => false,
        Scalar::Bool(b) => *b,
        Scalar::Number(n) => n.is_finite() && *n != 0.0,
        Scalar::Text(text) => parse_flag_text(text),
    }
}

fn parse_flag_text(text: &str) -> bool {
    let Some(token) = text.split_whitespace().next() else {
        return false;
    };
    if token.eq_ignore_ascii_case("n/a") {
        return false;
    }
    if let Some(digits) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        let digits = digits.trim_end_matches(|c: char| !c.is_ascii_hexdigit());
        return !digits.is_empty()
            && digits.chars().all(|c| c.is_ascii_hexdigit())
            && digits.chars().any(|c| c != '0');
    }
    token
        .trim_end_matches([',', ';'])
        .parse::<f64>()
        .is_ok_and(|n| n.is_finite() && n != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Scalar {
        Scalar::Text(s.to_string())
    }

    #[test]
    fn hex_tokens() {
        assert!(parse_flag(&text("0x0001")));
        assert!(parse_flag(&text("0X10 (rx los)")));
        assert!(!parse_flag(&text("0x0000")));
        assert!(!parse_flag(&text("0x")));
    }

    #[test]
    fn decimal_and_empty_tokens() {
        assert!(parse_flag(&text("3")));
        assert!(!parse_flag(&text("0")));
        assert!(!parse_flag(&text("   ")));
        assert!(!parse_flag(&text("N/A")));
        assert!(!parse_flag(&text("asserted")));
    }
}
