//! Lenient numeric input parsing
//!
//! Form fields are free text. A value that cannot be read becomes zero, which
//! the questionnaire treats as "unset". Only the leading numeric part of the
//! text is used, so "72.5kg" reads as 72.5 and "25.7" as a whole number is 25.

/// Parse a whole number (age) from form text
///
/// Examples:
/// - "42" -> 42
/// - "25.7" -> 25
/// - "30 years" -> 30
/// - "abc", "", "-5" -> 0
pub fn parse_whole_number(text: &str) -> u32 {
    let trimmed = text.trim();
    let (negative, rest) = split_sign(trimmed);

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() || negative {
        return coerced_to_zero(text);
    }

    // Saturate instead of failing on absurdly long digit runs
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Parse a decimal measurement from form text
///
/// Examples:
/// - "72.5" -> 72.5
/// - "72.5kg" -> 72.5
/// - ".5" -> 0.5
/// - "1e2" -> 100.0
/// - "abc", "", "-3" -> 0.0
pub fn parse_decimal(text: &str) -> f64 {
    let trimmed = text.trim();
    let (negative, rest) = split_sign(trimmed);

    let prefix = numeric_prefix(rest);
    if prefix.is_empty() {
        return coerced_to_zero(text) as f64;
    }

    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() && !negative => value,
        _ => coerced_to_zero(text) as f64,
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

/// Longest prefix that reads as a decimal number: digits, one point, then an
/// optional exponent that is only taken when it has digits of its own.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_point = false;

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return "";
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}

fn coerced_to_zero(text: &str) -> u32 {
    if !text.trim().is_empty() {
        tracing::warn!("Numeric input '{}' could not be read, treating it as unset", text);
    }
    0
}
