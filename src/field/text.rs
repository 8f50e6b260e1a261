/// Outcome of cleaning up one keystroke's worth of raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// `""` or `"."`: nothing to parse yet, but the user may keep typing.
    Pending(String),
    /// Cleaned text that parses to a finite number.
    Number(String, f64),
    /// Nothing usable; the previous display text stays.
    Rejected,
}

impl Normalized {
    /// The text to show if the keystroke is accepted.
    pub fn text(&self) -> Option<&str> {
        match self {
            Normalized::Pending(text) | Normalized::Number(text, _) => Some(text),
            Normalized::Rejected => None,
        }
    }
}

/// Decimal commas become points, then everything except ASCII digits and
/// points is dropped. Extra points are kept in the text; only the numeric
/// prefix before the second one counts.
pub fn normalize(raw: &str) -> Normalized {
    let cleaned: String = raw
        .chars()
        .filter_map(|ch| match ch {
            '0'..='9' | '.' => Some(ch),
            ',' => Some('.'),
            _ => None,
        })
        .collect();

    if cleaned.is_empty() || cleaned == "." {
        return Normalized::Pending(cleaned);
    }
    match parse_display(&cleaned) {
        Some(num) => Normalized::Number(cleaned, num),
        None => Normalized::Rejected,
    }
}

/// Parse the numeric prefix of display text: everything up to a second
/// decimal point. `None` for the pending sentinels.
pub fn parse_display(text: &str) -> Option<f64> {
    let prefix = match text.match_indices('.').nth(1) {
        Some((second, _)) => &text[..second],
        None => text,
    };
    prefix.parse::<f64>().ok().filter(|num| num.is_finite())
}

/// Canonical display form of a committed value. Negative zero shows as `0`.
pub fn canonical(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
