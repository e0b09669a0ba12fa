// Canonical text form for product attributes.
//
// Purpose
// - Make cosmetic variation ("hazelNUT ", "Hazelnut!") collapse into one comparison form
//   before any natural key is computed.
//
// Boundaries
// - Pure functions only.

fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '\'' | '(' | ')' | '.' | '/')
}

/// Uppercases every letter that follows a non-letter and lowercases the rest.
///
/// Digits and punctuation count as word breaks, so `"it's"` becomes `"It'S"` and
/// `"2shot"` becomes `"2Shot"`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_is_letter = false;
    for c in value.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }
    out
}

/// Strips disallowed characters, trims, then title-cases.
pub fn normalize_text(value: &str) -> String {
    let kept: String = value.chars().filter(|c| is_kept(*c)).collect();
    title_case(kept.trim())
}

/// Like `normalize_text`, but an attribute that normalizes to nothing is absent.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value.map(normalize_text).filter(|v| !v.is_empty())
}
