use crate::domain::field::string_field;
use crate::error::CoreError;

string_field!(Name, normalize_name);

/// Trims `raw` and checks it is a proper contact name: an ASCII letter
/// followed by letters, digits and single spaces or hyphens.
pub fn normalize_name(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyName);
    }

    let invalid = || CoreError::InvalidName(trimmed.to_string());
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return Err(invalid()),
    }

    let mut prev_separator = false;
    for ch in chars {
        if ch.is_ascii_alphanumeric() {
            prev_separator = false;
            continue;
        }
        if matches!(ch, ' ' | '-') && !prev_separator {
            prev_separator = true;
            continue;
        }
        return Err(invalid());
    }

    if prev_separator {
        return Err(invalid());
    }

    Ok(trimmed.to_string())
}
