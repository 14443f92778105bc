use crate::utils::error::Result;
#[cfg(feature = "codec")]
use crate::utils::error::UtilError;
use regex::Regex;
use std::sync::LazyLock;

// Lowercase runs with optional leading capitals, bare capital runs, digit runs.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]*[a-z]+|[A-Z]+|[0-9]+").expect("word pattern is valid"));

/// Uppercases the first character only.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Splits into words: acronyms (`XML`), capitalized or lowercase runs
/// (`Http`, `request`) and digit runs. `"XMLHttpRequest2"` yields
/// `["XML", "Http", "Request", "2"]`.
pub fn split_words(value: &str) -> Vec<&str> {
    let mut words = Vec::new();
    for found in WORD_PATTERN.find_iter(value) {
        let word = found.as_str();
        let capitals = word.bytes().take_while(u8::is_ascii_uppercase).count();
        // The last capital of an acronym starts the next word.
        if capitals > 1 && capitals < word.len() {
            words.push(&word[..capitals - 1]);
            words.push(&word[capitals - 1..]);
        } else {
            words.push(word);
        }
    }
    words
}

fn slugify(value: &str, separator: &str) -> String {
    split_words(value)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

pub fn snake_case(value: &str) -> String {
    slugify(value, "_")
}

pub fn kebab_case(value: &str) -> String {
    slugify(value, "-")
}

pub fn camel_case(value: &str) -> String {
    let words = split_words(value);
    let Some((first, rest)) = words.split_first() else {
        return String::new();
    };

    let mut result = first.to_lowercase();
    for word in rest {
        result.push_str(&capitalize(&word.to_lowercase()));
    }
    result
}

/// Base64 (standard alphabet, padded) of the UTF-8 bytes of `value`.
#[cfg(feature = "codec")]
pub fn base64_encode(value: &str) -> Result<String> {
    use base64::Engine;
    Ok(base64::engine::general_purpose::STANDARD.encode(value.as_bytes()))
}

/// Invalid UTF-8 in the decoded bytes is replaced with U+FFFD.
#[cfg(feature = "codec")]
pub fn base64_decode(value: &str) -> Result<String> {
    use base64::Engine;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(value)
        .map_err(|e| {
            tracing::debug!("Rejecting malformed base64 input: {}", e);
            UtilError::invalid_argument(format!("Invalid base64 input: {}", e))
        })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

// Builds without the codec feature keep the API but cannot encode.
#[cfg(not(feature = "codec"))]
pub fn base64_encode(_value: &str) -> Result<String> {
    Err(crate::utils::error::UtilError::unsupported_environment(
        "Base64 encoding is not supported in this build (enable the `codec` feature)",
    ))
}

#[cfg(not(feature = "codec"))]
pub fn base64_decode(_value: &str) -> Result<String> {
    Err(crate::utils::error::UtilError::unsupported_environment(
        "Base64 decoding is not supported in this build (enable the `codec` feature)",
    ))
}

/// Trimmed copy, or an empty string when `value` is missing.
pub fn trim(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}

pub fn is_not_blank(value: Option<&str>) -> bool {
    !is_blank(value)
}
