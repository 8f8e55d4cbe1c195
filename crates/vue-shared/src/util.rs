//! Cached case conversions used by the compiler.

use crate::cache::Cache;
use once_cell::sync::Lazy;

static CAMELIZE_CACHE: Lazy<Cache<String, String>> = Lazy::new(Cache::new);
static HYPHENATE_CACHE: Lazy<Cache<String, String>> = Lazy::new(Cache::new);
static CAPITALIZE_CACHE: Lazy<Cache<String, String>> = Lazy::new(Cache::new);

/// Camelize a string (kebab-case to camelCase).
pub fn camelize(s: &str) -> String {
    CAMELIZE_CACHE.compute_or_fetch(s, camelize_uncached)
}

/// Convert camelCase to kebab-case.
pub fn hyphenate(s: &str) -> String {
    HYPHENATE_CACHE.compute_or_fetch(s, hyphenate_uncached)
}

/// Uppercase the first character.
pub fn capitalize(s: &str) -> String {
    CAPITALIZE_CACHE.compute_or_fetch(s, |s| {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    })
}

fn camelize_uncached(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        // Only a dash followed by an ASCII word character is folded.
        if c == '-' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_alphanumeric() || next == '_' {
                    result.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }

    result
}

fn hyphenate_uncached(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_is_word = false;

    for c in s.chars() {
        if c.is_ascii_uppercase() {
            if prev_is_word {
                result.push('-');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
        prev_is_word = c.is_ascii_alphanumeric() || c == '_';
    }

    result
}
