//! Idea normalization, keyword extraction, and hashtag formatting.

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::errors::AppError;

/// Minimum length of an idea after trimming, counted in characters.
pub const MIN_IDEA_CHARS: usize = 3;

/// Maximum number of keywords pulled from an idea.
const MAX_KEYWORDS: usize = 10;

/// Keywords used when an idea yields no alphabetic tokens.
const FALLBACK_KEYWORDS: &[&str] = &["creator", "content", "marketing"];

/// Maximum characters in a hashtag body (excluding the `#`).
const MAX_HASHTAG_CHARS: usize = 22;

/// Maximum number of hashtags in a block.
const MAX_HASHTAGS: usize = 12;

/// Whitespace as understood by the tokenizer: Unicode `White_Space` plus the
/// ASCII information separators U+001C..=U+001F.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// True only for letters (general categories Lu, Ll, Lt, Lm, Lo).
///
/// Narrower than `char::is_alphabetic`, which also admits letter numbers
/// such as `Ⅻ` and combining vowel signs.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Trims the idea and enforces the minimum length.
pub fn normalize_idea(idea: &str) -> Result<&str, AppError> {
    let cleaned = idea.trim_matches(is_separator);
    if cleaned.chars().count() < MIN_IDEA_CHARS {
        return Err(AppError::Validation(format!(
            "Idea must be at least {MIN_IDEA_CHARS} characters long"
        )));
    }
    Ok(cleaned)
}

/// Extracts up to 10 unique lowercase alphabetic keywords, in first-seen order.
///
/// `-` and `/` act as word separators. Tokens containing anything other than
/// letters (digits, punctuation, combining marks) are dropped entirely.
/// Falls back to a generic set when nothing survives.
pub fn extract_keywords(idea: &str) -> Vec<String> {
    let separated = idea.replace(['-', '/'], " ");

    let mut keywords: Vec<String> = Vec::new();
    for token in separated.split(is_separator).filter(|t| !t.is_empty()) {
        let token = token.to_lowercase();
        if !token.chars().all(is_letter) {
            continue;
        }
        if !keywords.contains(&token) {
            keywords.push(token);
        }
    }

    if keywords.is_empty() {
        return FALLBACK_KEYWORDS.iter().map(|k| k.to_string()).collect();
    }

    keywords.truncate(MAX_KEYWORDS);
    keywords
}

/// Formats keywords as a space-separated hashtag block.
///
/// Blank keywords are skipped, spaces are removed, each tag body is capped at
/// 22 characters, and only the first 12 tags are kept.
pub fn build_hashtags<S: AsRef<str>>(keywords: &[S]) -> String {
    keywords
        .iter()
        .map(|k| k.as_ref().trim_matches(is_separator))
        .filter(|k| !k.is_empty())
        .map(|k| {
            let body: String = k
                .chars()
                .filter(|&c| c != ' ')
                .take(MAX_HASHTAG_CHARS)
                .collect();
            format!("#{body}")
        })
        .take(MAX_HASHTAGS)
        .collect::<Vec<_>>()
        .join(" ")
}
