//! Post generation — orchestrates the per-platform templates.
//!
//! Flow: normalize_idea → extract_keywords → per platform: text template +
//!       build_image_prompt → build_image_url.
//!
//! Pure and deterministic: identical `(idea, tone)` always yields identical output.

use tracing::debug;

use crate::errors::AppError;
use crate::generation::image::{build_image_prompt, build_image_url};
use crate::generation::keywords::{build_hashtags, extract_keywords, normalize_idea};
use crate::generation::tone::{apply_tone, Tone};
use crate::models::post::{GenerationResult, Platform, PlatformPost};

/// Twitter/X posts are cut to this many characters.
pub const MAX_TWEET_CHARS: usize = 275;

const LINKEDIN_VALUE_BULLETS: &str = "• Impact: Drive results through clarity and focus.\n\
     • Approach: Start small, iterate fast, and measure what matters.\n\
     • Outcome: Momentum that compounds.";

const LINKEDIN_CLOSING: &str = "Curious to dive deeper? Let's connect.";

const TWEET_CALL_TO_ACTION: &str = "Make it real.";

const TWEET_HASHTAG: &str = "#buildinpublic";

/// Tags appended to every Instagram hashtag block, after the tone name.
const INSTAGRAM_FIXED_TAGS: &[&str] = &["socialmedia", "content", "brand"];

/// Generates one post per platform for the given idea and tone.
///
/// Fails only with `AppError::Validation` when the trimmed idea is too short.
pub fn generate_posts(idea: &str, tone: Tone) -> Result<GenerationResult, AppError> {
    let idea = normalize_idea(idea)?;
    let keywords = extract_keywords(idea);
    debug!("Extracted {} keywords: {:?}", keywords.len(), keywords);

    let linkedin = build_post(
        Platform::Linkedin,
        linkedin_text(idea, tone),
        tone,
        idea,
        &keywords,
    );
    let twitter = build_post(
        Platform::Twitter,
        twitter_text(idea, tone),
        tone,
        idea,
        &keywords,
    );
    let instagram = build_post(
        Platform::Instagram,
        instagram_text(idea, tone, &keywords),
        tone,
        idea,
        &keywords,
    );

    Ok(GenerationResult {
        linkedin,
        twitter,
        instagram,
    })
}

fn build_post(
    platform: Platform,
    text: String,
    tone: Tone,
    idea: &str,
    keywords: &[String],
) -> PlatformPost {
    let (width, height) = platform.dimensions();
    let prompt = build_image_prompt(platform, tone, idea, keywords);

    PlatformPost {
        text,
        image_url: build_image_url(width, height, &prompt),
        width,
        height,
        platform,
    }
}

/// Long-form: intro, why-it-matters, value bullets, closing — separated by blank lines.
fn linkedin_text(idea: &str, tone: Tone) -> String {
    [
        format!("{} {idea}.", tone.intro()),
        apply_tone("Why it matters:", tone),
        LINKEDIN_VALUE_BULLETS.to_string(),
        LINKEDIN_CLOSING.to_string(),
    ]
    .join("\n\n")
}

/// Single punchy line, cut to `MAX_TWEET_CHARS`.
fn twitter_text(idea: &str, tone: Tone) -> String {
    let wink = if tone == Tone::Witty { "😉 " } else { "" };
    let punchy = format!("{idea} → {TWEET_CALL_TO_ACTION} {wink}{TWEET_HASHTAG}");
    punchy.chars().take(MAX_TWEET_CHARS).collect()
}

/// Toned caption, blank line, hashtag block.
fn instagram_text(idea: &str, tone: Tone, keywords: &[String]) -> String {
    let caption = apply_tone(idea, tone);

    let mut tags: Vec<&str> = keywords.iter().map(String::as_str).collect();
    tags.push(tone.as_str());
    tags.extend_from_slice(INSTAGRAM_FIXED_TAGS);

    format!("{caption}\n\n{}", build_hashtags(tags.as_slice()))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::image::IMAGE_ENDPOINT;

    const ALL_TONES: [Tone; 3] = [Tone::Professional, Tone::Witty, Tone::Urgent];

    #[test]
    fn test_generates_all_three_platforms() {
        let result = generate_posts("eco-friendly sneakers", Tone::Witty).unwrap();

        assert_eq!(result.linkedin.platform, Platform::Linkedin);
        assert_eq!(result.twitter.platform, Platform::Twitter);
        assert_eq!(result.instagram.platform, Platform::Instagram);

        for post in [&result.linkedin, &result.twitter, &result.instagram] {
            assert!(!post.text.is_empty());
            assert!(post.image_url.starts_with(IMAGE_ENDPOINT));
            let query = format!("?width={}&height={}&nologo=true", post.width, post.height);
            assert!(post.image_url.ends_with(&query));
        }
    }

    #[test]
    fn test_dimensions_per_platform() {
        let result = generate_posts("eco-friendly sneakers", Tone::Professional).unwrap();
        assert_eq!((result.linkedin.width, result.linkedin.height), (1200, 627));
        assert_eq!((result.twitter.width, result.twitter.height), (1200, 675));
        assert_eq!((result.instagram.width, result.instagram.height), (1080, 1350));
    }

    #[test]
    fn test_rejects_short_ideas() {
        for idea in ["", "ab", "   ", "  x  "] {
            let err = generate_posts(idea, Tone::Professional).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "idea {idea:?}");
        }
    }

    #[test]
    fn test_idempotent() {
        for tone in ALL_TONES {
            let first = generate_posts("  Launching our AI/ML newsletter  ", tone).unwrap();
            let second = generate_posts("  Launching our AI/ML newsletter  ", tone).unwrap();
            assert_eq!(first, second);
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }
    }

    #[test]
    fn test_linkedin_text_layout() {
        let result = generate_posts(" remote onboarding ", Tone::Professional).unwrap();
        let paragraphs: Vec<&str> = result.linkedin.text.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 4);
        assert_eq!(paragraphs[0], "Here's a strategic take: remote onboarding.");
        assert_eq!(
            paragraphs[1],
            "Why it matters: Let's focus on measurable value, clear outcomes, and next steps."
        );
        assert_eq!(paragraphs[2].lines().count(), 3);
        assert!(paragraphs[2].lines().all(|l| l.starts_with('•')));
        assert_eq!(paragraphs[3], "Curious to dive deeper? Let's connect.");
    }

    #[test]
    fn test_twitter_text_witty_has_wink() {
        let result = generate_posts("eco-friendly sneakers", Tone::Witty).unwrap();
        assert_eq!(
            result.twitter.text,
            "eco-friendly sneakers → Make it real. 😉 #buildinpublic"
        );
    }

    #[test]
    fn test_twitter_text_without_wink_for_other_tones() {
        for tone in [Tone::Professional, Tone::Urgent] {
            let result = generate_posts("eco-friendly sneakers", tone).unwrap();
            assert_eq!(
                result.twitter.text,
                "eco-friendly sneakers → Make it real. #buildinpublic"
            );
        }
    }

    #[test]
    fn test_twitter_text_truncated_for_long_ideas() {
        let idea = "word ".repeat(200);
        for tone in ALL_TONES {
            let result = generate_posts(&idea, tone).unwrap();
            assert_eq!(result.twitter.text.chars().count(), MAX_TWEET_CHARS);
        }
    }

    #[test]
    fn test_twitter_truncation_counts_characters() {
        let idea = "é".repeat(400);
        let result = generate_posts(&idea, Tone::Witty).unwrap();
        assert_eq!(result.twitter.text.chars().count(), MAX_TWEET_CHARS);
    }

    #[test]
    fn test_instagram_text_has_caption_and_hashtags() {
        let result = generate_posts("eco-friendly sneakers", Tone::Witty).unwrap();
        let (caption, tags) = result.instagram.text.split_once("\n\n").unwrap();
        assert_eq!(
            caption,
            "eco-friendly sneakers Let's keep it sharp, playful, and scroll-stopping."
        );
        assert_eq!(
            tags,
            "#eco #friendly #sneakers #witty #socialmedia #content #brand"
        );
    }

    #[test]
    fn test_instagram_hashtags_capped_at_twelve() {
        let idea = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda";
        let result = generate_posts(idea, Tone::Urgent).unwrap();
        let (_, tags) = result.instagram.text.split_once("\n\n").unwrap();
        let tags: Vec<&str> = tags.split(' ').collect();
        // 10 keywords + tone + first fixed tag
        assert_eq!(tags.len(), 12);
        assert_eq!(tags[10], "#urgent");
        assert_eq!(tags[11], "#socialmedia");
    }

    #[test]
    fn test_fallback_keywords_used_for_non_alphabetic_ideas() {
        let result = generate_posts("2025 Q3 roadmap!", Tone::Professional).unwrap();
        let (_, tags) = result.instagram.text.split_once("\n\n").unwrap();
        assert!(tags.starts_with("#creator #content #marketing #professional"));
    }

    #[test]
    fn test_image_urls_embed_tone_style() {
        let result = generate_posts("eco-friendly sneakers", Tone::Urgent).unwrap();
        assert!(result.linkedin.image_url.contains("bold+red+accents"));
        assert!(result.instagram.image_url.contains("Instagram+portrait+poster"));
    }
}
