//! Image prompt composition and Pollinations URL construction.
//!
//! No request is ever sent from here; the URL is returned to the client,
//! which fetches the image directly from the provider.

use crate::generation::tone::Tone;
use crate::models::post::Platform;

/// Prompt-to-image endpoint. The encoded prompt is appended as a path segment.
pub const IMAGE_ENDPOINT: &str = "https://image.pollinations.ai/prompt/";

/// Prompts longer than this are cut before encoding.
const MAX_PROMPT_CHARS: usize = 300;

/// Composes the natural-language image prompt for one platform.
pub fn build_image_prompt(
    platform: Platform,
    tone: Tone,
    idea: &str,
    keywords: &[String],
) -> String {
    let style = tone.visual_style();
    match platform {
        Platform::Linkedin => format!(
            "LinkedIn banner, {style}, topic: {idea}, icons for {}, \
             branding-friendly, vector style, centered composition",
            keywords.join(", ")
        ),
        Platform::Twitter => format!(
            "Twitter/X social card, {style}, topic: {idea}, high readability, \
             strong focal point, modern UI motif"
        ),
        Platform::Instagram => format!(
            "Instagram portrait poster, {style}, topic: {idea}, editorial design, \
             eye-catching, aesthetic photography + graphic overlay"
        ),
    }
}

/// Builds the image URL for a prompt at the given size.
pub fn build_image_url(width: u32, height: u32, prompt: &str) -> String {
    let truncated: String = prompt.chars().take(MAX_PROMPT_CHARS).collect();
    format!(
        "{IMAGE_ENDPOINT}{}?width={width}&height={height}&nologo=true",
        encode_prompt(&truncated)
    )
}

/// Form-style encoding: unreserved characters pass through, spaces become `+`.
fn encode_prompt(prompt: &str) -> String {
    urlencoding::encode(prompt).replace("%20", "+")
}
