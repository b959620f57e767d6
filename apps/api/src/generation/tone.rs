//! Tone tables — maps the requested tone to intro phrasing, a closing suffix,
//! and the visual style used in image prompts.
//!
//! Every table is an exhaustive `match` over [`Tone`], so adding a tone is a
//! compile error until each table covers it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stylistic mode requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Witty,
    Urgent,
}

impl Tone {
    /// Lowercase name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Witty => "witty",
            Tone::Urgent => "urgent",
        }
    }

    /// Opening phrase for long-form posts.
    pub fn intro(self) -> &'static str {
        match self {
            Tone::Professional => "Here's a strategic take:",
            Tone::Witty => "Hot take (with a wink):",
            Tone::Urgent => "Don't sleep on this:",
        }
    }

    /// Sentence appended by [`apply_tone`].
    pub fn suffix(self) -> &'static str {
        match self {
            Tone::Professional => {
                "Let's focus on measurable value, clear outcomes, and next steps."
            }
            Tone::Witty => "Let's keep it sharp, playful, and scroll-stopping.",
            Tone::Urgent => "Act now—this window won't stay open long.",
        }
    }

    /// Visual style cues shared by every image prompt for this tone.
    pub fn visual_style(self) -> &'static str {
        match self {
            Tone::Professional => {
                "clean minimalist corporate, bold typography, soft gradients, high contrast"
            }
            Tone::Witty => {
                "playful vibrant, 3D icons, colorful gradients, dynamic composition, stickers"
            }
            Tone::Urgent => {
                "bold red accents, high contrast, motion blur, impactful headline graphic"
            }
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Appends the tone's suffix sentence to `prefix`.
pub fn apply_tone(prefix: &str, tone: Tone) -> String {
    format!("{prefix} {}", tone.suffix())
}
