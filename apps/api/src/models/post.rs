use serde::{Deserialize, Serialize};

/// Target social network. Serialized lowercase to match the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linkedin,
    Twitter,
    Instagram,
}

impl Platform {
    /// Fixed image dimensions `(width, height)` for the platform's feed format.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            // 1.91:1
            Platform::Linkedin => (1200, 627),
            // 16:9
            Platform::Twitter => (1200, 675),
            // 4:5 portrait
            Platform::Instagram => (1080, 1350),
        }
    }
}

/// One generated post: caption text plus a sized image URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformPost {
    pub text: String,
    pub image_url: String,
    pub width: u32,
    pub height: u32,
    pub platform: Platform,
}

/// The full response shape: always exactly one post per platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub linkedin: PlatformPost,
    pub twitter: PlatformPost,
    pub instagram: PlatformPost,
}
