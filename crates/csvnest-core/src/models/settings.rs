use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::platform::Platform;
use crate::constants::{DEFAULT_KEYWORD_COUNT, DEFAULT_TITLE_LENGTH};

/// Image-type tag appended to titles and surfaced in some platform schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageType {
    #[default]
    None,
    Vector,
    Illustration,
    #[serde(rename = "3D Illustration")]
    Illustration3d,
    #[serde(rename = "3D Icon")]
    Icon3d,
}

impl ImageType {
    pub const ALL: [ImageType; 5] = [
        ImageType::None,
        ImageType::Vector,
        ImageType::Illustration,
        ImageType::Illustration3d,
        ImageType::Icon3d,
    ];

    /// Display label, e.g. "3D Icon"
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::None => "None",
            ImageType::Vector => "Vector",
            ImageType::Illustration => "Illustration",
            ImageType::Illustration3d => "3D Illustration",
            ImageType::Icon3d => "3D Icon",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ImageType::None)
    }
}

impl FromStr for ImageType {
    type Err = anyhow::Error;

    /// Accepts the display label in any case, with spaces, hyphens or underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_label(s);
        ImageType::ALL
            .into_iter()
            .find(|t| normalize_label(t.as_str()) == wanted)
            .ok_or_else(|| anyhow::anyhow!("Invalid image type: {}", s))
    }
}

impl Display for ImageType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Lowercase and drop separators so "3d-icon", "3D Icon" and "3d_icon" compare equal.
pub(crate) fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// An optional text setting with an independent enable flag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Toggle<T> {
    pub enabled: bool,
    pub value: T,
}

impl<T> Toggle<T> {
    pub fn on(value: T) -> Self {
        Self {
            enabled: true,
            value,
        }
    }

    pub fn off(value: T) -> Self {
        Self {
            enabled: false,
            value,
        }
    }
}

impl Toggle<String> {
    /// The trimmed value when enabled and not blank.
    pub fn active(&self) -> Option<&str> {
        if !self.enabled {
            return None;
        }
        let trimmed = self.value.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// User-controlled knobs for metadata generation and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Title max length, 10 to 120
    pub title_length: usize,
    /// Keyword cap, 5 to 50
    pub keyword_count: usize,
    pub remove_duplicates: bool,
    /// Raw comma, semicolon or newline delimited text
    pub bulk_keywords: Toggle<String>,
    pub prefix: Toggle<String>,
    pub suffix: Toggle<String>,
    pub image_type: ImageType,
    pub platform: Platform,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            title_length: DEFAULT_TITLE_LENGTH,
            keyword_count: DEFAULT_KEYWORD_COUNT,
            remove_duplicates: true,
            bulk_keywords: Toggle::default(),
            prefix: Toggle::default(),
            suffix: Toggle::default(),
            image_type: ImageType::None,
            platform: Platform::General,
        }
    }
}
