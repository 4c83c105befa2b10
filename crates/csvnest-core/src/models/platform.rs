use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::settings::normalize_label;

/// Target stock-media platform; selects the export schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "Adobe Stock")]
    AdobeStock,
    Freepik,
    Shutterstock,
    #[default]
    General,
    Vecteezy,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::AdobeStock,
        Platform::Freepik,
        Platform::Shutterstock,
        Platform::General,
        Platform::Vecteezy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::AdobeStock => "Adobe Stock",
            Platform::Freepik => "Freepik",
            Platform::Shutterstock => "Shutterstock",
            Platform::General => "General",
            Platform::Vecteezy => "Vecteezy",
        }
    }

    /// Download name of the export archive, e.g. `metadata_adobe_stock.zip`
    pub fn archive_name(&self) -> String {
        let slug = self
            .as_str()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase();
        format!("metadata_{}.zip", slug)
    }
}

impl FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_label(s);
        Platform::ALL
            .into_iter()
            .find(|p| normalize_label(p.as_str()) == wanted)
            .ok_or_else(|| anyhow::anyhow!("Invalid platform: {}", s))
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
