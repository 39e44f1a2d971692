// Quality value object
// The colour grade of an asset, derived from the Steam rarity tag

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "白色")]
    White,
    #[serde(rename = "浅蓝色")]
    LightBlue,
    #[serde(rename = "深蓝色")]
    DarkBlue,
    #[serde(rename = "紫色")]
    Purple,
    #[serde(rename = "粉紫色")]
    PinkPurple,
    #[serde(rename = "红色")]
    Red,
    #[serde(rename = "金色")]
    Gold,
}

impl Quality {
    pub const ALL: [Quality; 7] = [
        Quality::White,
        Quality::LightBlue,
        Quality::DarkBlue,
        Quality::Purple,
        Quality::PinkPurple,
        Quality::Red,
        Quality::Gold,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Quality::White => "白色",
            Quality::LightBlue => "浅蓝色",
            Quality::DarkBlue => "深蓝色",
            Quality::Purple => "紫色",
            Quality::PinkPurple => "粉紫色",
            Quality::Red => "红色",
            Quality::Gold => "金色",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|quality| quality.label() == label)
    }

    /// Maps a localized Steam rarity tag onto a quality.
    ///
    /// Unknown rarities (including an empty tag) yield `None`; callers decide
    /// whether that is acceptable.
    pub fn from_rarity(rarity: &str) -> Option<Self> {
        match rarity {
            "消费级" => Some(Quality::White),
            "工业级" => Some(Quality::LightBlue),
            "军规级" => Some(Quality::DarkBlue),
            "受限" => Some(Quality::Purple),
            "保密" => Some(Quality::PinkPurple),
            "隐秘" => Some(Quality::Red),
            "违禁" => Some(Quality::Gold),
            _ => None,
        }
    }
}
