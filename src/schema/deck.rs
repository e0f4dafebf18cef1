use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Who the deck is pitched at. Only the definition wording changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudienceLevel {
    #[default]
    Beginner,
    Advanced,
}

impl AudienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for AudienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown audience level '{0}': expected beginner or advanced")]
pub struct ParseAudienceLevelError(pub String);

impl FromStr for AudienceLevel {
    type Err = ParseAudienceLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "advanced" => Ok(Self::Advanced),
            _ => Err(ParseAudienceLevelError(s.to_string())),
        }
    }
}

/// Slide kinds, in deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    Title,
    Definition,
    Example,
    Related,
    Summary,
}

impl SlideKind {
    /// Every generated deck contains exactly these kinds in this order.
    pub const ORDER: [SlideKind; 5] = [
        Self::Title,
        Self::Definition,
        Self::Example,
        Self::Related,
        Self::Summary,
    ];

    /// Fixed on-screen time for the kind.
    pub fn duration_sec(&self) -> u32 {
        match self {
            Self::Title => 4,
            Self::Definition => 10,
            Self::Example => 12,
            Self::Related => 6,
            Self::Summary => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Definition => "definition",
            Self::Example => "example",
            Self::Related => "related",
            Self::Summary => "summary",
        }
    }
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single slide. The title slide carries a subtitle instead of
/// bullets and notes; absent fields are left out when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    #[serde(rename = "type")]
    pub kind: SlideKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub duration_sec: u32,
}

impl Slide {
    pub fn title(title: String, subtitle: String) -> Self {
        Self {
            kind: SlideKind::Title,
            title,
            subtitle: Some(subtitle),
            bullets: None,
            notes: None,
            duration_sec: SlideKind::Title.duration_sec(),
        }
    }

    pub fn content(kind: SlideKind, title: String, bullets: Vec<String>, notes: String) -> Self {
        Self {
            kind,
            title,
            subtitle: None,
            bullets: Some(bullets),
            notes: Some(notes),
            duration_sec: kind.duration_sec(),
        }
    }
}

/// The generated slide deck for one concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub concept: String,
    #[serde(with = "iso_utc")]
    pub generated_at: DateTime<Utc>,
    pub audience_level: AudienceLevel,
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Total running time of all slides.
    pub fn duration_sec(&self) -> u32 {
        self.slides.iter().map(|s| s.duration_sec).sum()
    }
}

/// `2026-10-19T08:30:00.000000Z` style timestamps.
mod iso_utc {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.to_rfc3339_opts(SecondsFormat::Micros, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
