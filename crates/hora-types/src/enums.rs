//! Enumeration types for the Hora clock face.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Rings
// ---------------------------------------------------------------------------

/// One of the three concentric rings drawn on the clock face.
///
/// Ordered from the innermost ring outwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum Ring {
    /// The 24 unequal hours (12 of daylight, 12 of night).
    Hours,
    /// The four night watches.
    Vigils,
    /// The four coarse quarters of the day.
    Quarters,
}

impl Ring {
    /// Number of segments every partition carries on this ring.
    pub const fn segment_count(self) -> usize {
        match self {
            Self::Hours => 24,
            Self::Vigils | Self::Quarters => 4,
        }
    }

    /// CSS-friendly lowercase name of the ring (`hour`, `vigil`, `quarter`).
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Hours => "hour",
            Self::Vigils => "vigil",
            Self::Quarters => "quarter",
        }
    }
}

// ---------------------------------------------------------------------------
// Label vocabularies
// ---------------------------------------------------------------------------

/// Vocabulary used for hour and vigil labels.
///
/// Quarter labels (`MANE`, `DIES`, `VESPER`, `NOX`) are the same in every
/// style.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// Roman numerals: `I` .. `XII`, `VIGILIA I` .. `VIGILIA IV`.
    #[default]
    Roman,
    /// Latin ordinal words: `PRIMA` .. `DUODECIMA`.
    Latin,
    /// Plain numbers: `1` .. `12`.
    Arabic,
}

impl std::fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Roman => "roman",
            Self::Latin => "latin",
            Self::Arabic => "arabic",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for LabelStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "roman" => Ok(Self::Roman),
            "latin" => Ok(Self::Latin),
            "arabic" | "numeric" => Ok(Self::Arabic),
            other => Err(format!("unknown label style: {other}")),
        }
    }
}
