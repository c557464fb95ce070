//! Topic categories a paper can be filed under.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A topic category key.
///
/// Declaration order is the order categories appear in the exported catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    Landslide,
    DebrisFlow,
    Glacier,
    River,
    Hydrology,
    Volcano,
    Methods,
    Other,
}

impl Topic {
    /// Every topic, in catalog display order
    pub const ALL: [Topic; 8] = [
        Topic::Landslide,
        Topic::DebrisFlow,
        Topic::Glacier,
        Topic::River,
        Topic::Hydrology,
        Topic::Volcano,
        Topic::Methods,
        Topic::Other,
    ];

    /// Returns the topic key used in the exported JSON
    pub fn key(&self) -> &'static str {
        match self {
            Topic::Landslide => "landslide",
            Topic::DebrisFlow => "debris-flow",
            Topic::Glacier => "glacier",
            Topic::River => "river",
            Topic::Hydrology => "hydrology",
            Topic::Volcano => "volcano",
            Topic::Methods => "methods",
            Topic::Other => "other",
        }
    }

    /// Returns the display name of the topic
    pub fn name(&self) -> &'static str {
        match self {
            Topic::Landslide => "Landslide & Mass Movement",
            Topic::DebrisFlow => "Debris Flow & Lahar",
            Topic::Glacier => "Glacier & Cryoseismology",
            Topic::River => "River & Bedload",
            Topic::Hydrology => "Hydrology & Groundwater",
            Topic::Volcano => "Volcano",
            Topic::Methods => "Seismic Methods & ML",
            Topic::Other => "Other",
        }
    }

    /// Returns the icon name the website renders for the topic
    pub fn icon(&self) -> &'static str {
        match self {
            Topic::Landslide => "mountain",
            Topic::DebrisFlow => "droplets",
            Topic::Glacier => "snowflake",
            Topic::River => "waves",
            Topic::Hydrology => "droplet",
            Topic::Volcano => "flame",
            Topic::Methods => "cpu",
            Topic::Other => "globe",
        }
    }

    /// Returns the accent color (CSS hex) for the topic
    pub fn color(&self) -> &'static str {
        match self {
            Topic::Landslide => "#c0613a",
            Topic::DebrisFlow => "#b5651d",
            Topic::Glacier => "#5a7d8b",
            Topic::River => "#2e7d6e",
            Topic::Hydrology => "#4a6e8a",
            Topic::Volcano => "#b33a3a",
            Topic::Methods => "#6b7e5e",
            Topic::Other => "#8a7f72",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Topic::ALL
            .iter()
            .copied()
            .find(|topic| topic.key() == wanted)
            .ok_or_else(|| s.to_string())
    }
}
