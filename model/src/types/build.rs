//! Recommended builds

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// A recommended loadout for one Pokemon
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Build {
    /// Pokemon (or set) name
    #[serde(default)]
    pub name: String,

    /// Role key this build belongs to (e.g. "player1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,

    /// Position within the player's builds
    ///
    /// Numeric strings are accepted; any other value counts as absent.
    #[serde(
        default,
        deserialize_with = "lenient_order",
        skip_serializing_if = "Option::is_none"
    )]
    pub order: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<String>,

    /// EV spread, free text (e.g. "252 Atk / 252 Spe / 4 HP")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evs: Option<String>,

    /// IV spread, free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ivs: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moves: Vec<String>,
}

impl Build {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }

    pub fn with_order(mut self, order: f64) -> Self {
        self.order = Some(order);
        self
    }

    /// Player key, ignoring blank values
    pub fn player_key(&self) -> Option<&str> {
        self.player.as_deref().filter(|p| !p.trim().is_empty())
    }
}

/// One entry of a `recommended` list: either a free-text note or a build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recommendation {
    Note(String),
    Build(Build),
}

impl Recommendation {
    pub fn as_build(&self) -> Option<&Build> {
        match self {
            Recommendation::Build(build) => Some(build),
            Recommendation::Note(_) => None,
        }
    }

    pub fn as_note(&self) -> Option<&str> {
        match self {
            Recommendation::Note(note) => Some(note),
            Recommendation::Build(_) => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOrder {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

fn lenient_order<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match RawOrder::deserialize(deserializer)? {
        RawOrder::Number(order) => Some(order),
        RawOrder::Text(text) => text.trim().parse().ok(),
        RawOrder::Other(_) => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRecommendation {
    Entry(Recommendation),
    Malformed(IgnoredAny),
}

/// Deserialize a `recommended` list, skipping entries that are neither a
/// note nor a build
pub(crate) fn lenient_recommendations<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Recommendation>, D::Error> {
    let raw = Vec::<RawRecommendation>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|entry| match entry {
            RawRecommendation::Entry(recommendation) => Some(recommendation),
            RawRecommendation::Malformed(_) => None,
        })
        .collect())
}

impl From<Build> for Recommendation {
    fn from(build: Build) -> Self {
        Recommendation::Build(build)
    }
}

impl From<&str> for Recommendation {
    fn from(note: &str) -> Self {
        Recommendation::Note(note.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_key() {
        assert_eq!(Build::new("Kingdra").player_key(), None);
        assert_eq!(Build::new("Kingdra").with_player("  ").player_key(), None);
        assert_eq!(
            Build::new("Kingdra").with_player("player2").player_key(),
            Some("player2")
        );
    }

    #[test]
    fn test_deserialize_mixed_list() {
        let json = r#"[
            "Bring a Fire type for the second phase",
            {"name": "Gengar", "player": "player1", "order": 1,
             "item": "Focus Sash", "moves": ["Shadow Ball", "Protect"]},
            {"name": "Snorlax"}
        ]"#;

        let list: Vec<Recommendation> = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].as_note(), Some("Bring a Fire type for the second phase"));

        let gengar = list[1].as_build().unwrap();
        assert_eq!(gengar.order, Some(1.0));
        assert_eq!(gengar.item.as_deref(), Some("Focus Sash"));
        assert_eq!(gengar.moves.len(), 2);

        let snorlax = list[2].as_build().unwrap();
        assert!(snorlax.player.is_none());
        assert!(snorlax.order.is_none());
    }

    #[test]
    fn test_missing_name_and_odd_order_still_load() {
        let json = r#"[
            {"player": "player1", "item": "Leftovers"},
            {"name": "Weavile", "order": "1"},
            {"name": "Mamoswine", "order": "first"},
            {"name": "Lapras", "order": null}
        ]"#;

        let list: Vec<Recommendation> = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 4);

        let nameless = list[0].as_build().unwrap();
        assert_eq!(nameless.name, "");
        assert_eq!(nameless.item.as_deref(), Some("Leftovers"));

        assert_eq!(list[1].as_build().unwrap().order, Some(1.0));
        assert_eq!(list[2].as_build().unwrap().order, None);
        assert_eq!(list[3].as_build().unwrap().order, None);
    }
}
