//! Read-only lookup over a loaded set of opponents and bosses

use serde::{Deserialize, Serialize};

use crate::types::{Boss, Opponent};
use crate::ModelError;

/// Every opponent and boss known to the guide
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub opponents: Vec<Opponent>,

    #[serde(default)]
    pub bosses: Vec<Boss>,
}

impl Catalog {
    /// Parse a catalog from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check every strategy tree in the catalog
    pub fn validate(&self) -> Result<(), ModelError> {
        for opponent in &self.opponents {
            opponent.validate()?;
        }
        for boss in &self.bosses {
            boss.validate()?;
        }
        Ok(())
    }

    /// Distinct regions, sorted
    pub fn regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = self.opponents.iter().map(|o| o.region.as_str()).collect();
        regions.sort_unstable();
        regions.dedup();
        regions
    }

    pub fn opponents_in<'a>(&'a self, region: &'a str) -> impl Iterator<Item = &'a Opponent> {
        self.opponents.iter().filter(move |o| o.region == region)
    }

    pub fn opponent(&self, name: &str) -> Option<&Opponent> {
        self.opponents.iter().find(|o| o.name == name)
    }

    pub fn boss(&self, name: &str) -> Option<&Boss> {
        self.bosses.iter().find(|b| b.name == name)
    }

    pub fn bosses_by_stars(&self, stars: u8) -> impl Iterator<Item = &Boss> {
        self.bosses.iter().filter(move |b| b.stars == stars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "opponents": [
            {"name": "Lorelei", "region": "Kanto", "type": "Ice"},
            {"name": "Will", "region": "Johto", "type": "Psychic"},
            {"name": "Agatha", "region": "Kanto", "type": "Ghost"}
        ],
        "bosses": [
            {"name": "Dragonite", "stars": 5},
            {"name": "Gyarados", "stars": 3},
            {"name": "Tyranitar", "stars": 5}
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.opponents.len(), 3);
        assert_eq!(catalog.bosses.len(), 3);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_from_json_invalid() {
        let result = Catalog::from_json("{\"opponents\": 7}");
        assert!(matches!(result, Err(ModelError::Json(_))));
    }

    #[test]
    fn test_regions() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.regions(), vec!["Johto", "Kanto"]);
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::from_json(CATALOG).unwrap();

        let kanto: Vec<_> = catalog.opponents_in("Kanto").map(|o| o.name.as_str()).collect();
        assert_eq!(kanto, vec!["Lorelei", "Agatha"]);

        assert_eq!(catalog.opponent("Will").map(|o| o.region.as_str()), Some("Johto"));
        assert!(catalog.opponent("Bruno").is_none());
        assert_eq!(catalog.boss("Gyarados").map(|b| b.stars), Some(3));
        assert_eq!(catalog.bosses_by_stars(5).count(), 2);
    }
}
