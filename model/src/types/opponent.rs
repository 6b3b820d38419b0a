//! Trainer-style opponents

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::step::{validate_steps, StrategyStep};
use crate::ModelError;

/// A fixed trainer with one or more teams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opponent {
    pub name: String,

    pub region: String,

    /// Type specialty (e.g. "Ghost")
    #[serde(rename = "type")]
    pub opponent_type: String,

    /// Teams keyed by team name, in source order
    #[serde(default)]
    pub teams: TeamTable,
}

impl Opponent {
    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.get(name)
    }

    /// Team names in tab order
    pub fn team_names(&self) -> impl Iterator<Item = &str> {
        self.teams.keys()
    }

    /// First team in tab order
    pub fn first_team(&self) -> Option<(&str, &Team)> {
        self.teams.iter().next()
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        for (name, team) in self.teams.iter() {
            team.validate(name)?;
        }
        Ok(())
    }
}

/// An opponent's teams, kept in the order the catalog lists them
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeamTable {
    entries: Vec<(String, Team)>,
}

impl TeamTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a team; a replaced team keeps its position
    pub fn insert(&mut self, name: impl Into<String>, team: Team) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = team;
        } else {
            self.entries.push((name, team));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Team> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, team)| team)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Team> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, team)| team)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Team)> {
        self.entries.iter().map(|(n, team)| (n.as_str(), team))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Team)> for TeamTable {
    fn from_iter<I: IntoIterator<Item = (K, Team)>>(iter: I) -> Self {
        let mut table = TeamTable::new();
        for (name, team) in iter {
            table.insert(name, team);
        }
        table
    }
}

impl Serialize for TeamTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, team) in &self.entries {
            map.serialize_entry(name, team)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TeamTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TeamTableVisitor)
    }
}

struct TeamTableVisitor;

impl<'de> Visitor<'de> for TeamTableVisitor {
    type Value = TeamTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of team names to teams")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = TeamTable::new();
        while let Some((name, team)) = access.next_entry::<String, Team>()? {
            table.insert(name, team);
        }
        Ok(table)
    }
}

/// One of an opponent's teams
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Pokemon in the order the opponent sends them out
    #[serde(default)]
    pub pokemon_names: Vec<String>,

    /// Strategy tree per Pokemon
    #[serde(default)]
    pub pokemon_strategies: HashMap<String, Vec<StrategyStep>>,
}

impl Team {
    /// Strategy for a Pokemon (empty if none was written)
    pub fn strategy_for(&self, pokemon: &str) -> &[StrategyStep] {
        self.pokemon_strategies
            .get(pokemon)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_pokemon(&self, pokemon: &str) -> bool {
        self.pokemon_names.iter().any(|p| p == pokemon)
    }

    pub fn first_pokemon(&self) -> Option<&str> {
        self.pokemon_names.first().map(String::as_str)
    }

    fn validate(&self, team_name: &str) -> Result<(), ModelError> {
        // Sorted so the reported error does not depend on hash order
        let mut names: Vec<_> = self.pokemon_strategies.keys().collect();
        names.sort();

        for pokemon in names {
            if !self.has_pokemon(pokemon) {
                return Err(ModelError::UnknownPokemon {
                    team: team_name.to_string(),
                    pokemon: pokemon.clone(),
                });
            }
            validate_steps(self.strategy_for(pokemon))?;
        }
        Ok(())
    }
}
