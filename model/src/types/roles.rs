//! Per-player role scripts

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::step::StrategyStep;

/// One turn of a role script: either a plain instruction or a full step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TurnEntry {
    Text(String),
    Step(StrategyStep),
}

impl TurnEntry {
    /// Instruction text for this turn (`None` for a bare branch step)
    pub fn text(&self) -> Option<&str> {
        match self {
            TurnEntry::Text(text) => Some(text),
            TurnEntry::Step(step) => step.text(),
        }
    }

    pub fn as_step(&self) -> Option<&StrategyStep> {
        match self {
            TurnEntry::Step(step) => Some(step),
            TurnEntry::Text(_) => None,
        }
    }
}

impl From<&str> for TurnEntry {
    fn from(text: &str) -> Self {
        TurnEntry::Text(text.to_string())
    }
}

/// Role keys mapped to their turn lists, kept in source order
///
/// Source order matters: when neither an explicit role nor `"player1"` is
/// available, the first key as written is the default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoleTable {
    entries: Vec<(String, Vec<TurnEntry>)>,
}

impl RoleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a role; a replaced role keeps its original position
    pub fn insert(&mut self, key: impl Into<String>, turns: Vec<TurnEntry>) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = turns;
        } else {
            self.entries.push((key, turns));
        }
    }

    pub fn get(&self, key: &str) -> Option<&[TurnEntry]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, turns)| turns.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Keys in source order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TurnEntry])> {
        self.entries
            .iter()
            .map(|(k, turns)| (k.as_str(), turns.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<TurnEntry>)> for RoleTable {
    fn from_iter<I: IntoIterator<Item = (K, Vec<TurnEntry>)>>(iter: I) -> Self {
        let mut table = RoleTable::new();
        for (key, turns) in iter {
            table.insert(key, turns);
        }
        table
    }
}

impl Serialize for RoleTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, turns) in &self.entries {
            map.serialize_entry(key, turns)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RoleTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RoleTableVisitor)
    }
}

struct RoleTableVisitor;

impl<'de> Visitor<'de> for RoleTableVisitor {
    type Value = RoleTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of role keys to turn lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = RoleTable::new();
        while let Some((key, turns)) = access.next_entry::<String, Vec<TurnEntry>>()? {
            table.insert(key, turns);
        }
        Ok(table)
    }
}
