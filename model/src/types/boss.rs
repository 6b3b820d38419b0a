//! Raid-style bosses

use serde::{Deserialize, Serialize};

use super::build::{lenient_recommendations, Recommendation};
use super::roles::RoleTable;
use super::step::{validate_steps, StrategyStep};
use crate::ModelError;

/// A raid boss with one or more alternative team strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boss {
    pub name: String,

    /// Raid difficulty
    pub stars: u8,

    /// Moves the boss is known to use
    #[serde(default)]
    pub moves: Vec<String>,

    /// Free-text description of special mechanics (shields, stat resets...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanics: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<String>,

    /// Alternative strategies, shown as version tabs
    #[serde(default)]
    pub team_strategies: Vec<TeamStrategy>,
}

impl Boss {
    pub fn strategy(&self, index: usize) -> Option<&TeamStrategy> {
        self.team_strategies.get(index)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        for strategy in &self.team_strategies {
            strategy.validate()?;
        }
        Ok(())
    }
}

/// One way of beating a boss
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamStrategy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Turn scripts per player
    #[serde(default, skip_serializing_if = "RoleTable::is_empty")]
    pub roles: RoleTable,

    /// Builds mixed with free-text notes; unreadable entries are dropped
    #[serde(
        default,
        deserialize_with = "lenient_recommendations",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub recommended: Vec<Recommendation>,

    /// Branching plan for the fight
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<StrategyStep>,
}

impl TeamStrategy {
    /// Tab label, falling back to "Version N" (1-based)
    pub fn display_label(&self, index: usize) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("Version {}", index + 1),
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        validate_steps(&self.steps)?;
        for (_, turns) in self.roles.iter() {
            for step in turns.iter().filter_map(|turn| turn.as_step()) {
                validate_steps(std::slice::from_ref(step))?;
            }
        }
        Ok(())
    }
}
