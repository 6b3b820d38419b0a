//! What a session is opened on

use dexplan_model::{Boss, ModelError, Opponent, StrategyStep, Team, TeamStrategy};

/// A trainer opened on one team and (optionally) one of its Pokemon
#[derive(Debug, Clone, PartialEq)]
pub struct TrainerTarget {
    pub opponent: Opponent,
    pub team: String,
    pub pokemon: Option<String>,
}

impl TrainerTarget {
    /// Open on the first team and its lead Pokemon
    pub fn new(opponent: Opponent) -> Self {
        let (team, pokemon) = match opponent.first_team() {
            Some((name, team)) => (name.to_string(), team.first_pokemon().map(str::to_string)),
            None => (String::new(), None),
        };

        Self {
            opponent,
            team,
            pokemon,
        }
    }

    /// Open on a specific team and Pokemon
    pub fn with_selection(
        opponent: Opponent,
        team: impl Into<String>,
        pokemon: impl Into<String>,
    ) -> Self {
        Self {
            opponent,
            team: team.into(),
            pokemon: Some(pokemon.into()),
        }
    }

    pub fn active_team(&self) -> Option<&Team> {
        self.opponent.team(&self.team)
    }

    /// Strategy of the selected Pokemon (empty if none is selected or written)
    pub fn strategy(&self) -> &[StrategyStep] {
        match (self.active_team(), self.pokemon.as_deref()) {
            (Some(team), Some(pokemon)) => team.strategy_for(pokemon),
            _ => &[],
        }
    }
}

/// The entity a detail view was opened for
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Trainer(TrainerTarget),
    Boss(Boss),
}

impl Target {
    /// Trainer target on its first team and lead Pokemon
    pub fn trainer(opponent: Opponent) -> Self {
        Target::Trainer(TrainerTarget::new(opponent))
    }

    pub fn boss(boss: Boss) -> Self {
        Target::Boss(boss)
    }

    /// Opponent or boss name
    pub fn name(&self) -> &str {
        match self {
            Target::Trainer(trainer) => &trainer.opponent.name,
            Target::Boss(boss) => &boss.name,
        }
    }

    /// Alternative strategies (trainers have none)
    pub fn strategies(&self) -> &[TeamStrategy] {
        match self {
            Target::Trainer(_) => &[],
            Target::Boss(boss) => &boss.team_strategies,
        }
    }

    /// Strategy tree shown for the given variant
    pub fn tree(&self, variant: usize) -> &[StrategyStep] {
        match self {
            Target::Trainer(trainer) => trainer.strategy(),
            Target::Boss(boss) => boss
                .strategy(variant)
                .map(|strategy| strategy.steps.as_slice())
                .unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            Target::Trainer(trainer) => trainer.opponent.validate(),
            Target::Boss(boss) => boss.validate(),
        }
    }
}

impl From<Opponent> for Target {
    fn from(opponent: Opponent) -> Self {
        Target::trainer(opponent)
    }
}

impl From<Boss> for Target {
    fn from(boss: Boss) -> Self {
        Target::Boss(boss)
    }
}
