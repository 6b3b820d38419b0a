//! Entity shapes consumed by the navigation engine

mod boss;
mod build;
mod opponent;
mod roles;
mod step;

pub use boss::{Boss, TeamStrategy};
pub use build::{Build, Recommendation};
pub use opponent::{Opponent, Team, TeamTable};
pub use roles::{RoleTable, TurnEntry};
pub use step::{
    depth, is_terminal, validate_steps, StepKind, StrategyStep, Variation, MAX_TREE_DEPTH,
};
