//! Strategy-tree and opponent data types for Pokemon MMO strategy guides.
//!
//! This crate holds the read-only shapes a guide's content catalog hands to
//! the navigation engine: trainers and raid bosses, their teams, the
//! recursive strategy trees, per-player role scripts and recommended builds.
//!
//! # Overview
//!
//! `dexplan-model` sits between the content catalog (JSON) and the session
//! engine:
//!
//! ```text
//! catalog JSON
//!        │
//!        ▼
//! dexplan-model (entity shapes + validation) ← THIS CRATE
//!        │
//!        ▼
//! dexplan-session (drill-down, roles, turns, build groups)
//! ```
//!
//! # Main Types
//!
//! - [`StrategyStep`] / [`Variation`] - the recursive plan tree
//! - [`Opponent`] / [`Team`] - trainer-style targets, teams in source order
//! - [`Boss`] / [`TeamStrategy`] - raid-style targets with role scripts
//! - [`RoleTable`] / [`TurnEntry`] - per-player turn sequences, in source order
//! - [`Build`] / [`Recommendation`] - recommended loadouts mixed with notes
//! - [`Catalog`] - lookup over a loaded set of opponents and bosses
//!
//! # Example Usage
//!
//! ```ignore
//! use dexplan_model::Catalog;
//!
//! let catalog = Catalog::from_json(&json)?;
//! catalog.validate()?;
//!
//! for opponent in catalog.opponents_in("Kanto") {
//!     println!("{} ({})", opponent.name, opponent.opponent_type);
//! }
//! ```

use thiserror::Error;

pub mod catalog;
pub mod types;

pub use catalog::Catalog;
pub use types::{
    depth, is_terminal, validate_steps, Boss, Build, Opponent, Recommendation, RoleTable,
    StepKind, StrategyStep, Team, TeamStrategy, TeamTable, TurnEntry, Variation, MAX_TREE_DEPTH,
};

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Variation \"{0}\" has an empty step list")]
    EmptyVariation(String),

    #[error("Branch step has no variations")]
    EmptyBranch,

    #[error("Strategy tree is nested deeper than {0} levels")]
    TooDeep(usize),

    #[error("Team \"{team}\" has a strategy for \"{pokemon}\", which is not on the team")]
    UnknownPokemon { team: String, pokemon: String },
}
