//! Interactive navigation sessions over pre-authored battle strategies.
//!
//! A [`Session`] is opened on a trainer or raid boss and owns everything the
//! detail view shows: the drill-down stack through the strategy tree, the
//! active strategy variant, the role and turn being read, and the active
//! build group. All operations are synchronous and never fail; selections
//! that no longer match the data fall back to defaults instead.
//!
//! # Overview
//!
//! ```text
//! dexplan-model (Opponent / Boss / StrategyStep)
//!        │
//!        ▼
//! dexplan-session ← THIS CRATE
//!   ├─ StrategyVariantSelector  which TeamStrategy is active
//!   ├─ NavigationController     drill-down / back over the active tree
//!   ├─ RoleResolver + TurnPager role tabs and turn paging
//!   └─ BuildGrouper             recommended build tabs
//!        │
//!        ▼
//! SessionView (read-only snapshot for rendering)
//! ```
//!
//! # Example Usage
//!
//! ```ignore
//! use dexplan_session::{Session, SessionAction, Target};
//!
//! let mut session = Session::new();
//! session.open(Target::boss(boss));
//!
//! let view = session.apply(SessionAction::SelectRole("player2".into()));
//! println!("{}: {:?}", view.active_role, view.turn.entry);
//!
//! let first_branch = view.steps[0].buttons.first().map(|button| button.target);
//! if let Some(at) = first_branch {
//!     session.drill_into(at);
//! }
//! ```

pub mod builds;
mod config;
pub mod navigation;
pub mod roles;
mod session;
mod target;
mod variant;
pub mod view;


pub use builds::{compare_builds, effective_group, BuildGroup, BuildGrouper, Recommended};
pub use config::SessionConfig;
pub use navigation::{NavigationController, VariationRef};
pub use roles::{effective_role, role_number, role_options, RoleNumber, RoleResolver, TurnPager};
pub use session::{Session, SessionAction};
pub use target::{Target, TrainerTarget};
pub use variant::{variant_labels, StrategyVariantSelector};
pub use view::{
    BranchButton, RecommendedView, SessionView, StepView, StrategyState, TargetInfo, TurnView,
    VariantTab,
};

// Re-export the model so callers need only one dependency
pub use dexplan_model as model;
