//! Session - the owned navigation state of one open detail view

use dexplan_model::{is_terminal, Recommendation, RoleTable, TeamStrategy, TurnEntry};

use crate::builds::{BuildGrouper, Recommended};
use crate::config::SessionConfig;
use crate::navigation::{NavigationController, VariationRef};
use crate::roles::{role_options, RoleResolver};
use crate::target::Target;
use crate::variant::{variant_labels, StrategyVariantSelector};
use crate::view::{
    RecommendedView, SessionView, StepView, StrategyState, TargetInfo, TurnView, VariantTab,
};

/// One user interaction, for reducer-style dispatch through [`Session::apply`]
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Open(Target),
    Close,
    DrillInto(VariationRef),
    Back,
    SelectVariant(usize),
    SelectRole(String),
    SetTurnIndex(usize),
    NextTurn,
    PreviousTurn,
    SelectBuildGroup(String),
    SelectTeam(String),
    SelectPokemon(String),
    SelectRegion(String),
    Reset,
}

/// Live navigation state for one open target
///
/// Everything the detail view shows is derived from this record: the
/// drill-down stack, the active strategy variant, the explicit role and turn,
/// and the explicit build group. Explicit choices that no longer match the
/// active strategy are ignored in favor of the defaults, and every upstream
/// change goes through [`reset_session`](Self::reset_session).
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,

    /// What the view was opened for (None = closed)
    target: Option<Target>,

    navigation: NavigationController,

    variant: StrategyVariantSelector,

    roles: RoleResolver,

    builds: BuildGrouper,
}

impl Session {
    /// Create a closed session with default configuration
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            target: None,
            navigation: NavigationController::new(),
            variant: StrategyVariantSelector::new(),
            roles: RoleResolver::new(),
            builds: BuildGrouper::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    // === Lifecycle ===

    /// Open a detail view on `target`, discarding any previous state
    pub fn open(&mut self, target: impl Into<Target>) {
        let target = target.into();

        if self.config.validate_on_open {
            if let Err(error) = target.validate() {
                tracing::warn!(
                    name = target.name(),
                    error = %error,
                    "strategy data failed validation"
                );
            }
        }

        tracing::debug!(
            name = target.name(),
            variants = target.strategies().len(),
            "opened strategy session"
        );
        self.target = Some(target);
        self.variant.reset();
        self.reset_session();
    }

    /// Tear the session down
    pub fn close(&mut self) {
        if let Some(target) = self.target.take() {
            tracing::debug!(name = target.name(), "closed strategy session");
        }
        self.variant.reset();
        self.roles.reset();
        self.builds.reset();
        self.navigation.reset();
    }

    /// Clear history, role, turn and build group, then reopen the tree of
    /// the active target and variant
    ///
    /// Every upstream selection change funnels through here.
    pub fn reset_session(&mut self) {
        self.navigation.reset();
        self.roles.reset();
        self.builds.reset();

        let tree = self
            .target
            .as_ref()
            .map(|target| target.tree(self.variant.active()).to_vec())
            .unwrap_or_default();
        self.navigation.open(tree);
    }

    // === Navigation ===

    /// Drill into a variation of the displayed list; ignored if it has no steps
    pub fn drill_into(&mut self, at: VariationRef) -> bool {
        self.navigation.drill_into(at)
    }

    /// Go back one level; ignored at the top
    pub fn back(&mut self) -> bool {
        self.navigation.back()
    }

    // === Strategy variants ===

    pub fn active_variant(&self) -> usize {
        self.variant.active()
    }

    pub fn active_strategy(&self) -> Option<&TeamStrategy> {
        active_strategy(self.target.as_ref(), &self.variant)
    }

    /// Switch the active strategy; role, turn and build group reset with it
    pub fn select_variant(&mut self, index: usize) -> bool {
        let count = self
            .target
            .as_ref()
            .map_or(0, |target| target.strategies().len());

        if self.variant.select(index, count) {
            self.reset_session();
            true
        } else {
            false
        }
    }

    // === Roles and turns ===

    /// Role table of the active strategy
    pub fn roles_source(&self) -> Option<&RoleTable> {
        self.active_strategy().map(|strategy| &strategy.roles)
    }

    pub fn effective_role(&self) -> &str {
        self.roles.effective(self.roles_source(), &self.config.default_role)
    }

    /// Turns of the displayed role
    pub fn turns(&self) -> &[TurnEntry] {
        self.roles.turns(self.roles_source(), &self.config.default_role)
    }

    pub fn turn_index(&self) -> usize {
        self.roles.pager().index(self.turns().len())
    }

    pub fn current_turn(&self) -> Option<&TurnEntry> {
        self.roles.pager().current(self.turns())
    }

    /// Show another role's turns from the first turn
    pub fn select_role(&mut self, key: &str) -> bool {
        let roles = active_strategy(self.target.as_ref(), &self.variant).map(|s| &s.roles);
        self.roles.select(roles, key)
    }

    pub fn set_turn_index(&mut self, index: usize) {
        let len = self.turns().len();
        self.roles.pager_mut().set(index, len);
    }

    pub fn next_turn(&mut self) -> bool {
        let len = self.turns().len();
        self.roles.pager_mut().next(len)
    }

    pub fn previous_turn(&mut self) -> bool {
        let len = self.turns().len();
        self.roles.pager_mut().previous(len)
    }

    // === Builds ===

    /// Recommended builds of the active strategy, grouped and ordered
    pub fn recommended(&self) -> Recommended<'_> {
        Recommended::from_list(
            recommended_list(self.target.as_ref(), &self.variant),
            &self.config.fallback_group,
        )
    }

    pub fn effective_build_group(&self) -> Option<&str> {
        self.builds.effective(&self.recommended())
    }

    pub fn select_build_group(&mut self, key: &str) -> bool {
        let recommended = Recommended::from_list(
            recommended_list(self.target.as_ref(), &self.variant),
            &self.config.fallback_group,
        );
        self.builds.select(&recommended, key)
    }

    // === Upstream selections ===

    /// Switch a trainer session to another team, starting at its lead Pokemon
    pub fn select_team(&mut self, name: &str) -> bool {
        let Some(Target::Trainer(trainer)) = &mut self.target else {
            tracing::trace!(team = name, "not a trainer session, ignoring team selection");
            return false;
        };
        if trainer.team == name {
            return false;
        }
        let Some(team) = trainer.opponent.team(name) else {
            tracing::trace!(team = name, "unknown team, ignoring selection");
            return false;
        };

        trainer.pokemon = team.first_pokemon().map(str::to_string);
        trainer.team = name.to_string();
        tracing::debug!(team = name, pokemon = ?trainer.pokemon, "selected team");
        self.reset_session();
        true
    }

    /// Switch a trainer session to another Pokemon of the active team
    pub fn select_pokemon(&mut self, name: &str) -> bool {
        let Some(Target::Trainer(trainer)) = &mut self.target else {
            tracing::trace!(pokemon = name, "not a trainer session, ignoring pokemon selection");
            return false;
        };
        if trainer.pokemon.as_deref() == Some(name) {
            return false;
        }
        if !trainer.active_team().is_some_and(|team| team.has_pokemon(name)) {
            tracing::trace!(pokemon = name, "pokemon not on the active team, ignoring selection");
            return false;
        }

        trainer.pokemon = Some(name.to_string());
        tracing::debug!(pokemon = name, "selected pokemon");
        self.reset_session();
        true
    }

    /// A region change closes the session unless the open trainer is
    /// already in that region
    pub fn select_region(&mut self, region: &str) -> bool {
        let unchanged = matches!(
            &self.target,
            Some(Target::Trainer(trainer)) if trainer.opponent.region == region
        );
        if unchanged || self.target.is_none() {
            return false;
        }

        tracing::debug!(region, "region changed");
        self.close();
        true
    }

    // === Dispatch ===

    /// Apply one interaction and return the updated view
    pub fn apply(&mut self, action: SessionAction) -> SessionView<'_> {
        match action {
            SessionAction::Open(target) => self.open(target),
            SessionAction::Close => self.close(),
            SessionAction::DrillInto(at) => {
                self.drill_into(at);
            }
            SessionAction::Back => {
                self.back();
            }
            SessionAction::SelectVariant(index) => {
                self.select_variant(index);
            }
            SessionAction::SelectRole(key) => {
                self.select_role(&key);
            }
            SessionAction::SetTurnIndex(index) => self.set_turn_index(index),
            SessionAction::NextTurn => {
                self.next_turn();
            }
            SessionAction::PreviousTurn => {
                self.previous_turn();
            }
            SessionAction::SelectBuildGroup(key) => {
                self.select_build_group(&key);
            }
            SessionAction::SelectTeam(name) => {
                self.select_team(&name);
            }
            SessionAction::SelectPokemon(name) => {
                self.select_pokemon(&name);
            }
            SessionAction::SelectRegion(region) => {
                self.select_region(&region);
            }
            SessionAction::Reset => self.reset_session(),
        }

        self.view()
    }

    /// Snapshot of everything the detail view renders
    pub fn view(&self) -> SessionView<'_> {
        let Some(target) = &self.target else {
            return SessionView::closed();
        };

        let current = self.navigation.current_view();
        let state = if self.navigation.root().is_empty() {
            StrategyState::NoStrategy
        } else if is_terminal(current) {
            StrategyState::Leaf
        } else {
            StrategyState::Branching
        };

        let active = self.variant.active();
        let variants = variant_labels(target.strategies())
            .into_iter()
            .enumerate()
            .map(|(index, label)| VariantTab {
                label,
                active: index == active,
            })
            .collect();

        let turns = self.turns();
        let pager = self.roles.pager();

        SessionView {
            state,
            target: Some(target_info(target)),
            variants,
            steps: current
                .iter()
                .enumerate()
                .map(|(index, step)| StepView::new(index, step))
                .collect(),
            can_go_back: self.navigation.can_go_back(),
            breadcrumbs: self.navigation.breadcrumbs().collect(),
            roles: self.roles_source().map(role_options).unwrap_or_default(),
            active_role: self.effective_role(),
            turn: TurnView {
                index: pager.index(turns.len()),
                count: turns.len(),
                entry: pager.current(turns),
                can_previous: pager.can_previous(turns.len()),
                can_next: pager.can_next(turns.len()),
            },
            recommended: self.recommended_view(),
        }
    }

    fn recommended_view(&self) -> RecommendedView<'_> {
        let recommended = self.recommended();
        let active = self.builds.effective(&recommended);

        match (recommended, active) {
            (Recommended::Notes(notes), _) => RecommendedView::Notes(notes),
            (Recommended::Grouped(groups), Some(active)) => {
                let tabs = groups.iter().map(|group| group.key).collect();
                let builds = groups
                    .into_iter()
                    .find(|group| group.key == active)
                    .map(|group| group.builds)
                    .unwrap_or_default();
                RecommendedView::Grouped {
                    tabs,
                    active,
                    builds,
                }
            }
            _ => RecommendedView::None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn active_strategy<'a>(
    target: Option<&'a Target>,
    variant: &StrategyVariantSelector,
) -> Option<&'a TeamStrategy> {
    target.and_then(|target| target.strategies().get(variant.active()))
}

fn recommended_list<'a>(
    target: Option<&'a Target>,
    variant: &StrategyVariantSelector,
) -> &'a [Recommendation] {
    active_strategy(target, variant)
        .map(|strategy| strategy.recommended.as_slice())
        .unwrap_or_default()
}

fn target_info(target: &Target) -> TargetInfo<'_> {
    match target {
        Target::Trainer(trainer) => TargetInfo::Trainer {
            name: &trainer.opponent.name,
            region: &trainer.opponent.region,
            opponent_type: &trainer.opponent.opponent_type,
            teams: trainer.opponent.team_names().collect(),
            team: &trainer.team,
            pokemon_names: trainer
                .active_team()
                .map(|team| team.pokemon_names.as_slice())
                .unwrap_or_default(),
            pokemon: trainer.pokemon.as_deref(),
        },
        Target::Boss(boss) => TargetInfo::Boss {
            name: &boss.name,
            stars: boss.stars,
            moves: &boss.moves,
            mechanics: boss.mechanics.as_deref(),
            locations: &boss.locations,
        },
    }
}
