//! Read-only snapshots handed to the presentation layer

use dexplan_model::{Build, StepKind, StrategyStep, TurnEntry};

use crate::navigation::VariationRef;

/// Everything a detail view needs to render one frame
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView<'a> {
    pub state: StrategyState,

    /// Who the session is about (trainer or boss details)
    pub target: Option<TargetInfo<'a>>,

    /// Variant tabs (empty for trainers)
    pub variants: Vec<VariantTab>,

    /// Steps of the currently displayed list
    pub steps: Vec<StepView<'a>>,

    /// Whether the Back control is enabled
    pub can_go_back: bool,

    /// Variations drilled into, outermost first
    pub breadcrumbs: Vec<&'a str>,

    /// Role tabs in display order
    pub roles: Vec<&'a str>,

    /// Role whose turns are shown ("" when there are no roles)
    pub active_role: &'a str,

    pub turn: TurnView<'a>,

    pub recommended: RecommendedView<'a>,
}

impl SessionView<'_> {
    /// View of a session with nothing open
    pub fn closed() -> Self {
        Self {
            state: StrategyState::Closed,
            target: None,
            variants: Vec::new(),
            steps: Vec::new(),
            can_go_back: false,
            breadcrumbs: Vec::new(),
            roles: Vec::new(),
            active_role: "",
            turn: TurnView::default(),
            recommended: RecommendedView::None,
        }
    }
}

/// What the step area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyState {
    /// No session is open
    Closed,
    /// The target has no strategy written ("no strategy available")
    NoStrategy,
    /// Steps are shown but none of their variations leads further
    Leaf,
    /// At least one variation can be drilled into
    Branching,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TargetInfo<'a> {
    Trainer {
        name: &'a str,
        region: &'a str,
        opponent_type: &'a str,
        /// Team tabs in order
        teams: Vec<&'a str>,
        team: &'a str,
        /// Pokemon of the active team, in send-out order
        pokemon_names: &'a [String],
        pokemon: Option<&'a str>,
    },
    Boss {
        name: &'a str,
        stars: u8,
        moves: &'a [String],
        mechanics: Option<&'a str>,
        locations: &'a [String],
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantTab {
    pub label: String,
    pub active: bool,
}

/// One rendered step
#[derive(Debug, Clone, PartialEq)]
pub struct StepView<'a> {
    pub kind: StepKind,
    /// Narrative text (`None` for a branch)
    pub text: Option<&'a str>,
    pub warning: Option<&'a str>,
    pub buttons: Vec<BranchButton<'a>>,
}

impl<'a> StepView<'a> {
    pub(crate) fn new(index: usize, step: &'a StrategyStep) -> Self {
        let buttons = step
            .variations()
            .iter()
            .enumerate()
            .map(|(variation, v)| BranchButton {
                name: &v.name,
                warning: v.warning.as_deref(),
                target: VariationRef::new(index, variation),
                enabled: v.is_drillable(),
            })
            .collect();

        Self {
            kind: step.kind(),
            text: step.text(),
            warning: step.warning(),
            buttons,
        }
    }
}

/// A clickable variation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchButton<'a> {
    pub name: &'a str,
    pub warning: Option<&'a str>,
    /// Pass to `Session::drill_into`
    pub target: VariationRef,
    /// False when the variation has no sub-steps
    pub enabled: bool,
}

/// Turn pager state for the active role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnView<'a> {
    pub index: usize,
    pub count: usize,
    pub entry: Option<&'a TurnEntry>,
    pub can_previous: bool,
    pub can_next: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecommendedView<'a> {
    None,
    /// Plain notes, no tabs
    Notes(Vec<&'a str>),
    /// Build tabs with the active group's builds
    Grouped {
        tabs: Vec<&'a str>,
        active: &'a str,
        builds: Vec<&'a Build>,
    },
}
