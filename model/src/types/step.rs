//! Strategy tree nodes

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Deepest nesting of variation step lists accepted by [`validate_steps`]
pub const MAX_TREE_DEPTH: usize = 64;

/// What a step represents within its branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// The primary action line of the branch
    Main,
    /// A subsequent beat in the same branch
    Step,
    /// A pure decision point with no narrative
    Branch,
}

/// One node of a strategy tree
///
/// Serialized with a `"kind"` tag:
///
/// ```text
/// {"kind": "main", "text": "Lead with Protect", "variations": [...]}
/// {"kind": "branch", "variations": [...]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StrategyStep {
    Main {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        warning: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        variations: Vec<Variation>,
    },
    Step {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        warning: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        variations: Vec<Variation>,
    },
    Branch {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        warning: Option<String>,
        #[serde(default)]
        variations: Vec<Variation>,
    },
}

impl StrategyStep {
    /// Create a main action line
    pub fn main(text: impl Into<String>) -> Self {
        StrategyStep::Main {
            text: text.into(),
            warning: None,
            variations: Vec::new(),
        }
    }

    /// Create a follow-up step
    pub fn step(text: impl Into<String>) -> Self {
        StrategyStep::Step {
            text: text.into(),
            warning: None,
            variations: Vec::new(),
        }
    }

    /// Create a decision point over the given variations
    pub fn branch(variations: Vec<Variation>) -> Self {
        StrategyStep::Branch {
            warning: None,
            variations,
        }
    }

    /// Attach a warning to this step
    pub fn with_warning(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            StrategyStep::Main { warning, .. }
            | StrategyStep::Step { warning, .. }
            | StrategyStep::Branch { warning, .. } => *warning = Some(text.into()),
        }
        self
    }

    /// Append a variation to this step
    pub fn with_variation(mut self, variation: Variation) -> Self {
        match &mut self {
            StrategyStep::Main { variations, .. }
            | StrategyStep::Step { variations, .. }
            | StrategyStep::Branch { variations, .. } => variations.push(variation),
        }
        self
    }

    pub fn kind(&self) -> StepKind {
        match self {
            StrategyStep::Main { .. } => StepKind::Main,
            StrategyStep::Step { .. } => StepKind::Step,
            StrategyStep::Branch { .. } => StepKind::Branch,
        }
    }

    /// Narrative text (always `None` for a branch)
    pub fn text(&self) -> Option<&str> {
        match self {
            StrategyStep::Main { text, .. } | StrategyStep::Step { text, .. } => Some(text),
            StrategyStep::Branch { .. } => None,
        }
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            StrategyStep::Main { warning, .. }
            | StrategyStep::Step { warning, .. }
            | StrategyStep::Branch { warning, .. } => warning.as_deref(),
        }
    }

    pub fn variations(&self) -> &[Variation] {
        match self {
            StrategyStep::Main { variations, .. }
            | StrategyStep::Step { variations, .. }
            | StrategyStep::Branch { variations, .. } => variations,
        }
    }

    /// Check if any variation of this step can be drilled into
    pub fn has_drillable(&self) -> bool {
        self.variations().iter().any(Variation::is_drillable)
    }
}

/// A conditional branch hanging off a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    /// Button label, e.g. "Opponent uses Rain Dance"
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,

    /// Sub-plan followed when this variation happens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<StrategyStep>>,
}

impl Variation {
    /// Create a variation with no sub-plan
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            warning: None,
            steps: None,
        }
    }

    pub fn with_warning(mut self, text: impl Into<String>) -> Self {
        self.warning = Some(text.into());
        self
    }

    pub fn with_steps(mut self, steps: Vec<StrategyStep>) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Sub-plan to drill into, if present and non-empty
    pub fn drill_steps(&self) -> Option<&[StrategyStep]> {
        self.steps.as_deref().filter(|steps| !steps.is_empty())
    }

    pub fn is_drillable(&self) -> bool {
        self.drill_steps().is_some()
    }
}

/// Check that a step list has no empty variations or branches and stays
/// within [`MAX_TREE_DEPTH`]
pub fn validate_steps(steps: &[StrategyStep]) -> Result<(), ModelError> {
    validate_level(steps, 1)
}

fn validate_level(steps: &[StrategyStep], level: usize) -> Result<(), ModelError> {
    if level > MAX_TREE_DEPTH {
        return Err(ModelError::TooDeep(MAX_TREE_DEPTH));
    }

    for step in steps {
        if step.kind() == StepKind::Branch && step.variations().is_empty() {
            return Err(ModelError::EmptyBranch);
        }

        for variation in step.variations() {
            match &variation.steps {
                Some(sub) if sub.is_empty() => {
                    return Err(ModelError::EmptyVariation(variation.name.clone()));
                }
                Some(sub) => validate_level(sub, level + 1)?,
                None => {}
            }
        }
    }

    Ok(())
}

/// Longest chain of nested step lists (0 for an empty list)
pub fn depth(steps: &[StrategyStep]) -> usize {
    if steps.is_empty() {
        return 0;
    }

    let deepest_child = steps
        .iter()
        .flat_map(|step| step.variations())
        .filter_map(Variation::drill_steps)
        .map(depth)
        .max()
        .unwrap_or(0);

    1 + deepest_child
}

/// Check if no variation in the list leads anywhere
pub fn is_terminal(steps: &[StrategyStep]) -> bool {
    !steps.iter().any(StrategyStep::has_drillable)
}
