//! Drill-down / back navigation over a strategy tree

use dexplan_model::{StrategyStep, Variation};

/// Address of a variation within the currently displayed step list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariationRef {
    /// Index of the step in the current view
    pub step: usize,
    /// Index of the variation within that step
    pub variation: usize,
}

impl VariationRef {
    pub fn new(step: usize, variation: usize) -> Self {
        Self { step, variation }
    }
}

/// One drill-down the user made
#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    at: VariationRef,
    name: String,
}

/// Owns an opened strategy tree and the stack of variations drilled into
///
/// The displayed list is always the one reached by following the stack
/// from the root, so popping a frame restores the previous list exactly.
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    tree: Vec<StrategyStep>,
    history: Vec<Frame>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `tree` at the top level with an empty history
    pub fn open(&mut self, tree: Vec<StrategyStep>) {
        self.tree = tree;
        self.history.clear();
    }

    /// Drop the tree and the history
    pub fn reset(&mut self) {
        self.tree.clear();
        self.history.clear();
    }

    /// The tree passed to the last [`open`](Self::open)
    pub fn root(&self) -> &[StrategyStep] {
        &self.tree
    }

    /// The step list currently displayed
    pub fn current_view(&self) -> &[StrategyStep] {
        let mut view: &[StrategyStep] = &self.tree;
        for frame in &self.history {
            match lookup(view, frame.at).and_then(Variation::drill_steps) {
                Some(steps) => view = steps,
                None => break,
            }
        }
        view
    }

    /// Look up a variation in the current view
    pub fn variation(&self, at: VariationRef) -> Option<&Variation> {
        lookup(self.current_view(), at)
    }

    /// Descend into a variation's sub-steps
    ///
    /// Returns false (and changes nothing) if the variation does not exist
    /// or has no steps.
    pub fn drill_into(&mut self, at: VariationRef) -> bool {
        let name = match self.variation(at) {
            Some(variation) if variation.is_drillable() => variation.name.clone(),
            Some(variation) => {
                tracing::trace!(
                    variation = %variation.name,
                    "variation has no steps, ignoring drill"
                );
                return false;
            }
            None => {
                tracing::trace!(
                    step = at.step,
                    variation = at.variation,
                    "no such variation, ignoring drill"
                );
                return false;
            }
        };

        tracing::debug!(
            variation = %name,
            depth = self.history.len() + 1,
            "drilled into variation"
        );
        self.history.push(Frame { at, name });
        true
    }

    /// Return to the previously displayed list
    ///
    /// Returns false if there is nothing to go back to.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(frame) => {
                tracing::debug!(
                    variation = %frame.name,
                    depth = self.history.len(),
                    "navigated back"
                );
                true
            }
            None => {
                tracing::trace!("history empty, ignoring back");
                false
            }
        }
    }

    /// Whether the Back control is enabled
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Number of drill-downs on the stack
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Names of the variations drilled into, outermost first
    pub fn breadcrumbs(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(|frame| frame.name.as_str())
    }
}

fn lookup(view: &[StrategyStep], at: VariationRef) -> Option<&Variation> {
    view.get(at.step)?.variations().get(at.variation)
}
