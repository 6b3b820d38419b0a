//! Choice between a boss's alternative strategies

use dexplan_model::TeamStrategy;

/// Index of the active top-level strategy
///
/// The selector only tracks the index; the owning session clears the role,
/// turn and build group in the same call that changes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrategyVariantSelector {
    active: usize,
}

impl StrategyVariantSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Switch to `index` out of `count` variants
    ///
    /// Returns true only if the active variant actually changed.
    pub fn select(&mut self, index: usize, count: usize) -> bool {
        if index >= count {
            tracing::trace!(index, count, "no such strategy variant, ignoring selection");
            return false;
        }
        if index == self.active {
            return false;
        }

        tracing::debug!(from = self.active, to = index, "switched strategy variant");
        self.active = index;
        true
    }

    pub fn reset(&mut self) {
        self.active = 0;
    }
}

/// Tab labels for a strategy list ("Version N" when unlabeled)
pub fn variant_labels(strategies: &[TeamStrategy]) -> Vec<String> {
    strategies
        .iter()
        .enumerate()
        .map(|(index, strategy)| strategy.display_label(index))
        .collect()
}
