//! Session configuration

/// Defaults used when a session resolves roles and build groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Role picked when no explicit choice is active (if the strategy has it)
    pub default_role: String,

    /// Group for builds that do not name a player
    pub fallback_group: String,

    /// Validate the target's strategy data when a session opens and log
    /// any problem found
    pub validate_on_open: bool,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self {
            default_role: "player1".to_string(),
            fallback_group: "General".to_string(),
            validate_on_open: true,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
