//! Role tabs and turn paging

use std::cmp::Ordering;

use dexplan_model::{RoleTable, TurnEntry};

/// Numeric value of a role key: its ASCII digits read as one number
///
/// Digits are kept as text with leading zeros stripped, so runs of any
/// length compare by value. A key without digits is 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleNumber(String);

impl RoleNumber {
    /// Significant digits ("" for zero)
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// Value as a u64, if it fits
    pub fn to_u64(&self) -> Option<u64> {
        if self.0.is_empty() {
            return Some(0);
        }
        self.0.parse().ok()
    }
}

impl Ord for RoleNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for RoleNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `"player10"` is 10, `"p1x2"` is 12 and `"leader"` is 0
pub fn role_number(key: &str) -> RoleNumber {
    let digits: String = key
        .chars()
        .filter(char::is_ascii_digit)
        .skip_while(|c| *c == '0')
        .collect();
    RoleNumber(digits)
}

/// Role keys in tab order: by [`role_number`], then by the full key
pub fn role_options(roles: &RoleTable) -> Vec<&str> {
    let mut keys: Vec<&str> = roles.keys().collect();
    keys.sort_by_cached_key(|key| (role_number(key), *key));
    keys
}

/// Pick the role to display
///
/// An explicit choice wins while it still exists in `roles`; otherwise
/// `default_role` if present, then the first key in source order, then "".
pub fn effective_role<'a>(
    roles: Option<&'a RoleTable>,
    explicit: Option<&str>,
    default_role: &str,
) -> &'a str {
    let Some(roles) = roles else {
        return "";
    };

    explicit
        .and_then(|wanted| roles.keys().find(|key| *key == wanted))
        .or_else(|| roles.keys().find(|key| *key == default_role))
        .or_else(|| roles.keys().next())
        .unwrap_or("")
}

/// Position within a role's turn list
///
/// The index never leaves `0..len` and never wraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnPager {
    index: usize,
}

impl TurnPager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current index, clamped to a list of `len` turns
    pub fn index(&self, len: usize) -> usize {
        self.index.min(len.saturating_sub(1))
    }

    /// Jump to a turn, clamping past-the-end values to the last turn
    pub fn set(&mut self, index: usize, len: usize) {
        self.index = index.min(len.saturating_sub(1));
    }

    /// Advance one turn; returns false at the last turn
    pub fn next(&mut self, len: usize) -> bool {
        if self.can_next(len) {
            self.index = self.index(len) + 1;
            true
        } else {
            false
        }
    }

    /// Go back one turn; returns false at the first turn
    pub fn previous(&mut self, len: usize) -> bool {
        if self.can_previous(len) {
            self.index = self.index(len) - 1;
            true
        } else {
            false
        }
    }

    pub fn can_next(&self, len: usize) -> bool {
        self.index(len) + 1 < len
    }

    pub fn can_previous(&self, len: usize) -> bool {
        self.index(len) > 0
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn current<'a>(&self, turns: &'a [TurnEntry]) -> Option<&'a TurnEntry> {
        turns.get(self.index(turns.len()))
    }
}

/// Explicit role choice plus the turn pager for the displayed role
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleResolver {
    explicit: Option<String>,
    pager: TurnPager,
}

impl RoleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an explicit role choice and rewind to the first turn
    ///
    /// Keys missing from `roles` are ignored.
    pub fn select(&mut self, roles: Option<&RoleTable>, key: &str) -> bool {
        if !roles.is_some_and(|roles| roles.contains_key(key)) {
            tracing::trace!(role = key, "unknown role, ignoring selection");
            return false;
        }

        tracing::debug!(role = key, "selected role");
        self.explicit = Some(key.to_string());
        self.pager.reset();
        true
    }

    pub fn explicit(&self) -> Option<&str> {
        self.explicit.as_deref()
    }

    pub fn effective<'a>(&self, roles: Option<&'a RoleTable>, default_role: &str) -> &'a str {
        effective_role(roles, self.explicit(), default_role)
    }

    /// Turn list of the displayed role
    pub fn turns<'a>(&self, roles: Option<&'a RoleTable>, default_role: &str) -> &'a [TurnEntry] {
        let role = self.effective(roles, default_role);
        roles.and_then(|roles| roles.get(role)).unwrap_or_default()
    }

    pub fn pager(&self) -> &TurnPager {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut TurnPager {
        &mut self.pager
    }

    /// Forget the explicit role and rewind to the first turn
    pub fn reset(&mut self) {
        self.explicit = None;
        self.pager.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(keys: &[&str]) -> RoleTable {
        keys.iter()
            .map(|key| (*key, vec![TurnEntry::from(format!("{} turn", key).as_str())]))
            .collect()
    }

    #[test]
    fn test_role_number() {
        assert_eq!(role_number("player1").to_u64(), Some(1));
        assert_eq!(role_number("player10").to_u64(), Some(10));
        assert_eq!(role_number("p1x2").to_u64(), Some(12));
        assert_eq!(role_number("player007").to_u64(), Some(7));
        assert_eq!(role_number("leader").to_u64(), Some(0));
        assert_eq!(role_number("").to_u64(), Some(0));
        assert_eq!(role_number("player000"), role_number("leader"));
        assert_eq!(role_number("player99999999999999999999999").to_u64(), None);
    }

    #[test]
    fn test_role_number_beyond_u64() {
        let three = role_number("p30000000000000000000");
        let two_hundred = role_number("p200000000000000000000");
        assert!(three < two_hundred);
        assert!(role_number("player9") < role_number("player0010"));
    }

    #[test]
    fn test_role_options_numeric_order() {
        let roles = table(&["player2", "player1", "player10"]);
        assert_eq!(role_options(&roles), vec!["player1", "player2", "player10"]);
    }

    #[test]
    fn test_role_options_long_digit_runs() {
        let roles = table(&["p200000000000000000000", "p30000000000000000000", "p4"]);
        assert_eq!(
            role_options(&roles),
            vec!["p4", "p30000000000000000000", "p200000000000000000000"]
        );
    }

    #[test]
    fn test_role_options_tie_break() {
        let roles = table(&["tank2", "player2", "leader", "support"]);
        // Non-numeric keys share value 0 and sort by name
        assert_eq!(
            role_options(&roles),
            vec!["leader", "support", "player2", "tank2"]
        );
    }

    #[test]
    fn test_effective_role_prefers_player1() {
        let roles = table(&["alpha", "player2", "player1"]);
        assert_eq!(effective_role(Some(&roles), None, "player1"), "player1");
    }

    #[test]
    fn test_effective_role_explicit() {
        let roles = table(&["player1", "player2"]);
        assert_eq!(
            effective_role(Some(&roles), Some("player2"), "player1"),
            "player2"
        );
    }

    #[test]
    fn test_effective_role_stale_explicit() {
        let roles = table(&["player1", "player2"]);
        assert_eq!(
            effective_role(Some(&roles), Some("player3"), "player1"),
            "player1"
        );
    }

    #[test]
    fn test_effective_role_first_in_source_order() {
        let roles = table(&["zeta", "alpha"]);
        assert_eq!(effective_role(Some(&roles), None, "player1"), "zeta");
    }

    #[test]
    fn test_effective_role_empty() {
        assert_eq!(effective_role(None, Some("player1"), "player1"), "");
        assert_eq!(effective_role(Some(&RoleTable::new()), None, "player1"), "");
    }

    #[test]
    fn test_pager_clamps() {
        let mut pager = TurnPager::new();

        assert!(!pager.previous(3));
        assert_eq!(pager.index(3), 0);

        assert!(pager.next(3));
        assert!(pager.next(3));
        assert!(!pager.next(3));
        assert_eq!(pager.index(3), 2);

        assert!(pager.previous(3));
        assert_eq!(pager.index(3), 1);
    }

    #[test]
    fn test_pager_set() {
        let mut pager = TurnPager::new();
        pager.set(1, 3);
        assert_eq!(pager.index(3), 1);

        pager.set(10, 3);
        assert_eq!(pager.index(3), 2);

        pager.set(4, 0);
        assert_eq!(pager.index(0), 0);
        assert!(!pager.can_next(0));
        assert!(!pager.can_previous(0));
    }

    #[test]
    fn test_pager_current() {
        let turns = vec![TurnEntry::from("Use Protect"), TurnEntry::from("Use Dragon Claw")];
        let mut pager = TurnPager::new();
        assert_eq!(pager.current(&turns).and_then(|t| t.text()), Some("Use Protect"));

        pager.next(turns.len());
        assert_eq!(pager.current(&turns).and_then(|t| t.text()), Some("Use Dragon Claw"));
        assert!(pager.current(&[]).is_none());
    }

    #[test]
    fn test_resolver_select_resets_turn() {
        let roles = table(&["player1", "player2"]);
        let mut resolver = RoleResolver::new();
        resolver.pager_mut().set(1, 2);

        assert!(resolver.select(Some(&roles), "player2"));
        assert_eq!(resolver.effective(Some(&roles), "player1"), "player2");
        assert_eq!(resolver.pager().index(1), 0);
    }

    #[test]
    fn test_resolver_select_unknown_ignored() {
        let roles = table(&["player1"]);
        let mut resolver = RoleResolver::new();

        assert!(!resolver.select(Some(&roles), "player9"));
        assert!(!resolver.select(None, "player1"));
        assert_eq!(resolver.explicit(), None);
    }

    #[test]
    fn test_resolver_turns() {
        let roles = table(&["player2", "player1"]);
        let resolver = RoleResolver::new();

        let turns = resolver.turns(Some(&roles), "player1");
        assert_eq!(turns[0].text(), Some("player1 turn"));
        assert!(resolver.turns(None, "player1").is_empty());
    }
}
