//! Grouping and ordering of recommended builds

use std::cmp::Ordering;
use std::collections::BTreeMap;

use dexplan_model::{Build, Recommendation};

/// Builds sharing one player key
#[derive(Debug, Clone, PartialEq)]
pub struct BuildGroup<'a> {
    pub key: &'a str,
    pub builds: Vec<&'a Build>,
}

/// How a `recommended` list is presented
#[derive(Debug, Clone, PartialEq)]
pub enum Recommended<'a> {
    /// Nothing recommended
    Empty,
    /// No builds at all: show the list as plain notes
    Notes(Vec<&'a str>),
    /// Builds grouped by player, groups in key order
    Grouped(Vec<BuildGroup<'a>>),
}

impl<'a> Recommended<'a> {
    /// Group builds by player (or `fallback_group`) and order each group
    ///
    /// Free-text notes are dropped once at least one build is present.
    pub fn from_list(list: &'a [Recommendation], fallback_group: &'a str) -> Self {
        if list.is_empty() {
            return Recommended::Empty;
        }

        let mut groups: BTreeMap<&'a str, Vec<&'a Build>> = BTreeMap::new();
        for build in list.iter().filter_map(Recommendation::as_build) {
            let key = build.player_key().unwrap_or(fallback_group);
            groups.entry(key).or_default().push(build);
        }

        if groups.is_empty() {
            return Recommended::Notes(list.iter().filter_map(Recommendation::as_note).collect());
        }

        Recommended::Grouped(
            groups
                .into_iter()
                .map(|(key, mut builds)| {
                    sort_builds(&mut builds);
                    BuildGroup { key, builds }
                })
                .collect(),
        )
    }

    /// Group keys in tab order (empty unless grouped)
    pub fn keys(&self) -> Vec<&'a str> {
        match self {
            Recommended::Grouped(groups) => groups.iter().map(|g| g.key).collect(),
            _ => Vec::new(),
        }
    }

    pub fn group(&self, key: &str) -> Option<&BuildGroup<'a>> {
        match self {
            Recommended::Grouped(groups) => groups.iter().find(|g| g.key == key),
            _ => None,
        }
    }
}

/// Order two builds of the same group
///
/// When both carry an `order` they compare numerically; otherwise they
/// compare by name. The rule is applied per pair, so a group mixing ordered
/// and unordered builds has no consistent total order.
pub fn compare_builds(a: &Build, b: &Build) -> Ordering {
    match (a.order, b.order) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => a.name.cmp(&b.name),
    }
}

/// Stable insertion sort with [`compare_builds`]
///
/// `slice::sort_by` may panic on a comparator that is not a total order,
/// which mixed groups are.
fn sort_builds(builds: &mut [&Build]) {
    for i in 1..builds.len() {
        let mut j = i;
        while j > 0 && compare_builds(builds[j - 1], builds[j]) == Ordering::Greater {
            builds.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Pick the group to display: an explicit choice that still exists, else
/// the first group in key order
pub fn effective_group<'a>(
    recommended: &Recommended<'a>,
    explicit: Option<&str>,
) -> Option<&'a str> {
    let keys = recommended.keys();
    explicit
        .and_then(|wanted| keys.iter().copied().find(|key| *key == wanted))
        .or_else(|| keys.first().copied())
}

/// Explicit build group choice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildGrouper {
    explicit: Option<String>,
}

impl BuildGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an explicit group choice; keys not among the groups are ignored
    pub fn select(&mut self, recommended: &Recommended<'_>, key: &str) -> bool {
        if recommended.group(key).is_none() {
            tracing::trace!(group = key, "unknown build group, ignoring selection");
            return false;
        }

        tracing::debug!(group = key, "selected build group");
        self.explicit = Some(key.to_string());
        true
    }

    pub fn explicit(&self) -> Option<&str> {
        self.explicit.as_deref()
    }

    pub fn effective<'a>(&self, recommended: &Recommended<'a>) -> Option<&'a str> {
        effective_group(recommended, self.explicit())
    }

    pub fn reset(&mut self) {
        self.explicit = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(group: &BuildGroup<'a>) -> Vec<&'a str> {
        group.builds.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(Recommended::from_list(&[], "General"), Recommended::Empty);
    }

    #[test]
    fn test_notes_only_fallback() {
        let list = vec![
            Recommendation::from("Bring Ice types"),
            Recommendation::from("Avoid Fairy types"),
        ];

        let recommended = Recommended::from_list(&list, "General");
        assert_eq!(
            recommended,
            Recommended::Notes(vec!["Bring Ice types", "Avoid Fairy types"])
        );
        assert!(recommended.keys().is_empty());
    }

    #[test]
    fn test_notes_dropped_with_builds() {
        let list = vec![
            Recommendation::from("Bring Ice types"),
            Build::new("Mamoswine").into(),
        ];

        let recommended = Recommended::from_list(&list, "General");
        assert_eq!(recommended.keys(), vec!["General"]);
        assert_eq!(names(recommended.group("General").unwrap()), vec!["Mamoswine"]);
    }

    #[test]
    fn test_grouping_by_player() {
        let list: Vec<Recommendation> = vec![
            Build::new("Gengar").with_player("player2").into(),
            Build::new("Snorlax").into(),
            Build::new("Alakazam").with_player("player1").into(),
            Build::new("Blissey").with_player("").into(),
        ];

        let recommended = Recommended::from_list(&list, "General");
        assert_eq!(recommended.keys(), vec!["General", "player1", "player2"]);
        assert_eq!(
            names(recommended.group("General").unwrap()),
            vec!["Blissey", "Snorlax"]
        );
    }

    #[test]
    fn test_order_then_name() {
        let list: Vec<Recommendation> = vec![
            Build::new("B").with_order(2.0).into(),
            Build::new("A").with_order(1.0).into(),
            Build::new("C").into(),
        ];

        let recommended = Recommended::from_list(&list, "General");
        let group = recommended.group("General").unwrap();
        assert_eq!(names(group), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_order_beats_name() {
        let list: Vec<Recommendation> = vec![
            Build::new("Alakazam").with_order(3.0).into(),
            Build::new("Zapdos").with_order(1.0).into(),
        ];

        let recommended = Recommended::from_list(&list, "General");
        assert_eq!(
            names(recommended.group("General").unwrap()),
            vec!["Zapdos", "Alakazam"]
        );
    }

    #[test]
    fn test_mixed_order_does_not_panic() {
        // Z < A by order, A < M and M < Z by name: no total order exists
        let list: Vec<Recommendation> = vec![
            Build::new("M").into(),
            Build::new("A").with_order(2.0).into(),
            Build::new("Z").with_order(1.0).into(),
        ];

        let recommended = Recommended::from_list(&list, "General");
        let group = recommended.group("General").unwrap();
        // A passes M by name, then Z stops behind M by name
        assert_eq!(names(group), vec!["A", "M", "Z"]);
    }

    #[test]
    fn test_compare_builds() {
        let a = Build::new("A").with_order(1.0);
        let b = Build::new("B").with_order(2.0);
        let c = Build::new("C");

        assert_eq!(compare_builds(&a, &b), Ordering::Less);
        assert_eq!(compare_builds(&b, &a), Ordering::Greater);
        assert_eq!(compare_builds(&c, &a), Ordering::Greater);
        assert_eq!(compare_builds(&b, &c), Ordering::Less);
    }

    #[test]
    fn test_effective_group() {
        let list: Vec<Recommendation> = vec![
            Build::new("Gengar").with_player("player2").into(),
            Build::new("Alakazam").with_player("player1").into(),
        ];
        let recommended = Recommended::from_list(&list, "General");

        assert_eq!(effective_group(&recommended, None), Some("player1"));
        assert_eq!(effective_group(&recommended, Some("player2")), Some("player2"));
        assert_eq!(effective_group(&recommended, Some("General")), Some("player1"));
        assert_eq!(effective_group(&Recommended::Empty, Some("player1")), None);
    }

    #[test]
    fn test_grouper_select() {
        let list: Vec<Recommendation> = vec![
            Build::new("Gengar").with_player("player2").into(),
            Build::new("Alakazam").with_player("player1").into(),
        ];
        let recommended = Recommended::from_list(&list, "General");
        let mut grouper = BuildGrouper::new();

        assert!(!grouper.select(&recommended, "player3"));
        assert_eq!(grouper.effective(&recommended), Some("player1"));

        assert!(grouper.select(&recommended, "player2"));
        assert_eq!(grouper.effective(&recommended), Some("player2"));

        grouper.reset();
        assert_eq!(grouper.explicit(), None);
        assert_eq!(grouper.effective(&recommended), Some("player1"));
    }

    #[test]
    fn test_groups_loosely_written_builds() {
        let json = r#"[
            {"player": "player1", "item": "Leftovers"},
            {"name": "Weavile", "player": "player1", "order": "1"},
            {"name": "Mamoswine", "player": "player1", "order": 2}
        ]"#;
        let list: Vec<Recommendation> = serde_json::from_str(json).unwrap();

        let recommended = Recommended::from_list(&list, "General");
        assert_eq!(recommended.keys(), vec!["player1"]);
        // The unnamed build has no order, so it compares by name against both
        assert_eq!(
            names(recommended.group("player1").unwrap()),
            vec!["", "Weavile", "Mamoswine"]
        );
    }
}
