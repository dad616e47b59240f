//! Explorer store state and the actions the search header dispatches.

use serde::{Deserialize, Deserializer, Serialize};

use crate::filter_catalog::FilterValue;

/// Value of an applied filter: one selected value or several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterSelection {
    One(FilterValue),
    Many(Vec<FilterValue>),
}

impl FilterSelection {
    /// Selected values in order; a single value becomes a one-element list.
    pub fn values(&self) -> Vec<FilterValue> {
        match self {
            Self::One(v) => vec![*v],
            Self::Many(vs) => vs.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Many(vs) if vs.is_empty())
    }

    pub fn contains(&self, value: FilterValue) -> bool {
        match self {
            Self::One(v) => *v == value,
            Self::Many(vs) => vs.contains(&value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedFilter {
    pub key: String,
    /// `None` once the filter has been cleared.
    pub value: Option<FilterSelection>,
}

/// Filter mapping that keeps insertion order. Clearing a filter keeps its
/// slot, so re-applying it does not move its chip. Keys are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(transparent)]
pub struct AppliedFilters {
    entries: Vec<AppliedFilter>,
}

// A repeated key keeps its first position and its last value.
impl FromIterator<AppliedFilter> for AppliedFilters {
    fn from_iter<I: IntoIterator<Item = AppliedFilter>>(iter: I) -> Self {
        let mut filters = Self::default();
        for entry in iter {
            filters.set(&entry.key, entry.value);
        }
        filters
    }
}

impl<'de> Deserialize<'de> for AppliedFilters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<AppliedFilter>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

impl AppliedFilters {
    pub fn set(&mut self, key: &str, value: Option<FilterSelection>) {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.value = value,
            None => self.entries.push(AppliedFilter { key: key.to_string(), value }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FilterSelection> {
        self.entries.iter().find(|e| e.key == key).and_then(|e| e.value.as_ref())
    }

    pub fn entries(&self) -> &[AppliedFilter] {
        &self.entries
    }

    /// Filters holding at least one value, in insertion order.
    pub fn active(&self) -> impl Iterator<Item = (&str, &FilterSelection)> {
        self.entries.iter().filter_map(|e| match &e.value {
            Some(v) if !v.is_empty() => Some((e.key.as_str(), v)),
            _ => None,
        })
    }

    pub fn has_active(&self) -> bool {
        self.active().next().is_some()
    }

    /// Add `value` to the filter if absent, remove it otherwise.
    pub fn toggle_value(&mut self, key: &str, value: FilterValue) {
        let mut values = self.get(key).map(|s| s.values()).unwrap_or_default();
        if let Some(pos) = values.iter().position(|v| *v == value) {
            values.remove(pos);
        } else {
            values.push(value);
        }
        let selection = if values.is_empty() { None } else { Some(FilterSelection::Many(values)) };
        self.set(key, selection);
    }
}

/// The part of the explorer state that describes a search. Mirrored into
/// the URL and sent to the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExplorerQuery {
    pub search_string: String,
    pub filters: AppliedFilters,
}

impl ExplorerQuery {
    pub fn is_blank(&self) -> bool {
        self.search_string.trim().is_empty() && !self.filters.has_active()
    }
}

/// Queries pushed into the URL that the router has not reported back yet.
/// A reported URL matching one of them is an echo of our own write, not a
/// navigation, and must not overwrite newer input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PendingQueryWrites {
    pending: Vec<ExplorerQuery>,
}

impl PendingQueryWrites {
    pub fn record(&mut self, query: ExplorerQuery) {
        self.pending.push(query);
    }

    /// Consume `query` and every older write if it is one of ours.
    /// Anything else is an outside navigation and forgets all pending writes.
    pub fn take_echo(&mut self, query: &ExplorerQuery) -> bool {
        match self.pending.iter().position(|q| q == query) {
            Some(pos) => {
                self.pending.drain(..=pos);
                true
            }
            None => {
                self.pending.clear();
                false
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExplorerState {
    pub query: ExplorerQuery,
    pub active_language: String,
    pub filter_drawer_visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerAction {
    SearchChanged(String),
    FilterCleared(String),
    FilterSet { key: String, value: FilterSelection },
    FilterValueToggled { key: String, value: FilterValue },
    ActiveLanguageSelected(String),
    FilterDrawerToggled,
    QueryReplaced(ExplorerQuery),
}

impl ExplorerState {
    pub fn new(active_language: impl Into<String>) -> Self {
        Self { active_language: active_language.into(), ..Default::default() }
    }

    pub fn apply(&mut self, action: ExplorerAction) {
        match action {
            ExplorerAction::SearchChanged(s) => self.query.search_string = s,
            ExplorerAction::FilterCleared(key) => self.query.filters.set(&key, None),
            ExplorerAction::FilterSet { key, value } => self.query.filters.set(&key, Some(value)),
            ExplorerAction::FilterValueToggled { key, value } => self.query.filters.toggle_value(&key, value),
            ExplorerAction::ActiveLanguageSelected(lang) => self.active_language = lang,
            ExplorerAction::FilterDrawerToggled => self.filter_drawer_visible = !self.filter_drawer_visible,
            ExplorerAction::QueryReplaced(query) => self.query = query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_change_is_passed_through() {
        let mut state = ExplorerState::new("en");
        state.apply(ExplorerAction::SearchChanged("  Gjallar ".into()));
        assert_eq!(state.query.search_string, "  Gjallar ");
    }

    #[test]
    fn clearing_keeps_slot_and_order() {
        let mut filters = AppliedFilters::default();
        filters.set("a", Some(FilterSelection::One(FilterValue(1))));
        filters.set("b", Some(FilterSelection::One(FilterValue(2))));
        filters.set("a", None);
        assert!(filters.get("a").is_none());
        filters.set("a", Some(FilterSelection::One(FilterValue(3))));
        let keys: Vec<_> = filters.active().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn empty_many_selection_is_not_active() {
        let mut filters = AppliedFilters::default();
        filters.set("a", Some(FilterSelection::Many(vec![])));
        assert!(!filters.has_active());
    }

    #[test]
    fn toggle_adds_then_removes_then_clears() {
        let mut state = ExplorerState::default();
        let toggle = |v| ExplorerAction::FilterValueToggled { key: "tierType".into(), value: FilterValue(v) };
        state.apply(toggle(5));
        state.apply(toggle(6));
        assert_eq!(state.query.filters.get("tierType"), Some(&FilterSelection::Many(vec![FilterValue(5), FilterValue(6)])));
        state.apply(toggle(5));
        state.apply(toggle(6));
        assert_eq!(state.query.filters.get("tierType"), None);
        assert_eq!(state.query.filters.entries().len(), 1);
    }

    #[test]
    fn toggle_extends_single_value() {
        let mut filters = AppliedFilters::default();
        filters.set("k", Some(FilterSelection::One(FilterValue(1))));
        filters.toggle_value("k", FilterValue(2));
        assert_eq!(filters.get("k").map(|s| s.values()), Some(vec![FilterValue(1), FilterValue(2)]));
    }

    #[test]
    fn drawer_and_language_actions() {
        let mut state = ExplorerState::new("en");
        state.apply(ExplorerAction::FilterDrawerToggled);
        assert!(state.filter_drawer_visible);
        state.apply(ExplorerAction::FilterDrawerToggled);
        assert!(!state.filter_drawer_visible);
        state.apply(ExplorerAction::ActiveLanguageSelected("xx".into()));
        assert_eq!(state.active_language, "xx");
    }

    #[test]
    fn blank_query() {
        let mut query = ExplorerQuery::default();
        assert!(query.is_blank());
        query.search_string = "   ".into();
        assert!(query.is_blank());
        query.filters.set("tierType", Some(FilterSelection::One(FilterValue(6))));
        assert!(!query.is_blank());
    }

    #[test]
    fn repeated_key_from_url_collapses_to_one_removable_filter() {
        let json = r#"[{"key":"tierType","value":6},{"key":"classType","value":1},{"key":"tierType","value":5}]"#;
        let filters: AppliedFilters = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = filters.active().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["tierType", "classType"]);
        assert_eq!(filters.get("tierType"), Some(&FilterSelection::One(FilterValue(5))));

        let mut state = ExplorerState::new("en");
        state.apply(ExplorerAction::QueryReplaced(ExplorerQuery { search_string: String::new(), filters }));
        state.apply(ExplorerAction::FilterCleared("tierType".into()));
        assert!(state.query.filters.get("tierType").is_none());
        let keys: Vec<_> = state.query.filters.active().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["classType"]);
    }

    #[test]
    fn stale_url_echo_is_recognized() {
        let query = |s: &str| ExplorerQuery { search_string: s.into(), ..Default::default() };
        let mut writes = PendingQueryWrites::default();
        writes.record(query("ab"));
        writes.record(query("abc"));
        // router catches up one write at a time
        assert!(writes.take_echo(&query("ab")));
        assert!(writes.take_echo(&query("abc")));
        // back button to something we never wrote
        assert!(!writes.take_echo(&query("a")));
    }

    #[test]
    fn outside_navigation_drops_pending_writes() {
        let query = |s: &str| ExplorerQuery { search_string: s.into(), ..Default::default() };
        let mut writes = PendingQueryWrites::default();
        writes.record(query("ab"));
        assert!(!writes.take_echo(&query("shared link")));
        assert!(!writes.take_echo(&query("ab")));
    }

    #[test]
    fn selection_json_shape() {
        let one: FilterSelection = serde_json::from_str("6").unwrap();
        let many: FilterSelection = serde_json::from_str("[5, 6]").unwrap();
        assert_eq!(one, FilterSelection::One(FilterValue(6)));
        assert_eq!(many.values(), vec![FilterValue(5), FilterValue(6)]);
    }
}
