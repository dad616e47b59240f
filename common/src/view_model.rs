//! Display strings for the search header, derived from explorer state.
//!
//! Everything here is pure and recomputed on every render.

use crate::definitions::DefinitionSet;
use crate::explorer_state::{AppliedFilters, ExplorerState};
use crate::filter_catalog::{FilterCatalog, FilterDefinition, FilterValue};
use crate::languages::LanguageOption;
use crate::search_const::{APP_TITLE, FILTER_VALUE_SEPARATOR, TITLE_EASTER_EGG_TOKEN};

pub fn placeholder_text(definitions_loaded: bool, search_index_ready: bool) -> &'static str {
    if !definitions_loaded {
        return "Loading data...";
    }
    if search_index_ready { "Search by item name or hash" } else { "Loading search..." }
}

pub fn title_suffix(clicks: u32) -> String {
    TITLE_EASTER_EGG_TOKEN.repeat(clicks as usize)
}

/// Click counter behind the header title. A fresh one is made per mount.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TitleClicks(u32);

impl TitleClicks {
    pub fn click(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn title(&self) -> String {
        format!("{}{}", APP_TITLE, title_suffix(self.0))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppliedFilterChip {
    pub key: String,
    pub label: String,
    pub values_text: String,
    /// Values with no label in the current definitions.
    pub unresolved_values: Vec<FilterValue>,
}

impl AppliedFilterChip {
    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.values_text)
    }
}

pub fn unknown_value_label(value: FilterValue) -> String {
    format!("Unknown ({})", value)
}

/// One chip per active filter with a catalog entry, in insertion order.
/// Filters the catalog does not know are skipped.
pub fn applied_filter_chips(
    filters: &AppliedFilters,
    catalog: &FilterCatalog,
    definitions: Option<&DefinitionSet>,
) -> Vec<AppliedFilterChip> {
    let empty = DefinitionSet::default();
    let definitions = definitions.unwrap_or(&empty);

    filters
        .active()
        .filter_map(|(key, selection)| {
            let filter_def = catalog.lookup(key)?;
            let selectable = (filter_def.data)(definitions);
            let mut unresolved_values = Vec::new();
            let texts = selection
                .values()
                .into_iter()
                .map(|value| match FilterDefinition::label_in(&selectable, filter_def.id, value) {
                    Ok(label) => label,
                    Err(_) => {
                        unresolved_values.push(value);
                        unknown_value_label(value)
                    }
                })
                .collect::<Vec<_>>();
            Some(AppliedFilterChip {
                key: key.to_string(),
                label: filter_def.label.to_string(),
                values_text: texts.join(FILTER_VALUE_SEPARATOR),
                unresolved_values,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSelectorOption {
    pub identifier: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSelectorModel {
    pub options: Vec<LanguageSelectorOption>,
    pub active_language: String,
    /// False when the active identifier is missing from the options.
    pub active_is_listed: bool,
}

pub fn language_selector(languages: &[LanguageOption], active_language: &str) -> LanguageSelectorModel {
    let options = languages
        .iter()
        .map(|lang| LanguageSelectorOption {
            identifier: lang.identifier.clone(),
            label: lang.option_label(),
            selected: lang.identifier == active_language,
        })
        .collect::<Vec<_>>();
    let active_is_listed = options.iter().any(|o| o.selected);
    LanguageSelectorModel { options, active_language: active_language.to_string(), active_is_listed }
}

/// Read-only inputs of the header for one render.
#[derive(Debug, Clone, Copy)]
pub struct SearchHeaderSnapshot<'a> {
    pub state: &'a ExplorerState,
    pub definitions: Option<&'a DefinitionSet>,
    pub search_index_ready: bool,
    pub languages: &'a [LanguageOption],
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHeaderViewModel {
    pub placeholder_text: &'static str,
    pub search_disabled: bool,
    pub search_string: String,
    pub chips: Vec<AppliedFilterChip>,
    pub language_selector: LanguageSelectorModel,
    pub filter_drawer_visible: bool,
}

impl SearchHeaderViewModel {
    pub fn derive(snapshot: SearchHeaderSnapshot<'_>, catalog: &FilterCatalog) -> Self {
        let definitions_loaded = snapshot.definitions.is_some();
        Self {
            placeholder_text: placeholder_text(definitions_loaded, snapshot.search_index_ready),
            search_disabled: !definitions_loaded,
            search_string: snapshot.state.query.search_string.clone(),
            chips: applied_filter_chips(&snapshot.state.query.filters, catalog, snapshot.definitions),
            language_selector: language_selector(snapshot.languages, &snapshot.state.active_language),
            filter_drawer_visible: snapshot.state.filter_drawer_visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::ItemCategoryDefinition;
    use crate::explorer_state::FilterSelection;
    use crate::filter_catalog::standard_catalog;

    fn defs() -> DefinitionSet {
        let mut defs = DefinitionSet::default();
        defs.item_categories.insert(1, ItemCategoryDefinition { hash: 1, name: "Weapon".into() });
        defs.item_categories.insert(20, ItemCategoryDefinition { hash: 20, name: "Armor".into() });
        defs
    }

    #[test]
    fn placeholder_precedence() {
        assert_eq!(placeholder_text(false, false), "Loading data...");
        assert_eq!(placeholder_text(false, true), "Loading data...");
        assert_eq!(placeholder_text(true, false), "Loading search...");
        assert_eq!(placeholder_text(true, true), "Search by item name or hash");
    }

    #[test]
    fn title_clicks_accumulate_and_start_over_when_remounted() {
        let mut clicks = TitleClicks::default();
        assert_eq!(clicks.title(), "Data Explorer");
        clicks.click();
        clicks.click();
        assert_eq!(clicks.title(), "Data Explorererer");
        clicks.click();
        assert_eq!(clicks.title(), "Data Explorerererer");
        let remounted = TitleClicks::default();
        assert_eq!(remounted.title(), "Data Explorer");
    }

    #[test]
    fn title_suffix_grows_per_click() {
        assert_eq!(title_suffix(0), "");
        assert_eq!(title_suffix(3), "ererer");
    }

    #[test]
    fn unknown_and_cleared_filters_are_omitted() {
        let mut filters = AppliedFilters::default();
        filters.set("tierType", Some(FilterSelection::One(FilterValue(6))));
        filters.set("classType", None);
        filters.set("notAFilter", Some(FilterSelection::One(FilterValue(1))));
        let chips = applied_filter_chips(&filters, standard_catalog(), Some(&defs()));
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].key, "tierType");
        assert_eq!(chips[0].text(), "Rarity: Exotic");
    }

    #[test]
    fn single_value_and_one_element_list_render_the_same() {
        let mut single = AppliedFilters::default();
        single.set("itemCategory", Some(FilterSelection::One(FilterValue(20))));
        let mut list = AppliedFilters::default();
        list.set("itemCategory", Some(FilterSelection::Many(vec![FilterValue(20)])));
        let a = applied_filter_chips(&single, standard_catalog(), Some(&defs()));
        let b = applied_filter_chips(&list, standard_catalog(), Some(&defs()));
        assert_eq!(a, b);
        assert_eq!(a[0].values_text, "Armor");
    }

    #[test]
    fn multiple_values_are_joined_in_order() {
        let mut filters = AppliedFilters::default();
        filters.set("itemCategory", Some(FilterSelection::Many(vec![FilterValue(20), FilterValue(1)])));
        filters.set("tierType", Some(FilterSelection::One(FilterValue(5))));
        let chips = applied_filter_chips(&filters, standard_catalog(), Some(&defs()));
        assert_eq!(chips[0].text(), "Item category: Armor & Weapon");
        assert_eq!(chips[1].text(), "Rarity: Legendary");
    }

    #[test]
    fn unresolved_values_get_fallback_label() {
        let mut filters = AppliedFilters::default();
        filters.set("itemCategory", Some(FilterSelection::Many(vec![FilterValue(1), FilterValue(99)])));
        let chips = applied_filter_chips(&filters, standard_catalog(), Some(&defs()));
        assert_eq!(chips[0].values_text, "Weapon & Unknown (99)");
        assert_eq!(chips[0].unresolved_values, vec![FilterValue(99)]);
    }

    #[test]
    fn chips_without_definitions_still_resolve_static_filters() {
        let mut filters = AppliedFilters::default();
        filters.set("classType", Some(FilterSelection::One(FilterValue(1))));
        filters.set("itemCategory", Some(FilterSelection::One(FilterValue(1))));
        let chips = applied_filter_chips(&filters, standard_catalog(), None);
        assert_eq!(chips[0].text(), "Class: Hunter");
        assert_eq!(chips[1].text(), "Item category: Unknown (1)");
    }

    #[test]
    fn unlisted_active_language_is_kept() {
        let langs = vec![LanguageOption::new("en", "English"), LanguageOption::new("de", "Deutsch")];
        let model = language_selector(&langs, "de");
        assert!(model.active_is_listed);
        assert_eq!(model.options[1].label, "Deutsch (de)");
        assert!(model.options[1].selected);

        let model = language_selector(&langs, "ko");
        assert!(!model.active_is_listed);
        assert_eq!(model.active_language, "ko");
        assert!(model.options.iter().all(|o| !o.selected));
    }

    #[test]
    fn header_view_model_before_definitions_load() {
        let mut state = ExplorerState::new("en");
        state.apply(crate::explorer_state::ExplorerAction::SearchChanged("gjal".into()));
        let snapshot = SearchHeaderSnapshot { state: &state, definitions: None, search_index_ready: true, languages: &[] };
        let vm = SearchHeaderViewModel::derive(snapshot, standard_catalog());
        assert!(vm.search_disabled);
        assert_eq!(vm.placeholder_text, "Loading data...");
        assert_eq!(vm.search_string, "gjal");
        assert!(vm.language_selector.options.is_empty());
    }

    #[test]
    fn header_view_model_when_ready() {
        let state = ExplorerState::new("en");
        let defs = defs();
        let langs = vec![LanguageOption::new("en", "English")];
        let snapshot = SearchHeaderSnapshot { state: &state, definitions: Some(&defs), search_index_ready: true, languages: &langs };
        let vm = SearchHeaderViewModel::derive(snapshot, standard_catalog());
        assert!(!vm.search_disabled);
        assert_eq!(vm.placeholder_text, "Search by item name or hash");
        assert!(vm.chips.is_empty());
        assert!(vm.language_selector.active_is_listed);
    }
}
