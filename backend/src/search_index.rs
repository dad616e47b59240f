//! Name/hash index over item definitions.

use common::definitions::{DefinitionHash, DefinitionSet, ItemDefinition};
use common::explorer_state::ExplorerQuery;
use common::filter_catalog::FilterCatalog;

struct IndexEntry {
    hash: DefinitionHash,
    name_lower: String,
}

pub struct SearchIndex {
    // sorted by name, then hash
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    /// Items without a name are not searchable.
    pub fn build(definitions: &DefinitionSet) -> Self {
        let mut entries = definitions
            .items
            .values()
            .filter(|item| !item.name.trim().is_empty())
            .map(|item| IndexEntry { hash: item.hash, name_lower: item.name.to_lowercase() })
            .collect::<Vec<_>>();
        entries.sort_by(|a, b| a.name_lower.cmp(&b.name_lower).then(a.hash.cmp(&b.hash)));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Items matching the search string (name substring, or exact hash)
    /// and every active filter. An exact hash match comes first.
    ///
    /// Within one filter the selected values are alternatives; across
    /// filters all must hold. Filters missing from the catalog are ignored.
    pub fn search<'d>(&self, definitions: &'d DefinitionSet, query: &ExplorerQuery, catalog: &FilterCatalog) -> Vec<&'d ItemDefinition> {
        if query.is_blank() {
            return Vec::new();
        }
        let needle = query.search_string.trim().to_lowercase();
        let hash_needle = needle.parse::<DefinitionHash>().ok();
        let filters = query
            .filters
            .active()
            .filter_map(|(key, selection)| catalog.lookup(key).map(|def| (def, selection.values())))
            .collect::<Vec<_>>();

        let passes_filters = |item: &ItemDefinition| {
            filters.iter().all(|(def, values)| values.iter().any(|v| (def.matches)(item, *v)))
        };

        let mut results = Vec::new();
        let mut hash_hit = None;
        for entry in &self.entries {
            let is_hash_hit = hash_needle == Some(entry.hash);
            if !is_hash_hit && !entry.name_lower.contains(&needle) {
                continue;
            }
            let Some(item) = definitions.items.get(&entry.hash) else { continue };
            if !passes_filters(item) {
                continue;
            }
            if is_hash_hit {
                hash_hit = Some(item);
            } else {
                results.push(item);
            }
        }
        if let Some(item) = hash_hit {
            results.insert(0, item);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::explorer_state::FilterSelection;
    use common::filter_catalog::{FilterValue, standard_catalog};

    fn item(hash: u32, name: &str, tier: u32, categories: Vec<u32>) -> ItemDefinition {
        ItemDefinition { hash, name: name.into(), tier_type: tier, item_category_hashes: categories, ..Default::default() }
    }

    fn defs() -> DefinitionSet {
        let mut defs = DefinitionSet::default();
        for it in [
            item(1363886209, "Gjallarhorn", 6, vec![1]),
            item(2, "Hawkmoon", 6, vec![1]),
            item(3, "Horn of Plenty", 5, vec![1]),
            item(4, "", 5, vec![1]),
            item(5, "Hornet Shell", 5, vec![20]),
        ] {
            defs.items.insert(it.hash, it);
        }
        defs
    }

    fn names(items: Vec<&ItemDefinition>) -> Vec<String> {
        items.into_iter().map(|i| i.name.clone()).collect()
    }

    fn query(s: &str) -> ExplorerQuery {
        ExplorerQuery { search_string: s.into(), ..Default::default() }
    }

    #[test]
    fn unnamed_items_are_not_indexed() {
        assert_eq!(SearchIndex::build(&defs()).len(), 4);
    }

    #[test]
    fn name_match_is_case_insensitive_and_sorted() {
        let defs = defs();
        let index = SearchIndex::build(&defs);
        let found = index.search(&defs, &query("HORN"), standard_catalog());
        assert_eq!(names(found), vec!["Gjallarhorn", "Horn of Plenty", "Hornet Shell"]);
    }

    #[test]
    fn exact_hash_comes_first() {
        let mut defs = defs();
        defs.items.insert(11, item(11, "Relic 2", 3, vec![]));
        let index = SearchIndex::build(&defs);
        let found = index.search(&defs, &query("2"), standard_catalog());
        assert_eq!(names(found), vec!["Hawkmoon", "Relic 2"]);
        let found = index.search(&defs, &query(" 1363886209 "), standard_catalog());
        assert_eq!(names(found), vec!["Gjallarhorn"]);
    }

    #[test]
    fn filters_narrow_and_combine() {
        let defs = defs();
        let index = SearchIndex::build(&defs);
        let mut q = query("horn");
        q.filters.set("tierType", Some(FilterSelection::One(FilterValue(5))));
        assert_eq!(names(index.search(&defs, &q, standard_catalog())), vec!["Horn of Plenty", "Hornet Shell"]);
        q.filters.set("itemCategory", Some(FilterSelection::Many(vec![FilterValue(20), FilterValue(99)])));
        assert_eq!(names(index.search(&defs, &q, standard_catalog())), vec!["Hornet Shell"]);
    }

    #[test]
    fn filters_alone_search_everything_and_unknown_filters_are_ignored() {
        let defs = defs();
        let index = SearchIndex::build(&defs);
        let mut q = query("");
        q.filters.set("tierType", Some(FilterSelection::One(FilterValue(6))));
        q.filters.set("bogus", Some(FilterSelection::One(FilterValue(1))));
        assert_eq!(names(index.search(&defs, &q, standard_catalog())), vec!["Gjallarhorn", "Hawkmoon"]);
    }

    #[test]
    fn blank_query_returns_nothing() {
        let defs = defs();
        let index = SearchIndex::build(&defs);
        assert!(index.search(&defs, &query("  "), standard_catalog()).is_empty());
    }
}
