//! Registry of the filters a search can be narrowed by.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::definitions::{DefinitionSet, ItemDefinition};

/// A selected filter value. Every catalog filter keys on a numeric
/// code or definition hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterValue(pub u64);

impl std::fmt::Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectableValue {
    pub value: FilterValue,
    pub label: String,
}

impl SelectableValue {
    pub fn new(value: u64, label: impl Into<String>) -> Self {
        Self { value: FilterValue(value), label: label.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LabelLookupError {
    UnknownValue { filter_id: String, value: FilterValue },
}

impl std::fmt::Display for LabelLookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownValue { filter_id, value } => {
                write!(f, "Filter {} has no value {}", filter_id, value)
            }
        }
    }
}

impl std::error::Error for LabelLookupError {}

#[derive(Debug, Clone, Copy)]
pub struct FilterDefinition {
    pub id: &'static str,
    pub label: &'static str,
    /// Selectable values, in display order, for a loaded definition set.
    pub data: fn(&DefinitionSet) -> Vec<SelectableValue>,
    /// Whether an item satisfies this filter for one selected value.
    pub matches: fn(&ItemDefinition, FilterValue) -> bool,
}

impl FilterDefinition {
    pub fn label_in(values: &[SelectableValue], filter_id: &str, value: FilterValue) -> Result<String, LabelLookupError> {
        values
            .iter()
            .find(|v| v.value == value)
            .map(|v| v.label.clone())
            .ok_or_else(|| LabelLookupError::UnknownValue { filter_id: filter_id.to_string(), value })
    }

    pub fn resolve_label(&self, definitions: &DefinitionSet, value: FilterValue) -> Result<String, LabelLookupError> {
        Self::label_in(&(self.data)(definitions), self.id, value)
    }
}

pub struct FilterCatalog {
    definitions: Vec<FilterDefinition>,
    by_id: HashMap<&'static str, usize>,
}

impl FilterCatalog {
    pub fn new(definitions: Vec<FilterDefinition>) -> Self {
        let by_id = definitions.iter().enumerate().map(|(i, d)| (d.id, i)).collect();
        Self { definitions, by_id }
    }

    pub fn lookup(&self, id: &str) -> Option<&FilterDefinition> {
        self.by_id.get(id).map(|&i| &self.definitions[i])
    }

    /// Definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FilterDefinition> {
        self.definitions.iter()
    }
}

/// The catalog every search header and search request uses.
pub fn standard_catalog() -> &'static FilterCatalog {
    static CATALOG: OnceLock<FilterCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        FilterCatalog::new(vec![
            FilterDefinition {
                id: "itemCategory",
                label: "Item category",
                data: item_category_values,
                matches: |item, value| item.item_category_hashes.iter().any(|&h| h as u64 == value.0),
            },
            FilterDefinition {
                id: "tierType",
                label: "Rarity",
                data: tier_type_values,
                matches: |item, value| item.tier_type as u64 == value.0,
            },
            FilterDefinition {
                id: "classType",
                label: "Class",
                data: class_type_values,
                matches: |item, value| item.class_type as u64 == value.0,
            },
            FilterDefinition {
                id: "damageType",
                label: "Damage type",
                data: damage_type_values,
                matches: |item, value| item.default_damage_type_hash.map(|h| h as u64) == Some(value.0),
            },
        ])
    })
}

pub const TIER_TYPES: &[(u64, &str)] = &[
    (2, "Basic"),
    (3, "Common"),
    (4, "Rare"),
    (5, "Legendary"),
    (6, "Exotic"),
];

pub const CLASS_TYPES: &[(u64, &str)] = &[
    (0, "Titan"),
    (1, "Hunter"),
    (2, "Warlock"),
    (3, "Any class"),
];

pub fn tier_type_name(tier_type: u32) -> Option<&'static str> {
    TIER_TYPES.iter().find(|(code, _)| *code == tier_type as u64).map(|(_, name)| *name)
}

fn item_category_values(definitions: &DefinitionSet) -> Vec<SelectableValue> {
    definitions
        .item_categories
        .values()
        .filter(|c| !c.name.is_empty())
        .map(|c| SelectableValue::new(c.hash as u64, c.name.clone()))
        .collect()
}

fn tier_type_values(_definitions: &DefinitionSet) -> Vec<SelectableValue> {
    TIER_TYPES.iter().map(|(code, name)| SelectableValue::new(*code, *name)).collect()
}

fn class_type_values(_definitions: &DefinitionSet) -> Vec<SelectableValue> {
    CLASS_TYPES.iter().map(|(code, name)| SelectableValue::new(*code, *name)).collect()
}

fn damage_type_values(definitions: &DefinitionSet) -> Vec<SelectableValue> {
    definitions
        .damage_types
        .values()
        .map(|d| SelectableValue::new(d.hash as u64, d.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::{DamageTypeDefinition, ItemCategoryDefinition};

    fn defs() -> DefinitionSet {
        let mut defs = DefinitionSet::default();
        defs.item_categories.insert(1, ItemCategoryDefinition { hash: 1, name: "Weapon".into() });
        defs.item_categories.insert(20, ItemCategoryDefinition { hash: 20, name: "Armor".into() });
        defs.item_categories.insert(30, ItemCategoryDefinition { hash: 30, name: "".into() });
        defs.damage_types.insert(7, DamageTypeDefinition { hash: 7, name: "Solar".into() });
        defs
    }

    #[test]
    fn lookup_by_id() {
        let catalog = standard_catalog();
        assert_eq!(catalog.lookup("tierType").map(|d| d.label), Some("Rarity"));
        assert!(catalog.lookup("nope").is_none());
        let ids: Vec<_> = catalog.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["itemCategory", "tierType", "classType", "damageType"]);
    }

    #[test]
    fn item_categories_skip_unnamed() {
        let filter = standard_catalog().lookup("itemCategory").unwrap();
        let values = (filter.data)(&defs());
        assert_eq!(values, vec![SelectableValue::new(1, "Weapon"), SelectableValue::new(20, "Armor")]);
    }

    #[test]
    fn resolve_label_reports_unknown_values() {
        let filter = standard_catalog().lookup("damageType").unwrap();
        assert_eq!(filter.resolve_label(&defs(), FilterValue(7)), Ok("Solar".to_string()));
        let err = filter.resolve_label(&defs(), FilterValue(8)).unwrap_err();
        assert_eq!(err, LabelLookupError::UnknownValue { filter_id: "damageType".into(), value: FilterValue(8) });
        assert_eq!(err.to_string(), "Filter damageType has no value 8");
    }

    #[test]
    fn matchers_follow_item_fields() {
        let item = ItemDefinition {
            item_category_hashes: vec![1, 20],
            tier_type: 6,
            class_type: 3,
            default_damage_type_hash: Some(7),
            ..Default::default()
        };
        let catalog = standard_catalog();
        let check = |id: &str, v: u64| (catalog.lookup(id).unwrap().matches)(&item, FilterValue(v));
        assert!(check("itemCategory", 20));
        assert!(!check("itemCategory", 30));
        assert!(check("tierType", 6));
        assert!(!check("classType", 0));
        assert!(check("damageType", 7));
    }
}
