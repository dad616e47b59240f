//! Shared definition models: the reference dataset the explorer browses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub type DefinitionHash = u32;

/// One language's worth of loaded definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct DefinitionSet {
    pub items: BTreeMap<DefinitionHash, ItemDefinition>,
    pub item_categories: BTreeMap<DefinitionHash, ItemCategoryDefinition>,
    pub damage_types: BTreeMap<DefinitionHash, DamageTypeDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemDefinition {
    pub hash: DefinitionHash,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub item_type_display_name: String,
    pub item_category_hashes: Vec<DefinitionHash>,
    pub tier_type: u32,
    pub class_type: u32,
    pub default_damage_type_hash: Option<DefinitionHash>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemCategoryDefinition {
    pub hash: DefinitionHash,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct DamageTypeDefinition {
    pub hash: DefinitionHash,
    pub name: String,
}

/// Name and size of one definition table, as listed by the API explorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionTableInfo {
    pub table_name: String,
    pub entry_count: u64,
}

impl DefinitionSet {
    pub fn table_infos(&self) -> Vec<DefinitionTableInfo> {
        vec![
            DefinitionTableInfo::new("items", self.items.len()),
            DefinitionTableInfo::new("itemCategories", self.item_categories.len()),
            DefinitionTableInfo::new("damageTypes", self.damage_types.len()),
        ]
    }
}

impl DefinitionTableInfo {
    pub fn new(table_name: impl Into<String>, entry_count: usize) -> Self {
        Self { table_name: table_name.into(), entry_count: entry_count as u64 }
    }
}
