//! Definition and language endpoints.

use common::definitions::{DefinitionHash, DefinitionSet, DefinitionTableInfo, ItemDefinition};
use common::languages::{LanguageOption, LanguageSettings};

use crate::config::get_explorer_config;
use crate::definitions_store::get_definitions_store;

pub async fn list_languages() -> anyhow::Result<Vec<LanguageOption>> {
    get_definitions_store().languages().await
}

pub async fn get_language_settings() -> anyhow::Result<LanguageSettings> {
    Ok(LanguageSettings {
        languages: list_languages().await?,
        default_language: get_explorer_config().default_language.clone(),
    })
}

pub async fn get_definitions(language: String) -> anyhow::Result<DefinitionSet> {
    let defs = get_definitions_store().definitions(&language).await?;
    Ok(defs.as_ref().clone())
}

/// Builds (or reuses) the search index and returns the number of searchable items.
pub async fn warm_search_index(language: String) -> anyhow::Result<u64> {
    let index = get_definitions_store().search_index(&language).await?;
    Ok(index.len() as u64)
}

pub async fn list_definition_tables(language: String) -> anyhow::Result<Vec<DefinitionTableInfo>> {
    let defs = get_definitions_store().definitions(&language).await?;
    Ok(defs.table_infos())
}

pub async fn get_item_definition(language: String, hash: DefinitionHash) -> anyhow::Result<Option<ItemDefinition>> {
    let defs = get_definitions_store().definitions(&language).await?;
    Ok(defs.items.get(&hash).cloned())
}
