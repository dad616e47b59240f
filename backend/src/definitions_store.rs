//! Loads definition sets and language lists, caching them per language.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use common::definitions::DefinitionSet;
use common::languages::{LanguageOption, is_valid_language_identifier};
use tokio::sync::RwLock;

use crate::config::{DefinitionsSource, get_explorer_config};
use crate::search_index::SearchIndex;

pub struct DefinitionsStore {
    source: DefinitionsSource,
    definitions: RwLock<HashMap<String, Arc<DefinitionSet>>>,
    search_indexes: RwLock<HashMap<String, Arc<SearchIndex>>>,
}

pub fn get_definitions_store() -> &'static DefinitionsStore {
    static STORE: OnceLock<DefinitionsStore> = OnceLock::new();
    STORE.get_or_init(|| DefinitionsStore::new(get_explorer_config().definitions_source.clone()))
}

pub fn check_language(language: &str) -> anyhow::Result<()> {
    if !is_valid_language_identifier(language) {
        anyhow::bail!("Invalid language identifier: {:?}", language);
    }
    Ok(())
}

impl DefinitionsStore {
    pub fn new(source: DefinitionsSource) -> Self {
        Self {
            source,
            definitions: RwLock::new(HashMap::new()),
            search_indexes: RwLock::new(HashMap::new()),
        }
    }

    pub fn source(&self) -> &DefinitionsSource {
        &self.source
    }

    pub async fn languages(&self) -> anyhow::Result<Vec<LanguageOption>> {
        let text = self.read_text("languages.json").await?;
        let languages: Vec<LanguageOption> = serde_json::from_str(&text).context("Failed to parse languages.json")?;
        Ok(languages.into_iter().filter(|l| is_valid_language_identifier(&l.identifier)).collect())
    }

    pub async fn definitions(&self, language: &str) -> anyhow::Result<Arc<DefinitionSet>> {
        check_language(language)?;
        if let Some(defs) = self.definitions.read().await.get(language) {
            return Ok(defs.clone());
        }
        let text = self.read_text(&definitions_relative_path(language)).await?;
        let defs: DefinitionSet = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse definitions for language {}", language))?;
        tracing::info!("Loaded definitions for {}: {} items", language, defs.items.len());
        let defs = Arc::new(defs);
        self.definitions.write().await.entry(language.to_string()).or_insert(defs.clone());
        Ok(defs)
    }

    pub async fn search_index(&self, language: &str) -> anyhow::Result<Arc<SearchIndex>> {
        if let Some(index) = self.search_indexes.read().await.get(language) {
            return Ok(index.clone());
        }
        let defs = self.definitions(language).await?;
        let index = Arc::new(SearchIndex::build(&defs));
        tracing::info!("Built search index for {}: {} entries", language, index.len());
        self.search_indexes.write().await.entry(language.to_string()).or_insert(index.clone());
        Ok(index)
    }

    /// Path of the raw definitions file, when definitions come from disk.
    pub fn local_definitions_path(&self, language: &str) -> Option<PathBuf> {
        match &self.source {
            DefinitionsSource::Directory(dir) => Some(dir.join(definitions_relative_path(language))),
            DefinitionsSource::Http(_) => None,
        }
    }

    pub fn remote_url(&self, relative_path: &str) -> Option<String> {
        match &self.source {
            DefinitionsSource::Http(base) => Some(format!("{}/{}", base, relative_path)),
            DefinitionsSource::Directory(_) => None,
        }
    }

    async fn read_text(&self, relative_path: &str) -> anyhow::Result<String> {
        match &self.source {
            DefinitionsSource::Directory(dir) => {
                let path = dir.join(relative_path);
                tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))
            }
            DefinitionsSource::Http(base) => {
                let url = format!("{}/{}", base, relative_path);
                tracing::info!("Fetching {}", url);
                let response = reqwest::get(&url).await.with_context(|| format!("Failed to fetch {}", url))?;
                let status = response.status();
                let text = response.text().await?;
                if status.is_client_error() || status.is_server_error() {
                    anyhow::bail!("Error fetching {}: {}: {}", url, status, text);
                }
                Ok(text)
            }
        }
    }
}

pub fn definitions_relative_path(language: &str) -> String {
    format!("{}/definitions.json", language)
}
