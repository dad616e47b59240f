//! Client API calls for definitions and languages.

use common::{definitions::{DefinitionHash, DefinitionSet, DefinitionTableInfo, ItemDefinition}, languages::LanguageSettings};
use dioxus::prelude::*;

#[cfg(feature = "server")]
pub(crate) fn server_error(e: anyhow::Error) -> ServerFnError {
    ServerFnError::ServerError { message: format!("{:#}", e), code: 500, details: None }
}

#[server]
pub async fn get_language_settings() -> Result<LanguageSettings, ServerFnError> {
    backend::api::definitions::get_language_settings().await.map_err(server_error)
}

#[server]
pub async fn get_definitions(language: String) -> Result<DefinitionSet, ServerFnError> {
    backend::api::definitions::get_definitions(language).await.map_err(server_error)
}

#[server]
pub async fn warm_search_index(language: String) -> Result<u64, ServerFnError> {
    backend::api::definitions::warm_search_index(language).await.map_err(server_error)
}

#[server]
pub async fn list_definition_tables(language: String) -> Result<Vec<DefinitionTableInfo>, ServerFnError> {
    backend::api::definitions::list_definition_tables(language).await.map_err(server_error)
}

#[server]
pub async fn get_item_definition(language: String, hash: DefinitionHash) -> Result<Option<ItemDefinition>, ServerFnError> {
    backend::api::definitions::get_item_definition(language, hash).await.map_err(server_error)
}
