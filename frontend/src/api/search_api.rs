//! Client API calls for item search.

use common::{explorer_state::ExplorerQuery, search_result::ItemSearchPage};
use dioxus::prelude::*;

#[cfg(feature = "server")]
use crate::api::definitions_api::server_error;


#[server]
pub async fn search_items(query: ExplorerQuery, language: String, page_number: u64) -> Result<ItemSearchPage, ServerFnError> {
    let x = backend::api::search::search_items(query, language, page_number).await;
    x.map_err(server_error)
}
