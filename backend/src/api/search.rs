//! Item search endpoint.

use common::explorer_state::ExplorerQuery;
use common::filter_catalog::standard_catalog;
use common::search_const::PAGE_SIZE;
use common::search_result::{ItemSearchPage, ItemSummary};

use crate::definitions_store::get_definitions_store;

pub async fn search_items(query: ExplorerQuery, language: String, page_number: u64) -> anyhow::Result<ItemSearchPage> {
    let store = get_definitions_store();
    let defs = store.definitions(&language).await?;
    let index = store.search_index(&language).await?;
    let matches = index.search(&defs, &query, standard_catalog());
    Ok(paginate(query, &matches, page_number))
}

fn paginate(query: ExplorerQuery, matches: &[&common::definitions::ItemDefinition], page_number: u64) -> ItemSearchPage {
    let start = (page_number.saturating_mul(PAGE_SIZE)) as usize;
    let items = matches
        .iter()
        .skip(start)
        .take(PAGE_SIZE as usize)
        .map(|item| ItemSummary::from(*item))
        .collect();
    ItemSearchPage { query, items, total_count: matches.len() as u64, page_number }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::definitions::ItemDefinition;

    #[test]
    fn paginates_by_page_size() {
        let items = (0..(PAGE_SIZE as u32 + 5))
            .map(|i| ItemDefinition { hash: i, name: format!("Item {}", i), ..Default::default() })
            .collect::<Vec<_>>();
        let refs = items.iter().collect::<Vec<_>>();
        let first = paginate(ExplorerQuery::default(), &refs, 0);
        assert_eq!(first.items.len(), PAGE_SIZE as usize);
        assert_eq!(first.total_count, PAGE_SIZE + 5);
        let second = paginate(ExplorerQuery::default(), &refs, 1);
        assert_eq!(second.items.len(), 5);
        assert_eq!(second.items[0].hash, PAGE_SIZE as u32);
        assert!(paginate(ExplorerQuery::default(), &refs, 7).items.is_empty());
    }
}
