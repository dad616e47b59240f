use serde::{Deserialize, Serialize};

use crate::{definitions::{DefinitionHash, ItemDefinition}, explorer_state::ExplorerQuery, search_const::PAGE_SIZE};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSearchPage {
    pub query: ExplorerQuery,
    pub items: Vec<ItemSummary>,
    pub total_count: u64,
    pub page_number: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub hash: DefinitionHash,
    pub name: String,
    pub item_type_display_name: String,
    pub tier_type: u32,
    pub icon: Option<String>,
}

impl From<&ItemDefinition> for ItemSummary {
    fn from(item: &ItemDefinition) -> Self {
        Self {
            hash: item.hash,
            name: item.name.clone(),
            item_type_display_name: item.item_type_display_name.clone(),
            tier_type: item.tier_type,
            icon: item.icon.clone(),
        }
    }
}

/// Page controls for the result list. `current` is the requested page,
/// which can run ahead of the page last returned by the server.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pager {
    pub current: u64,
    pub total_count: u64,
}

impl Pager {
    pub fn page_count(&self) -> u64 {
        self.total_count.div_ceil(PAGE_SIZE)
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.page_count()
    }

    pub fn previous(&self) -> u64 {
        self.current.saturating_sub(1)
    }

    pub fn next(&self) -> u64 {
        if self.can_go_forward() { self.current + 1 } else { self.current }
    }
}
