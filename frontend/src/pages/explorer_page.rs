use dioxus::prelude::*;

use common::explorer_state::{ExplorerAction, ExplorerQuery, PendingQueryWrites};
use common::search_const::APP_TITLE;
use crate::{
    components::{item_result_list::ItemResultList, search_header::SearchHeader},
    data_definitions::{explorer_store::ExplorerStore, url_param::UrlParam}, routes::Route
};


fn title_ellipsis(title: &str) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title.to_string()
    }
}

fn page_title(query: &ExplorerQuery) -> String {
    if query.search_string.trim().is_empty() {
        APP_TITLE.to_string()
    } else {
        format!("{}: {}", APP_TITLE, title_ellipsis(query.search_string.trim()))
    }
}

/// Explorer page. The query lives in the URL so searches can be shared.
#[component]
pub fn ExplorerPage(query: UrlParam<ExplorerQuery>) -> Element {
    rsx! {
        Title { "{page_title(&query.0)}" }
        ExplorerPageRootComponent { url_query: query.0.clone() }
    }
}

/// Keeps the URL and the store's query in step, then renders the header
/// and the results.
#[component]
fn ExplorerPageRootComponent(url_query: ReadSignal<ExplorerQuery>) -> Element {
    let store = use_context::<ExplorerStore>();
    let mut url_applied = use_signal(|| false);
    let mut url_writes = use_signal(PendingQueryWrites::default);

    // url -> store, on mount and whenever the link changes
    use_effect(move || {
        let q = url_query.read().clone();
        let is_echo = url_writes.write().take_echo(&q);
        if !is_echo && store.state.peek().query != q {
            store.dispatch(ExplorerAction::QueryReplaced(q));
        }
        url_applied.set(true);
    });

    // store -> url
    use_effect(move || {
        let q = store.state.read().query.clone();
        if !url_applied() || *url_query.peek() == q {
            return;
        }
        url_writes.write().record(q.clone());
        navigator().replace(Route::explorer_page_from_query(q));
    });

    rsx! {
        div {
            id: "x-explorer-page-root-component",
            style: "
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            ",
            SearchHeader {}
            div {
                id: "x-explorer-results",
                style: "
                    flex-grow: 1;
                    min-height: 0;
                    overflow-y: auto;
                    background-color: #ECEEF2;
                ",
                ItemResultList {}
            }
        }
    }
}

