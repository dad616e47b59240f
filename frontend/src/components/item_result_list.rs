//! Paged list of items matching the current explorer query.

use common::filter_catalog::tier_type_name;
use common::search_result::{ItemSummary, Pager};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use crate::api::search_api::search_items;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::explorer_store::ExplorerStore;

#[component]
pub fn ItemResultList() -> Element {
    let store = use_context::<ExplorerStore>();
    let query = use_memo(move || store.state.read().query.clone());
    let language = use_memo(move || store.state.read().active_language.clone());
    let search_ready = use_memo(move || store.search_index_ready());
    let mut current_page = use_signal(|| 0_u64);

    // a new query starts from the first page
    use_effect(move || {
        let _ = query.read();
        current_page.set(0);
    });

    let mut search_result = use_resource(move || {
        let q = query();
        let language = language();
        let page = current_page();
        let ready = search_ready();
        async move {
            if !ready || q.is_blank() {
                return Ok(None);
            }
            search_items(q, language, page).await.map(Some)
        }
    });

    // drop the shown page while the next one loads
    use_effect(move || {
        let _ = current_page.read();
        let _ = query.read();
        search_result.clear();
        search_result.restart();
    });

    if let Some(error) = store.load_error() {
        return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", error) } };
    }
    if query.read().is_blank() {
        return rsx! {
            div {
                style: "padding: 40px; text-align: center; color: rgba(28, 33, 45, 0.6); font-size: 18px;",
                "Type an item name or hash, or pick a filter."
            }
        };
    }

    let search_result = search_result.read();
    let page = match search_result.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Some(Ok(Some(page))) => page.clone(),
        Some(Ok(None)) | None => return rsx! { LoadingIndicator {} },
    };

    let pager = Pager { current: current_page(), total_count: page.total_count };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                padding: 10px 16px;
            ",
            h1 {
                style: "font-size: 18px; font-weight: 300; color: rgb(75, 87, 112); margin: 0;",
                "{page.total_count} items"
            }
            div { style: "flex-grow: 1;" }
            button {
                style: "display: flex; border: none; background: none; cursor: pointer;",
                disabled: !pager.can_go_back(),
                onclick: move |_| current_page.set(pager.previous()),
                Icon { icon: MdArrowBack, style: "width: 22px; height: 22px;" }
            }
            span { "{pager.current + 1} / {pager.page_count().max(1)}" }
            button {
                style: "display: flex; border: none; background: none; cursor: pointer;",
                disabled: !pager.can_go_forward(),
                onclick: move |_| current_page.set(pager.next()),
                Icon { icon: MdArrowForward, style: "width: 22px; height: 22px;" }
            }
        }
        ul {
            style: "list-style: none; margin: 0; padding: 0 16px 16px 16px; overflow-y: auto;",
            for item in page.items.iter().cloned() {
                li {
                    key: "{item.hash}",
                    ItemRow { item }
                }
            }
        }
    }
}

#[component]
fn ItemRow(item: ReadSignal<ItemSummary>) -> Element {
    let item = item.read().clone();
    let tier = tier_type_name(item.tier_type).unwrap_or("");
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                padding: 8px 12px;
                margin-bottom: 6px;
                background: white;
                border-radius: 8px;
                border: 1px solid rgba(0,0,0,0.1);
            ",
            if let Some(icon) = item.icon.clone() {
                img { src: "{icon}", alt: "", style: "width: 40px; height: 40px; border-radius: 4px;" }
            }
            div {
                style: "display: flex; flex-direction: column; min-width: 0; flex-grow: 1;",
                span { style: "font-size: 16px; font-weight: 500;", "{item.name}" }
                span { style: "font-size: 13px; color: rgba(28, 33, 45, 0.7);", "{item.item_type_display_name}" }
            }
            span { style: "font-size: 13px; color: rgba(28, 33, 45, 0.7);", "{tier}" }
            code { style: "font-size: 13px; color: rgba(28, 33, 45, 0.7);", "{item.hash}" }
        }
    }
}
