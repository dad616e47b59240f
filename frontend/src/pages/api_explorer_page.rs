use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_navigation_icons::MdArrowBack}};

use common::definitions::DefinitionHash;
use crate::{
    api::definitions_api::{get_item_definition, list_definition_tables},
    components::{error_boundary::ComponentErrorDisplay, suspend_boundary::{LoadingIndicator, SuspendWrapper}},
    data_definitions::explorer_store::ExplorerStore, routes::Route
};

/// Raw view of the loaded definitions: table sizes, a download link and
/// a JSON lookup by item hash.
#[component]
pub fn ApiExplorerPage() -> Element {
    let store = use_context::<ExplorerStore>();
    let language = use_memo(move || store.state.read().active_language.clone());
    let back_route = use_memo(move || Route::explorer_page_from_query(store.state.read().query.clone()));

    rsx! {
        Title { "Data Explorer - API Explorer" }
        div {
            id: "x-api-explorer-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 24px 40px;
                overflow: auto;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 16px;",
                Link {
                    to: back_route(),
                    Icon { icon: MdArrowBack, style: "width: 26px; height: 26px; color: #1C212D;" }
                }
                h1 { style: "font-size: 32px; font-weight: 500; margin: 0; color: #1C212D;", "\u{2728} API Explorer" }
            }
            if language.read().is_empty() {
                LoadingIndicator { text: "Loading languages..." }
            } else {
                SuspendWrapper { DefinitionTables { language } }
                ItemLookup { language }
            }
        }
    }
}

#[component]
fn DefinitionTables(language: ReadSignal<String>) -> Element {
    let tables = use_resource(move || list_definition_tables(language())).suspend()?.cloned();
    let tables = match tables {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(t) => t,
    };
    rsx! {
        div {
            style: "background: white; border-radius: 10px; border: 1px solid rgba(0,0,0,0.1); padding: 16px;",
            h2 { style: "font-size: 20px; font-weight: 500; margin: 0 0 10px 0;", "Definitions ({language})" }
            table {
                style: "border-collapse: collapse; min-width: 300px;",
                for table in tables {
                    tr {
                        key: "{table.table_name}",
                        td { style: "padding: 4px 16px 4px 0;", code { "{table.table_name}" } }
                        td { style: "padding: 4px 0; text-align: right;", "{table.entry_count}" }
                    }
                }
            }
            a {
                href: "/_definitions/{language}",
                style: "display: inline-block; margin-top: 12px; color: blue;",
                "Download raw definitions"
            }
        }
    }
}

#[component]
fn ItemLookup(language: ReadSignal<String>) -> Element {
    let mut hash_input = use_signal(String::new);
    let mut looked_up_hash = use_signal(|| None::<DefinitionHash>);
    let invalid_hash = use_memo(move || {
        let input = hash_input.read();
        !input.trim().is_empty() && input.trim().parse::<DefinitionHash>().is_err()
    });

    let lookup = use_resource(move || {
        let hash = looked_up_hash();
        let language = language();
        async move {
            match hash {
                Some(hash) => get_item_definition(language, hash).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let mut do_lookup = move || {
        if let Ok(hash) = hash_input.read().trim().parse::<DefinitionHash>() {
            looked_up_hash.set(Some(hash));
        }
    };

    let result_view = match lookup.read().as_ref() {
        None => rsx! { LoadingIndicator {} },
        Some(Err(e)) => rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Some(Ok(None)) => rsx! {},
        Some(Ok(Some(None))) => rsx! { p { "No item with this hash." } },
        Some(Ok(Some(Some(item)))) => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|e| format!("{:#?}", e));
            rsx! {
                pre {
                    style: "background: #1C212D; color: #F5F6F8; padding: 12px; border-radius: 8px; overflow: auto; max-height: 500px;",
                    "{json}"
                }
            }
        }
    };

    rsx! {
        div {
            style: "background: white; border-radius: 10px; border: 1px solid rgba(0,0,0,0.1); padding: 16px; display: flex; flex-direction: column; gap: 10px;",
            h2 { style: "font-size: 20px; font-weight: 500; margin: 0;", "Item definition" }
            div {
                style: "display: flex; flex-direction: row; gap: 8px; align-items: center;",
                input {
                    r#type: "text",
                    placeholder: "Item hash",
                    style: "border: 1px solid rgba(0,0,0,0.4); border-radius: 6px; padding: 6px 10px; font-size: 16px; width: 240px;",
                    value: "{hash_input}",
                    oninput: move |event: Event<FormData>| hash_input.set(event.value()),
                    onkeydown: move |event: Event<KeyboardData>| {
                        if event.key() == Key::Enter {
                            do_lookup();
                        }
                    },
                }
                button {
                    style: "display: flex; border: 1px solid rgba(0,0,0,0.4); border-radius: 6px; background: white; padding: 6px; cursor: pointer;",
                    disabled: invalid_hash(),
                    onclick: move |_| do_lookup(),
                    Icon { icon: MdSearch, style: "width: 20px; height: 20px;" }
                }
                if invalid_hash() {
                    span { style: "color: darkred;", "Hashes are unsigned 32-bit numbers" }
                }
            }
            {result_view}
        }
    }
}
