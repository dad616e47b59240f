//! Search header: title, search input, applied filter chips, language
//! selector, filter drawer toggle and the API explorer link.

mod title_logo;
mod applied_filter_chips;
mod language_selector;
pub mod filter_drawer;

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_image_icons::MdTune};

use crate::data_definitions::explorer_store::ExplorerStore;
use crate::routes::Route;
use applied_filter_chips::AppliedFilterChips;
use filter_drawer::{FilterDrawerModal, FilterDrawerPanel};
use language_selector::LanguageSelector;
use title_logo::TitleLogo;

const HEADER_BUTTON_STYLE: &str = "
    display: flex;
    align-items: center;
    gap: 6px;
    height: 40px;
    padding: 0 14px;
    border: 1px solid rgba(245, 246, 248, 0.4);
    border-radius: 8px;
    background: transparent;
    color: #F5F6F8;
    font-size: 15px;
    cursor: pointer;
    text-decoration: none;
    flex-shrink: 0;
";

#[component]
pub fn SearchHeader() -> Element {
    let store = use_context::<ExplorerStore>();
    let actions = store.actions;
    let view_model = use_memo(move || store.header_view_model());

    let search_oninput = move |event: Event<FormData>| {
        actions.on_search_change.call(event.value());
    };
    let vm = view_model();

    rsx! {
        div {
            id: "x-search-header",
            style: "
                flex-shrink: 0;
                background-color: #1C212D;
                border-bottom: 1px solid #000000;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 16px;
                    padding: 12px 16px;
                    min-height: 64px;
                ",

                TitleLogo {}

                div {
                    id: "x-search-header-main",
                    style: "
                        display: flex;
                        flex-direction: row;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 8px;
                        flex-grow: 1;
                        min-width: 200px;
                        background-color: white;
                        border-radius: 8px;
                        padding: 4px 8px;
                    ",
                    input {
                        r#type: "text",
                        style: "
                            flex: 1;
                            min-width: 180px;
                            border: none;
                            outline: none;
                            background: transparent;
                            color: #111827;
                            font-size: 18px;
                            height: 36px;
                        ",
                        value: "{vm.search_string}",
                        placeholder: vm.placeholder_text,
                        disabled: vm.search_disabled,
                        oninput: search_oninput,
                    }
                    AppliedFilterChips { chips: vm.chips.clone(), remove_filter: actions.remove_filter }
                }

                LanguageSelector {
                    model: vm.language_selector.clone(),
                    set_active_language: actions.set_active_language,
                }

                button {
                    style: HEADER_BUTTON_STYLE,
                    class: "x-hover-shadow",
                    onclick: move |_| actions.toggle_filter_drawer.call(()),
                    Icon { icon: MdTune, style: "width: 20px; height: 20px;" }
                    "Filters"
                }

                Link {
                    to: Route::ApiExplorerPage {},
                    div {
                        style: HEADER_BUTTON_STYLE,
                        class: "x-hover-shadow",
                        "\u{2728} API Explorer"
                    }
                }
            }

            FilterDrawerModal {
                open: vm.filter_drawer_visible,
                on_close: actions.toggle_filter_drawer,
                FilterDrawerPanel {}
            }
        }
    }
}
