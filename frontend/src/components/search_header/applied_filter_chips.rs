use common::view_model::AppliedFilterChip;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

#[component]
pub fn AppliedFilterChips(chips: ReadSignal<Vec<AppliedFilterChip>>, remove_filter: Callback<String>) -> Element {
    // definitions and state disagree: the chip shows a fallback label
    use_effect(move || {
        for chip in chips.read().iter().filter(|c| !c.unresolved_values.is_empty()) {
            dioxus::logger::tracing::warn!("Filter {} has values without a label: {:?}", chip.key, chip.unresolved_values);
        }
    });

    rsx! {
        for chip in chips.read().iter().cloned() {
            FilterChip { key: "{chip.key}", chip, remove_filter }
        }
    }
}

#[component]
fn FilterChip(chip: ReadSignal<AppliedFilterChip>, remove_filter: Callback<String>) -> Element {
    let key = chip.read().key.clone();
    let text = chip.read().text();
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                height: 30px;
                padding: 0 4px 0 12px;
                border: 1px solid rgba(28, 33, 45, 0.3);
                border-radius: 1000px;
                background-color: #ECEEF2;
                color: #1C212D;
                font-size: 14px;
                white-space: nowrap;
            ",
            "{text}"
            button {
                style: "
                    display: flex;
                    border: none;
                    background: none;
                    cursor: pointer;
                    padding: 2px;
                ",
                title: "Remove filter",
                onclick: move |_| remove_filter.call(key.clone()),
                Icon { icon: MdClose, style: "width: 16px; height: 16px; color: #1C212D;" }
            }
        }
    }
}
