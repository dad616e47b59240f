//! Modal drawer for editing filters.

use common::explorer_state::{ExplorerAction, FilterSelection};
use common::filter_catalog::{FilterValue, SelectableValue, standard_catalog};
use common::search_const::FILTER_DRAWER_CLOSE_MS;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_navigation_icons::MdClose, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::explorer_store::ExplorerStore;

#[derive(Debug, Clone, Copy, PartialEq)]
enum ModalPhase {
    Closed,
    // mounted, transition not started yet
    Opening,
    Open,
    // still mounted while the close transition runs
    Closing,
}

impl ModalPhase {
    fn class_suffix(self) -> &'static str {
        match self {
            Self::Open => " after-open",
            Self::Closing => " before-close",
            Self::Closed | Self::Opening => "",
        }
    }
}

/// Overlay with a side panel. Clicking the overlay requests a close.
#[component]
pub fn FilterDrawerModal(open: ReadSignal<bool>, on_close: Callback<()>, children: Element) -> Element {
    let mut phase = use_signal(|| ModalPhase::Closed);

    use_effect(move || {
        let is_open = open();
        let current = *phase.peek();
        if is_open && matches!(current, ModalPhase::Closed | ModalPhase::Closing) {
            phase.set(ModalPhase::Opening);
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(10).await;
                if *phase.peek() == ModalPhase::Opening {
                    phase.set(ModalPhase::Open);
                }
            });
        } else if !is_open && matches!(current, ModalPhase::Opening | ModalPhase::Open) {
            phase.set(ModalPhase::Closing);
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(FILTER_DRAWER_CLOSE_MS).await;
                if *phase.peek() == ModalPhase::Closing {
                    phase.set(ModalPhase::Closed);
                }
            });
        }
    });

    let suffix = phase().class_suffix();
    rsx! {
        if phase() != ModalPhase::Closed {
            div {
                class: "x-filter-modal-overlay{suffix}",
                onclick: move |_| on_close.call(()),
                div {
                    class: "x-filter-modal-content{suffix}",
                    onclick: move |event: MouseEvent| event.stop_propagation(),
                    {children}
                }
            }
        }
    }
}

/// Every catalog filter with its selectable values as checkboxes.
#[component]
pub fn FilterDrawerPanel() -> Element {
    let store = use_context::<ExplorerStore>();
    let Some(definitions) = store.definitions() else {
        return rsx! { LoadingIndicator { text: "Loading data..." } };
    };
    let filters = store.state.read().query.filters.clone();
    let has_active = filters.has_active();

    let clear_all = move |_: MouseEvent| {
        let keys = store.state.peek().query.filters.active().map(|(k, _)| k.to_string()).collect::<Vec<_>>();
        for key in keys {
            store.dispatch(ExplorerAction::FilterCleared(key));
        }
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                padding: 16px;
                border-bottom: 1px solid rgba(0,0,0,0.2);
                position: sticky;
                top: 0;
                background: white;
            ",
            h2 { style: "font-size: 22px; font-weight: 500; margin: 0;", "Filters" }
            div { style: "flex-grow: 1;" }
            button {
                style: "border: 1px solid rgba(0,0,0,0.4); border-radius: 6px; background: white; padding: 4px 10px; cursor: pointer;",
                disabled: !has_active,
                onclick: clear_all,
                "Clear all"
            }
            button {
                style: "display: flex; border: none; background: none; cursor: pointer;",
                title: "Close",
                onclick: move |_| store.actions.toggle_filter_drawer.call(()),
                Icon { icon: MdClose, style: "width: 24px; height: 24px;" }
            }
        }
        for filter_def in standard_catalog().iter() {
            FilterSection {
                key: "{filter_def.id}",
                filter_id: filter_def.id.to_string(),
                filter_label: filter_def.label.to_string(),
                values: (filter_def.data)(&definitions),
                selection: filters.get(filter_def.id).cloned(),
            }
        }
    }
}

#[component]
fn FilterSection(
    filter_id: ReadSignal<String>,
    filter_label: ReadSignal<String>,
    values: ReadSignal<Vec<SelectableValue>>,
    selection: ReadSignal<Option<FilterSelection>>,
) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; border-bottom: 1px solid rgba(0,0,0,0.08);",
            h3 { style: "font-size: 16px; font-weight: 500; margin: 0 0 8px 0; color: rgb(75, 87, 112);", "{filter_label}" }
            div {
                style: "max-height: 260px; overflow-y: auto;",
                for value in values.read().iter().cloned() {
                    FilterCheckbox {
                        key: "{value.value}",
                        filter_id,
                        value: value.value,
                        label: value.label.clone(),
                        checked: selection.read().as_ref().is_some_and(|s| s.contains(value.value)),
                    }
                }
            }
        }
    }
}

#[component]
fn FilterCheckbox(filter_id: ReadSignal<String>, value: FilterValue, label: String, checked: bool) -> Element {
    let store = use_context::<ExplorerStore>();
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
            ",
            onclick: move |_| {
                store.dispatch(ExplorerAction::FilterValueToggled { key: filter_id.read().clone(), value });
            },
            if checked {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "font-size: 16px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                "{label}"
            }
        }
    }
}
