use common::view_model::LanguageSelectorModel;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdTranslate};

/// Shows the active language and opens a native dropdown on click. An
/// active language missing from the list is still shown as selected.
#[component]
pub fn LanguageSelector(model: ReadSignal<LanguageSelectorModel>, set_active_language: Callback<String>) -> Element {
    let model = model.read().clone();
    rsx! {
        div {
            style: "
                position: relative;
                display: flex;
                align-items: center;
                gap: 6px;
                height: 40px;
                padding: 0 14px;
                border: 1px solid rgba(245, 246, 248, 0.4);
                border-radius: 8px;
                color: #F5F6F8;
                font-size: 15px;
                flex-shrink: 0;
            ",
            Icon { icon: MdTranslate, style: "width: 20px; height: 20px;" }
            "{model.active_language}"
            select {
                style: "
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    opacity: 0;
                    cursor: pointer;
                ",
                onchange: move |event: Event<FormData>| set_active_language.call(event.value()),
                for option in model.options.iter().cloned() {
                    option {
                        key: "{option.identifier}",
                        value: "{option.identifier}",
                        selected: option.selected,
                        "{option.label}"
                    }
                }
                if !model.active_is_listed {
                    option {
                        value: "{model.active_language}",
                        selected: true,
                        disabled: true,
                        hidden: true,
                        "{model.active_language}"
                    }
                }
            }
        }
    }
}
