use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                LoadingIndicator { text: "Loading..." }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator(#[props(into, default = "Loading...".to_string())] text: String) -> Element {
    rsx! {
        div {
            style: "color: rgba(28, 33, 45, 0.7); font-size: 18px; padding: 16px; text-align: center;",
            "{text}"
        }
    }
}
