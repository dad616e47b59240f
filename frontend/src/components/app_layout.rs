//! Page frame shared by every route; owns the explorer store.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::explorer_store::use_explorer_store_provider;
use crate::routes::Route;

/// Provides the explorer store, so search state survives moving between
/// the explorer and the API explorer.
#[component]
pub fn AppLayout() -> Element {
    use_explorer_store_provider();

    rsx! {
        div {
            id: "x-page-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",
            GlobalErrorBoundary {
                boundary_name: "AppLayout".to_string(),
                Outlet::<Route> {}
            }
        }
    }
}
