use dioxus::prelude::*;

use crate::components::app_layout::AppLayout;
use common::explorer_state::ExplorerQuery;

use crate::data_definitions::url_param::UrlParam;
use crate::pages::explorer_page::ExplorerPage;
use crate::pages::api_explorer_page::ApiExplorerPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]


    #[redirect("/", || Route::explorer_page_from_query(ExplorerQuery::default()))]
    #[route("/search/:query")]
    ExplorerPage { query: UrlParam<ExplorerQuery> },


    #[route("/api")]
    ApiExplorerPage {},

}

impl Route {
    pub fn explorer_page_from_query(q: ExplorerQuery) -> Self {
        Self::ExplorerPage { query: UrlParam::from(q) }
    }
}
