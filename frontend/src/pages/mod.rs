pub mod explorer_page;
pub mod api_explorer_page;
