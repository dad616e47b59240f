pub mod url_param;
pub mod explorer_store;
