pub mod app_layout;
pub mod error_boundary;
pub mod suspend_boundary;
pub mod search_header;
pub mod item_result_list;
