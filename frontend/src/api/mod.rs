pub mod definitions_api;
pub mod search_api;
