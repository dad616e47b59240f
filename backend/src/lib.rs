//! Server-side loading, caching and searching of explorer definitions.

pub mod config;
pub mod definitions_store;
pub mod search_index;
pub mod api;
pub mod server_extra;
