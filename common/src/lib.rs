//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod definitions;
pub mod languages;
pub mod filter_catalog;
pub mod explorer_state;
pub mod view_model;
pub mod search_result;
pub mod search_const;
