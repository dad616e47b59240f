//! API functions behind the frontend's server functions.

pub mod definitions;
pub mod search;
