//! Constants shared by the header, the search API and the server.

/// Number of items returned per search page.
pub const PAGE_SIZE: u64 = 50;

pub const APP_TITLE: &str = "Data Explorer";

/// Appended to the title once per click on it.
pub const TITLE_EASTER_EGG_TOKEN: &str = "er";

/// Separator between the labels of a multi-valued filter chip.
pub const FILTER_VALUE_SEPARATOR: &str = " & ";

pub const DEFAULT_LANGUAGE: &str = "en";

/// How long the filter drawer keeps its content mounted after closing.
pub const FILTER_DRAWER_CLOSE_MS: u32 = 200;
