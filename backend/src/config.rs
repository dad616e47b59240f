//! Environment configuration for the definitions source.

use std::path::PathBuf;
use std::sync::OnceLock;

use common::search_const::DEFAULT_LANGUAGE;

#[derive(Debug, Clone, PartialEq)]
pub enum DefinitionsSource {
    /// `<dir>/languages.json` and `<dir>/<language>/definitions.json`.
    Directory(PathBuf),
    /// Same layout below a base URL.
    Http(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub definitions_source: DefinitionsSource,
    pub default_language: String,
}

impl ExplorerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("DATA_EXPLORER_DEFINITIONS_URL").ok(),
            std::env::var("DATA_EXPLORER_DEFINITIONS_DIR").ok(),
            std::env::var("DATA_EXPLORER_DEFAULT_LANGUAGE").ok(),
        )
    }

    fn from_vars(url: Option<String>, dir: Option<String>, default_language: Option<String>) -> Self {
        let definitions_source = match url.filter(|u| !u.trim().is_empty()) {
            Some(url) => DefinitionsSource::Http(url.trim_end_matches('/').to_string()),
            None => DefinitionsSource::Directory(PathBuf::from(dir.unwrap_or("./definitions".to_string()))),
        };
        Self {
            definitions_source,
            default_language: default_language.unwrap_or(DEFAULT_LANGUAGE.to_string()),
        }
    }
}

pub fn get_explorer_config() -> &'static ExplorerConfig {
    static CONFIG: OnceLock<ExplorerConfig> = OnceLock::new();
    CONFIG.get_or_init(ExplorerConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_directory() {
        let config = ExplorerConfig::from_vars(None, None, None);
        assert_eq!(config.definitions_source, DefinitionsSource::Directory(PathBuf::from("./definitions")));
        assert_eq!(config.default_language, "en");
    }

    #[test]
    fn url_wins_over_directory() {
        let config = ExplorerConfig::from_vars(Some("https://cdn.example.com/defs/".into()), Some("/data".into()), Some("fr".into()));
        assert_eq!(config.definitions_source, DefinitionsSource::Http("https://cdn.example.com/defs".into()));
        assert_eq!(config.default_language, "fr");
    }

    #[test]
    fn blank_url_is_ignored() {
        let config = ExplorerConfig::from_vars(Some("  ".into()), Some("/data".into()), None);
        assert_eq!(config.definitions_source, DefinitionsSource::Directory(PathBuf::from("/data")));
    }
}
