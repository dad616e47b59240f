//! Content language options offered by the language selector.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    pub identifier: String,
    pub display_name: String,
}

impl LanguageOption {
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self { identifier: identifier.into(), display_name: display_name.into() }
    }

    /// Label shown in the dropdown, e.g. `English (en)`.
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.display_name, self.identifier)
    }
}

/// Languages offered by the server and the one to fall back to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSettings {
    pub languages: Vec<LanguageOption>,
    pub default_language: String,
}

impl LanguageSettings {
    /// Language to start with: the browser's if listed, else the default.
    pub fn initial_language(&self, browser_language: Option<&str>) -> String {
        browser_language
            .and_then(|b| match_browser_language(&self.languages, b))
            .unwrap_or_else(|| self.default_language.clone())
    }
}

/// Language identifiers end up in file paths and URLs, so only ASCII
/// alphanumerics and `-` are accepted.
pub fn is_valid_language_identifier(identifier: &str) -> bool {
    !identifier.is_empty()
        && identifier.len() <= 16
        && identifier.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Pick the listed language matching a browser locale such as `fr-CA`:
/// an exact match first, then the primary subtag.
pub fn match_browser_language(languages: &[LanguageOption], browser_language: &str) -> Option<String> {
    let browser_language = browser_language.to_ascii_lowercase();
    if let Some(lang) = languages.iter().find(|l| l.identifier.to_ascii_lowercase() == browser_language) {
        return Some(lang.identifier.clone());
    }
    let primary = browser_language.split('-').next()?;
    languages
        .iter()
        .find(|l| l.identifier.to_ascii_lowercase() == primary)
        .map(|l| l.identifier.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langs() -> Vec<LanguageOption> {
        vec![
            LanguageOption::new("en", "English"),
            LanguageOption::new("fr", "Français"),
            LanguageOption::new("pt-br", "Português (Brasil)"),
        ]
    }

    #[test]
    fn option_label_includes_identifier() {
        assert_eq!(LanguageOption::new("de", "Deutsch").option_label(), "Deutsch (de)");
    }

    #[test]
    fn identifier_validation_rejects_path_tricks() {
        assert!(is_valid_language_identifier("zh-chs"));
        assert!(!is_valid_language_identifier(""));
        assert!(!is_valid_language_identifier("../etc"));
        assert!(!is_valid_language_identifier("en/x"));
    }

    #[test]
    fn browser_language_matches_exact_then_primary_subtag() {
        assert_eq!(match_browser_language(&langs(), "pt-BR"), Some("pt-br".to_string()));
        assert_eq!(match_browser_language(&langs(), "fr-CA"), Some("fr".to_string()));
        assert_eq!(match_browser_language(&langs(), "ja"), None);
    }

    #[test]
    fn initial_language_prefers_listed_browser_language() {
        let settings = LanguageSettings { languages: langs(), default_language: "en".into() };
        assert_eq!(settings.initial_language(Some("fr-FR")), "fr");
        assert_eq!(settings.initial_language(Some("ja-JP")), "en");
        assert_eq!(settings.initial_language(None), "en");
    }

    #[test]
    fn deserializes_display_name_in_camel_case() {
        let lang: LanguageOption = serde_json::from_str(r#"{"identifier":"it","displayName":"Italiano"}"#).unwrap();
        assert_eq!(lang, LanguageOption::new("it", "Italiano"));
    }
}
