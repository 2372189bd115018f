use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::DateFormats;
use crate::titletranslate::TranslateOptions;

pub const DEFAULT_LANG: &str = "en";
pub const LANG_ENV: &str = "WIKIDATE_LANG";
pub const CONFIG_DIR: &str = ".wikidate";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct WikidateConfig {
    #[serde(default)]
    pub date: DateSection,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DateSection {
    pub lang: Option<String>,
    #[serde(default = "default_ignore_first_letter_case")]
    pub ignore_first_letter_case: bool,
    #[serde(default)]
    pub translate_languages: Vec<String>,
}

impl Default for DateSection {
    fn default() -> Self {
        Self {
            lang: None,
            ignore_first_letter_case: default_ignore_first_letter_case(),
            translate_languages: Vec::new(),
        }
    }
}

fn default_ignore_first_letter_case() -> bool {
    true
}

impl WikidateConfig {
    /// Resolve the working language: flag > env WIKIDATE_LANG > config > DEFAULT_LANG.
    pub fn lang(&self, flag: Option<&str>) -> String {
        resolve_lang(flag, env::var(LANG_ENV).ok().as_deref(), self.date.lang.as_deref())
    }

    pub fn formats(&self) -> DateFormats {
        DateFormats::new().ignore_first_letter_case(self.date.ignore_first_letter_case)
    }

    pub fn translate_options(&self) -> TranslateOptions {
        TranslateOptions {
            languages: self.date.translate_languages.clone(),
        }
    }
}

fn resolve_lang(flag: Option<&str>, env_value: Option<&str>, configured: Option<&str>) -> String {
    [flag, env_value, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_LANG)
        .to_string()
}

/// `.wikidate/config.toml` under `root`.
pub fn default_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load and parse a WikidateConfig from a TOML file. Returns default if file doesn't exist.
pub fn load_config(config_path: &Path) -> Result<WikidateConfig> {
    if !config_path.exists() {
        return Ok(WikidateConfig::default());
    }
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    let parsed: WikidateConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_uses_english_and_case_retry() {
        let config = WikidateConfig::default();
        assert!(config.date.lang.is_none());
        assert!(config.date.ignore_first_letter_case);
        assert!(config.date.translate_languages.is_empty());
    }

    #[test]
    fn load_config_returns_default_for_missing_file() {
        let config = load_config(Path::new("/nonexistent/config.toml")).expect("load config");
        assert_eq!(config, WikidateConfig::default());
    }

    #[test]
    fn load_config_parses_date_section() {
        let temp = tempdir().expect("tempdir");
        let config_path = default_config_path(temp.path());
        fs::create_dir_all(config_path.parent().expect("parent")).expect("create dir");
        fs::write(
            &config_path,
            r#"
[date]
lang = "fr"
ignore_first_letter_case = false
translate_languages = ["de", "en"]
"#,
        )
        .expect("write config");

        let config = load_config(&config_path).expect("load config");
        assert_eq!(config.date.lang.as_deref(), Some("fr"));
        assert!(!config.date.ignore_first_letter_case);
        assert_eq!(config.date.translate_languages, vec!["de", "en"]);
        assert_eq!(config.translate_options().languages, vec!["de", "en"]);
        assert_eq!(config.formats().get_auto_format("fr", "années 1980"), None);
    }

    #[test]
    fn load_config_tolerates_partial_toml() {
        let temp = tempdir().expect("tempdir");
        let config_path = temp.path().join("config.toml");
        fs::write(&config_path, "[wiki]\nurl = \"https://example.wiki\"\n\n[date]\nlang = \"de\"\n")
            .expect("write config");

        let config = load_config(&config_path).expect("load config");
        assert_eq!(config.date.lang.as_deref(), Some("de"));
        assert!(config.date.ignore_first_letter_case);
        assert!(config.date.translate_languages.is_empty());
    }

    #[test]
    fn load_config_returns_error_for_invalid_toml() {
        let temp = tempdir().expect("tempdir");
        let config_path = temp.path().join("config.toml");
        fs::write(&config_path, "[date\nlang = \"oops\"").expect("write config");
        let error = load_config(&config_path).expect_err("must fail");
        assert!(error.to_string().contains("failed to parse"));
    }

    #[test]
    fn lang_resolution_order() {
        assert_eq!(resolve_lang(Some("de"), Some("fr"), Some("ja")), "de");
        assert_eq!(resolve_lang(None, Some("fr"), Some("ja")), "fr");
        assert_eq!(resolve_lang(None, Some("  "), Some("ja")), "ja");
        assert_eq!(resolve_lang(Some(""), None, None), DEFAULT_LANG);
    }

    #[test]
    fn default_config_path_is_under_project_root() {
        assert_eq!(
            default_config_path(Path::new("/repo")),
            PathBuf::from("/repo/.wikidate/config.toml")
        );
    }
}
