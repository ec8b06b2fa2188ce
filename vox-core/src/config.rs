use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Language {
    pub code: String,
    pub label: String,
}

impl Language {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Prefix for every backend route. Empty means same origin.
    pub api_base: String,
    pub sidebar_route: String,
    pub languages: Vec<Language>,
}

impl Config {
    pub fn from_toml(s: &str) -> eyre::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                warn!("invalid config, using defaults: {e}");
                Self::default()
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            sidebar_route: "/get-sidebar-folders".to_string(),
            languages: vec![
                Language::new("en", "English"),
                Language::new("es", "Spanish"),
                Language::new("fr", "French"),
                Language::new("de", "German"),
                Language::new("it", "Italian"),
                Language::new("pt", "Portuguese"),
                Language::new("ja", "Japanese"),
                Language::new("ko", "Korean"),
                Language::new("zh-CN", "Chinese (Simplified)"),
                Language::new("hi", "Hindi"),
                Language::new("ar", "Arabic"),
                Language::new("ru", "Russian"),
            ],
        }
    }
}
