use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    pub script: String,
    pub languages: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslateResponse {
    pub results: Vec<TranslationResult>,
}

impl TranslateResponse {
    /// Audio reference of the last successful result, in response order.
    pub fn last_audio(&self) -> Option<&str> {
        self.results.iter().rev().find_map(|r| r.audio_file())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `audio_file` is `None` when the backend produced no speech.
    Translated {
        translation: String,
        audio_file: Option<String>,
    },
    Failed {
        error: String,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "RawResult", into = "RawResult")]
pub struct TranslationResult {
    pub language: String,
    pub outcome: Outcome,
}

impl TranslationResult {
    pub fn translated(
        language: impl Into<String>,
        translation: impl Into<String>,
        audio_file: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            outcome: Outcome::Translated {
                translation: translation.into(),
                audio_file: Some(audio_file.into()),
            },
        }
    }

    pub fn failed(language: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            outcome: Outcome::Failed {
                error: error.into(),
            },
        }
    }

    pub fn audio_file(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Translated { audio_file, .. } => audio_file.as_deref(),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn is_err(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }
}

impl Display for TranslationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Language: {}", self.language)?;
        match &self.outcome {
            Outcome::Translated {
                translation,
                audio_file,
            } => {
                writeln!(f, "Translation: {translation}")?;
                writeln!(f, "Audio File: {}", audio_file.as_deref().unwrap_or_default())
            }
            Outcome::Failed { error } => writeln!(f, "Error: {error}"),
        }
    }
}

/// Wire shape: a non-empty `error` marks the language as failed. Empty
/// strings count as absent for both `error` and `audio_file`.
#[derive(Serialize, Deserialize, Default)]
struct RawResult {
    language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    audio_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<RawResult> for TranslationResult {
    fn from(raw: RawResult) -> Self {
        let outcome = match raw.error.filter(|e| !e.is_empty()) {
            Some(error) => Outcome::Failed { error },
            None => Outcome::Translated {
                translation: raw.translation.unwrap_or_default(),
                audio_file: raw.audio_file.filter(|a| !a.is_empty()),
            },
        };

        Self {
            language: raw.language,
            outcome,
        }
    }
}

impl From<TranslationResult> for RawResult {
    fn from(res: TranslationResult) -> Self {
        match res.outcome {
            Outcome::Translated {
                translation,
                audio_file,
            } => Self {
                language: res.language,
                translation: Some(translation),
                audio_file,
                error: None,
            },
            Outcome::Failed { error } => Self {
                language: res.language,
                error: Some(error),
                ..Default::default()
            },
        }
    }
}
