use std::sync::{Arc, RwLock};

use tracing::{error, info};
use vox_dto::{
    ApiError, FolderId, SaveAudio, SidebarFolder, TranslateRequest, TranslationResult, VoxProvider,
};

use crate::{FolderManager, Prompter};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    #[error("{0}")]
    Validation(&'static str),
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub const MISSING_INPUT: &str = "Please enter a script and select at least one language.";
pub const NO_AUDIO: &str = "Please generate an audio file first.";
pub const EMPTY_NAME: &str = "Audio name cannot be empty.";

/// Translate form plus the single savable "last generated audio" slot.
#[derive(Clone)]
pub struct TranslatePanel {
    provider: Arc<Box<dyn VoxProvider>>,
    prompter: Arc<Box<dyn Prompter>>,
    folders: FolderManager,
    results: Arc<RwLock<Vec<TranslationResult>>>,
    last_audio: Arc<RwLock<Option<String>>>,
}

impl TranslatePanel {
    pub fn new(
        provider: Arc<Box<dyn VoxProvider>>,
        prompter: Arc<Box<dyn Prompter>>,
        folders: FolderManager,
    ) -> Self {
        Self {
            provider,
            prompter,
            folders,
            results: Default::default(),
            last_audio: Default::default(),
        }
    }

    pub fn results(&self) -> Vec<TranslationResult> {
        self.results.read().unwrap().clone()
    }

    pub fn last_audio(&self) -> Option<String> {
        self.last_audio.read().unwrap().clone()
    }

    /// The output box contents, one block per language.
    pub fn output_text(&self) -> String {
        self.results
            .read()
            .unwrap()
            .iter()
            .map(|r| format!("{r}\n"))
            .collect()
    }

    /// Returns whether the output was replaced. Nothing is sent when the
    /// script or the language selection is empty.
    pub async fn submit_translation(&self, script: &str, languages: Vec<String>) -> bool {
        if script.is_empty() || languages.is_empty() {
            self.prompter.alert(MISSING_INPUT);
            return false;
        }

        let req = TranslateRequest {
            script: script.to_string(),
            languages,
        };

        let resp = match self.provider.translate(req).await {
            Ok(resp) => resp,
            Err(e) => {
                error!("Error: {e}");
                self.prompter
                    .alert("An error occurred while processing the translation.");
                return false;
            }
        };

        // Results without audio leave the previous reference in place.
        if let Some(audio) = resp.last_audio() {
            *self.last_audio.write().unwrap() = Some(audio.to_string());
        }

        info!(
            "translated into {} languages, {} failed",
            resp.results.len(),
            resp.results.iter().filter(|r| r.is_err()).count()
        );
        *self.results.write().unwrap() = resp.results;
        true
    }

    pub async fn save_audio(&self, name: &str, folder: FolderId) -> Result<(), PanelError> {
        let Some(audio_path) = self.last_audio() else {
            return Err(PanelError::Validation(NO_AUDIO));
        };

        if name.is_empty() {
            return Err(PanelError::Validation(EMPTY_NAME));
        }

        self.provider
            .save_audio(SaveAudio {
                name: name.to_string(),
                folder_id: folder,
                audio_path,
            })
            .await?;

        Ok(())
    }

    /// Asks for a name and a destination folder, then saves the last audio.
    pub async fn save_last_audio(&self) -> bool {
        if self.last_audio().is_none() {
            self.prompter.alert(NO_AUDIO);
            return false;
        }

        let name = self
            .prompter
            .prompt("Enter a name for the audio file:")
            .await
            .unwrap_or_default();
        if name.is_empty() {
            self.prompter.alert(EMPTY_NAME);
            return false;
        }

        let folders = match self.provider.load_folders().await {
            Ok(folders) => folders,
            Err(e) => {
                error!("Error loading folders: {e}");
                self.prompter.alert("Error loading folders");
                return false;
            }
        };

        let choices = folders.iter().map(SidebarFolder::from).collect();
        let Some(folder) = self.prompter.choose_folder("Save Audio", choices).await else {
            return false;
        };

        match self.save_audio(&name, folder).await {
            Ok(()) => {
                self.prompter.alert("Audio saved successfully!");
                self.folders.load_folders().await;
                true
            }
            Err(e) => {
                error!("Error: {e}");
                self.prompter.alert("Error saving audio");
                false
            }
        }
    }
}
