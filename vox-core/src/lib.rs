use std::sync::Arc;

use vox_dto::VoxProvider;

pub mod config;
pub mod drag;
pub mod edit;
mod folders;
#[cfg(test)]
mod mock;
mod panel;
mod prompter;

pub use config::{Config, Language};
pub use drag::{DragPayload, DragState, MoveRequest};
pub use edit::{EditState, EditTarget, PendingRename};
pub use folders::{FolderManager, Listener};
pub use panel::{PanelError, TranslatePanel};
pub use prompter::Prompter;

/// Both controllers, sharing one backend and one set of dialogs.
#[derive(Clone)]
pub struct App {
    pub config: Config,
    pub folders: FolderManager,
    pub panel: TranslatePanel,
}

impl App {
    pub fn new(
        config: Config,
        provider: Arc<Box<dyn VoxProvider>>,
        prompter: Arc<Box<dyn Prompter>>,
    ) -> Self {
        let folders = FolderManager::new(provider.clone(), prompter.clone());
        let panel = TranslatePanel::new(provider, prompter, folders.clone());

        Self {
            config,
            folders,
            panel,
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App").field("config", &self.config).finish()
    }
}
