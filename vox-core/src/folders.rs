use std::sync::{Arc, RwLock};

use tracing::{error, info};
use vox_dto::{AudioId, Folder, FolderId, SidebarFolder, VoxProvider};

use crate::{
    drag::MoveRequest,
    edit::{EditTarget, PendingRename},
    Prompter,
};

pub type Listener = Arc<Box<dyn Fn(&FolderManager)>>;

/// Folder grid and sidebar mirror. Every mutation is one request followed by
/// a full re-fetch; local state is never patched.
#[derive(Clone)]
pub struct FolderManager {
    provider: Arc<Box<dyn VoxProvider>>,
    prompter: Arc<Box<dyn Prompter>>,
    folders: Arc<RwLock<Vec<Folder>>>,
    sidebar: Arc<RwLock<Vec<SidebarFolder>>>,
    listener: Arc<RwLock<Option<Listener>>>,
}

impl FolderManager {
    pub fn new(provider: Arc<Box<dyn VoxProvider>>, prompter: Arc<Box<dyn Prompter>>) -> Self {
        Self {
            provider,
            prompter,
            folders: Default::default(),
            sidebar: Default::default(),
            listener: Default::default(),
        }
    }

    /// Called whenever the grid or the sidebar has been replaced.
    pub fn set_listener(&self, f: Listener) {
        *self.listener.write().unwrap() = Some(f);
    }

    fn notify(&self) {
        let listener = self.listener.read().unwrap().clone();
        if let Some(f) = listener {
            f(self);
        }
    }

    pub fn folders(&self) -> Vec<Folder> {
        self.folders.read().unwrap().clone()
    }

    pub fn sidebar(&self) -> Vec<SidebarFolder> {
        self.sidebar.read().unwrap().clone()
    }

    pub async fn load_folders(&self) {
        match self.provider.load_folders().await {
            Ok(folders) => {
                info!("loaded {} folders", folders.len());
                *self.folders.write().unwrap() = folders;
                self.notify();
            }
            Err(e) => error!("Error loading folders: {e}"),
        }
    }

    pub async fn load_sidebar(&self) {
        match self.provider.load_sidebar_folders().await {
            Ok(folders) => {
                *self.sidebar.write().unwrap() = folders;
                self.notify();
            }
            Err(e) => error!("Error loading sidebar folders: {e}"),
        }
    }

    pub async fn refresh_all(&self) {
        self.load_folders().await;
        self.load_sidebar().await;
    }

    /// Cancelling or entering an empty name does nothing at all.
    pub async fn create_folder(&self) -> bool {
        let Some(name) = self.prompter.prompt("Enter folder name:").await else {
            return false;
        };

        if name.is_empty() {
            return false;
        }

        match self.provider.create_folder(name).await {
            Ok(()) => {
                self.refresh_all().await;
                true
            }
            Err(e) => {
                error!("Error creating folder: {e}");
                self.prompter.alert("Failed to create folder");
                false
            }
        }
    }

    /// Sends the rename as-is, even when empty; the backend decides.
    pub async fn rename(&self, target: EditTarget, name: String) -> bool {
        let res = match target {
            EditTarget::Folder(id) => self.provider.rename_folder(id, name).await,
            EditTarget::Audio(id) => self.provider.rename_audio(id, name).await,
        };

        match res {
            Ok(()) => {
                self.refresh_all().await;
                true
            }
            Err(e) => {
                error!("Error saving edit of {target:?}: {e}");
                self.prompter.alert("Failed to save changes");
                false
            }
        }
    }

    pub async fn commit_edit(&self, pending: PendingRename) -> bool {
        self.rename(pending.target, pending.name).await
    }

    pub async fn rename_folder(&self, id: FolderId, name: String) -> bool {
        self.rename(EditTarget::Folder(id), name).await
    }

    pub async fn rename_audio(&self, id: AudioId, name: String) -> bool {
        self.rename(EditTarget::Audio(id), name).await
    }

    pub async fn delete_folder(&self, id: FolderId) -> bool {
        if !self
            .prompter
            .confirm("Are you sure you want to delete this folder?")
            .await
        {
            return false;
        }

        match self.provider.delete_folder(id).await {
            Ok(()) => {
                self.refresh_all().await;
                true
            }
            Err(e) => {
                error!("Error deleting folder: {e}");
                self.prompter.alert("Failed to delete folder");
                false
            }
        }
    }

    pub async fn delete_audio(&self, id: AudioId) -> bool {
        if !self
            .prompter
            .confirm("Are you sure you want to delete this audio?")
            .await
        {
            return false;
        }

        match self.provider.delete_audio(id).await {
            Ok(()) => {
                self.load_folders().await;
                true
            }
            Err(e) => {
                error!("Error deleting audio: {e}");
                self.prompter.alert("Failed to delete audio");
                false
            }
        }
    }

    pub async fn move_audio(&self, req: MoveRequest) -> bool {
        if req.is_noop() {
            return false;
        }

        info!("moving audio {} from {} to {}", req.audio, req.from, req.to);
        match self.provider.move_audio(req.body()).await {
            Ok(()) => {
                self.load_folders().await;
                true
            }
            Err(e) => {
                error!("Error moving audio: {e}");
                self.prompter.alert("Failed to move audio");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mock::{Call, MockProvider, ScriptedPrompter},
        DragState,
    };
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;
    use vox_dto::{ApiError, MoveAudio};

    fn fixture() -> Vec<Folder> {
        serde_json::from_value(json!([
            {"id": 1, "name": "Podcasts", "audios": []},
            {"id": 2, "name": "Clips", "audios": [{"id": 9, "name": "intro", "file_path": "/a.mp3"}]}
        ]))
        .unwrap()
    }

    fn setup() -> (FolderManager, MockProvider, ScriptedPrompter) {
        let provider = MockProvider::new(fixture());
        let prompter = ScriptedPrompter::default();
        let manager = FolderManager::new(provider.boxed(), prompter.boxed());
        (manager, provider, prompter)
    }

    #[tokio::test]
    async fn drag_to_other_folder_moves_and_refetches_once() {
        let (manager, provider, _) = setup();
        manager.load_folders().await;
        provider.clear_calls();

        let mut drag = DragState::default();
        drag.start(AudioId(9), FolderId(2));
        drag.over(FolderId(1));
        let req = drag.drop_on(FolderId(1)).unwrap();
        drag.end();

        assert!(manager.move_audio(req).await);
        assert_eq!(
            provider.calls(),
            vec![
                Call::MoveAudio(MoveAudio {
                    audio_id: AudioId(9),
                    target_folder_id: FolderId(1)
                }),
                Call::LoadFolders,
            ]
        );

        let folders = manager.folders();
        assert!(folders[0].contains(AudioId(9)));
        assert!(folders[1].is_empty());
    }

    #[tokio::test]
    async fn drop_on_own_folder_sends_nothing() {
        let (manager, provider, _) = setup();

        let mut drag = DragState::default();
        drag.start(AudioId(9), FolderId(2));
        assert_eq!(drag.drop_on(FolderId(2)), None);

        let noop = MoveRequest {
            audio: AudioId(9),
            from: FolderId(2),
            to: FolderId(2),
        };
        assert!(!manager.move_audio(noop).await);
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn failed_move_alerts_without_refresh() {
        let (manager, provider, prompter) = setup();
        provider.fail_with(ApiError::Network("offline".into()));

        let req = MoveRequest {
            audio: AudioId(9),
            from: FolderId(2),
            to: FolderId(1),
        };
        assert!(!manager.move_audio(req).await);
        assert_eq!(prompter.alerts(), vec!["Failed to move audio".to_string()]);
        assert_eq!(provider.calls().len(), 1);
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let (manager, provider, prompter) = setup();
        prompter.push_confirm(false);
        prompter.push_confirm(false);

        assert!(!manager.delete_folder(FolderId(1)).await);
        assert!(!manager.delete_audio(AudioId(9)).await);
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn confirmed_folder_delete_refreshes_grid_and_sidebar() {
        let (manager, provider, prompter) = setup();
        prompter.push_confirm(true);

        assert!(manager.delete_folder(FolderId(2)).await);
        assert_eq!(
            provider.calls(),
            vec![
                Call::DeleteFolder(FolderId(2)),
                Call::LoadFolders,
                Call::LoadSidebar
            ]
        );
        assert_eq!(manager.folders().len(), 1);
        assert_eq!(manager.sidebar().len(), 1);
    }

    #[tokio::test]
    async fn confirmed_audio_delete_refreshes_grid_only() {
        let (manager, provider, prompter) = setup();
        prompter.push_confirm(true);

        assert!(manager.delete_audio(AudioId(9)).await);
        assert_eq!(
            provider.calls(),
            vec![Call::DeleteAudio(AudioId(9)), Call::LoadFolders]
        );
    }

    #[tokio::test]
    async fn failed_delete_keeps_stale_view() {
        let (manager, provider, prompter) = setup();
        manager.load_folders().await;
        provider.fail_with(ApiError::Status {
            status: 500,
            message: "boom".into(),
        });
        prompter.push_confirm(true);

        assert!(!manager.delete_folder(FolderId(2)).await);
        assert_eq!(prompter.alerts(), vec!["Failed to delete folder".to_string()]);
        assert_eq!(manager.folders(), fixture());
    }

    #[tokio::test]
    async fn empty_folder_name_aborts_silently() {
        let (manager, provider, prompter) = setup();
        prompter.push_prompt(Some(String::new()));
        prompter.push_prompt(None);

        assert!(!manager.create_folder().await);
        assert!(!manager.create_folder().await);
        assert!(provider.calls().is_empty());
        assert!(prompter.alerts().is_empty());
    }

    #[tokio::test]
    async fn create_folder_refreshes_both_views() {
        let (manager, provider, prompter) = setup();
        prompter.push_prompt(Some("Lectures".to_string()));

        assert!(manager.create_folder().await);
        assert_eq!(
            provider.calls(),
            vec![
                Call::CreateFolder("Lectures".to_string()),
                Call::LoadFolders,
                Call::LoadSidebar
            ]
        );
        assert_eq!(manager.sidebar().last().unwrap().name, "Lectures");
    }

    #[tokio::test]
    async fn empty_rename_is_still_sent() {
        let (manager, provider, _) = setup();

        manager.rename_folder(FolderId(1), String::new()).await;
        manager.rename_audio(AudioId(9), String::new()).await;

        let calls = provider.calls();
        assert!(calls.contains(&Call::RenameFolder(FolderId(1), String::new())));
        assert!(calls.contains(&Call::RenameAudio(AudioId(9), String::new())));
    }

    #[tokio::test]
    async fn rejected_rename_alerts_and_keeps_names() {
        let (manager, provider, prompter) = setup();
        manager.load_folders().await;
        provider.fail_with(ApiError::Status {
            status: 400,
            message: "name required".into(),
        });

        let pending = PendingRename {
            target: EditTarget::Folder(FolderId(1)),
            name: String::new(),
            original: "Podcasts".to_string(),
        };
        assert!(!manager.commit_edit(pending).await);
        assert_eq!(prompter.alerts(), vec!["Failed to save changes".to_string()]);
        assert_eq!(manager.folders()[0].name, "Podcasts");
    }

    #[tokio::test]
    async fn successful_rename_refreshes_both_views() {
        let (manager, provider, _) = setup();

        assert!(manager.rename_audio(AudioId(9), "opening".to_string()).await);
        assert_eq!(
            provider.calls(),
            vec![
                Call::RenameAudio(AudioId(9), "opening".to_string()),
                Call::LoadFolders,
                Call::LoadSidebar
            ]
        );
        assert_eq!(manager.folders()[1].audios[0].name, "opening");
    }

    #[tokio::test]
    async fn listener_fires_on_reload() {
        let (manager, _, _) = setup();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        manager.set_listener(Arc::new(Box::new(move |_: &FolderManager| {
            counter.set(counter.get() + 1)
        })));

        manager.refresh_all().await;
        assert_eq!(hits.get(), 2);
    }

    #[tokio::test]
    async fn load_failure_keeps_previous_view() {
        let (manager, provider, prompter) = setup();
        manager.load_folders().await;
        provider.fail_with(ApiError::Decode("bad json".into()));

        manager.load_folders().await;
        assert_eq!(manager.folders(), fixture());
        assert!(prompter.alerts().is_empty());
    }
}
