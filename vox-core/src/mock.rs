//! In-memory backend and scripted dialogs for controller tests.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use vox_dto::{
    ApiError, ApiResult, AudioId, Folder, FolderId, MoveAudio, SaveAudio, SidebarFolder,
    TranslateRequest, TranslateResponse, VoxProvider,
};

use crate::Prompter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Translate(TranslateRequest),
    LoadFolders,
    LoadSidebar,
    CreateFolder(String),
    RenameFolder(FolderId, String),
    DeleteFolder(FolderId),
    RenameAudio(AudioId, String),
    DeleteAudio(AudioId),
    MoveAudio(MoveAudio),
    SaveAudio(SaveAudio),
}

#[derive(Default)]
struct Backend {
    folders: Vec<Folder>,
    translation: TranslateResponse,
    calls: Vec<Call>,
    failure: Option<ApiError>,
    next_audio: i64,
}

/// Behaves like the real backend: mutations change the stored tree so the
/// following re-fetch reflects them.
#[derive(Clone, Default)]
pub struct MockProvider {
    inner: Arc<Mutex<Backend>>,
}

impl MockProvider {
    pub fn new(folders: Vec<Folder>) -> Self {
        let next_audio = folders
            .iter()
            .flat_map(|f| f.audios.iter().map(|a| a.id.0))
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            inner: Arc::new(Mutex::new(Backend {
                folders,
                next_audio,
                ..Default::default()
            })),
        }
    }

    pub fn boxed(&self) -> Arc<Box<dyn VoxProvider>> {
        Arc::new(Box::new(self.clone()))
    }

    pub fn set_translation(&self, resp: TranslateResponse) {
        self.inner.lock().unwrap().translation = resp;
    }

    /// Every following call fails with `err`.
    pub fn fail_with(&self, err: ApiError) {
        self.inner.lock().unwrap().failure = Some(err);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().calls.clear();
    }

    pub fn stored(&self) -> Vec<Folder> {
        self.inner.lock().unwrap().folders.clone()
    }

    fn record<T>(&self, call: Call, f: impl FnOnce(&mut Backend) -> T) -> ApiResult<T> {
        let mut backend = self.inner.lock().unwrap();
        backend.calls.push(call);
        if let Some(err) = backend.failure.clone() {
            return Err(err);
        }
        Ok(f(&mut *backend))
    }
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        message: "Not Found".to_string(),
    }
}

#[async_trait::async_trait(?Send)]
impl VoxProvider for MockProvider {
    async fn translate(&self, req: TranslateRequest) -> ApiResult<TranslateResponse> {
        self.record(Call::Translate(req), |b| b.translation.clone())
    }

    async fn load_folders(&self) -> ApiResult<Vec<Folder>> {
        self.record(Call::LoadFolders, |b| b.folders.clone())
    }

    async fn load_sidebar_folders(&self) -> ApiResult<Vec<SidebarFolder>> {
        self.record(Call::LoadSidebar, |b| {
            b.folders.iter().map(SidebarFolder::from).collect()
        })
    }

    async fn create_folder(&self, name: String) -> ApiResult<()> {
        self.record(Call::CreateFolder(name.clone()), |b| {
            let id = b.folders.iter().map(|f| f.id.0).max().unwrap_or(0) + 1;
            b.folders.push(Folder {
                id: FolderId(id),
                name,
                audios: vec![],
            });
        })
    }

    async fn rename_folder(&self, id: FolderId, name: String) -> ApiResult<()> {
        self.record(Call::RenameFolder(id, name.clone()), |b| -> ApiResult<()> {
            let folder = b.folders.iter_mut().find(|f| f.id == id).ok_or_else(not_found)?;
            folder.name = name;
            Ok(())
        })?
    }

    async fn delete_folder(&self, id: FolderId) -> ApiResult<()> {
        self.record(Call::DeleteFolder(id), |b| b.folders.retain(|f| f.id != id))
    }

    async fn rename_audio(&self, id: AudioId, name: String) -> ApiResult<()> {
        self.record(Call::RenameAudio(id, name.clone()), |b| -> ApiResult<()> {
            let audio = b
                .folders
                .iter_mut()
                .flat_map(|f| f.audios.iter_mut())
                .find(|a| a.id == id)
                .ok_or_else(not_found)?;
            audio.name = name;
            Ok(())
        })?
    }

    async fn delete_audio(&self, id: AudioId) -> ApiResult<()> {
        self.record(Call::DeleteAudio(id), |b| {
            for folder in b.folders.iter_mut() {
                folder.audios.retain(|a| a.id != id);
            }
        })
    }

    async fn move_audio(&self, req: MoveAudio) -> ApiResult<()> {
        self.record(Call::MoveAudio(req), |b| -> ApiResult<()> {
            let mut moved = None;
            for folder in b.folders.iter_mut() {
                if let Some(pos) = folder.audios.iter().position(|a| a.id == req.audio_id) {
                    moved = Some(folder.audios.remove(pos));
                }
            }
            let audio = moved.ok_or_else(not_found)?;
            let target = b
                .folders
                .iter_mut()
                .find(|f| f.id == req.target_folder_id)
                .ok_or_else(not_found)?;
            target.audios.push(audio);
            Ok(())
        })?
    }

    async fn save_audio(&self, req: SaveAudio) -> ApiResult<()> {
        self.record(Call::SaveAudio(req.clone()), |b| -> ApiResult<()> {
            let id = AudioId(b.next_audio);
            b.next_audio += 1;
            let folder = b
                .folders
                .iter_mut()
                .find(|f| f.id == req.folder_id)
                .ok_or_else(not_found)?;
            folder.audios.push(vox_dto::Audio {
                id,
                name: req.name,
                file_path: req.audio_path,
            });
            Ok(())
        })?
    }
}

#[derive(Default)]
struct Script {
    confirms: VecDeque<bool>,
    prompts: VecDeque<Option<String>>,
    choices: VecDeque<Option<FolderId>>,
    alerts: Vec<String>,
    offered: Vec<Vec<SidebarFolder>>,
}

/// Answers dialogs from queues; an exhausted queue means the user cancelled.
#[derive(Clone, Default)]
pub struct ScriptedPrompter {
    inner: Arc<Mutex<Script>>,
}

impl ScriptedPrompter {
    pub fn boxed(&self) -> Arc<Box<dyn Prompter>> {
        Arc::new(Box::new(self.clone()))
    }

    pub fn push_confirm(&self, answer: bool) {
        self.inner.lock().unwrap().confirms.push_back(answer);
    }

    pub fn push_prompt(&self, answer: Option<String>) {
        self.inner.lock().unwrap().prompts.push_back(answer);
    }

    pub fn push_choice(&self, answer: Option<FolderId>) {
        self.inner.lock().unwrap().choices.push_back(answer);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.inner.lock().unwrap().alerts.clone()
    }

    pub fn offered(&self) -> Vec<Vec<SidebarFolder>> {
        self.inner.lock().unwrap().offered.clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Prompter for ScriptedPrompter {
    fn alert(&self, msg: &str) {
        self.inner.lock().unwrap().alerts.push(msg.to_string());
    }

    async fn confirm(&self, _question: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .confirms
            .pop_front()
            .unwrap_or(false)
    }

    async fn prompt(&self, _question: &str) -> Option<String> {
        self.inner.lock().unwrap().prompts.pop_front().flatten()
    }

    async fn choose_folder(&self, _title: &str, folders: Vec<SidebarFolder>) -> Option<FolderId> {
        let mut script = self.inner.lock().unwrap();
        script.offered.push(folders);
        script.choices.pop_front().flatten()
    }
}
