use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

mod error;
mod folder;
mod translate;

pub use error::ApiError;
pub use folder::{Audio, Folder, SidebarFolder};
pub use translate::{Outcome, TranslateRequest, TranslateResponse, TranslationResult};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct FolderId(pub i64);

impl Display for FolderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct AudioId(pub i64);

impl Display for AudioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NameBody {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoveAudio {
    pub audio_id: AudioId,
    pub target_folder_id: FolderId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SaveAudio {
    pub name: String,
    pub folder_id: FolderId,
    pub audio_path: String,
}

/// The REST backend the client talks to.
///
/// Mutating calls only report success; callers re-fetch with
/// [`VoxProvider::load_folders`] afterwards instead of patching local state.
#[async_trait::async_trait(?Send)]
pub trait VoxProvider {
    async fn translate(&self, req: TranslateRequest) -> ApiResult<TranslateResponse>;
    async fn load_folders(&self) -> ApiResult<Vec<Folder>>;
    async fn load_sidebar_folders(&self) -> ApiResult<Vec<SidebarFolder>>;
    async fn create_folder(&self, name: String) -> ApiResult<()>;
    async fn rename_folder(&self, id: FolderId, name: String) -> ApiResult<()>;
    async fn delete_folder(&self, id: FolderId) -> ApiResult<()>;
    async fn rename_audio(&self, id: AudioId, name: String) -> ApiResult<()>;
    async fn delete_audio(&self, id: AudioId) -> ApiResult<()>;
    async fn move_audio(&self, req: MoveAudio) -> ApiResult<()>;
    async fn save_audio(&self, req: SaveAudio) -> ApiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn move_body_uses_camel_case_numbers() {
        let body = MoveAudio {
            audio_id: AudioId(9),
            target_folder_id: FolderId(1),
        };

        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"audioId": 9, "targetFolderId": 1})
        );
    }

    #[test]
    fn save_body_shape() {
        let body = SaveAudio {
            name: "greeting".to_string(),
            folder_id: FolderId(3),
            audio_path: "/audio/audio_20240101_120000_fr.mp3".to_string(),
        };

        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "name": "greeting",
                "folderId": 3,
                "audioPath": "/audio/audio_20240101_120000_fr.mp3"
            })
        );
    }
}
