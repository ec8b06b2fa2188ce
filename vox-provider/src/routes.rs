use vox_dto::{AudioId, FolderId};

pub enum Endpoint {
    Translate,
    Folders,
    SidebarFolders,
    CreateFolder,
    EditFolder(FolderId),
    DeleteFolder(FolderId),
    EditAudio(AudioId),
    DeleteAudio(AudioId),
    MoveAudio,
    SaveAudio,
}

/// Builds absolute request URLs from the configured base.
#[derive(Clone, Debug)]
pub struct Routes {
    base: String,
    sidebar: String,
}

impl Routes {
    pub fn new(base: impl Into<String>, sidebar: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            sidebar: sidebar.into(),
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        let path = match endpoint {
            Endpoint::Translate => "/translate".to_string(),
            Endpoint::Folders => "/get-folders".to_string(),
            Endpoint::SidebarFolders => self.sidebar.clone(),
            Endpoint::CreateFolder => "/create-folder".to_string(),
            Endpoint::EditFolder(id) => format!("/edit-folder/{id}"),
            Endpoint::DeleteFolder(id) => format!("/delete-folder/{id}"),
            Endpoint::EditAudio(id) => format!("/edit-audio/{id}"),
            Endpoint::DeleteAudio(id) => format!("/delete-audio/{id}"),
            Endpoint::MoveAudio => "/move-audio".to_string(),
            Endpoint::SaveAudio => "/save-audio".to_string(),
        };

        if path.starts_with('/') {
            format!("{}{}", self.base, path)
        } else {
            format!("{}/{}", self.base, path)
        }
    }
}

impl Default for Routes {
    fn default() -> Self {
        Self::new("", "/get-sidebar-folders")
    }
}
