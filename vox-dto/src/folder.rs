use serde::{Deserialize, Serialize};

use crate::{AudioId, FolderId};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Audio {
    pub id: AudioId,
    pub name: String,
    pub file_path: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    #[serde(default)]
    pub audios: Vec<Audio>,
}

impl Folder {
    pub fn contains(&self, audio: AudioId) -> bool {
        self.audios.iter().any(|a| a.id == audio)
    }

    pub fn is_empty(&self) -> bool {
        self.audios.is_empty()
    }
}

/// Folder entry as shown in the sidebar. Decodes from either endpoint since
/// unknown fields like `audios` are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SidebarFolder {
    pub id: FolderId,
    pub name: String,
}

impl From<&Folder> for SidebarFolder {
    fn from(folder: &Folder) -> Self {
        Self {
            id: folder.id,
            name: folder.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree() -> Vec<Folder> {
        serde_json::from_value(json!([
            {"id": 1, "name": "Podcasts", "audios": []},
            {"id": 2, "name": "Clips", "audios": [
                {"id": 9, "name": "intro", "file_path": "/a.mp3"}
            ]}
        ]))
        .unwrap()
    }

    #[test]
    fn decodes_folder_tree() {
        let folders = tree();
        assert_eq!(folders.len(), 2);
        assert!(folders[0].is_empty());
        assert_eq!(folders[1].audios[0].file_path, "/a.mp3");
        assert_eq!(folders[1].audios[0].id, AudioId(9));
    }

    #[test]
    fn missing_audios_defaults_to_empty() {
        let folder: Folder = serde_json::from_value(json!({"id": 4, "name": "x"})).unwrap();
        assert!(folder.is_empty());
    }

    #[test]
    fn contains_checks_nested_audio() {
        let folders = tree();
        assert!(folders[1].contains(AudioId(9)));
        assert!(!folders[0].contains(AudioId(9)));
    }

    #[test]
    fn sidebar_ignores_nested_audio() {
        let sidebar: Vec<SidebarFolder> = serde_json::from_value(json!([
            {"id": 2, "name": "Clips", "audios": [{"id": 9, "name": "intro", "file_path": "/a.mp3"}]}
        ]))
        .unwrap();

        assert_eq!(
            sidebar,
            vec![SidebarFolder {
                id: FolderId(2),
                name: "Clips".to_string()
            }]
        );
    }
}
