use vox_dto::{FolderId, SidebarFolder};

/// Blocking user dialogs. The controllers await these the way a page would
/// await `confirm()` or `prompt()`.
#[async_trait::async_trait(?Send)]
pub trait Prompter {
    fn alert(&self, msg: &str);
    async fn confirm(&self, question: &str) -> bool;
    /// `None` when the user cancels.
    async fn prompt(&self, question: &str) -> Option<String>;
    async fn choose_folder(&self, title: &str, folders: Vec<SidebarFolder>) -> Option<FolderId>;
}
