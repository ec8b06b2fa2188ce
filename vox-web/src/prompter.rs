use async_trait::async_trait;
use tracing::{info, warn};
use vox_core::Prompter;
use vox_dto::{FolderId, SidebarFolder};

use crate::overlays::OverlayEnum;

/// Dialogs as overlays. Closing an overlay with ❌ counts as cancelling.
pub struct WebPrompter;

#[async_trait(?Send)]
impl Prompter for WebPrompter {
    fn alert(&self, msg: &str) {
        info!("alert: {msg}");
        OverlayEnum::new_notice(msg).append();
    }

    async fn confirm(&self, question: &str) -> bool {
        let (overlay, rx) = OverlayEnum::new_yesno(question);
        overlay.append();
        rx.await.unwrap_or(false)
    }

    async fn prompt(&self, question: &str) -> Option<String> {
        let (overlay, rx) = OverlayEnum::new_text_input(question);
        overlay.append();
        rx.await.ok().flatten()
    }

    async fn choose_folder(&self, title: &str, folders: Vec<SidebarFolder>) -> Option<FolderId> {
        if folders.is_empty() {
            warn!("no folders to save into");
        }

        let (overlay, rx) = OverlayEnum::new_folder_selector(title, folders);
        overlay.append();
        rx.await.ok().flatten()
    }
}
