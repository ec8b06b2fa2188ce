use dioxus::prelude::*;
use vox_core::{DragState, EditState};

use crate::{components::FolderCard, APP, FOLDERS};

#[component]
pub fn Folders() -> Element {
    let drag: Signal<DragState> = use_signal(Default::default);
    let edit: Signal<EditState> = use_signal(Default::default);

    use_hook(|| {
        let folders = APP.read().folders();
        spawn(async move {
            folders.load_folders().await;
        });
    });

    rsx! {
        div {
            class: "flex flex-col space-y-4",
            div {
                class: "flex justify-between items-center",
                h1 { class: "text-2xl font-bold", "Folders" }
                button {
                    class: "{crate::styles::CREATE_BUTTON}",
                    onclick: move |_| {
                        let folders = APP.read().folders();
                        spawn(async move {
                            folders.create_folder().await;
                        });
                    },
                    "+ New Folder"
                }
            }

            div {
                id: "folderGrid",
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                for folder in FOLDERS.cloned() {
                    FolderCard { key: "{folder.id}", folder, drag, edit }
                }
            }
        }
    }
}
