use dioxus::prelude::*;
use vox_core::{DragState, EditState, EditTarget};
use vox_dto::{Audio, Folder, FolderId};

use crate::{
    components::EditableName,
    utils::{play_audio, set_drag_payload},
    APP,
};

#[component]
pub fn FolderCard(folder: Folder, drag: Signal<DragState>, edit: Signal<EditState>) -> Element {
    let mut drag = drag;
    let id = folder.id;
    let class = if drag.read().is_highlighted(id) {
        "folder-card drag-over"
    } else {
        "folder-card"
    };

    rsx! {
        div {
            id: "folder-{id}",
            class: "{class}",
            ondragover: move |evt| {
                evt.prevent_default();
                if !drag.read().is_highlighted(id) {
                    drag.write().over(id);
                }
            },
            ondragleave: move |_| drag.write().leave(id),
            ondrop: move |evt| {
                evt.prevent_default();
                let req = drag.write().drop_on(id);
                if let Some(req) = req {
                    let folders = APP.read().folders();
                    spawn(async move {
                        folders.move_audio(req).await;
                    });
                }
            },

            div {
                class: "folder-header flex justify-between items-center mb-2",
                div {
                    class: "folder-title font-semibold",
                    "📁 "
                    EditableName { target: EditTarget::Folder(id), text: folder.name.clone(), edit }
                }
                div {
                    class: "folder-actions",
                    button {
                        class: "{crate::styles::DELETE_BUTTON}",
                        onclick: move |_| {
                            let folders = APP.read().folders();
                            spawn(async move {
                                folders.delete_folder(id).await;
                            });
                        },
                        "Delete"
                    }
                }
            }

            div {
                class: "audio-list space-y-1",
                if folder.audios.is_empty() {
                    div { class: "folder-empty text-gray-400", "No audio files" }
                }
                for audio in folder.audios.iter().cloned() {
                    AudioItem { key: "{audio.id}", audio, folder: id, drag, edit }
                }
            }
        }
    }
}

#[component]
fn AudioItem(
    audio: Audio,
    folder: FolderId,
    drag: Signal<DragState>,
    edit: Signal<EditState>,
) -> Element {
    let mut drag = drag;
    let id = audio.id;
    let opacity = if drag.read().is_dimmed(id) { "0.5" } else { "1" };
    let path = audio.file_path.clone();

    rsx! {
        div {
            class: "audio-item flex items-center space-x-2",
            draggable: "true",
            style: "opacity: {opacity};",
            ondragstart: move |evt| {
                let payload = drag.write().start(id, folder);
                set_drag_payload(&evt, &payload);
            },
            ondragend: move |_| drag.write().end(),

            "🎵 "
            EditableName { target: EditTarget::Audio(id), text: audio.name.clone(), edit }
            button {
                class: "{crate::styles::SMALL_BUTTON}",
                onclick: move |_| play_audio(&path),
                "Play"
            }
            button {
                class: "{crate::styles::DELETE_BUTTON}",
                onclick: move |_| {
                    let folders = APP.read().folders();
                    spawn(async move {
                        folders.delete_audio(id).await;
                    });
                },
                "Delete"
            }
        }
    }
}
