use dioxus::prelude::*;
use vox_dto::{FolderId, SidebarFolder};

use super::Reply;
use crate::pop_overlay;

#[component]
pub fn FolderSelectorRender(
    title: String,
    folders: Vec<SidebarFolder>,
    selected: Signal<Option<FolderId>>,
    reply: Reply<Option<FolderId>>,
) -> Element {
    let cancel = reply.clone();
    let value = selected.cloned().map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        div {
            class: "flex flex-col space-y-4",
            h3 {
                class: "text-xl font-semibold",
                "{title}"
            }

            if folders.is_empty() {
                p { class: "text-gray-500", "No folders yet" }
            }

            select {
                class: "appearance-none bg-white w-full rounded-md p-2 text-gray-700 border",
                value: "{value}",
                onchange: move |evt| {
                    let id = evt.value().parse().ok().map(FolderId);
                    selected.clone().set(id);
                },
                for folder in folders.iter() {
                    option {
                        value: "{folder.id}",
                        "{folder.name}"
                    }
                }
            }

            div {
                class: "flex flex-row justify-end space-x-2",
                button {
                    class: "{crate::styles::SMALL_BUTTON}",
                    onclick: move |_| {
                        cancel.send(None);
                        pop_overlay();
                    },
                    "Cancel"
                }
                button {
                    class: "{crate::styles::CREATE_BUTTON}",
                    disabled: selected.read().is_none(),
                    onclick: move |_| {
                        reply.send(selected.cloned());
                        pop_overlay();
                    },
                    "Save"
                }
            }
        }
    }
}
