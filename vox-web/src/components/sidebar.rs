use dioxus::prelude::*;

use crate::{APP, SIDEBAR};

#[component]
pub fn Sidebar() -> Element {
    rsx! {
        aside {
            class: "w-56 flex-shrink-0 border-r border-gray-200 p-4 overflow-auto",
            h2 {
                class: "text-sm font-semibold uppercase text-gray-500 mb-2",
                "Folders"
            }
            ul {
                id: "sidebarFolders",
                class: "space-y-1",
                for folder in SIDEBAR.cloned() {
                    li {
                        key: "{folder.id}",
                        a {
                            class: "text-gray-700 hover:text-gray-950",
                            href: "/folders#folder-{folder.id}",
                            "📁 {folder.name}"
                        }
                    }
                }
                li {
                    button {
                        class: "add-folder-btn {crate::styles::SMALL_BUTTON} mt-2",
                        onclick: move |_| {
                            let folders = APP.read().folders();
                            spawn(async move {
                                folders.create_folder().await;
                            });
                        },
                        "+ New Folder"
                    }
                }
            }
        }
    }
}
