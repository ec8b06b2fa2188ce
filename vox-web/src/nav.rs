use dioxus::prelude::*;

use crate::{Route, CURRENT_ROUTE, SIDEBAR};

const PAGES: [Route; 2] = [Route::Translate {}, Route::Folders {}];

fn tab(route: Route) -> Element {
    let active = CURRENT_ROUTE.cloned() == route;
    let style = if active {
        "font-bold text-gray-950 border-b-2 border-blue-500"
    } else {
        "text-gray-600 hover:text-gray-950"
    };

    rsx! {
        li {
            key: "{route.label()}",
            Link {
                class: "{style} text-lg capitalize",
                to: route,
                aria_current: if active { "page" } else { "" },
                "{route.label()}"
            }
        }
    }
}

#[component]
pub fn nav() -> Element {
    let folder_count = SIDEBAR.read().len();

    rsx! {
        header {
            class: "flex items-center justify-between w-full px-6 py-4 border-b border-gray-200",
            span { class: "text-xl font-bold", "vox" }
            ul {
                class: "flex flex-row space-x-6",
                for route in PAGES {
                    { tab(route) }
                }
            }
            span { class: "text-sm text-gray-500", "{folder_count} folders" }
        }
    }
}
