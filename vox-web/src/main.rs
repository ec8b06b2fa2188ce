#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use vox_dto::{Folder, SidebarFolder};

use crate::{
    components::Sidebar,
    overlays::{OverlayEnum, Overender, Overlays},
    pages::{Folders, Translate},
    utils::App,
};

mod components;
mod nav;
mod overlays;
mod pages;
mod prompter;
mod styles;
mod utils;

const CONFIG: &str = include_str!("../vox.toml");

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting vox");

    dioxus::launch(TheApp);
}

static APP: GlobalSignal<App> = Signal::global(App::new);
static CURRENT_ROUTE: GlobalSignal<Route> = Signal::global(|| Route::Translate {});
pub static OVERLAY: GlobalSignal<Overlays> = Signal::global(Default::default);

/// Mirrors of the folder manager's last fetch, written by its listener.
pub static FOLDERS: GlobalSignal<Vec<Folder>> = Signal::global(Vec::new);
pub static SIDEBAR: GlobalSignal<Vec<SidebarFolder>> = Signal::global(Vec::new);

pub fn pop_overlay() {
    OVERLAY.write().pop();
}

pub fn append_overlay(overlay: OverlayEnum) {
    OVERLAY.write().append(overlay);
}

#[component]
pub fn TheApp() -> Element {
    use_hook(|| {
        let folders = APP.read().folders();
        spawn(async move {
            folders.refresh_all().await;
        });
    });

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: asset!("/public/main.css")
        }

        div {
            class: "bg-white min-h-screen",
            Router::<Route> {}
        }
    }
}

#[component]
fn Wrapper() -> Element {
    *CURRENT_ROUTE.write() = use_route::<Route>();

    rsx! {
        div {
            class: "h-screen overflow-hidden flex flex-col",
            crate::nav::nav {}

            div {
                class: "flex-1 overflow-hidden flex flex-row",
                Sidebar {}

                div {
                    class: "flex-1 overflow-auto p-6",
                    Outlet::<Route> {}
                }
            }

            Overender {}
        }
    }
}

#[derive(Copy, Clone, Routable, Debug, PartialEq, Hash, Eq)]
pub enum Route {
    #[layout(Wrapper)]
    #[route("/")]
    Translate {},
    #[route("/folders")]
    Folders {},
}

impl Route {
    pub fn label(&self) -> &'static str {
        match self {
            Route::Translate {} => "translate",
            Route::Folders {} => "folders",
        }
    }
}
