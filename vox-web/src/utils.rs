use std::{fmt::Debug, sync::Arc};

use dioxus::prelude::DragEvent;
use tracing::{info, warn};
use vox_core::{Config, DragPayload, FolderManager, Prompter, TranslatePanel};
use vox_dto::VoxProvider;
use vox_provider::{HttpProvider, Routes};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::{prompter::WebPrompter, FOLDERS, SIDEBAR};

#[derive(Clone)]
pub struct App(Arc<vox_core::App>);

impl App {
    pub fn new() -> Self {
        let config = Config::load_or_default(crate::CONFIG);
        info!("api base: {:?}", config.api_base);

        let routes = Routes::new(config.api_base.clone(), config.sidebar_route.clone());
        let provider: Arc<Box<dyn VoxProvider>> = Arc::new(Box::new(HttpProvider::new(routes)));
        let prompter: Arc<Box<dyn Prompter>> = Arc::new(Box::new(WebPrompter));
        let app = vox_core::App::new(config, provider, prompter);

        app.folders
            .set_listener(Arc::new(Box::new(|folders: &FolderManager| {
                *FOLDERS.write() = folders.folders();
                *SIDEBAR.write() = folders.sidebar();
            })));

        Self(Arc::new(app))
    }

    pub fn folders(&self) -> FolderManager {
        self.0.folders.clone()
    }

    pub fn panel(&self) -> TranslatePanel {
        self.0.panel.clone()
    }

    pub fn config(&self) -> &Config {
        &self.0.config
    }
}

impl Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("App").field(&self.0).finish()
    }
}

/// Fire-and-forget playback through a detached audio element.
pub fn play_audio(path: &str) {
    info!("playing {path}");

    let audio = match HtmlAudioElement::new_with_src(path) {
        Ok(audio) => audio,
        Err(e) => {
            warn!("unable to create audio element: {e:?}");
            return;
        }
    };

    match audio.play() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                warn!("playback failed: {e:?}");
            }
        }),
        Err(e) => warn!("playback failed: {e:?}"),
    }
}

/// Puts `payload` on the native `dataTransfer`. Must run inside `dragstart`.
pub fn set_drag_payload(evt: &DragEvent, payload: &DragPayload) {
    let data = evt.data();
    let native = match data.downcast::<web_sys::DragEvent>() {
        Some(native) => Some(native.clone()),
        None => data
            .downcast::<web_sys::MouseEvent>()
            .and_then(|m| m.dyn_ref::<web_sys::DragEvent>().cloned()),
    };

    let Some(transfer) = native.and_then(|e| e.data_transfer()) else {
        warn!("dragstart without a dataTransfer");
        return;
    };

    if let Err(e) = transfer.set_data(payload.format, &payload.data) {
        warn!("unable to set drag data: {e:?}");
    }
}

/// Restarts the player even when `src` did not change.
pub fn reload_player(id: &str) {
    let _ = dioxus::prelude::document::eval(&format!(
        "const p = document.getElementById('{id}'); if (p) {{ p.load(); }}"
    ));
}
