pub mod folderselector;
pub mod notice;
pub mod textinput;
pub mod yesno;

use std::{
    fmt::Debug,
    sync::{Arc, Mutex},
};

use dioxus::prelude::*;
use futures::channel::oneshot;
use vox_dto::{FolderId, SidebarFolder};

use crate::{
    append_overlay,
    overlays::{
        folderselector::FolderSelectorRender, notice::NoticeRender, textinput::TextInputRender,
        yesno::YesnoRender,
    },
    pop_overlay, OVERLAY,
};

/// One-shot answer channel shared by every clone of an overlay.
pub struct Reply<T>(Arc<Mutex<Option<oneshot::Sender<T>>>>);

impl<T> Reply<T> {
    pub fn channel() -> (Self, oneshot::Receiver<T>) {
        let (tx, rx) = oneshot::channel();
        (Self(Arc::new(Mutex::new(Some(tx)))), rx)
    }

    /// Only the first answer is delivered.
    pub fn send(&self, val: T) {
        if let Some(tx) = self.0.lock().unwrap().take() {
            let _ = tx.send(val);
        }
    }
}

impl<T> Clone for Reply<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> PartialEq for Reply<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone)]
pub enum OverlayEnum {
    Notice {
        text: String,
        button_text: String,
    },
    Text {
        question: Arc<String>,
        input_value: Signal<String>,
        reply: Reply<Option<String>>,
    },
    Yesno {
        question: Arc<String>,
        reply: Reply<bool>,
    },
    FolderSelector {
        title: String,
        folders: Vec<SidebarFolder>,
        selected: Signal<Option<FolderId>>,
        reply: Reply<Option<FolderId>>,
    },
}

impl OverlayEnum {
    pub fn append(self) {
        append_overlay(self);
    }

    pub fn new_notice(text: impl AsRef<str>) -> Self {
        Self::Notice {
            text: text.as_ref().to_string(),
            button_text: "OK".to_string(),
        }
    }

    pub fn new_text_input(q: impl Into<String>) -> (Self, oneshot::Receiver<Option<String>>) {
        let (reply, rx) = Reply::channel();
        let overlay = Self::Text {
            question: Arc::new(q.into()),
            input_value: Signal::new_in_scope(Default::default(), ScopeId::APP),
            reply,
        };
        (overlay, rx)
    }

    pub fn new_yesno(q: impl Into<String>) -> (Self, oneshot::Receiver<bool>) {
        let (reply, rx) = Reply::channel();
        let overlay = Self::Yesno {
            question: Arc::new(q.into()),
            reply,
        };
        (overlay, rx)
    }

    pub fn new_folder_selector(
        title: impl Into<String>,
        folders: Vec<SidebarFolder>,
    ) -> (Self, oneshot::Receiver<Option<FolderId>>) {
        let (reply, rx) = Reply::channel();
        let first = folders.first().map(|f| f.id);
        let overlay = Self::FolderSelector {
            title: title.into(),
            folders,
            selected: Signal::new_in_scope(first, ScopeId::APP),
            reply,
        };
        (overlay, rx)
    }

    /// Answers as if the user dismissed the dialog.
    pub fn cancel(&self) {
        match self {
            Self::Notice { .. } => {}
            Self::Text { reply, .. } => reply.send(None),
            Self::Yesno { reply, .. } => reply.send(false),
            Self::FolderSelector { reply, .. } => reply.send(None),
        }
    }
}

impl Debug for OverlayEnum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Notice { .. } => f.debug_tuple("notice").finish(),
            Self::Text { .. } => f.debug_tuple("text").finish(),
            Self::Yesno { .. } => f.debug_tuple("yesno").finish(),
            Self::FolderSelector { .. } => f.debug_tuple("folder selector").finish(),
        }
    }
}

/// Modal dialogs, newest on top.
#[derive(Debug, Default)]
pub struct Overlays {
    stack: Vec<Arc<OverlayEnum>>,
}

impl Overlays {
    pub fn append(&mut self, overlay: OverlayEnum) {
        self.stack.push(Arc::new(overlay));
    }

    pub fn pop(&mut self) {
        if let Some(overlay) = self.stack.pop() {
            overlay.cancel();
        }
    }

    pub fn last(&self) -> Option<Arc<OverlayEnum>> {
        self.stack.last().cloned()
    }
}

#[component]
pub fn Overender() -> Element {
    let Some(elm) = OVERLAY.read().last() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50",
            div {
                class: "bg-white text-black rounded-2xl shadow-xl p-6 max-w-md",
                div {
                    class: "flex justify-end",
                    button {
                        onclick: move |_| {
                            pop_overlay();
                        },
                        "❌"
                    }
                }

                match Arc::unwrap_or_clone(elm) {
                    OverlayEnum::Notice { text, button_text } => rsx! {
                        NoticeRender { text, button_text }
                    },
                    OverlayEnum::Text { question, input_value, reply } => rsx! {
                        TextInputRender { question, input_value, reply }
                    },
                    OverlayEnum::Yesno { question, reply } => rsx! {
                        YesnoRender { question, reply }
                    },
                    OverlayEnum::FolderSelector { title, folders, selected, reply } => rsx! {
                        FolderSelectorRender { title, folders, selected, reply }
                    },
                }
            }
        }
    }
}
