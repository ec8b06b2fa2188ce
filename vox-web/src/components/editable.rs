use dioxus::prelude::*;
use vox_core::{EditState, EditTarget};

use crate::APP;

fn commit(mut edit: Signal<EditState>) {
    let pending = edit.write().commit();
    if let Some(pending) = pending {
        let folders = APP.read().folders();
        spawn(async move {
            folders.commit_edit(pending).await;
        });
    }
}

/// Name label that turns into a text input on double-click.
#[component]
pub fn EditableName(target: EditTarget, text: String, edit: Signal<EditState>) -> Element {
    let mut edit = edit;
    let editing = edit.read().value_for(target).map(str::to_string);

    match editing {
        Some(value) => rsx! {
            input {
                class: "edit-input border border-gray-300 rounded px-1",
                r#type: "text",
                value: "{value}",
                onmounted: move |evt: MountedEvent| async move {
                    let _ = evt.set_focus(true).await;
                    let _ = document::eval("document.activeElement && document.activeElement.select()");
                },
                oninput: move |evt| edit.write().input(evt.value()),
                onblur: move |_| commit(edit),
                onkeydown: move |evt| match evt.key() {
                    Key::Enter => commit(edit),
                    Key::Escape => {
                        edit.write().cancel();
                    }
                    _ => {}
                },
            }
        },
        None => {
            let current = text.clone();
            rsx! {
                span {
                    class: "cursor-text",
                    ondoubleclick: move |_| edit.write().begin(target, current.clone()),
                    "{text}"
                }
            }
        }
    }
}
