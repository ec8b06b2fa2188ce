use std::collections::HashSet;

use dioxus::prelude::*;
use vox_core::Language;

use crate::{utils::reload_player, APP};

const PLAYER_ID: &str = "audioPlayer";

#[component]
fn LanguageToggle(language: Language, selected: Signal<HashSet<String>>) -> Element {
    let mut selected = selected;
    let code = language.code.clone();
    let checked = selected.read().contains(&code);

    rsx! {
        label {
            class: "inline-flex items-center mr-4",
            input {
                r#type: "checkbox",
                class: "mr-1",
                checked,
                onchange: move |_| {
                    let mut set = selected.write();
                    if !set.remove(&code) {
                        set.insert(code.clone());
                    }
                },
            }
            "{language.label}"
        }
    }
}

#[component]
pub fn Translate() -> Element {
    let mut script = use_signal(String::new);
    let selected: Signal<HashSet<String>> = use_signal(Default::default);
    let mut output = use_signal(String::new);
    let mut audio_src: Signal<Option<String>> = use_signal(|| None);
    let languages = APP.read().config().languages.clone();

    let ordered = languages.clone();
    let submit = move |_: MouseEvent| {
        let panel = APP.read().panel();
        // Keep the configured order; it decides which audio ends up savable.
        let chosen: Vec<String> = ordered
            .iter()
            .filter(|l| selected.read().contains(&l.code))
            .map(|l| l.code.clone())
            .collect();
        let text = script.cloned();

        spawn(async move {
            if panel.submit_translation(&text, chosen).await {
                output.set(panel.output_text());
                let audio = panel.last_audio();
                let has_audio = audio.is_some();
                audio_src.set(audio);
                if has_audio {
                    reload_player(PLAYER_ID);
                }
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col space-y-4 max-w-3xl",
            h1 { class: "text-2xl font-bold", "Translate" }

            textarea {
                id: "inputScript",
                class: "border border-gray-300 rounded p-2 h-40",
                placeholder: "Enter your script",
                value: "{script}",
                oninput: move |e| script.set(e.value()),
            }

            div {
                id: "languageSelect",
                for language in languages {
                    LanguageToggle { key: "{language.code}", language, selected }
                }
            }

            div {
                button {
                    id: "translateButton",
                    class: "{crate::styles::CREATE_BUTTON}",
                    onclick: submit,
                    "Translate"
                }
            }

            textarea {
                id: "outputScript",
                class: "border border-gray-300 rounded p-2 h-48 bg-gray-50",
                readonly: true,
                value: "{output}",
            }

            if let Some(src) = audio_src.cloned() {
                audio {
                    id: PLAYER_ID,
                    controls: true,
                    src: "{src}",
                }
            }

            div {
                button {
                    id: "saveAudioButton",
                    class: "{crate::styles::READ_BUTTON}",
                    onclick: move |_| {
                        let panel = APP.read().panel();
                        spawn(async move {
                            panel.save_last_audio().await;
                        });
                    },
                    "Save Audio"
                }
            }
        }
    }
}
