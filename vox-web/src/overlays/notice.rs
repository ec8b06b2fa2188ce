use dioxus::prelude::*;

use crate::pop_overlay;

#[component]
pub fn NoticeRender(text: String, button_text: String) -> Element {
    rsx! {
        div {
            class: "text-center",
            h2 {
                class: "text-xl font-semibold mb-4",
                for line in text.lines() {
                    span { "{line}" }
                    br {}
                }
            }

            button {
                class: "{crate::styles::READ_BUTTON}",
                onclick: move |_| {
                    pop_overlay();
                },
                "{button_text}"
            }
        }
    }
}
