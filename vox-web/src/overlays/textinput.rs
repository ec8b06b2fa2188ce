use std::sync::Arc;

use dioxus::prelude::*;

use super::Reply;
use crate::pop_overlay;

#[component]
pub fn TextInputRender(
    question: Arc<String>,
    input_value: Signal<String>,
    reply: Reply<Option<String>>,
) -> Element {
    let submit = move || {
        reply.send(Some(input_value.cloned()));
        pop_overlay();
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center space-y-4 p-6 bg-gray-100 rounded-lg shadow-md",
            p {
                class: "text-lg font-semibold text-gray-800",
                "{question}"
            }

            input {
                class: "border border-gray-300 rounded px-4 py-2 focus:outline-none focus:ring-2 focus:ring-blue-300",
                value: "{input_value}",
                autofocus: true,
                oninput: move |e| input_value.clone().set(e.value()),
                onkeydown: {
                    let submit = submit.clone();
                    move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            submit();
                        }
                    }
                },
            }

            button {
                class: "{crate::styles::CREATE_BUTTON}",
                onclick: {
                    let submit = submit.clone();
                    move |_| submit()
                },
                "Submit"
            }
        }
    }
}
