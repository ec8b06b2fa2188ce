use std::sync::Arc;

use dioxus::prelude::*;

use super::Reply;
use crate::pop_overlay;

#[component]
pub fn YesnoRender(question: Arc<String>, reply: Reply<bool>) -> Element {
    let no = reply.clone();

    rsx! {
        div {
            class: "flex flex-col items-center justify-center space-y-4 p-6 bg-gray-100 rounded-lg shadow-md",
            p {
                class: "text-lg font-semibold text-gray-800",
                "{question}"
            }

            div {
                class: "flex flex-row space-x-4",
                button {
                    class: "bg-green-500 text-white px-4 py-2 rounded hover:bg-green-600 focus:outline-none focus:ring-2 focus:ring-green-300",
                    onclick: move |_| {
                        reply.send(true);
                        pop_overlay();
                    },
                    "Yes"
                }

                button {
                    class: "bg-red-500 text-white px-4 py-2 rounded hover:bg-red-600 focus:outline-none focus:ring-2 focus:ring-red-300",
                    onclick: move |_| {
                        no.send(false);
                        pop_overlay();
                    },
                    "No"
                }
            }
        }
    }
}
