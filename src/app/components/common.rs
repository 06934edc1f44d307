use dioxus::prelude::*;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}
