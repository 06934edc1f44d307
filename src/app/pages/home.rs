use dioxus::prelude::*;

use crate::app::components::{CoachReply, LoadingText};
use crate::server_fns::ask_coach;
use crate::shared::constants::ERROR_REPLY;

/// Landing page: ask the coach one question at a time
#[component]
pub fn Home() -> Element {
    let mut input = use_signal(String::new);
    let mut exchange = use_signal(|| None::<(String, String)>);
    let mut is_loading = use_signal(|| false);

    let mut send = move || {
        let message = input();
        if message.trim().is_empty() || is_loading() {
            return;
        }

        is_loading.set(true);
        input.set(String::new());

        spawn(async move {
            // The server already folds vendor failures; this covers the browser -> server hop
            let answer = match ask_coach(message.clone()).await {
                Ok(reply) => reply,
                Err(e) => {
                    tracing::error!("ask_coach server call failed: {}", e);
                    ERROR_REPLY.to_string()
                }
            };
            exchange.set(Some((message, answer)));
            is_loading.set(false);
        });
    };

    let can_send = !is_loading() && !input.read().trim().is_empty();

    rsx! {
        div { class: "c-page c-page--home",
            h1 { class: "c-page__title", "Huấn luyện viên AI" }
            p { class: "c-page__subtitle",
                "Hỏi bất cứ điều gì về tập luyện, dinh dưỡng hay phục hồi."
            }

            form { class: "c-coach-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    send();
                },
                textarea {
                    class: "c-coach-form__input",
                    placeholder: "Ví dụ: Tôi nên tập gì để tăng sức bền?",
                    rows: "4",
                    value: "{input}",
                    disabled: is_loading(),
                    oninput: move |evt| input.set(evt.value()),
                }
                button {
                    class: "c-button c-button--primary",
                    r#type: "submit",
                    disabled: !can_send,
                    if is_loading() { "Đang gửi..." } else { "Gửi" }
                }
            }

            if is_loading() {
                LoadingText { message: "Huấn luyện viên đang trả lời..." }
            }

            {exchange().map(|(question, answer)| rsx! {
                CoachReply { question, answer }
            })}
        }
    }
}
