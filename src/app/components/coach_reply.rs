//! Coach reply rendering

use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Render the coach's Markdown answer to HTML.
///
/// Raw HTML in the model output is shown as escaped text, never injected.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// The user's question and the coach's answer, side by side
#[component]
pub fn CoachReply(question: String, answer: String) -> Element {
    let html_content = render_markdown(&answer);

    rsx! {
        ul { class: "c-exchange",
            li { class: "c-chat-message c-chat-message--user animate-fade-in",
                div { class: "c-chat-bubble c-chat-bubble--user",
                    div { class: "u-whitespace-pre-wrap", "{question}" }
                }
            }
            li { class: "c-chat-message c-chat-message--assistant animate-fade-in",
                div { class: "c-chat-bubble c-chat-bubble--assistant",
                    div {
                        class: "c-prose c-prose--sm",
                        dangerous_inner_html: "{html_content}"
                    }
                }
            }
        }
    }
}
