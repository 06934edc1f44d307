use dioxus::prelude::*;

use crate::app::routes::Route;

/// Catch-all for paths outside the route table
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!("No route for {}", path);

    rsx! {
        div { class: "c-page c-page--not-found",
            h1 { class: "c-page__title", "404" }
            p { class: "c-page__subtitle", "Không tìm thấy trang {path}" }
            Link { to: Route::Home {}, class: "c-button c-button--secondary", "Về trang chủ" }
        }
    }
}
