use dioxus::prelude::*;

use crate::app::routes::{Route, ROUTE_TABLE};

/// Top bar with one link per route table entry
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "c-navbar",
            Link {
                to: Route::Home {},
                class: "c-navbar__logo",
                "💪 Fitness Coach"
            }
            div { class: "c-navbar__links",
                for entry in ROUTE_TABLE.iter() {
                    Link {
                        key: "{entry.path}",
                        to: Route::from_entry(entry),
                        class: "c-navbar__link",
                        active_class: "c-navbar__link--active",
                        {nav_label(entry.name)}
                    }
                }
            }
        }
    }
}

fn nav_label(name: &str) -> &str {
    match name {
        "Home" => "Trang chủ",
        "Schedule" => "Lịch tập",
        other => other,
    }
}
