use crate::app::layouts::Navbar;
use crate::app::pages::{Home, NotFound, Schedule};

use dioxus::prelude::*;
use dioxus::document;

/// A named path binding shown in navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
}

/// Static route table, in declaration order. Fixed at startup.
pub static ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry { path: "/", name: "Home" },
    RouteEntry { path: "/schedule", name: "Schedule" },
];

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // Coach chat
    #[route("/")]
    Home {},

    // Weekly training plan
    #[route("/schedule")]
    Schedule {},

    // Everything else
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Human-readable binding name
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home {} => "Home",
            Route::Schedule {} => "Schedule",
            Route::NotFound { .. } => "NotFound",
        }
    }

    /// Route for a table entry
    pub fn from_entry(entry: &RouteEntry) -> Route {
        resolve(entry.path)
    }
}

/// Map a URL path to its route; unknown paths land on `NotFound`
pub fn resolve(path: &str) -> Route {
    path.parse::<Route>().unwrap_or_else(|_| Route::NotFound {
        segments: path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Fitness coach app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Navbar {}
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}
