use dioxus::prelude::*;
use tracing::debug;

use crate::app::components::Layout;
use crate::app::guards::PublicRoute;
use crate::app::{use_translate, Route};

/// Catch-all page, reachable with or without a session.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let t = use_translate();
    debug!("No route for /{}", segments.join("/"));

    rsx! {
        PublicRoute {
            Layout {
                title_key: "not_found.title".to_string(),
                nav_active: String::new(),

                article {
                    h1 { {t("not_found.title")} }
                    Link { to: Route::Dashboard {}, {t("not_found.back")} }
                }
            }
        }
    }
}
