//! Global blocking spinner driven by the loading store.

use dioxus::prelude::*;

use crate::app::{use_services, use_store, use_translate};

#[component]
pub fn LoadingOverlay() -> Element {
    let services = use_services();
    let t = use_translate();
    let state = use_store(services.loading.store());

    let state = state();
    if !state.is_loading {
        return rsx! {};
    }
    let label = state.text.unwrap_or_else(|| t("loading.default"));

    rsx! {
        div { class: "loading-overlay", role: "status",
            article { aria_busy: "true", "{label}" }
        }
    }
}
