//! Profile page component.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::guards::PrivateRoute;
use crate::app::{use_services, use_store, use_translate};

#[component]
pub fn Profile() -> Element {
    rsx! {
        PrivateRoute {
            ProfileContent {}
        }
    }
}

#[component]
fn ProfileContent() -> Element {
    let services = use_services();
    let t = use_translate();
    let user = use_store(services.user.store());

    let username = user()
        .map(|u| u.username)
        .unwrap_or_else(|| t("profile.unknown"));

    rsx! {
        Layout {
            title_key: "profile.title".to_string(),
            nav_active: "profile".to_string(),

            h1 { {t("profile.title")} }
            article {
                p {
                    strong { {t("profile.username")} }
                    " {username}"
                }
                button {
                    class: "secondary",
                    onclick: move |_| services.sign_out(),
                    {t("nav.sign_out")}
                }
            }
        }
    }
}
