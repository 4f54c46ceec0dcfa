//! Navigation bar. Links only show once signed in.

use dioxus::prelude::*;

use crate::app::{use_mounted, use_services, use_store, use_translate, Route};

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "dashboard", "booking")
    pub active: String,
}

#[component]
pub fn Nav(props: NavProps) -> Element {
    let services = use_services();
    let t = use_translate();
    let mounted = use_mounted();
    let signed_in = use_store(services.session.flag());

    let item_class = |page: &str| {
        if props.active == page {
            "active"
        } else {
            ""
        }
    };

    let on_sign_out = move |_| services.sign_out();

    rsx! {
        nav {
            ul {
                li {
                    Link { to: Route::Dashboard {}, strong { {t("app.title")} } }
                }
            }
            if mounted && signed_in() {
                ul {
                    li { class: item_class("dashboard"),
                        Link { to: Route::Dashboard {}, {t("nav.dashboard")} }
                    }
                    li { class: item_class("booking"),
                        Link { to: Route::Booking {}, {t("nav.booking")} }
                    }
                    li { class: item_class("profile"),
                        Link { to: Route::Profile {}, {t("nav.profile")} }
                    }
                    li {
                        button {
                            class: "secondary outline",
                            onclick: on_sign_out,
                            {t("nav.sign_out")}
                        }
                    }
                }
            }
        }
    }
}
