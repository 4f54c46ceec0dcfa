//! Dashboard page component.
//!
//! Grid of feature tiles. Loads the user profile if the session was restored
//! from storage and nothing is known about the user yet.

use dioxus::prelude::*;
use tracing::debug;

use crate::app::components::Layout;
use crate::app::guards::PrivateRoute;
use crate::app::{use_services, use_store, use_translate, use_translate_with, Route};

/// A dashboard entry: translation keys plus where it leads.
struct FeatureTile {
    id: &'static str,
    title_key: &'static str,
    body_key: &'static str,
    route: fn() -> Route,
}

const TILES: &[FeatureTile] = &[
    FeatureTile {
        id: "booking",
        title_key: "dashboard.tile.booking.title",
        body_key: "dashboard.tile.booking.body",
        route: || Route::Booking {},
    },
    FeatureTile {
        id: "profile",
        title_key: "dashboard.tile.profile.title",
        body_key: "dashboard.tile.profile.body",
        route: || Route::Profile {},
    },
];

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        PrivateRoute {
            DashboardContent {}
        }
    }
}

#[component]
fn DashboardContent() -> Element {
    let services = use_services();
    let t = use_translate();
    let t_with = use_translate_with();
    let user = use_store(services.user.store());

    // Fetch the profile once when the session came from storage
    use_effect({
        let services = services.clone();
        move || {
            if services.user.get().is_none() && services.session.is_authenticated() {
                let services = services.clone();
                spawn(async move {
                    match services.api.current_user().await {
                        Ok(profile) => services.user.set(profile),
                        Err(e) => debug!("Profile fetch failed: {}", e),
                    }
                });
            }
        }
    });

    let welcome = user()
        .map(|u| t_with("dashboard.welcome", &[("name", u.username.as_str())]))
        .unwrap_or_default();

    rsx! {
        Layout {
            title_key: "dashboard.title".to_string(),
            nav_active: "dashboard".to_string(),

            h1 { {t("dashboard.title")} }
            if !welcome.is_empty() {
                p { "{welcome}" }
            }

            section { class: "tile-grid",
                for tile in TILES.iter() {
                    div { key: "{tile.id}", class: "tile",
                        Link { to: (tile.route)(),
                            article {
                                h3 { {t(tile.title_key)} }
                                p { {t(tile.body_key)} }
                            }
                        }
                    }
                }
            }
        }
    }
}
