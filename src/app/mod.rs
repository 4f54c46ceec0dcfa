//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use std::rc::Rc;

use dioxus::prelude::*;
use tracing::warn;

pub mod components;
pub mod guards;
pub mod pages;
pub mod services;

use crate::bridge::{change_location, NavigateFn, NavigateOptions};
use components::LoadingOverlay;
use pages::{Booking, Dashboard, Login, NotFound, Profile};
pub use services::{
    use_mounted, use_services, use_store, use_translate, use_translate_with, AppServices,
};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Build services once at the root (storage, bridges, stores, API client)
    services::use_services_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Dashboard {},
        #[route("/login")]
        Login {},
        #[route("/booking")]
        Booking {},
        #[route("/profile")]
        Profile {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Router-level layout. Wires the bridges on every render so non-UI code
/// always sees this router's navigator.
#[component]
fn AppShell() -> Element {
    let services = use_services();
    use_bridges(&services);

    // The saved language only applies in the browser, after hydration
    use_effect({
        let i18n = services.i18n.clone();
        move || {
            i18n.restore_locale();
        }
    });

    rsx! {
        Outlet::<Route> {}
        LoadingOverlay {}
    }
}

/// The in-app route for `to`, or `None` when it points outside the app.
fn app_route(to: &str) -> Option<Route> {
    if to.contains("://") {
        return None;
    }
    to.parse::<Route>().ok()
}

fn use_bridges(services: &AppServices) {
    let nav = navigator();
    let location = services.navigation.location();

    let navigate: NavigateFn = Rc::new(move |to: &str, options: NavigateOptions| {
        match app_route(to) {
            Some(route) if options.replace => {
                let _ = nav.replace(route);
            }
            Some(route) => {
                let _ = nav.push(route);
            }
            None => {
                warn!("{} is not an app route, leaving the router", to);
                change_location(location.as_ref(), to, options);
            }
        }
    });
    services.navigation.set_navigate_ref(navigate.clone());
    services.auth_bridge.set_navigation_reference(navigate);

    let i18n = services.i18n.clone();
    services
        .auth_bridge
        .set_translation_reference(Rc::new(move |key: &str| i18n.translate(key)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_route_parses_paths() {
        assert_eq!(app_route("/"), Some(Route::Dashboard {}));
        assert_eq!(app_route("/booking"), Some(Route::Booking {}));
        assert_eq!(
            app_route("/no/such/page"),
            Some(Route::NotFound {
                segments: vec!["no".into(), "such".into(), "page".into()]
            })
        );
    }

    #[test]
    fn test_app_route_rejects_absolute_urls() {
        assert_eq!(app_route("https://sso.example.com/start"), None);
        assert_eq!(app_route("http://localhost:8080/login"), None);
    }

    #[cfg(feature = "server")]
    mod routed {
        use std::cell::RefCell;

        use dioxus::history::{History, MemoryHistory};

        use super::super::*;
        use crate::api::tests::MockTransport;
        use crate::bridge::LocationFallback;
        use crate::config::AppConfig;
        use crate::storage::MemoryStorage;

        #[derive(Default)]
        struct RecordingLocation {
            visits: RefCell<Vec<(String, bool)>>,
        }

        impl LocationFallback for RecordingLocation {
            fn assign(&self, to: &str) {
                self.visits.borrow_mut().push((to.to_string(), false));
            }

            fn replace(&self, to: &str) {
                self.visits.borrow_mut().push((to.to_string(), true));
            }
        }

        fn routed_app() -> Element {
            rsx! { Router::<Route> {} }
        }

        /// The router rendered once at `path`, with bridges wired by the shell.
        struct Mounted {
            dom: VirtualDom,
            services: AppServices,
            history: Rc<MemoryHistory>,
            location: Rc<RecordingLocation>,
        }

        fn mount(path: &str) -> Mounted {
            let location = Rc::new(RecordingLocation::default());
            let services = AppServices::new(
                AppConfig::default(),
                Rc::new(MemoryStorage::new()),
                location.clone(),
                Rc::new(MockTransport::default()),
            );
            let history = Rc::new(MemoryHistory::with_initial_path(path));
            let mut dom = VirtualDom::new(routed_app)
                .with_root_context(services.clone())
                .with_root_context(history.clone() as Rc<dyn History>);
            dom.rebuild_in_place();
            Mounted {
                dom,
                services,
                history,
                location,
            }
        }

        impl Mounted {
            fn run(&self, f: impl FnOnce(&AppServices)) {
                self.dom.in_scope(ScopeId::ROOT, || f(&self.services));
            }
        }

        #[test]
        fn test_push_adds_history_entry() {
            let app = mount("/login");

            app.run(|s| s.navigation.navigate("/booking", NavigateOptions::PUSH));

            assert_eq!(app.history.current_route(), "/booking");
            assert!(app.history.can_go_back());
            assert!(app.location.visits.borrow().is_empty());
        }

        #[test]
        fn test_replace_keeps_history_length() {
            let app = mount("/login");

            app.run(|s| s.navigation.navigate("/profile", NavigateOptions::REPLACE));

            assert_eq!(app.history.current_route(), "/profile");
            assert!(!app.history.can_go_back());
        }

        #[test]
        fn test_absolute_url_leaves_the_router() {
            let app = mount("/login");

            app.run(|s| {
                s.navigation
                    .navigate("https://sso.example.com/start", NavigateOptions::PUSH)
            });

            assert_eq!(app.history.current_route(), "/login");
            assert_eq!(
                *app.location.visits.borrow(),
                vec![("https://sso.example.com/start".to_string(), false)]
            );
        }

        #[test]
        fn test_unauthorized_redirect_replaces_current_page() {
            let app = mount("/booking");

            app.run(|s| s.auth_bridge.redirect_to_login());

            assert_eq!(app.history.current_route(), "/login");
            assert!(!app.history.can_go_back());
        }

        #[test]
        fn test_shell_wires_current_translator() {
            let app = mount("/login");
            app.services.i18n.set_locale(crate::i18n::Locale::Vi);

            assert_eq!(app.services.auth_bridge.translate("nav.sign_out"), "Đăng xuất");
        }
    }
}
