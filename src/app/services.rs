//! Application services shared through Dioxus context.
//!
//! Everything non-UI code needs (storage, bridges, stores, API client,
//! translator) is built once here and provided at the app root.

use std::rc::Rc;

use dioxus::prelude::*;
use tracing::info;

use crate::api::{ApiClient, HttpTransport, ReqwestTransport};
use crate::bridge::{AuthFailureBridge, BrowserLocation, LocationFallback, NavigationBridge};
use crate::config::AppConfig;
use crate::i18n::I18n;
use crate::storage::{self, KeyValueStore, StorageBackend};
use crate::stores::{LoadingStore, SessionStore, Store, UserStore};

#[derive(Clone)]
pub struct AppServices {
    pub config: Rc<AppConfig>,
    pub storage: KeyValueStore,
    pub navigation: NavigationBridge,
    pub auth_bridge: AuthFailureBridge,
    pub session: SessionStore,
    pub user: UserStore,
    pub loading: LoadingStore,
    pub i18n: I18n,
    pub api: ApiClient,
}

impl AppServices {
    pub fn new(
        config: AppConfig,
        backend: Rc<dyn StorageBackend>,
        location: Rc<dyn LocationFallback>,
        transport: Rc<dyn HttpTransport>,
    ) -> Self {
        let storage = KeyValueStore::new(backend);
        let navigation = NavigationBridge::new(location);
        let auth_bridge = AuthFailureBridge::new();
        let session = SessionStore::new(storage.clone());
        let i18n = I18n::bundled(storage.clone());
        let api = ApiClient::new(&config, transport, session.clone(), auth_bridge.clone());

        Self {
            config: Rc::new(config),
            storage,
            navigation,
            auth_bridge,
            session,
            user: UserStore::new(),
            loading: LoadingStore::new(),
            i18n,
            api,
        }
    }

    /// Services backed by the real browser (or in-memory stand-ins during SSR).
    pub fn bootstrap() -> Self {
        let config = AppConfig::from_build_env();
        info!(
            "Bootstrapping Seatbook v{} (api: {}, dev: {})",
            config.app_version, config.api_domain, config.dev
        );
        Self::new(
            config,
            storage::default_backend(),
            Rc::new(BrowserLocation),
            Rc::new(ReqwestTransport::new()),
        )
    }

    /// Sign out everywhere: token, profile, and back to login.
    pub fn sign_out(&self) {
        self.session.sign_out();
        self.user.clear();
        self.navigation
            .navigate(crate::bridge::LOGIN_PATH, crate::bridge::NavigateOptions::REPLACE);
    }
}

/// Provide services at the app root.
pub fn use_services_provider() -> AppServices {
    use_context_provider(AppServices::bootstrap)
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

/// Mirror a [`Store`] into a signal so components re-render when it changes.
pub fn use_store<T: Clone + 'static>(store: &Store<T>) -> Signal<T> {
    let value = use_signal(|| store.get());
    let subscription = use_hook(|| {
        let id = store.subscribe(move |v: &T| {
            let mut value = value;
            value.set(v.clone());
        });
        (store.clone(), id)
    });
    use_drop(move || {
        let (store, id) = subscription;
        store.unsubscribe(id);
    });
    value
}

/// `false` while rendering on the server and during hydration, `true` once
/// the component is mounted in the browser.
///
/// Anything read from browser storage (session, locale) may only change the
/// markup after this turns `true`, otherwise hydration sees different nodes.
pub fn use_mounted() -> bool {
    let mut mounted = use_signal(|| false);
    use_effect(move || mounted.set(true));
    mounted()
}

/// Translate with the current locale, re-rendering on locale change.
pub fn use_translate() -> impl Fn(&str) -> String + Clone {
    let services = use_services();
    let locale = use_store(services.i18n.locale_store());
    let i18n = services.i18n.clone();
    move |key: &str| {
        // Reading the signal subscribes the calling component
        let _ = locale();
        i18n.translate(key)
    }
}

/// Like [`use_translate`], with `{{name}}` placeholders filled from `args`.
pub fn use_translate_with() -> impl Fn(&str, &[(&str, &str)]) -> String + Clone {
    let services = use_services();
    let locale = use_store(services.i18n.locale_store());
    let i18n = services.i18n.clone();
    move |key: &str, args: &[(&str, &str)]| {
        let _ = locale();
        i18n.translate_with(key, args)
    }
}
