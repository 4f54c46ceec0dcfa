//! Localization: bundled translations, locale detection and lookup.
//!
//! Bundles are flat `key -> string` JSON maps compiled into the binary.
//! Lookup goes current locale, then [`DEFAULT_LOCALE`], then the key itself,
//! so a missing string shows up as its key rather than as blank text.

use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::storage::{KeyValueStore, StorageKey};
use crate::stores::Store;

const EN_BUNDLE: &str = include_str!("../../locales/en.json");
const VI_BUNDLE: &str = include_str!("../../locales/vi.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Vi,
}

/// Locale used when nothing better is known.
pub const DEFAULT_LOCALE: Locale = Locale::En;

pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Vi];

impl Locale {
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Vi => "vi",
        }
    }

    /// Name shown in the language switcher, in its own language.
    pub const fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Vi => "Tiếng Việt",
        }
    }

    /// Parse a language tag (`en`, `en-US`, `vi_VN.UTF-8`) by its primary subtag.
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_', '.'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "vi" => Some(Locale::Vi),
            _ => None,
        }
    }

    /// Like [`Locale::parse`] but unsupported tags fall back to [`DEFAULT_LOCALE`].
    pub fn from_language_tag(tag: &str) -> Self {
        Self::parse(tag).unwrap_or(DEFAULT_LOCALE)
    }

    fn bundle_source(self) -> &'static str {
        match self {
            Locale::En => EN_BUNDLE,
            Locale::Vi => VI_BUNDLE,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language tag reported by the runtime: `navigator.language` in the browser,
/// `LANG` elsewhere.
pub fn runtime_language() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.navigator().language())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var("LANG").ok().filter(|l| !l.is_empty())
    }
}

/// Pick the startup locale. A stored user choice wins over the runtime tag.
pub fn detect_locale(stored: Option<&str>, runtime_tag: Option<&str>) -> Locale {
    if let Some(locale) = stored.and_then(Locale::parse) {
        return locale;
    }
    runtime_tag
        .map(Locale::from_language_tag)
        .unwrap_or(DEFAULT_LOCALE)
}

type Bundle = HashMap<String, String>;

/// All translation bundles, parsed once.
#[derive(Debug, Default)]
pub struct Catalog {
    bundles: HashMap<Locale, Bundle>,
}

impl Catalog {
    /// Parse the compiled-in bundles. A broken bundle is logged and left empty.
    pub fn load() -> Self {
        let bundles = SUPPORTED_LOCALES
            .iter()
            .map(|&locale| (locale, parse_bundle(locale, locale.bundle_source())))
            .collect();
        Self { bundles }
    }

    pub fn from_sources(sources: &[(Locale, &str)]) -> Self {
        let bundles = sources
            .iter()
            .map(|&(locale, source)| (locale, parse_bundle(locale, source)))
            .collect();
        Self { bundles }
    }

    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.bundles
            .get(&locale)
            .and_then(|b| b.get(key))
            .map(String::as_str)
    }

    pub fn len(&self, locale: Locale) -> usize {
        self.bundles.get(&locale).map(HashMap::len).unwrap_or(0)
    }
}

fn parse_bundle(locale: Locale, source: &str) -> Bundle {
    match serde_json::from_str::<Bundle>(source) {
        Ok(bundle) => {
            debug!("Loaded {} strings for {}", bundle.len(), locale);
            bundle
        }
        Err(e) => {
            warn!("Translation bundle for {} is invalid: {}", locale, e);
            Bundle::new()
        }
    }
}

/// Replace `{{name}}` placeholders.
pub(crate) fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{{{}}}}}", name), value)
    })
}

/// Translator with an observable current locale.
#[derive(Clone)]
pub struct I18n {
    catalog: Rc<Catalog>,
    locale: Store<Locale>,
    storage: KeyValueStore,
}

impl I18n {
    pub fn new(catalog: Catalog, locale: Locale, storage: KeyValueStore) -> Self {
        Self {
            catalog: Rc::new(catalog),
            locale: Store::new("locale", locale),
            storage,
        }
    }

    /// Bundled catalog, starting in [`DEFAULT_LOCALE`] until
    /// [`I18n::restore_locale`] runs.
    pub fn bundled(storage: KeyValueStore) -> Self {
        Self::new(Catalog::load(), DEFAULT_LOCALE, storage)
    }

    /// Switch to the stored choice or the runtime language. Nothing is persisted.
    ///
    /// The browser calls this after mount; server rendering never does, so
    /// the first client render matches the server's markup.
    pub fn restore_locale(&self) -> Locale {
        let stored: Option<String> = self.storage.get(StorageKey::Language);
        let locale = detect_locale(stored.as_deref(), runtime_language().as_deref());
        debug!("Selected locale {}", locale);
        if self.locale() != locale {
            self.locale.set(locale);
        }
        locale
    }

    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn locale_store(&self) -> &Store<Locale> {
        &self.locale
    }

    /// Switch locale and remember the choice.
    pub fn set_locale(&self, locale: Locale) {
        // Persisting is best effort; the switch still applies for this session
        let _ = self.storage.set(StorageKey::Language, locale.as_str());
        self.locale.set(locale);
    }

    pub fn translate(&self, key: &str) -> String {
        self.translate_in(self.locale(), key)
    }

    pub fn translate_in(&self, locale: Locale, key: &str) -> String {
        self.catalog
            .lookup(locale, key)
            .or_else(|| self.catalog.lookup(DEFAULT_LOCALE, key))
            .map(str::to_string)
            .unwrap_or_else(|| {
                debug!("Missing translation {} for {}", key, locale);
                key.to_string()
            })
    }

    /// Translate in the current locale and fill `{{name}}` placeholders.
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.translate(key), args)
    }
}
