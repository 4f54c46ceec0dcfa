//! Language switcher shown in the footer.

use dioxus::prelude::*;

use crate::app::{use_services, use_store, use_translate};
use crate::i18n::SUPPORTED_LOCALES;

/// One button per supported locale. The choice is persisted by
/// [`crate::i18n::I18n::set_locale`].
#[component]
pub fn LanguageSwitcher() -> Element {
    let services = use_services();
    let t = use_translate();
    let current = use_store(services.i18n.locale_store());

    rsx! {
        div { class: "language-switcher",
            small { {t("footer.language")} }
            for locale in SUPPORTED_LOCALES.iter().copied() {
                button {
                    key: "{locale}",
                    id: "lang-{locale}",
                    class: if current() == locale { "active" } else { "outline" },
                    onclick: {
                        let i18n = services.i18n.clone();
                        move |_| i18n.set_locale(locale)
                    },
                    {locale.native_name()}
                }
            }
        }
    }
}
