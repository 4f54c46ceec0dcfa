//! Layout component wrapping all pages with Pico CSS and common elements.

use dioxus::prelude::*;

use super::language::LanguageSwitcher;
use super::nav::Nav;
use crate::app::{use_services, use_translate, use_translate_with};

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";

/// CSS styles for the application (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
.tile-grid {
  display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem;
}
.tile { display: block; text-decoration: none; }
.seat-row { display: flex; gap: 0.4rem; align-items: center; margin-bottom: 0.4rem; }
.seat-row .row-label { width: 1.5rem; font-weight: bold; }
.seat { width: 2.75rem; margin: 0; padding: 0.3rem 0; font-size: 0.8rem; }
.seat.reserved { background: var(--pico-del-color); border-color: var(--pico-del-color); }
.seat.blocked { opacity: 0.35; }
.seat.selected { background: var(--pico-ins-color); border-color: var(--pico-ins-color); }
.status-ok { color: var(--pico-ins-color); }
.status-err { color: var(--pico-del-color); }
.loading-overlay {
  position: fixed; inset: 0; z-index: 100; display: flex; flex-direction: column;
  align-items: center; justify-content: center; background: rgba(0,0,0,.45);
}
.language-switcher { display: flex; gap: 0.25rem; align-items: center; }
.language-switcher button { padding: 0.25rem 0.5rem; font-size: 0.8rem; margin: 0; }
.language-switcher button.active {
  background: var(--pico-primary-background); color: var(--pico-primary-inverse);
}
small { color: var(--pico-muted-color); }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Translation key of the page title (shown in browser tab)
    pub title_key: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let services = use_services();
    let t = use_translate();
    let t_with = use_translate_with();
    let full_title = format!("{} - {}", t(&props.title_key), t("app.title"));
    let version = services.config.app_version.as_str();
    let version_text = t_with("footer.version", &[("version", version)]);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: PICO_CSS }
        document::Style { {CUSTOM_STYLES} }

        header { class: "container",
            Nav { active: props.nav_active.clone() }
        }
        main { class: "container",
            {props.children}
        }
        footer {
            class: "container",
            style: "display:flex;justify-content:space-between;align-items:center;",
            small { "{version_text}" }
            LanguageSwitcher {}
        }
    }
}
