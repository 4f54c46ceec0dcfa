//! Shared UI components for the Dioxus fullstack web UI.

pub mod language;
pub mod layout;
pub mod nav;
pub mod spinner;

pub use language::LanguageSwitcher;
pub use layout::Layout;
pub use nav::Nav;
pub use spinner::LoadingOverlay;
