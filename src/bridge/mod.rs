//! Bridges that let framework-agnostic code reach UI-bound capabilities.
//!
//! The router's navigator and the active translator only exist inside the
//! Dioxus component tree. The API client and stores live outside it, so the
//! app shell injects those capabilities here and everything else calls
//! through. Bridges are plain objects owned by [`crate::app::AppServices`];
//! there is no global state.

pub mod navigation;
pub mod unauthorized;

use std::rc::Rc;

pub use navigation::{change_location, BrowserLocation, LocationFallback, NavigationBridge};
pub use unauthorized::AuthFailureBridge;

/// Path of the authenticated landing page.
pub const ROOT_PATH: &str = "/";

/// Path of the unauthenticated entry page.
pub const LOGIN_PATH: &str = "/login";

/// How a navigation should touch browser history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one
    pub replace: bool,
}

impl NavigateOptions {
    pub const PUSH: Self = Self { replace: false };
    pub const REPLACE: Self = Self { replace: true };
}

/// A navigation function injected by the UI layer.
pub type NavigateFn = Rc<dyn Fn(&str, NavigateOptions)>;

/// A translation function injected by the UI layer.
pub type TranslateFn = Rc<dyn Fn(&str) -> String>;
