//! Unauthorized-access bridge used by the API client.
//!
//! When a request comes back 401 the client needs to send the user to the
//! login page and show a localized message. Both capabilities are injected
//! by the app shell on every render so the translator always sees the
//! current locale.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{info, warn};

use super::{NavigateFn, NavigateOptions, TranslateFn, LOGIN_PATH};
use crate::i18n::interpolate;

#[derive(Clone, Default)]
pub struct AuthFailureBridge {
    navigation: Rc<RefCell<Option<NavigateFn>>>,
    translation: Rc<RefCell<Option<TranslateFn>>>,
}

impl AuthFailureBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_navigation_reference(&self, navigate: NavigateFn) {
        *self.navigation.borrow_mut() = Some(navigate);
    }

    pub fn set_translation_reference(&self, translate: TranslateFn) {
        *self.translation.borrow_mut() = Some(translate);
    }

    /// Send the user to the login page, replacing the current entry.
    /// No-op (logged) when navigation has not been wired.
    pub fn redirect_to_login(&self) {
        let navigate = self.navigation.borrow().clone();
        match navigate {
            Some(navigate) => {
                info!("Session rejected by server, redirecting to {}", LOGIN_PATH);
                navigate(LOGIN_PATH, NavigateOptions::REPLACE);
            }
            None => warn!("Unauthorized response before navigation was wired, not redirecting"),
        }
    }

    /// Translate `key`, or return the key itself if no translator is wired.
    pub fn translate(&self, key: &str) -> String {
        let translate = self.translation.borrow().clone();
        match translate {
            Some(translate) => translate(key),
            None => {
                warn!("Translation requested before translator was wired: {}", key);
                key.to_string()
            }
        }
    }

    /// [`AuthFailureBridge::translate`] with `{{name}}` placeholders filled in.
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.translate(key), args)
    }
}
