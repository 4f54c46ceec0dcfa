//! Navigation bridge: the single seam through which non-UI code navigates.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use super::{NavigateFn, NavigateOptions};

/// Direct location changes, used when no router navigator is wired yet.
pub trait LocationFallback {
    /// Push-style navigation (`location.assign`)
    fn assign(&self, to: &str);
    /// Replace-style navigation (`location.replace`)
    fn replace(&self, to: &str);
}

/// `window.location` in the browser; logs only during SSR.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLocation;

impl LocationFallback for BrowserLocation {
    fn assign(&self, to: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().assign(to) {
                    warn!("location.assign({}) failed: {:?}", to, e);
                }
                return;
            }
        }
        warn!("No browser location available, dropping navigation to {}", to);
    }

    fn replace(&self, to: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().replace(to) {
                    warn!("location.replace({}) failed: {:?}", to, e);
                }
                return;
            }
        }
        warn!("No browser location available, dropping navigation to {}", to);
    }
}

/// Change the document location directly, bypassing any router.
pub fn change_location(location: &dyn LocationFallback, to: &str, options: NavigateOptions) {
    if options.replace {
        location.replace(to);
    } else {
        location.assign(to);
    }
}

/// Holds the current navigation function. Last write wins.
#[derive(Clone)]
pub struct NavigationBridge {
    navigate_ref: Rc<RefCell<Option<NavigateFn>>>,
    fallback: Rc<dyn LocationFallback>,
}

impl NavigationBridge {
    pub fn new(fallback: Rc<dyn LocationFallback>) -> Self {
        Self {
            navigate_ref: Rc::new(RefCell::new(None)),
            fallback,
        }
    }

    /// Install the navigation function, replacing any previous one.
    pub fn set_navigate_ref(&self, navigate: NavigateFn) {
        *self.navigate_ref.borrow_mut() = Some(navigate);
    }

    /// Location used for unwired navigation and for leaving the app.
    pub fn location(&self) -> Rc<dyn LocationFallback> {
        self.fallback.clone()
    }

    /// Navigate through the injected function, or change the browser location
    /// directly if nothing has been injected.
    pub fn navigate(&self, to: &str, options: NavigateOptions) {
        // Clone out so the function may re-wire the bridge while running
        let navigate = self.navigate_ref.borrow().clone();
        match navigate {
            Some(navigate) => {
                debug!("Navigating to {} (replace: {})", to, options.replace);
                navigate(to, options);
            }
            None => {
                warn!(
                    "Navigation bridge not wired, using direct location change to {}",
                    to
                );
                change_location(self.fallback.as_ref(), to, options);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records direct location changes as `(path, replaced)`.
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

    type Calls = Rc<RefCell<Vec<(String, NavigateOptions)>>>;

    fn recorder() -> (Calls, NavigateFn) {
        let calls: Calls = Rc::default();
        let sink = calls.clone();
        let navigate: NavigateFn = Rc::new(move |to: &str, options: NavigateOptions| {
            sink.borrow_mut().push((to.to_string(), options));
        });
        (calls, navigate)
    }

    #[test]
    fn test_wired_navigation_calls_function_once() {
        let location = Rc::new(RecordingLocation::default());
        let bridge = NavigationBridge::new(location.clone());
        let (calls, navigate) = recorder();
        bridge.set_navigate_ref(navigate);

        bridge.navigate("/booking", NavigateOptions::REPLACE);

        assert_eq!(
            *calls.borrow(),
            vec![("/booking".to_string(), NavigateOptions { replace: true })]
        );
        assert!(location.visits.borrow().is_empty());
    }

    #[test]
    fn test_unwired_push_assigns_location() {
        let location = Rc::new(RecordingLocation::default());
        let bridge = NavigationBridge::new(location.clone());

        bridge.navigate("/x", NavigateOptions::default());

        assert_eq!(*location.visits.borrow(), vec![("/x".to_string(), false)]);
    }

    #[test]
    fn test_unwired_replace_replaces_location() {
        let location = Rc::new(RecordingLocation::default());
        let bridge = NavigationBridge::new(location.clone());

        bridge.navigate("/login", NavigateOptions::REPLACE);

        assert_eq!(*location.visits.borrow(), vec![("/login".to_string(), true)]);
    }

    #[test]
    fn test_last_write_wins() {
        let bridge = NavigationBridge::new(Rc::new(RecordingLocation::default()));
        let (first_calls, first) = recorder();
        let (second_calls, second) = recorder();

        bridge.set_navigate_ref(first);
        bridge.set_navigate_ref(second);
        bridge.navigate("/", NavigateOptions::PUSH);

        assert!(first_calls.borrow().is_empty());
        assert_eq!(second_calls.borrow().len(), 1);
    }

    #[test]
    fn test_clones_share_the_reference() {
        let bridge = NavigationBridge::new(Rc::new(RecordingLocation::default()));
        let handle = bridge.clone();
        let (calls, navigate) = recorder();

        bridge.set_navigate_ref(navigate);
        handle.navigate("/profile", NavigateOptions::PUSH);

        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_navigate_fn_may_rewire_bridge() {
        let bridge = NavigationBridge::new(Rc::new(RecordingLocation::default()));
        let (calls, replacement) = recorder();
        let inner = bridge.clone();
        bridge.set_navigate_ref(Rc::new(move |_: &str, _: NavigateOptions| {
            inner.set_navigate_ref(replacement.clone());
        }));

        bridge.navigate("/a", NavigateOptions::PUSH);
        bridge.navigate("/b", NavigateOptions::PUSH);

        assert_eq!(
            *calls.borrow(),
            vec![("/b".to_string(), NavigateOptions::PUSH)]
        );
    }
}
