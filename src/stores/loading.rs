//! Global blocking spinner state.

use std::future::Future;

use tracing::debug;

use super::{Store, SubscriptionId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingState {
    pub is_loading: bool,
    /// Optional label shown under the spinner
    pub text: Option<String>,
}

#[derive(Clone)]
pub struct LoadingStore {
    state: Store<LoadingState>,
}

impl LoadingStore {
    pub fn new() -> Self {
        Self {
            state: Store::new("loading", LoadingState::default()),
        }
    }

    pub fn get(&self) -> LoadingState {
        self.state.get()
    }

    pub fn set(&self, state: LoadingState) {
        self.state.set(state);
    }

    pub fn is_loading(&self) -> bool {
        self.state.get().is_loading
    }

    pub fn start_loading(&self, text: Option<String>) {
        debug!("Loading started: {:?}", text);
        self.state.set(LoadingState {
            is_loading: true,
            text,
        });
    }

    pub fn stop_loading(&self) {
        debug!("Loading stopped");
        self.state.set(LoadingState::default());
    }

    /// Run `op` with the spinner shown.
    ///
    /// Loading is set before `op` is called and cleared exactly once when the
    /// operation finishes, fails, panics or is dropped. Errors are returned
    /// unchanged.
    pub async fn with_loading<F, Fut, T, E>(&self, text: Option<String>, op: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.start_loading(text);
        let _guard = LoadingGuard { store: self };
        op().await
    }

    pub fn store(&self) -> &Store<LoadingState> {
        &self.state
    }

    pub fn subscribe(&self, subscriber: impl Fn(&LoadingState) + 'static) -> SubscriptionId {
        self.state.subscribe(subscriber)
    }
}

impl Default for LoadingStore {
    fn default() -> Self {
        Self::new()
    }
}

struct LoadingGuard<'a> {
    store: &'a LoadingStore,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.store.stop_loading();
    }
}
