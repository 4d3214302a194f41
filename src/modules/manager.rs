// Tabs session manager - the only owner and writer of the session state.
// Each operation runs a reducer transition, persists the whole state, then navigates.

use crate::modules::navigation::Navigator;
use crate::modules::session_store::SessionStore;
use crate::modules::tabs::{self, Transition};
use crate::state::{SessionState, Tab};

pub struct TabsSessionManager<S, N> {
    state: SessionState,
    store: S,
    navigator: N,
    default_path: String,
}

impl<S: SessionStore, N: Navigator> TabsSessionManager<S, N> {
    /// Restores the last saved session. A missing or corrupt blob yields an empty session.
    pub fn new(store: S, navigator: N, default_path: impl Into<String>) -> Self {
        let state = store.load();
        log::info!(
            "[Tabs] Restored {} tab(s), active: {:?}",
            state.tabs.len(),
            state.active_path
        );

        Self {
            state,
            store,
            navigator,
            default_path: default_path.into(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.state.tabs
    }

    pub fn active_path(&self) -> Option<&str> {
        self.state.active_path.as_deref()
    }

    pub fn default_path(&self) -> &str {
        &self.default_path
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// Reactive rule: the host reports that the current route is now `location`.
    pub fn on_route_changed(&mut self, location: &str) {
        let t = tabs::on_route_changed(&mut self.state, location);
        self.commit("route", t);
    }

    /// Feeds every route change the navigator has seen back through the reactive rule.
    ///
    /// Includes the ones caused by our own `navigate` calls; the rule is idempotent so
    /// those never duplicate a tab.
    pub fn settle(&mut self) {
        for location in self.navigator.drain_route_changes() {
            self.on_route_changed(&location);
        }
    }

    pub fn open_tab(&mut self, path: &str, title: Option<&str>) {
        let t = tabs::open_tab(&mut self.state, path, title);
        self.commit("open", t);
    }

    pub fn activate_tab(&mut self, path: &str) {
        let t = tabs::activate_tab(&mut self.state, path);
        self.commit("activate", t);
    }

    pub fn close_tab(&mut self, path: &str) {
        let t = tabs::close_tab(&mut self.state, path);
        self.commit("close", t);
    }

    pub fn close_others(&mut self, path: &str) {
        let t = tabs::close_others(&mut self.state, path);
        self.commit("close-others", t);
    }

    pub fn close_all(&mut self) {
        let t = tabs::close_all(&mut self.state, &self.default_path);
        self.commit("close-all", t);
    }

    pub fn reorder_tabs(&mut self, from: usize, to: usize) {
        let t = tabs::reorder_tabs(&mut self.state, from, to);
        self.commit("reorder", t);
    }

    pub fn toggle_pin(&mut self, path: &str) {
        let t = tabs::toggle_pin(&mut self.state, path);
        self.commit("pin", t);
    }

    fn commit(&mut self, op: &str, t: Transition) {
        if t.changed {
            log::debug!(
                "[Tabs] {}: {:?} active={:?}",
                op,
                self.state.paths(),
                self.state.active_path
            );
            if let Err(e) = self.store.save(&self.state) {
                log::warn!("[Tabs] Failed to persist session after {}: {}", op, e);
            }
        }

        if let Some(path) = t.navigate_to {
            self.navigator.navigate(&path);
        }
    }
}
