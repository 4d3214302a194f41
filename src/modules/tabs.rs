// Tab session reducer - pure logic, no store or router access.
// The manager applies these transitions, persists, then performs `navigate_to`.

use crate::modules::navigation::route_key;
use crate::modules::routes::tab_for_path;
use crate::state::SessionState;

/// Outcome of one transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    /// Whether `tabs` or `active_path` differ from before.
    pub changed: bool,
    /// Navigation the caller must fire, if any.
    pub navigate_to: Option<String>,
}

impl Transition {
    fn new(changed: bool, navigate_to: Option<String>) -> Self {
        Self {
            changed,
            navigate_to,
        }
    }

    fn unchanged() -> Self {
        Self::default()
    }
}

fn set_active(state: &mut SessionState, path: Option<String>) -> bool {
    if state.active_path == path {
        return false;
    }
    state.active_path = path;
    true
}

/// Reactive rule for an arrived route: open it if needed, then make it active.
///
/// Idempotent: applying the same route twice changes nothing the second time.
pub fn on_route_changed(state: &mut SessionState, location: &str) -> Transition {
    let key = route_key(location);
    let mut changed = false;

    if !state.contains(&key) {
        state.tabs.push(tab_for_path(&key, None));
        changed = true;
    }
    changed |= set_active(state, Some(key));

    Transition::new(changed, None)
}

/// Explicit open. Navigation always fires, even for an already open tab.
pub fn open_tab(state: &mut SessionState, location: &str, title: Option<&str>) -> Transition {
    let key = route_key(location);
    let mut changed = false;

    if !state.contains(&key) {
        state.tabs.push(tab_for_path(&key, title));
        changed = true;
    }
    changed |= set_active(state, Some(key.clone()));

    Transition::new(changed, Some(key))
}

/// Points the active pointer at `location`. Unknown paths only navigate; the route
/// arrival then opens them through [`on_route_changed`].
pub fn activate_tab(state: &mut SessionState, location: &str) -> Transition {
    let path = route_key(location);
    let changed = state.contains(&path) && set_active(state, Some(path.clone()));
    Transition::new(changed, Some(path))
}

/// Removes the tab at `location`. When it was active, the tab that slides into its index takes
/// over, else the one before it, else nothing.
pub fn close_tab(state: &mut SessionState, location: &str) -> Transition {
    let path = route_key(location);
    let Some(index) = state.position(&path) else {
        return Transition::unchanged();
    };
    state.tabs.remove(index);

    if state.active_path.as_deref() != Some(path.as_str()) {
        return Transition::new(true, None);
    }

    let replacement = state
        .tabs
        .get(index)
        .or_else(|| index.checked_sub(1).and_then(|i| state.tabs.get(i)))
        .map(|t| t.path.clone());

    state.active_path = replacement.clone();
    Transition::new(true, replacement)
}

/// Keeps only the tab at `location`, pinned or not.
pub fn close_others(state: &mut SessionState, location: &str) -> Transition {
    let path = route_key(location);
    let Some(index) = state.position(&path) else {
        return Transition::unchanged();
    };

    let changed = state.tabs.len() > 1;
    let kept = state.tabs.swap_remove(index);
    state.tabs = vec![kept];
    let changed = set_active(state, Some(path.clone())) || changed;

    Transition::new(changed, Some(path))
}

/// Empties the session and sends the router to `default_path`.
pub fn close_all(state: &mut SessionState, default_path: &str) -> Transition {
    let changed = !state.tabs.is_empty() || state.active_path.is_some();
    state.tabs.clear();
    state.active_path = None;

    Transition::new(changed, Some(default_path.to_string()))
}

/// Moves the element at `from` to `to`, shifting the ones in between.
/// Returns true if the order changed, false otherwise.
pub fn reorder_tabs(state: &mut SessionState, from: usize, to: usize) -> Transition {
    let len = state.tabs.len();
    if from == to || from >= len || to >= len {
        return Transition::unchanged();
    }

    let tab = state.tabs.remove(from);
    state.tabs.insert(to, tab);

    Transition::new(true, None)
}

/// Flips the pin flag in place; storage order is untouched.
pub fn toggle_pin(state: &mut SessionState, location: &str) -> Transition {
    let path = route_key(location);
    match state.tabs.iter_mut().find(|t| t.path == path) {
        Some(tab) => {
            tab.pinned = !tab.pinned;
            Transition::new(true, None)
        }
        None => Transition::unchanged(),
    }
}
