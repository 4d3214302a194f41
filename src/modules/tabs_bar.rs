// Tab strip interaction contract.
// The strip shows pinned tabs first; that order is a projection and never written back.
// Drag positions arrive in display coordinates and are mapped to storage indices here.

use crate::modules::manager::TabsSessionManager;
use crate::modules::navigation::Navigator;
use crate::modules::routes::Icon;
use crate::modules::session_store::SessionStore;
use crate::state::{SessionState, Tab};

/// Storage indices in display order: pinned first, storage order within each group.
pub fn display_order(tabs: &[Tab]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tabs.len()).collect();
    // sort_by_key is stable
    order.sort_by_key(|&i| !tabs[i].pinned);
    order
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBarItem {
    pub path: String,
    pub title: String,
    pub icon: Icon,
    pub pinned: bool,
    pub active: bool,
    pub storage_index: usize,
}

/// What the strip draws, left to right.
pub fn items(state: &SessionState) -> Vec<TabBarItem> {
    display_order(&state.tabs)
        .into_iter()
        .map(|i| {
            let tab = &state.tabs[i];
            TabBarItem {
                path: tab.path.clone(),
                title: tab.title.clone(),
                icon: tab.icon(),
                pinned: tab.pinned,
                active: state.active_path.as_deref() == Some(tab.path.as_str()),
                storage_index: i,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabBarAction {
    Activate(String),
    Close(String),
    CloseOthers(String),
    CloseAll,
    TogglePin(String),
    /// Drag from one display position to another.
    Drag { from: usize, to: usize },
}

/// Maps a drag in display positions onto a storage-order move.
///
/// Returns `None` for out-of-range positions. Dropping onto a tab moves the
/// dragged tab to that tab's storage slot.
pub fn drag_to_storage(tabs: &[Tab], from: usize, to: usize) -> Option<(usize, usize)> {
    let order = display_order(tabs);
    Some((*order.get(from)?, *order.get(to)?))
}

/// Applies a strip interaction to the session manager.
pub fn dispatch<S: SessionStore, N: Navigator>(
    manager: &mut TabsSessionManager<S, N>,
    action: TabBarAction,
) {
    log::debug!("[TabBar] {:?}", action);
    match action {
        TabBarAction::Activate(path) => manager.activate_tab(&path),
        TabBarAction::Close(path) => manager.close_tab(&path),
        TabBarAction::CloseOthers(path) => manager.close_others(&path),
        TabBarAction::CloseAll => manager.close_all(),
        TabBarAction::TogglePin(path) => manager.toggle_pin(&path),
        TabBarAction::Drag { from, to } => {
            if let Some((from, to)) = drag_to_storage(manager.tabs(), from, to) {
                manager.reorder_tabs(from, to);
            }
        }
    }
}
