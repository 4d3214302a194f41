// Keep-alive host for tab views.
// A view is instantiated the first time its tab is seen and lives until the tab closes;
// switching tabs only flips visibility.

use std::collections::{HashMap, HashSet};

use crate::modules::registry::TabRegistry;
use crate::state::Tab;

#[derive(Debug, PartialEq)]
pub struct RenderedView<'a, V> {
    pub path: &'a str,
    pub view: &'a V,
    pub visible: bool,
}

#[derive(Debug)]
pub struct TabContentHost<V> {
    views: HashMap<String, V>,
}

impl<V> Default for TabContentHost<V> {
    fn default() -> Self {
        Self {
            views: HashMap::new(),
        }
    }
}

impl<V> TabContentHost<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the view cache in line with the open tabs.
    ///
    /// New tabs with a registered view get one instance; views of closed tabs are dropped.
    /// Tabs with no registered view are skipped without error.
    pub fn sync(&mut self, tabs: &[Tab], registry: &TabRegistry<V>) {
        let open: HashSet<&str> = tabs.iter().map(|t| t.path.as_str()).collect();
        self.views.retain(|path, _| open.contains(path.as_str()));

        for tab in tabs {
            if self.views.contains_key(&tab.path) {
                continue;
            }
            match registry.instantiate(&tab.path) {
                Some(view) => {
                    log::debug!("[TabHost] Mounted view for {}", tab.path);
                    self.views.insert(tab.path.clone(), view);
                }
                None => log::trace!("[TabHost] No view registered for {}", tab.path),
            }
        }
    }

    /// Every mounted view in tab order; only the active one is visible.
    pub fn render<'a>(&'a self, tabs: &'a [Tab], active: Option<&str>) -> Vec<RenderedView<'a, V>> {
        tabs.iter()
            .filter_map(|tab| {
                let view = self.views.get(&tab.path)?;
                Some(RenderedView {
                    path: tab.path.as_str(),
                    view,
                    visible: active == Some(tab.path.as_str()),
                })
            })
            .collect()
    }

    pub fn is_mounted(&self, path: &str) -> bool {
        self.views.contains_key(path)
    }

    pub fn mounted_count(&self) -> usize {
        self.views.len()
    }

    pub fn view(&self, path: &str) -> Option<&V> {
        self.views.get(path)
    }

    pub fn view_mut(&mut self, path: &str) -> Option<&mut V> {
        self.views.get_mut(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::routes::{tab_for_path, Route};
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, PartialEq)]
    struct FormView {
        path: String,
        draft: String,
    }

    fn registry(created: Rc<Cell<usize>>) -> TabRegistry<FormView> {
        let mut builder = TabRegistry::builder();
        for route in [Route::RawMaterials, Route::Bom, Route::Samples] {
            let created = created.clone();
            builder = builder
                .route(route, move |p| {
                    created.set(created.get() + 1);
                    FormView {
                        path: p.to_string(),
                        draft: String::new(),
                    }
                })
                .unwrap();
        }
        builder.build()
    }

    fn tabs(paths: &[&str]) -> Vec<Tab> {
        paths.iter().map(|p| tab_for_path(p, None)).collect()
    }

    #[test]
    fn test_only_active_is_visible() {
        let registry = registry(Rc::new(Cell::new(0)));
        let mut host = TabContentHost::new();
        let open = tabs(&["/raw-materials", "/bom?item=2", "/unregistered"]);
        host.sync(&open, &registry);

        let rendered = host.render(&open, Some("/bom?item=2"));
        let summary: Vec<(&str, bool)> = rendered.iter().map(|r| (r.path, r.visible)).collect();

        assert_eq!(summary, vec![("/raw-materials", false), ("/bom?item=2", true)]);
        assert_eq!(rendered[1].view.path, "/bom?item=2");
        assert!(!host.is_mounted("/unregistered"));
    }

    #[test]
    fn test_switching_tabs_keeps_view_state() {
        let created = Rc::new(Cell::new(0));
        let registry = registry(created.clone());
        let mut host = TabContentHost::new();
        let open = tabs(&["/raw-materials", "/bom"]);
        host.sync(&open, &registry);

        host.view_mut("/bom").unwrap().draft = "half typed".to_string();

        // Switch away and back, re-syncing each time as a render pass would.
        for active in ["/raw-materials", "/bom", "/raw-materials"] {
            host.sync(&open, &registry);
            let visible: Vec<&str> = host
                .render(&open, Some(active))
                .into_iter()
                .filter(|r| r.visible)
                .map(|r| r.path)
                .collect();
            assert_eq!(visible, vec![active]);
        }

        assert_eq!(host.view("/bom").unwrap().draft, "half typed");
        assert_eq!(created.get(), 2);
    }

    #[test]
    fn test_closing_tab_unmounts_and_reopen_is_fresh() {
        let created = Rc::new(Cell::new(0));
        let registry = registry(created.clone());
        let mut host = TabContentHost::new();

        let mut open = tabs(&["/raw-materials", "/samples"]);
        host.sync(&open, &registry);
        host.view_mut("/samples").unwrap().draft = "old".to_string();

        open.retain(|t| t.path != "/samples");
        host.sync(&open, &registry);
        assert!(!host.is_mounted("/samples"));
        assert_eq!(host.mounted_count(), 1);

        open.push(tab_for_path("/samples", None));
        host.sync(&open, &registry);
        assert_eq!(host.view("/samples").unwrap().draft, "");
        assert_eq!(created.get(), 3);
    }

    #[test]
    fn test_nothing_visible_without_active() {
        let registry = registry(Rc::new(Cell::new(0)));
        let mut host = TabContentHost::new();
        let open = tabs(&["/bom"]);
        host.sync(&open, &registry);

        assert!(host.render(&open, None).iter().all(|r| !r.visible));
    }
}
