// End-to-end: router, manager, file store, registry and keep-alive host together.

use tab_session_lib::modules::content_host::TabContentHost;
use tab_session_lib::modules::navigation::QueuedNavigator;
use tab_session_lib::modules::registry::TabRegistry;
use tab_session_lib::modules::routes::Route;
use tab_session_lib::modules::session_store::{FileStore, SessionStore};
use tab_session_lib::modules::tabs_bar::{self, TabBarAction};
use tab_session_lib::TabsSessionManager;
use tempfile::tempdir;

#[derive(Debug)]
struct Screen {
    path: String,
    scroll: u32,
}

fn registry() -> TabRegistry<Screen> {
    TabRegistry::builder()
        .route(Route::RawMaterials, |p| Screen { path: p.to_string(), scroll: 0 })
        .and_then(|b| b.route(Route::PurchaseOrders, |p| Screen { path: p.to_string(), scroll: 0 }))
        .and_then(|b| b.route(Route::Dashboard, |p| Screen { path: p.to_string(), scroll: 0 }))
        .unwrap()
        .build()
}

#[test]
fn test_workday_session() {
    let dir = tempdir().unwrap();
    let registry = registry();
    let mut host = TabContentHost::new();
    let mut manager = TabsSessionManager::new(
        FileStore::new(dir.path(), "erp-tabs"),
        QueuedNavigator::new(),
        "/dashboard",
    );

    manager.navigator_mut().push_external("/raw-materials");
    manager.settle();
    manager.open_tab("/purchase-orders?id=12#lines", Some("PO 12"));
    manager.settle();
    manager.navigator_mut().push_external("/job-work/challan-register");
    manager.settle();
    host.sync(manager.tabs(), &registry);

    assert_eq!(
        manager.state().paths(),
        vec!["/raw-materials", "/purchase-orders?id=12", "/job-work/challan-register"]
    );
    assert_eq!(manager.tabs()[1].title, "PO 12");
    assert_eq!(manager.tabs()[2].title, "Challan Register");
    // Unregistered screen gets a tab but no view.
    assert_eq!(host.mounted_count(), 2);

    host.view_mut("/raw-materials").unwrap().scroll = 640;
    tabs_bar::dispatch(&mut manager, TabBarAction::Activate("/purchase-orders?id=12".to_string()));
    manager.settle();
    host.sync(manager.tabs(), &registry);

    let visible: Vec<&str> = host
        .render(manager.tabs(), manager.active_path())
        .into_iter()
        .filter(|r| r.visible)
        .map(|r| r.view.path.as_str())
        .collect();
    assert_eq!(visible, vec!["/purchase-orders?id=12"]);
    assert_eq!(host.view("/raw-materials").unwrap().scroll, 640);

    tabs_bar::dispatch(&mut manager, TabBarAction::TogglePin("/job-work/challan-register".to_string()));
    manager.close_tab("/purchase-orders?id=12");
    manager.settle();
    host.sync(manager.tabs(), &registry);

    assert_eq!(manager.active_path(), Some("/job-work/challan-register"));
    assert!(!host.is_mounted("/purchase-orders?id=12"));

    // Reload from disk.
    let reloaded = TabsSessionManager::new(
        FileStore::new(dir.path(), "erp-tabs"),
        QueuedNavigator::new(),
        "/dashboard",
    );
    assert_eq!(reloaded.state(), manager.state());
    assert!(reloaded.tabs()[1].pinned);
}

#[test]
fn test_close_all_then_default_screen() {
    let dir = tempdir().unwrap();
    let mut manager = TabsSessionManager::new(
        FileStore::new(dir.path(), "erp-tabs"),
        QueuedNavigator::new(),
        "/dashboard",
    );
    for p in ["/raw-materials", "/samples", "/bom"] {
        manager.open_tab(p, None);
    }
    manager.settle();

    tabs_bar::dispatch(&mut manager, TabBarAction::CloseAll);
    assert!(FileStore::new(dir.path(), "erp-tabs").load().tabs.is_empty());

    manager.settle();
    assert_eq!(manager.state().paths(), vec!["/dashboard"]);
    assert_eq!(manager.active_path(), Some("/dashboard"));
}
