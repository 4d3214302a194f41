// Route table - pure logic, no I/O.
// Known screens are a closed enum so titles and icons are checked exhaustively;
// anything else falls back to a label derived from the path.

use crate::modules::navigation::canonical_path;
use crate::state::Tab;

/// Known application screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    RawMaterials,
    Bom,
    Samples,
    PurchaseOrders,
    CustomerOrders,
    JobWork,
    Suppliers,
    Customers,
    Settings,
}

impl Route {
    pub const ALL: [Route; 10] = [
        Route::Dashboard,
        Route::RawMaterials,
        Route::Bom,
        Route::Samples,
        Route::PurchaseOrders,
        Route::CustomerOrders,
        Route::JobWork,
        Route::Suppliers,
        Route::Customers,
        Route::Settings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::RawMaterials => "/raw-materials",
            Route::Bom => "/bom",
            Route::Samples => "/samples",
            Route::PurchaseOrders => "/purchase-orders",
            Route::CustomerOrders => "/customer-orders",
            Route::JobWork => "/job-work",
            Route::Suppliers => "/suppliers",
            Route::Customers => "/customers",
            Route::Settings => "/settings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::RawMaterials => "Raw Materials",
            Route::Bom => "Bill of Materials",
            Route::Samples => "Samples",
            Route::PurchaseOrders => "Purchase Orders",
            Route::CustomerOrders => "Customer Orders",
            Route::JobWork => "Job Work",
            Route::Suppliers => "Suppliers",
            Route::Customers => "Customers",
            Route::Settings => "Settings",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Route::Dashboard => Icon::Dashboard,
            Route::RawMaterials => Icon::Package,
            Route::Bom => Icon::Layers,
            Route::Samples => Icon::Beaker,
            Route::PurchaseOrders => Icon::Cart,
            Route::CustomerOrders => Icon::Receipt,
            Route::JobWork => Icon::Wrench,
            Route::Suppliers => Icon::Truck,
            Route::Customers => Icon::Users,
            Route::Settings => Icon::Settings,
        }
    }

    /// Matches an already canonical path (see [`canonical_path`]).
    pub fn from_canonical(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|r| r.path() == path)
    }

    pub fn from_path(raw: &str) -> Option<Route> {
        Route::from_canonical(&canonical_path(raw))
    }
}

/// Symbolic glyph names, resolved to real glyphs by whatever draws the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Icon {
    Dashboard,
    Package,
    Layers,
    Beaker,
    Cart,
    Receipt,
    Wrench,
    Truck,
    Users,
    Settings,
    #[default]
    Generic,
}

impl Icon {
    const NAMED: [Icon; 11] = [
        Icon::Dashboard,
        Icon::Package,
        Icon::Layers,
        Icon::Beaker,
        Icon::Cart,
        Icon::Receipt,
        Icon::Wrench,
        Icon::Truck,
        Icon::Users,
        Icon::Settings,
        Icon::Generic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Dashboard => "dashboard",
            Icon::Package => "package",
            Icon::Layers => "layers",
            Icon::Beaker => "beaker",
            Icon::Cart => "cart",
            Icon::Receipt => "receipt",
            Icon::Wrench => "wrench",
            Icon::Truck => "truck",
            Icon::Users => "users",
            Icon::Settings => "settings",
            Icon::Generic => "file",
        }
    }

    pub fn from_name(name: &str) -> Icon {
        Icon::NAMED
            .into_iter()
            .find(|i| i.as_str() == name)
            .unwrap_or_default()
    }
}

/// Title for a path that is not in the route table.
///
/// Takes the last non-empty segment and turns kebab-case into Title Case:
/// `/job-work/challan-register` becomes `Challan Register`. Percent-escapes are
/// decoded first, so `/reports/stock%20ledger` becomes `Stock ledger`.
pub fn derive_title(raw: &str) -> String {
    let path = canonical_path(raw);
    let Some(segment) = path.rsplit('/').find(|s| !s.is_empty()) else {
        return "Home".to_string();
    };
    let segment = urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string());

    segment
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn title_for(raw: &str) -> String {
    match Route::from_path(raw) {
        Some(route) => route.title().to_string(),
        None => derive_title(raw),
    }
}

pub fn icon_for(raw: &str) -> Icon {
    Route::from_path(raw).map(Route::icon).unwrap_or_default()
}

/// Builds a fresh, unpinned tab for `path`. The title is fixed here and never recomputed.
pub fn tab_for_path(path: &str, title_override: Option<&str>) -> Tab {
    Tab {
        path: path.to_string(),
        title: title_override
            .map(str::to_string)
            .unwrap_or_else(|| title_for(path)),
        icon: icon_for(path).as_str().to_string(),
        pinned: false,
    }
}
