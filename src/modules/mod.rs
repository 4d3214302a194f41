// Module exports for the tab session subsystem
pub mod navigation;     // Path canonicalization + router seam
pub mod routes;         // Closed route table, titles, icons
pub mod tabs;           // Session reducer (pure logic)
pub mod session_store;  // Persistence layer
pub mod manager;        // Session owner: reducer + store + navigation
pub mod registry;       // Path -> view factory
pub mod content_host;   // Keep-alive view cache
pub mod tabs_bar;       // Tab strip interaction contract
