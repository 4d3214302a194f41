// Pure navigation logic plus the seam to the host router.
// Path canonicalization is unit tested here; the manager only ever sees canonical keys.

use std::collections::VecDeque;

use url::Url;

const LOCAL_BASE: &str = "http://localhost/";

fn split_route(raw: &str) -> (String, Option<String>) {
    let trimmed = raw.trim();
    // Anchor at the root so nothing can read as a scheme (`orders:42`) or an authority (`//bom`).
    let rooted = format!("/{}", trimmed.trim_start_matches('/'));
    let parsed = Url::parse(LOCAL_BASE).and_then(|base| base.join(&rooted));

    match parsed {
        Ok(u) => (
            u.path().to_string(),
            u.query().filter(|q| !q.is_empty()).map(str::to_string),
        ),
        Err(_) => {
            // Not joinable as a relative reference; fall back to plain string splitting.
            let without_hash = rooted.split('#').next().unwrap_or_default();
            let mut parts = without_hash.splitn(2, '?');
            let path = parts.next().unwrap_or_default();
            let query = parts.next().filter(|q| !q.is_empty()).map(str::to_string);
            (path.to_string(), query)
        }
    }
}

fn strip_trailing_slash(path: &str) -> &str {
    let stripped = path.trim_end_matches('/');
    if stripped.is_empty() {
        "/"
    } else {
        stripped
    }
}

/// Tab identity for a location: path plus query string, hash dropped.
///
/// The trailing slash of the path component is dropped as well so `/bom/`
/// and `/bom` land on the same tab.
pub fn route_key(raw: &str) -> String {
    let (path, query) = split_route(raw);
    let path = strip_trailing_slash(&path);
    match query {
        Some(q) => format!("{}?{}", path, q),
        None => path.to_string(),
    }
}

/// Lookup key for titles, icons and the view registry: no query, no hash, no trailing slash.
pub fn canonical_path(raw: &str) -> String {
    let (path, _) = split_route(raw);
    strip_trailing_slash(&path).to_string()
}

/// The host routing facility as seen by the session manager.
pub trait Navigator {
    /// Ask the host to move the address bar to `path`.
    fn navigate(&mut self, path: &str);

    /// Route changes that have arrived since the last call, oldest first.
    ///
    /// Hosts that push route changes into the manager themselves can keep the default.
    fn drain_route_changes(&mut self) -> Vec<String> {
        Vec::new()
    }
}

/// In-process router: every navigation is immediately accepted and reported back
/// as a route change on the next drain.
#[derive(Debug, Default)]
pub struct QueuedNavigator {
    current: Option<String>,
    pending: VecDeque<String>,
    history: Vec<String>,
}

impl QueuedNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Every path passed to `navigate`, in call order.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Simulates the user typing an address or following a link.
    pub fn push_external(&mut self, path: &str) {
        self.current = Some(path.to_string());
        self.pending.push_back(path.to_string());
    }
}

impl Navigator for QueuedNavigator {
    fn navigate(&mut self, path: &str) {
        log::debug!("[Navigation] navigate -> {}", path);
        self.history.push(path.to_string());
        self.push_external(path);
    }

    fn drain_route_changes(&mut self) -> Vec<String> {
        self.pending.drain(..).collect()
    }
}
