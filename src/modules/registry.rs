// Tab registry: canonical path -> view factory.
// Built once at startup and never mutated afterwards.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::modules::navigation::canonical_path;
use crate::modules::routes::Route;

/// Builds a view for a tab. Receives the full tab path, query included.
pub type ViewFactory<V> = Box<dyn Fn(&str) -> V>;

pub struct TabRegistry<V> {
    factories: HashMap<String, ViewFactory<V>>,
}

impl<V> TabRegistry<V> {
    pub fn builder() -> TabRegistryBuilder<V> {
        TabRegistryBuilder {
            factories: HashMap::new(),
        }
    }

    pub fn resolve(&self, path: &str) -> Option<&ViewFactory<V>> {
        self.factories.get(&canonical_path(path))
    }

    /// Builds a fresh view for `path`, or `None` if nothing is registered for it.
    pub fn instantiate(&self, path: &str) -> Option<V> {
        self.resolve(path).map(|factory| factory(path))
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<V> fmt::Debug for TabRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut paths: Vec<&String> = self.factories.keys().collect();
        paths.sort();
        f.debug_struct("TabRegistry").field("paths", &paths).finish()
    }
}

pub struct TabRegistryBuilder<V> {
    factories: HashMap<String, ViewFactory<V>>,
}

impl<V> TabRegistryBuilder<V> {
    pub fn route(self, route: Route, factory: impl Fn(&str) -> V + 'static) -> Result<Self> {
        self.path(route.path(), factory)
    }

    /// Registers a path outside the closed route table.
    pub fn path(mut self, path: &str, factory: impl Fn(&str) -> V + 'static) -> Result<Self> {
        let key = canonical_path(path);
        if self.factories.contains_key(&key) {
            return Err(Error::DuplicateRoute(key));
        }
        self.factories.insert(key, Box::new(factory));
        Ok(self)
    }

    pub fn build(self) -> TabRegistry<V> {
        TabRegistry {
            factories: self.factories,
        }
    }
}
