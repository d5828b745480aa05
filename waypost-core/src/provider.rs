use indexmap::IndexMap;

use crate::RouteTarget;

/// The host's route registration hook.
///
/// The registry calls `when` once for every route that declares a view and
/// for every redirect, and `otherwise` for the default route. `()` accepts
/// and discards everything.
pub trait RouteProvider {
    fn when(&mut self, path: &str, target: RouteTarget);

    fn otherwise(&mut self, target: RouteTarget);
}

/// The host's current-location setter.
pub trait Location {
    fn set_url(&mut self, url: &str);
}

impl RouteProvider for () {
    fn when(&mut self, _path: &str, _target: RouteTarget) {}

    fn otherwise(&mut self, _target: RouteTarget) {}
}

impl<P: RouteProvider + ?Sized> RouteProvider for &mut P {
    fn when(&mut self, path: &str, target: RouteTarget) {
        (**self).when(path, target)
    }

    fn otherwise(&mut self, target: RouteTarget) {
        (**self).otherwise(target)
    }
}

impl<P: RouteProvider + ?Sized> RouteProvider for Box<P> {
    fn when(&mut self, path: &str, target: RouteTarget) {
        (**self).when(path, target)
    }

    fn otherwise(&mut self, target: RouteTarget) {
        (**self).otherwise(target)
    }
}

impl<L: Location + ?Sized> Location for &mut L {
    fn set_url(&mut self, url: &str) {
        (**self).set_url(url)
    }
}

/// In-memory provider that keeps every registration, keyed by path.
///
/// Registering the same path twice replaces the earlier target but keeps its
/// position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteTable {
    routes: IndexMap<String, RouteTarget>,
    fallback: Option<RouteTarget>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&RouteTarget> {
        self.routes.get(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteTarget)> {
        self.routes.iter().map(|(path, target)| (path.as_str(), target))
    }

    pub fn fallback(&self) -> Option<&RouteTarget> {
        self.fallback.as_ref()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteProvider for RouteTable {
    fn when(&mut self, path: &str, target: RouteTarget) {
        self.routes.insert(path.to_string(), target);
    }

    fn otherwise(&mut self, target: RouteTarget) {
        self.fallback = Some(target);
    }
}

/// Location that records every URL it is sent to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    history: Vec<String>,
}

impl MemoryLocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Location for MemoryLocation {
    fn set_url(&mut self, url: &str) {
        self.history.push(url.to_string());
    }
}
