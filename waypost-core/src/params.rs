use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use indexmap::IndexMap;

/// Read-only lookup of placeholder values used when building a URL.
///
/// `()` is the empty mapping, so `registry.build_url("home", &())` builds a
/// route that takes no parameters.
pub trait RouteParams {
    fn get_param(&self, key: &str) -> Option<&str>;
}

impl RouteParams for () {
    fn get_param(&self, _key: &str) -> Option<&str> {
        None
    }
}

impl<T: RouteParams + ?Sized> RouteParams for &T {
    fn get_param(&self, key: &str) -> Option<&str> {
        (**self).get_param(key)
    }
}

impl<K, V, S> RouteParams for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn get_param(&self, key: &str) -> Option<&str> {
        self.get(key).map(AsRef::as_ref)
    }
}

impl<K, V> RouteParams for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn get_param(&self, key: &str) -> Option<&str> {
        self.get(key).map(AsRef::as_ref)
    }
}

impl<K, V, S> RouteParams for IndexMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn get_param(&self, key: &str) -> Option<&str> {
        self.get(key).map(AsRef::as_ref)
    }
}

// first pair with a matching key wins
impl<K: AsRef<str>, V: AsRef<str>> RouteParams for [(K, V)] {
    fn get_param(&self, key: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> RouteParams for [(K, V); N] {
    fn get_param(&self, key: &str) -> Option<&str> {
        self.as_slice().get_param(key)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> RouteParams for Vec<(K, V)> {
    fn get_param(&self, key: &str) -> Option<&str> {
        self.as_slice().get_param(key)
    }
}
