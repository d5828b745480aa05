use indexmap::IndexMap;
use tracing::{debug, info, trace, warn};

use crate::{
    Location, PathTemplate, Result, RouteDefinition, RouteError, RouteParams, RouteProvider,
    RouteTarget, RouteView, RoutesConfig,
};

#[derive(Debug, Clone)]
struct Entry {
    definition: RouteDefinition,
    template: PathTemplate,
}

/// Name to route table, populated once while the application is configured
/// and read from then on.
///
/// Registration needs `&mut self`; lookups and URL building only need `&self`,
/// so once the registry is shared behind a reference no more routes can be
/// added.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry<P = ()> {
    routes: IndexMap<String, Entry>,
    provider: P,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: RouteProvider> RouteRegistry<P> {
    pub fn with_provider(provider: P) -> Self {
        Self {
            routes: IndexMap::new(),
            provider,
        }
    }

    /// Registers routes in file order, then redirects, then the default route.
    pub fn from_config(config: RoutesConfig, provider: P) -> Result<Self> {
        let mut registry = Self::with_provider(provider);
        for (name, definition) in config.routes {
            registry.add(name, definition)?;
        }
        for (from, to) in &config.redirects {
            registry.add_redirect(from, to)?;
        }
        if let Some(view) = config.otherwise {
            registry.otherwise(view);
        }
        Ok(registry)
    }

    /// Stores `definition` under `name`.
    ///
    /// Routes that declare a controller or a template are also forwarded to
    /// the provider, without their path template. Nothing is stored or
    /// forwarded when validation fails.
    pub fn add(&mut self, name: impl Into<String>, mut definition: RouteDefinition) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            warn!("rejected route with an empty name");
            return Err(RouteError::InvalidName(name));
        }
        if self.routes.contains_key(&name) {
            warn!(route = %name, "rejected duplicate route");
            return Err(RouteError::DuplicateName(name));
        }
        if definition.path.is_empty() {
            warn!(route = %name, "rejected route without a path");
            return Err(RouteError::InvalidDefinition {
                name,
                reason: "path template is missing or empty",
            });
        }

        definition.name = name.clone();
        let template = PathTemplate::parse(definition.path.as_str());
        if definition.has_view() {
            self.provider.when(&definition.path, definition.to_target());
        }

        debug!(route = %name, path = %definition.path, "route added");
        self.routes.insert(name, Entry { definition, template });
        Ok(())
    }

    /// Registers a path that redirects to another path. Redirects have no
    /// name and cannot be built with [`RouteRegistry::build_url`].
    pub fn add_redirect(&mut self, from: &str, to: &str) -> Result<()> {
        if from.is_empty() || to.is_empty() {
            warn!(from, to, "rejected redirect");
            return Err(RouteError::InvalidDefinition {
                name: from.to_string(),
                reason: "redirect source and destination must not be empty",
            });
        }

        self.provider.when(from, RouteView::redirect(to).into());
        debug!(from, to, "redirect added");
        Ok(())
    }

    /// Sets the route used when nothing else matches.
    pub fn otherwise(&mut self, view: RouteView) {
        debug!(?view, "default route set");
        self.provider.otherwise(RouteTarget::from(view));
    }
}

impl<P> RouteRegistry<P> {
    pub fn get(&self, name: &str) -> Result<&RouteDefinition> {
        self.entry(name).map(|entry| &entry.definition)
    }

    pub fn template(&self, name: &str) -> Result<&PathTemplate> {
        self.entry(name).map(|entry| &entry.template)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Route names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDefinition> {
        self.routes.values().map(|entry| &entry.definition)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn into_provider(self) -> P {
        self.provider
    }

    /// Interpolates `params` into the path template of route `name`.
    pub fn build_url<R>(&self, name: &str, params: &R) -> Result<String>
    where
        R: RouteParams + ?Sized,
    {
        let url = self.entry(name)?.template.render(name, params)?;
        trace!(route = name, %url, "url built");
        Ok(url)
    }

    /// Builds the URL of route `name` and sends `location` there. `location`
    /// is left untouched when the URL cannot be built.
    pub fn navigate_to<R, L>(&self, name: &str, params: &R, location: &mut L) -> Result<()>
    where
        R: RouteParams + ?Sized,
        L: Location + ?Sized,
    {
        let url = self.build_url(name, params)?;
        info!(route = name, %url, "navigating");
        location.set_url(&url);
        Ok(())
    }

    fn entry(&self, name: &str) -> Result<&Entry> {
        self.routes
            .get(name)
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))
    }
}
