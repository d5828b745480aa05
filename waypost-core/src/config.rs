use std::{fs::File, path::Path};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Result, RouteDefinition, RouteView};

/// A route file: named routes, redirects and an optional default route, all
/// kept in file order.
#[derive(Debug, Default, Deserialize)]
pub struct RoutesConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub routes: IndexMap<String, RouteDefinition>,
    #[serde(default)]
    pub redirects: IndexMap<String, String>,
    #[serde(default)]
    pub otherwise: Option<RouteView>,
}

impl RoutesConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let rdr = File::open(path)?;
        Ok(serde_yaml::from_reader(rdr)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouteError;

    #[test]
    fn load_fixture_should_work() -> anyhow::Result<()> {
        let config = RoutesConfig::load("fixtures/routes.yml")?;
        assert_eq!(config.name.as_deref(), Some("waypost-demo"));
        assert_eq!(config.routes.len(), 5);

        let names: Vec<_> = config.routes.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["home", "user", "user-files", "search", "about"]);
        assert_eq!(config.routes["user"].path, "/users/:id");
        assert_eq!(
            config.routes["home"].view.template_url.as_deref(),
            Some("views/home.html")
        );
        assert_eq!(config.redirects.get("/index").map(String::as_str), Some("/"));
        assert_eq!(
            config.otherwise.and_then(|view| view.redirect_to),
            Some("/".to_string())
        );
        Ok(())
    }

    #[test]
    fn empty_document_sections_should_default() -> anyhow::Result<()> {
        let config = RoutesConfig::from_yaml_str("name: bare")?;
        assert!(config.routes.is_empty());
        assert!(config.redirects.is_empty());
        assert!(config.otherwise.is_none());
        Ok(())
    }

    #[test]
    fn non_mapping_route_should_fail() {
        let err = RoutesConfig::from_yaml_str("routes:\n  foo: bar\n").unwrap_err();
        assert!(matches!(err, RouteError::Yaml(_)));
    }

    #[test]
    fn missing_file_should_fail() {
        let err = RoutesConfig::load("fixtures/does-not-exist.yml").unwrap_err();
        assert!(matches!(err, RouteError::Io(_)));
    }
}
