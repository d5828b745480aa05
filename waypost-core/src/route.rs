use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use typed_builder::TypedBuilder;

/// A named route: a path template plus whatever the host needs to render it.
///
/// `name` is filled in by the registry when the route is added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct RouteDefinition {
    #[builder(default, setter(skip))]
    #[serde(default)]
    pub name: String,
    #[builder(setter(into))]
    #[serde(default)]
    pub path: String,
    #[builder(default)]
    #[serde(flatten)]
    pub view: RouteView,
}

/// View metadata handed through to the routing provider untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct RouteView {
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_url: Option<String>,
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
    #[builder(default)]
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What the routing provider receives for a path: the definition without
/// its path template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub view: RouteView,
}

impl RouteDefinition {
    pub fn has_view(&self) -> bool {
        self.view.has_view()
    }

    pub fn to_target(&self) -> RouteTarget {
        RouteTarget {
            name: (!self.name.is_empty()).then(|| self.name.clone()),
            view: self.view.clone(),
        }
    }
}

impl RouteView {
    /// True when a controller or a template is declared.
    pub fn has_view(&self) -> bool {
        self.controller.is_some() || self.template.is_some() || self.template_url.is_some()
    }

    pub fn redirect(to: impl Into<String>) -> Self {
        Self {
            redirect_to: Some(to.into()),
            ..Default::default()
        }
    }
}

impl From<RouteView> for RouteTarget {
    fn from(view: RouteView) -> Self {
        Self { name: None, view }
    }
}
