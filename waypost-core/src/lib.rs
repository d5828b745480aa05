//! Named routes for a host router.
//!
//! Routes are registered once under a unique name with a path template such
//! as `/users/:id/files/:path*`. The registry forwards routes that carry view
//! metadata to a [`RouteProvider`], and later turns a route name plus
//! parameters back into a URL, optionally handing it to a [`Location`].

mod config;
mod error;
mod params;
mod provider;
mod registry;
mod route;
mod template;

pub use config::RoutesConfig;
pub use error::RouteError;
pub use params::RouteParams;
pub use provider::{Location, MemoryLocation, RouteProvider, RouteTable};
pub use registry::RouteRegistry;
pub use route::{RouteDefinition, RouteTarget, RouteView};
pub use template::{Param, PathTemplate, Segment};

pub type Result<T, E = RouteError> = std::result::Result<T, E>;
