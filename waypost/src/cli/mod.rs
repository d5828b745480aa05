mod check;
mod list;
mod url;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use enum_dispatch::enum_dispatch;
use waypost_core::{RouteRegistry, RouteTable, RoutesConfig};

use crate::CmdExecutor;

pub use check::CheckOpts;
pub use list::ListOpts;
pub use url::UrlOpts;

#[derive(Debug, Parser)]
#[command(name = "waypost", version, about = "Inspect named routes and build their URLs")]
pub struct Opts {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub cmd: SubCommand,
}

#[derive(Debug, Parser)]
#[enum_dispatch(CmdExecutor)]
pub enum SubCommand {
    #[command(about = "List the named routes of a route file")]
    List(ListOpts),
    #[command(about = "Build the URL of a named route")]
    Url(UrlOpts),
    #[command(about = "Validate a route file and show what the router receives")]
    Check(CheckOpts),
}

#[derive(Debug, Parser)]
pub struct ConfigArg {
    /// Route file (YAML)
    #[arg(short, long, default_value = "routes.yml")]
    pub config: PathBuf,
}

pub(crate) fn load_registry(path: &Path) -> anyhow::Result<RouteRegistry<RouteTable>> {
    let config = RoutesConfig::load(path)?;
    Ok(RouteRegistry::from_config(config, RouteTable::new())?)
}
