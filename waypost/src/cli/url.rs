use clap::Parser;
use tracing::debug;

use super::{ConfigArg, load_registry};
use crate::CmdExecutor;

#[derive(Debug, Parser)]
pub struct UrlOpts {
    #[command(flatten)]
    pub config: ConfigArg,
    /// Route name
    pub name: String,
    /// Parameters as key=value
    #[arg(value_parser = parse_param)]
    pub params: Vec<(String, String)>,
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("invalid parameter \"{s}\", expected key=value")),
    }
}

impl UrlOpts {
    pub fn render(&self) -> anyhow::Result<String> {
        let registry = load_registry(&self.config.config)?;
        debug!(route = %self.name, params = ?self.params, "building url");
        Ok(registry.build_url(&self.name, &self.params)?)
    }
}

impl CmdExecutor for UrlOpts {
    async fn execute(self) -> anyhow::Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}
