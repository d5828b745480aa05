use clap::Parser;

use super::{ConfigArg, load_registry};
use crate::CmdExecutor;

#[derive(Debug, Parser)]
pub struct ListOpts {
    #[command(flatten)]
    pub config: ConfigArg,
}

impl ListOpts {
    pub fn render(&self) -> anyhow::Result<String> {
        let registry = load_registry(&self.config.config)?;
        let width = registry.names().map(str::len).max().unwrap_or(0);
        let lines: Vec<_> = registry
            .iter()
            .map(|route| format!("{:<width$}  {}", route.name, route.path))
            .collect();
        Ok(lines.join("\n"))
    }
}

impl CmdExecutor for ListOpts {
    async fn execute(self) -> anyhow::Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}
