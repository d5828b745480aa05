use std::fmt::Write as _;

use clap::Parser;

use super::{ConfigArg, load_registry};
use crate::CmdExecutor;

#[derive(Debug, Parser)]
pub struct CheckOpts {
    #[command(flatten)]
    pub config: ConfigArg,
}

impl CheckOpts {
    pub fn render(&self) -> anyhow::Result<String> {
        let registry = load_registry(&self.config.config)?;
        let table = registry.provider();

        let mut out = String::new();
        writeln!(
            out,
            "{}: {} routes, {} router registrations",
            self.config.config.display(),
            registry.len(),
            table.len()
        )?;
        for (path, target) in table.iter() {
            let what = match (&target.name, &target.view.redirect_to) {
                (_, Some(to)) => format!("-> {to}"),
                (Some(name), None) => name.clone(),
                (None, None) => "-".to_string(),
            };
            writeln!(out, "  {path}  {what}")?;
        }
        if let Some(fallback) = table.fallback() {
            match &fallback.view.redirect_to {
                Some(to) => writeln!(out, "  otherwise  -> {to}")?,
                None => writeln!(out, "  otherwise")?,
            }
        }
        Ok(out.trim_end().to_string())
    }
}

impl CmdExecutor for CheckOpts {
    async fn execute(self) -> anyhow::Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}
