use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{
    EnvFilter, Layer as _, fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt as _,
};
use waypost::{CmdExecutor, Opts};

#[tokio::main]
async fn main() -> Result<()> {
    let opts = Opts::parse();

    let default_level = match opts.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let layer = Layer::new().with_writer(std::io::stderr).with_filter(filter);
    tracing_subscriber::registry().with(layer).init();

    opts.cmd.execute().await
}
