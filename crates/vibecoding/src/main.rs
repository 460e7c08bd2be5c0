use crate::prelude::*;
use clap::Parser;

mod agent;
mod config;
mod error;
mod generate;
mod generator;
mod prelude;
mod provider;
mod server;

#[cfg(test)]
mod testing;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Turn natural-language prompts into Solidity contracts and deploy them"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    #[clap(flatten)]
    provider: config::ProviderArgs,

    /// Whether to display additional information.
    #[clap(long, env = "VIBE_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Run the HTTP backend (/build, /deploy and the /app frontend)
    Serve(crate::server::App),

    /// Generate a contract once and print it
    Generate(crate::generate::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(sub_app) => crate::server::run(sub_app, app.global).await,
        SubCommands::Generate(sub_app) => crate::generate::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
