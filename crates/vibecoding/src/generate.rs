use colored::Colorize;
use vibecoding_core::api::BuildResponse;
use vibecoding_core::GenerationRequest;

use crate::generator::Generator;
use crate::prelude::{eprintln, println, *};
use crate::provider::make_provider;

#[derive(Debug, clap::Args)]
pub struct App {
    /// Description of the contract to generate
    pub prompt: String,

    /// Also generate a React frontend for the contract
    #[arg(long)]
    pub frontend: bool,

    /// Output the same JSON document `POST /build` returns
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let request = GenerationRequest::new(&app.prompt, app.frontend)?;
    let generator = Generator::new(make_provider(&global.provider)?);

    if global.verbose {
        eprintln!("Provider: {}", generator.provider_name());
        eprintln!("Model: {}", global.provider.model());
        eprintln!("Prompt length: {} chars", request.prompt.len());
    }

    let generation = generator.generate(&request).await?;

    if generation.contract.is_fallback() {
        eprintln!(
            "{}",
            "Provider call failed, printing the fallback ERC-20 contract".yellow()
        );
    }

    if app.json {
        let response = BuildResponse::from(generation);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match &generation.frontend {
        Some(frontend) => {
            println!("{}", "// ---- Solidity ----".bold());
            println!("{}", generation.contract.code());
            println!();
            println!("{}", "// ---- Frontend ----".bold());
            println!("{}", frontend);
        }
        None => println!("{}", generation.contract.code()),
    }

    Ok(())
}
