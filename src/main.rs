use clap::Parser;
use poke_lookup::utils::{logger, validation::Validate};
use poke_lookup::{CliConfig, LookupEvent, LookupHandler, PokeApiClient};
use std::collections::HashMap;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting poke-lookup CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // Synthesize the invocation event the deployed function would receive.
    let event = LookupEvent {
        query_string_parameters: config
            .name
            .clone()
            .map(|name| HashMap::from([("name".to_string(), name)])),
    };

    let source = PokeApiClient::new(config)?;
    let handler = LookupHandler::new(source);

    let response = handler.handle(event).await?;

    if response.status_code == 200 {
        tracing::info!("✅ Lookup completed successfully");
        println!("{}", response.body);
    } else {
        eprintln!("❌ [{}] {}", response.status_code, response.body);
        std::process::exit(1);
    }

    Ok(())
}
