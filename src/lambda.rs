#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use poke_lookup::config::lambda::LambdaConfig;
#[cfg(feature = "lambda")]
use poke_lookup::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use poke_lookup::{LookupEvent, LookupHandler, LookupResponse, PokeApiClient};

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<LookupEvent>) -> Result<LookupResponse, Error> {
    tracing::info!("Starting pokemon lookup invocation");

    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let source = PokeApiClient::new(config)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let handler = LookupHandler::new(source);

    // Upstream and serialization failures surface as invocation errors,
    // never as a synthesized error body.
    let response = handler
        .handle(event.payload)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    tracing::info!(
        "Lookup invocation completed with status {}",
        response.status_code
    );
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
