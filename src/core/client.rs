use crate::core::{ConfigProvider, PokemonRecord, PokemonSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Upstream adapter for the pokemon lookup service.
pub struct PokeApiClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> PokeApiClient<C> {
    pub fn new(config: C) -> Result<Self> {
        // Certificate verification is intentionally disabled for this
        // upstream. Do not re-enable without an ops sign-off.
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl<C: ConfigProvider> PokemonSource for PokeApiClient<C> {
    async fn fetch(&self, name: &str) -> Result<PokemonRecord> {
        let url = format!("{}/api/v2/pokemon/{}", self.config.api_base(), name);

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).send().await?;

        tracing::debug!("API response status: {}", response.status());

        // No status or shape checks here: a non-JSON body or a payload
        // without `abilities` fails the typed parse and propagates.
        let record = response.json::<PokemonRecord>().await?;

        Ok(record)
    }
}
