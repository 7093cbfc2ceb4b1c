use crate::core::{LookupEvent, LookupResponse, LookupResult, PokemonSource, PokemonSummary};
use crate::utils::error::Result;

pub struct LookupHandler<S: PokemonSource> {
    source: S,
}

impl<S: PokemonSource> LookupHandler<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Maps one invocation event to one response. The missing-parameter
    /// check is the only failure handled here; upstream and serialization
    /// failures propagate to the caller as errors.
    pub async fn handle(&self, event: LookupEvent) -> Result<LookupResponse> {
        let name = match event
            .query_string_parameters
            .as_ref()
            .and_then(|params| params.get("name"))
        {
            Some(name) => name.clone(),
            None => {
                tracing::warn!("Rejecting invocation without a name parameter");
                return Ok(LookupResponse {
                    status_code: 400,
                    body: format!("Invalid input: {:?}", event),
                });
            }
        };

        let record = self.source.fetch(&name).await?;

        let abilities: Vec<String> = record
            .abilities
            .into_iter()
            .map(|slot| slot.ability.name)
            .collect();

        tracing::debug!("Collected {} abilities for {}", abilities.len(), name);

        // The envelope echoes the caller-supplied name, not whatever the
        // upstream record calls itself.
        let result = LookupResult {
            pokemon: PokemonSummary { name, abilities },
        };

        Ok(LookupResponse {
            status_code: 200,
            body: serde_json::to_string(&result)?,
        })
    }
}
