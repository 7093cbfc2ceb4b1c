use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Invocation event as delivered by the API gateway. Only the query-string
/// mapping is consumed; everything else in the event is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupEvent {
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

/// HTTP-style invocation result. `body` carries either a diagnostic string
/// (400) or the serialized lookup envelope (200).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub status_code: u16,
    pub body: String,
}

/// The slice of the upstream payload this service reads. `abilities` is
/// required; a payload without it fails deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonRecord {
    pub abilities: Vec<AbilitySlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PokemonSummary {
    pub name: String,
    pub abilities: Vec<String>,
}

/// Output envelope, built fresh on every invocation.
#[derive(Debug, Clone, Serialize)]
pub struct LookupResult {
    pub pokemon: PokemonSummary,
}
