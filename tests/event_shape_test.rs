use async_trait::async_trait;
use poke_lookup::domain::model::{AbilitySlot, NamedResource, PokemonRecord};
use poke_lookup::domain::ports::PokemonSource;
use poke_lookup::utils::error::{LookupError, Result};
use poke_lookup::{LookupEvent, LookupHandler, LookupResponse};
use std::collections::HashMap;

/// Serves a canned record regardless of the requested name.
struct FixedSource {
    abilities: Vec<&'static str>,
}

#[async_trait]
impl PokemonSource for FixedSource {
    async fn fetch(&self, _name: &str) -> Result<PokemonRecord> {
        Ok(PokemonRecord {
            abilities: self
                .abilities
                .iter()
                .map(|name| AbilitySlot {
                    ability: NamedResource {
                        name: name.to_string(),
                    },
                })
                .collect(),
        })
    }
}

/// Fails if the handler reaches for the upstream at all.
struct UnreachableSource;

#[async_trait]
impl PokemonSource for UnreachableSource {
    async fn fetch(&self, name: &str) -> Result<PokemonRecord> {
        Err(LookupError::ConfigError {
            message: format!("unexpected upstream fetch for '{}'", name),
        })
    }
}

#[test]
fn test_event_deserializes_from_gateway_shape() {
    let event: LookupEvent = serde_json::from_value(serde_json::json!({
        "queryStringParameters": {"name": "pikachu", "verbose": "true"}
    }))
    .unwrap();

    let params = event.query_string_parameters.unwrap();
    assert_eq!(params.get("name").map(String::as_str), Some("pikachu"));
}

#[test]
fn test_event_without_parameters_deserializes_to_none() {
    let event: LookupEvent = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(event.query_string_parameters.is_none());
}

#[test]
fn test_response_serializes_with_gateway_keys() {
    let response = LookupResponse {
        status_code: 200,
        body: "{}".to_string(),
    };

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value, serde_json::json!({"statusCode": 200, "body": "{}"}));
}

#[tokio::test]
async fn test_event_without_name_key_returns_400() {
    let handler = LookupHandler::new(UnreachableSource);

    let event = LookupEvent {
        query_string_parameters: Some(HashMap::from([(
            "species".to_string(),
            "pikachu".to_string(),
        )])),
    };

    let response = handler.handle(event).await.unwrap();
    assert_eq!(response.status_code, 400);
    assert!(response.body.contains("Invalid input"));
}

#[tokio::test]
async fn test_envelope_echoes_caller_supplied_name() {
    let handler = LookupHandler::new(FixedSource {
        abilities: vec!["static"],
    });

    let event = LookupEvent {
        query_string_parameters: Some(HashMap::from([(
            "name".to_string(),
            "PiKaChU".to_string(),
        )])),
    };

    let response = handler.handle(event).await.unwrap();
    assert_eq!(response.status_code, 200);

    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["pokemon"]["name"], "PiKaChU");
    assert_eq!(body["pokemon"]["abilities"], serde_json::json!(["static"]));
}
