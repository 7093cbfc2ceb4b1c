use poke_lookup::utils::validation::Validate;
use poke_lookup::CliConfig;

fn config_with_base(api_base: &str) -> CliConfig {
    CliConfig {
        api_base: api_base.to_string(),
        name: Some("pikachu".to_string()),
        verbose: false,
    }
}

#[test]
fn test_default_api_base_passes_validation() {
    assert!(config_with_base("https://pokeapi.co").validate().is_ok());
}

#[test]
fn test_plain_http_base_passes_validation() {
    assert!(config_with_base("http://127.0.0.1:8080").validate().is_ok());
}

#[test]
fn test_empty_api_base_is_rejected() {
    assert!(config_with_base("").validate().is_err());
}

#[test]
fn test_non_http_scheme_is_rejected() {
    assert!(config_with_base("ftp://pokeapi.co").validate().is_err());
}

#[test]
fn test_malformed_url_is_rejected() {
    assert!(config_with_base("not a url").validate().is_err());
}
