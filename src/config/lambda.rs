use crate::core::ConfigProvider;
use crate::utils::error::Result;
use std::env;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub api_base: String,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_base: env::var("API_BASE").unwrap_or_else(|_| "https://pokeapi.co".to_string()),
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl crate::utils::validation::Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_url("api_base", &self.api_base)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
