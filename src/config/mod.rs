#[cfg(feature = "lambda")]
pub mod lambda;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "poke-lookup")]
#[command(about = "Look up a pokemon's abilities through the PokeAPI")]
pub struct CliConfig {
    #[arg(long, default_value = "https://pokeapi.co")]
    pub api_base: String,

    /// Creature to look up. Omitting it reproduces the invalid-input path.
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        crate::utils::validation::validate_url("api_base", &self.api_base)?;
        Ok(())
    }
}
