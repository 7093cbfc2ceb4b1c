use crate::domain::model::PokemonRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait PokemonSource: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<PokemonRecord>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
}
