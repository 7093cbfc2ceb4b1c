pub mod client;
pub mod handler;

pub use crate::domain::model::{
    LookupEvent, LookupResponse, LookupResult, PokemonRecord, PokemonSummary,
};
pub use crate::domain::ports::{ConfigProvider, PokemonSource};
pub use crate::utils::error::Result;
