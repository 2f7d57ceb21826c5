//! Upstream species-data service: payload shapes, the lookup seam, and the
//! PokeAPI-backed HTTP client.

use crate::config::DatagenConfig;
use crate::errors::{DatagenResult, FetchError, FetchResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

// ----- Raw upstream payloads (only the fields the builder reads) -----

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    #[serde(default)]
    pub language: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatEntry {
    #[serde(default)]
    pub base_stat: u16,
    #[serde(default)]
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbilitySlot {
    /// Absent or nameless references are skipped by the builder.
    #[serde(default)]
    pub ability: Option<NamedResource>,
    #[serde(default)]
    pub slot: u8,
    #[serde(default)]
    pub is_hidden: bool,
}

/// `/pokemon/{id}`: combat data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawPokemon {
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
}

/// `/pokemon-species/{id}`: dex number and localized names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawSpecies {
    pub id: u16,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
}

/// `/ability/{id}`: localized ability names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawAbility {
    #[serde(default)]
    pub names: Vec<LocalizedName>,
}

/// Keyed, read-only lookups against the species-data service.
#[async_trait]
pub trait SpeciesSource: Send + Sync {
    async fn fetch_pokemon(&self, id: u32) -> FetchResult<RawPokemon>;

    async fn fetch_species(&self, id: u32) -> FetchResult<RawSpecies>;

    /// `url` is the lookup address carried by the ability reference.
    async fn fetch_ability(&self, url: &str) -> FetchResult<RawAbility>;
}

pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(config: &DatagenConfig) -> DatagenResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn pokemon_url(&self, id: u32) -> String {
        format!("{}/pokemon/{}", self.base_url, id)
    }

    pub fn species_url(&self, id: u32) -> String {
        format!("{}/pokemon-species/{}", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        debug!(url, "GET");
        let http_error = |source| FetchError::Http {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(http_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(http_error)?;
        parse_body(url, &body)
    }
}

/// Parses a response body, tagging failures with the URL they came from.
pub fn parse_body<T: DeserializeOwned>(url: &str, body: &str) -> FetchResult<T> {
    serde_json::from_str(body).map_err(|source| FetchError::Malformed {
        url: url.to_string(),
        source,
    })
}

#[async_trait]
impl SpeciesSource for PokeApiClient {
    async fn fetch_pokemon(&self, id: u32) -> FetchResult<RawPokemon> {
        self.get_json(&self.pokemon_url(id)).await
    }

    async fn fetch_species(&self, id: u32) -> FetchResult<RawSpecies> {
        self.get_json(&self.species_url(id)).await
    }

    async fn fetch_ability(&self, url: &str) -> FetchResult<RawAbility> {
        self.get_json(url).await
    }
}
