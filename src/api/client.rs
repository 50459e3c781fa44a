//! Blocking HTTP client for PokéAPI.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::models::{EvolutionChain, NamedResource, Pokemon, PokemonPage, Species, TypeDetail};
use crate::api::PokeApi;
use crate::config::Settings;
use crate::errors::{DexError, DexResult};

/// PokéAPI client with explicit base url and timeout.
///
/// The base url and timeout come from [`Settings`], not from ambient process
/// state, so tests can point a client at a local server.
#[derive(Debug, Clone)]
pub struct PokeClient {
    http: Client,
    base_url: String,
}

impl PokeClient {
    pub fn new(settings: &Settings) -> DexResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout_secs))
            .build()
            .map_err(|e| DexError::Http {
                url: settings.api.base_url.clone(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url: settings.api.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON body.
    ///
    /// 404 maps to [`DexError::NotFound`] carrying `subject` (the name the
    /// user asked for), everything else non-2xx to [`DexError::Http`].
    fn get_json<T: DeserializeOwned>(&self, path: &str, subject: &str) -> DexResult<T> {
        let url = self.url(path);
        debug!(%url, "GET");

        let resp = self.http.get(&url).send().map_err(|e| DexError::Http {
            url: url.clone(),
            source: e,
        })?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(DexError::NotFound(subject.to_string()));
        }
        let resp = resp.error_for_status().map_err(|e| DexError::Http {
            url: url.clone(),
            source: e,
        })?;

        resp.json().map_err(|e| DexError::Decode {
            url,
            reason: e.to_string(),
        })
    }

    /// GET an absolute url (used for locators embedded in API responses).
    fn get_json_absolute<T: DeserializeOwned>(&self, url: &str) -> DexResult<T> {
        debug!(%url, "GET");

        let resp = self
            .http
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| DexError::Http {
                url: url.to_string(),
                source: e,
            })?;

        resp.json().map_err(|e| DexError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

impl PokeApi for PokeClient {
    fn page(&self, limit: u32, offset: u32) -> DexResult<PokemonPage> {
        self.get_json(
            &format!("/pokemon?limit={}&offset={}", limit, offset),
            "pokemon list",
        )
    }

    fn pokemon(&self, name_or_id: &str) -> DexResult<Pokemon> {
        self.get_json(&format!("/pokemon/{}", name_or_id), name_or_id)
    }

    fn species(&self, name_or_id: &str) -> DexResult<Species> {
        self.get_json(&format!("/pokemon-species/{}", name_or_id), name_or_id)
    }

    fn evolution_chain(&self, url: &str) -> DexResult<EvolutionChain> {
        self.get_json_absolute(url)
    }

    fn types(&self) -> DexResult<Vec<NamedResource>> {
        #[derive(serde::Deserialize)]
        struct TypePage {
            results: Vec<NamedResource>,
        }
        let page: TypePage = self.get_json("/type", "type list")?;
        Ok(page.results)
    }

    fn by_type(&self, type_name: &str) -> DexResult<TypeDetail> {
        self.get_json(&format!("/type/{}", type_name), type_name)
    }
}
