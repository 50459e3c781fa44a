//! Data access layer: the PokéAPI capability interface and its HTTP client.
//!
//! Commands depend on the [`PokeApi`] trait, not on the concrete client, so
//! tests can inject a fake implementation instead of hitting the network.

pub mod client;
pub mod models;

pub use client::PokeClient;

use crate::errors::DexResult;
use models::{EvolutionChain, Pokemon, PokemonPage, Species, TypeDetail};

/// Read-only PokéAPI operations consumed by the CLI.
///
/// Every method is a single GET; retry and backoff are deliberately absent.
pub trait PokeApi {
    /// Fetch one page of the Pokémon listing.
    fn page(&self, limit: u32, offset: u32) -> DexResult<PokemonPage>;

    /// Fetch detail for one Pokémon by name or numeric id.
    fn pokemon(&self, name_or_id: &str) -> DexResult<Pokemon>;

    /// Fetch the species record (carries the evolution chain locator).
    fn species(&self, name_or_id: &str) -> DexResult<Species>;

    /// Fetch an evolution chain by its resource url.
    fn evolution_chain(&self, url: &str) -> DexResult<EvolutionChain>;

    /// Fetch all Pokémon types.
    fn types(&self) -> DexResult<Vec<models::NamedResource>>;

    /// Fetch the Pokémon belonging to one type.
    fn by_type(&self, type_name: &str) -> DexResult<TypeDetail>;
}
