//! Typed projections of the PokéAPI JSON shapes.
//!
//! Deserialization happens once at the API boundary; everything downstream
//! works with these structs instead of loosely shaped JSON values.

use serde::Deserialize;

use crate::chain::id_from_url;
use crate::errors::DexResult;

/// A name plus the resource url it points at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    /// Numeric id derived from the trailing url segment.
    pub fn id(&self) -> DexResult<u32> {
        id_from_url(&self.url)
    }
}

/// One page of the paginated Pokémon listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatValue {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// Pokémon detail record.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Height in decimeters
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceUrl {
    pub url: String,
}

/// Species record; carries the locator of the evolution chain.
#[derive(Debug, Clone, Deserialize)]
pub struct Species {
    pub name: String,
    pub evolution_chain: ResourceUrl,
}

/// Recursive evolution tree node.
///
/// `evolves_to` holds the alternate evolutionary branches from this stage, in
/// source order. A missing field deserializes to an empty vec, which matches
/// the traversal behavior for leaf nodes.
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionNode {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<EvolutionNode>,
}

/// Top-level evolution chain resource.
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: EvolutionNode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeMember {
    pub pokemon: NamedResource,
    pub slot: u32,
}

/// Detail record for one Pokémon type.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDetail {
    pub name: String,
    #[serde(default)]
    pub pokemon: Vec<TypeMember>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evolution_node_missing_evolves_to_is_leaf() {
        let json = r#"{"species": {"name": "mew", "url": "https://pokeapi.co/api/v2/pokemon-species/151/"}}"#;
        let node: EvolutionNode = serde_json::from_str(json).unwrap();
        assert!(node.evolves_to.is_empty());
        assert_eq!(node.species.id().unwrap(), 151);
    }

    #[test]
    fn test_page_deserializes() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}
            ]
        }"#;
        let page: PokemonPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1302);
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results[0].id().unwrap(), 1);
    }
}
