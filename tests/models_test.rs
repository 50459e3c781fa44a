//! Deserialization of PokéAPI-shaped JSON payloads.

use rsdex::api::models::{EvolutionChain, Pokemon};
use rsdex::flatten;

#[test]
fn test_pokemon_detail_payload() {
    // Trimmed /pokemon/25 payload; unknown fields are ignored
    let json = r#"{
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "types": [
            {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
        ],
        "abilities": [
            {"ability": {"name": "static", "url": "https://pokeapi.co/api/v2/ability/9/"}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "lightning-rod", "url": "https://pokeapi.co/api/v2/ability/31/"}, "is_hidden": true, "slot": 3}
        ],
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
            {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/"}}
        ]
    }"#;

    let pokemon: Pokemon = serde_json::from_str(json).unwrap();
    assert_eq!(pokemon.id, 25);
    assert_eq!(pokemon.types[0].type_ref.name, "electric");
    assert_eq!(pokemon.types[0].type_ref.id().unwrap(), 13);
    assert!(pokemon.abilities[1].is_hidden);
    assert_eq!(pokemon.stats[1].base_stat, 90);
}

#[test]
fn test_evolution_chain_payload_flattens_in_order() {
    // Trimmed /evolution-chain/10 payload (pichu line); evolution_details
    // and other fields the models do not carry are ignored
    let json = r#"{
        "id": 10,
        "baby_trigger_item": null,
        "chain": {
            "species": {"name": "pichu", "url": "https://pokeapi.co/api/v2/pokemon-species/172/"},
            "evolution_details": [],
            "evolves_to": [
                {
                    "species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"},
                    "evolves_to": [
                        {
                            "species": {"name": "raichu", "url": "https://pokeapi.co/api/v2/pokemon-species/26/"},
                            "evolves_to": []
                        }
                    ]
                }
            ]
        }
    }"#;

    let chain: EvolutionChain = serde_json::from_str(json).unwrap();
    let entries = flatten(Some(&chain.chain)).unwrap();

    let pairs: Vec<(&str, u32)> = entries.iter().map(|e| (e.name.as_str(), e.id)).collect();
    assert_eq!(
        pairs,
        vec![("pichu", 172), ("pikachu", 25), ("raichu", 26)]
    );
}
