//! Terminal rendering of Pokémon data.
//!
//! Everything here builds strings; printing is left to the CLI layer.

use colored::Colorize;
use itertools::Itertools;
use termtree::Tree;

use crate::api::models::{EvolutionNode, NamedResource, Pokemon};
use crate::chain::EvolutionEntry;
use crate::errors::DexResult;
use crate::util::format::{capitalize, format_height, format_id, format_weight, type_color};

/// One listing line: `#001 Bulbasaur`.
pub fn list_line(resource: &NamedResource) -> DexResult<String> {
    Ok(format!(
        "{} {}",
        format_id(resource.id()?).dimmed(),
        capitalize(&resource.name)
    ))
}

/// Colored type label.
pub fn type_label(type_name: &str) -> String {
    capitalize(type_name)
        .color(type_color(type_name))
        .bold()
        .to_string()
}

/// Multi-line detail card for one Pokémon.
pub fn card(pokemon: &Pokemon) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{} {}",
        format_id(pokemon.id).dimmed(),
        capitalize(&pokemon.name).bold()
    ));

    let types = pokemon
        .types
        .iter()
        .map(|slot| type_label(&slot.type_ref.name))
        .join(" ");
    lines.push(format!("  Types:  {}", types));
    lines.push(format!("  Height: {}", format_height(pokemon.height)));
    lines.push(format!("  Weight: {}", format_weight(pokemon.weight)));

    if !pokemon.abilities.is_empty() {
        let abilities = pokemon
            .abilities
            .iter()
            .map(|slot| {
                if slot.is_hidden {
                    format!("{} (hidden)", slot.ability.name)
                } else {
                    slot.ability.name.clone()
                }
            })
            .join(", ");
        lines.push(format!("  Abilities: {}", abilities));
    }

    if !pokemon.stats.is_empty() {
        lines.push("  Stats:".to_string());
        for stat in &pokemon.stats {
            lines.push(format!("    {:<16} {}", stat.stat.name, stat.base_stat));
        }
    }

    lines.join("\n")
}

/// Flattened evolution chain with directional connectors:
/// `Bulbasaur → Ivysaur → Venusaur`.
///
/// Returns `None` for chains of at most one entry; those species do not
/// evolve and get no chain display.
pub fn evolution_line(entries: &[EvolutionEntry]) -> Option<String> {
    if entries.len() <= 1 {
        return None;
    }
    Some(
        entries
            .iter()
            .map(|entry| format!("{} {}", capitalize(&entry.name), format_id(entry.id).dimmed()))
            .join(" → "),
    )
}

/// Branch-preserving rendering of the raw evolution tree.
///
/// Unlike [`evolution_line`], alternate branches stay visually distinct, so
/// a line like Eevee's shows its fan-out instead of a fake straight chain.
pub fn evolution_tree(node: &EvolutionNode) -> DexResult<Tree<String>> {
    let label = format!(
        "{} {}",
        capitalize(&node.species.name),
        format_id(node.species.id()?)
    );
    let mut leaves = Vec::with_capacity(node.evolves_to.len());
    for child in &node.evolves_to {
        leaves.push(evolution_tree(child)?);
    }
    Ok(Tree::new(label).with_leaves(leaves))
}
