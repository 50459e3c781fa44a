//! Evolution chain reconstruction.
//!
//! PokéAPI returns a species' evolution line as a rooted, possibly branching
//! tree of [`EvolutionNode`]. For display the tree is flattened into one
//! linear, ordered sequence via pre-order depth-first traversal: each node is
//! emitted before its children, and sibling subtrees are exhausted one after
//! the other, never interleaved.
//!
//! Flattening a branching line (e.g. Eevee) collapses all branches into a
//! single sequence and loses the branch boundaries. Renderers that need the
//! branch structure should walk the [`EvolutionNode`] tree directly instead
//! (see [`crate::render::evolution_tree`]).

use tracing::instrument;

use crate::api::models::EvolutionNode;
use crate::errors::{DexError, DexResult};

/// One stage of a flattened evolution chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionEntry {
    pub name: String,
    pub id: u32,
}

/// Extract the numeric id from a PokéAPI resource url.
///
/// The id is the trailing path segment, e.g.
/// `https://pokeapi.co/api/v2/pokemon-species/25/` yields `25`.
///
/// # Errors
///
/// [`DexError::InvalidResourceUrl`] if the url has no trailing segment or the
/// segment is not numeric. This only happens when the upstream data violates
/// its documented shape; the id is never defaulted.
pub fn id_from_url(url: &str) -> DexResult<u32> {
    url.split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .and_then(|segment| segment.parse().ok())
        .ok_or_else(|| DexError::InvalidResourceUrl(url.to_string()))
}

/// Flatten an evolution tree into an ordered sequence of [`EvolutionEntry`].
///
/// Pre-order depth-first traversal with an explicit stack, so pathological
/// input depth cannot blow the call stack. A `None` root yields an empty
/// sequence. Every reachable node produces exactly one entry; child order
/// from the source is preserved.
#[instrument(level = "debug", skip(root))]
pub fn flatten(root: Option<&EvolutionNode>) -> DexResult<Vec<EvolutionEntry>> {
    let mut entries = Vec::new();
    let mut stack: Vec<&EvolutionNode> = Vec::new();

    if let Some(root) = root {
        stack.push(root);
    }

    while let Some(node) = stack.pop() {
        entries.push(EvolutionEntry {
            name: node.species.name.clone(),
            id: id_from_url(&node.species.url)?,
        });
        // Reversed push keeps sibling order: the first branch is fully
        // exhausted before the next one begins.
        for child in node.evolves_to.iter().rev() {
            stack.push(child);
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::NamedResource;

    fn node(name: &str, id: u32, children: Vec<EvolutionNode>) -> EvolutionNode {
        EvolutionNode {
            species: NamedResource {
                name: name.to_string(),
                url: format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id),
            },
            evolves_to: children,
        }
    }

    #[test]
    fn test_flatten_none_root_is_empty() {
        assert!(flatten(None).unwrap().is_empty());
    }

    #[test]
    fn test_flatten_single_node() {
        let root = node("tauros", 128, vec![]);
        let entries = flatten(Some(&root)).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "tauros");
        assert_eq!(entries[0].id, 128);
    }

    #[test]
    fn test_flatten_linear_chain() {
        let root = node(
            "bulbasaur",
            1,
            vec![node("ivysaur", 2, vec![node("venusaur", 3, vec![])])],
        );
        let names: Vec<_> = flatten(Some(&root))
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["bulbasaur", "ivysaur", "venusaur"]);
    }

    #[test]
    fn test_flatten_branching_keeps_sibling_order() {
        // eevee -> {vaporeon, jolteon, flareon}
        let root = node(
            "eevee",
            133,
            vec![
                node("vaporeon", 134, vec![]),
                node("jolteon", 135, vec![]),
                node("flareon", 136, vec![]),
            ],
        );
        let names: Vec<_> = flatten(Some(&root))
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["eevee", "vaporeon", "jolteon", "flareon"]);
    }

    #[test]
    fn test_flatten_branch_exhausted_before_sibling() {
        // a -> {b -> d, c}: d must come before c
        let root = node(
            "a",
            1,
            vec![node("b", 2, vec![node("d", 4, vec![])]), node("c", 3, vec![])],
        );
        let names: Vec<_> = flatten(Some(&root))
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn test_flatten_propagates_bad_url() {
        let mut root = node("mew", 151, vec![]);
        root.species.url = "https://pokeapi.co/api/v2/pokemon-species/".to_string();
        assert!(matches!(
            flatten(Some(&root)),
            Err(DexError::InvalidResourceUrl(_))
        ));
    }

    #[test]
    fn test_id_from_url() {
        assert_eq!(
            id_from_url("https://pokeapi.co/api/v2/pokemon-species/25/").unwrap(),
            25
        );
        assert_eq!(id_from_url("/pokemon/7").unwrap(), 7);
        assert!(id_from_url("https://pokeapi.co/api/v2/pokemon-species/abc/").is_err());
        assert!(id_from_url("").is_err());
    }
}
