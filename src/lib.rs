//! rsdex: a terminal Pokédex over the public PokéAPI.
//!
//! The crate is a thin read-only client plus display layer; the one piece of
//! real logic is [`chain::flatten`], which turns the API's recursive
//! evolution tree into the linear sequence the chain display needs.

pub mod api;
pub mod chain;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod render;
pub mod util;

pub use chain::{flatten, id_from_url, EvolutionEntry};
pub use errors::{DexError, DexResult};
