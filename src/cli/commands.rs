//! Command dispatch and handlers.

use std::io;

use clap::{Command, CommandFactory};
use clap_complete::{generate, Generator};
use tracing::{debug, instrument};

use crate::api::PokeApi;
use crate::chain::flatten;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::config::Settings;
use crate::errors::{DexError, DexResult};
use crate::render;
use crate::util::format::capitalize;

pub fn execute_command(cli: &Cli, api: &dyn PokeApi, settings: &Settings) -> DexResult<()> {
    match &cli.command {
        Some(Commands::List {
            limit,
            offset,
            details,
        }) => _list(api, limit.unwrap_or(settings.list.page_limit), *offset, *details),
        Some(Commands::Show { name_or_id }) => _show(api, name_or_id),
        Some(Commands::Search { query }) => _search(api, query),
        Some(Commands::Types) => _types(api),
        Some(Commands::Type { name }) => _by_type(api, name),
        Some(Commands::Evolution { name_or_id, tree }) => _evolution(api, name_or_id, *tree),
        Some(Commands::Config { command }) => _config(command, settings),
        Some(Commands::Completion { shell }) => {
            print_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => Ok(()),
    }
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

#[instrument(skip(api))]
fn _list(api: &dyn PokeApi, limit: u32, offset: u32, details: bool) -> DexResult<()> {
    let page = api.page(limit, offset)?;
    debug!(count = page.count, returned = page.results.len(), "page fetched");

    if details {
        for resource in &page.results {
            let pokemon = api.pokemon(&resource.name)?;
            output::info(&render::card(&pokemon));
            output::info("");
        }
    } else {
        for resource in &page.results {
            output::info(&render::list_line(resource)?);
        }
    }

    if page.next.is_some() {
        output::hint(&format!(
            "… {} total, continue with --offset {}",
            page.count,
            offset + limit
        ));
    }
    Ok(())
}

#[instrument(skip(api))]
fn _show(api: &dyn PokeApi, name_or_id: &str) -> DexResult<()> {
    let pokemon = api.pokemon(&name_or_id.to_lowercase())?;
    output::info(&render::card(&pokemon));

    output::info("");
    output::header("Evolution");
    // A broken evolution chain should not take down the detail view.
    match _evolution_entries(api, &pokemon.name) {
        Ok(entries) => match render::evolution_line(&entries) {
            Some(line) => output::detail(&line),
            None => output::detail(&format!("{} does not evolve.", capitalize(&pokemon.name))),
        },
        Err(e) => output::warning(&format!("could not load evolution chain: {}", e)),
    }
    Ok(())
}

#[instrument(skip(api))]
fn _search(api: &dyn PokeApi, query: &str) -> DexResult<()> {
    let pokemon = api
        .pokemon(&query.to_lowercase())
        .map_err(|e| match e {
            DexError::NotFound(_) => DexError::NotFound(query.to_string()),
            other => other,
        })?;
    output::info(&render::card(&pokemon));
    Ok(())
}

#[instrument(skip(api))]
fn _types(api: &dyn PokeApi) -> DexResult<()> {
    for type_ref in api.types()? {
        output::info(&render::type_label(&type_ref.name));
    }
    Ok(())
}

#[instrument(skip(api))]
fn _by_type(api: &dyn PokeApi, name: &str) -> DexResult<()> {
    let detail = api.by_type(&name.to_lowercase())?;
    output::header(&format!(
        "{} Pokémon ({})",
        capitalize(&detail.name),
        detail.pokemon.len()
    ));
    for member in &detail.pokemon {
        output::info(&render::list_line(&member.pokemon)?);
    }
    Ok(())
}

#[instrument(skip(api))]
fn _evolution(api: &dyn PokeApi, name_or_id: &str, tree: bool) -> DexResult<()> {
    let name_or_id = name_or_id.to_lowercase();
    if tree {
        let species = api.species(&name_or_id)?;
        let chain = api.evolution_chain(&species.evolution_chain.url)?;
        output::info(&render::evolution_tree(&chain.chain)?);
        return Ok(());
    }

    let entries = _evolution_entries(api, &name_or_id)?;
    match render::evolution_line(&entries) {
        Some(line) => output::info(&line),
        None => output::info(&format!("{} does not evolve.", capitalize(&name_or_id))),
    }
    Ok(())
}

/// species -> evolution chain -> flattened entries
fn _evolution_entries(
    api: &dyn PokeApi,
    name_or_id: &str,
) -> DexResult<Vec<crate::chain::EvolutionEntry>> {
    let species = api.species(name_or_id)?;
    let chain = api.evolution_chain(&species.evolution_chain.url)?;
    flatten(Some(&chain.chain))
}

#[instrument]
fn _config(command: &ConfigCommands, settings: &Settings) -> DexResult<()> {
    match command {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(settings)
                .unwrap_or_else(|e| format!("# failed to render config: {}", e));
            output::info(&rendered);
        }
        ConfigCommands::Path => match Settings::global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no home directory found, config file unsupported"),
        },
    }
    Ok(())
}
