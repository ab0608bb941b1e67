//! Command dispatch logic for wayfind
use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use wayfind_core::error::Result;
use wayfind_core::graph::{load_graph, Graph, ParsePolicy};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Route {
            file,
            source,
            target,
            strict,
        }) => {
            let graph = open_graph(cli, file, *strict, start)?;
            commands::route::execute(cli, &graph, *source, *target)
        }

        Some(Commands::Show {
            file,
            matrix,
            strict,
        }) => {
            let graph = open_graph(cli, file, *strict, start)?;
            commands::show::execute(cli, &graph, *matrix)
        }

        Some(Commands::Adjacent {
            file,
            u,
            v,
            strict,
        }) => {
            let graph = open_graph(cli, file, *strict, start)?;
            commands::adjacent::execute(cli, &graph, *u, *v)
        }
    }
}

fn open_graph(cli: &Cli, path: &Path, strict: bool, start: Instant) -> Result<Graph> {
    let policy = if strict {
        ParsePolicy::Strict
    } else {
        ParsePolicy::Skip
    };
    let graph = load_graph(path, policy)?;
    if cli.verbose {
        eprintln!("load_graph: {:?}", start.elapsed());
    }
    Ok(graph)
}

fn handle_no_command() -> Result<()> {
    println!("wayfind {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("A shortest-path CLI for weighted undirected graphs.");
    println!();
    println!("Run `wayfind --help` for usage information.");
    Ok(())
}
