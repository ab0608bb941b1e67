//! Route command: shortest paths from a source vertex
use crate::cli::{Cli, OutputFormat};
use wayfind_core::error::Result;
use wayfind_core::graph::{shortest_paths, Graph, ShortestPaths, VertexId};

/// Execute the route command
pub fn execute(cli: &Cli, graph: &Graph, source: VertexId, target: Option<VertexId>) -> Result<()> {
    let result = shortest_paths(graph, source)?;

    match target {
        Some(target) => output_target(cli, &result, target),
        None => output_table(cli, graph, &result),
    }
}

fn output_table(cli: &Cli, graph: &Graph, result: &ShortestPaths) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let routes: Vec<_> = result
                .distances
                .keys()
                .map(|&v| {
                    serde_json::json!({
                        "vertex": v,
                        "distance": result.distance(v),
                        "reachable": result.is_reachable(v),
                        "path": result.path_to(v),
                    })
                })
                .collect();
            let output = serde_json::json!({
                "source": result.source,
                "vertices": graph.vertex_count(),
                "edges": graph.edge_count(),
                "routes": routes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Shortest paths from vertex {} ({} vertices, {} edges)",
                    result.source,
                    graph.vertex_count(),
                    graph.edge_count()
                );
                println!();
            }
            println!("{:<8} {:<10} Path", "Vertex", "Distance");
            for &v in result.distances.keys() {
                match result.path_to(v) {
                    Some(path) => {
                        let distance = result.distance(v).unwrap_or(0);
                        println!("{:<8} {:<10} {}", v, distance, format_path(&path));
                    }
                    None => println!("{:<8} {:<10} -", v, "unreachable"),
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H wayfind=1 records=1 mode=route source={} vertices={} edges={}",
                result.source,
                graph.vertex_count(),
                graph.edge_count()
            );
            for &v in result.distances.keys() {
                match (result.distance(v), result.path_to(v)) {
                    (Some(distance), Some(path)) => {
                        println!("R {} {} {}", v, distance, format_path(&path));
                    }
                    _ => println!("U {}", v),
                }
            }
        }
    }
    Ok(())
}

fn output_target(cli: &Cli, result: &ShortestPaths, target: VertexId) -> Result<()> {
    let path = result.path_to(target);
    let distance = result.distance(target);
    let found = path.is_some();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": result.source,
                "target": target,
                "found": found,
                "distance": distance,
                "path": path,
                "path_length": path.as_ref().map(|p| p.len().saturating_sub(1)),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match path {
            Some(path) => println!(
                "{} (distance {})",
                format_path(&path),
                distance.unwrap_or(0)
            ),
            None => println!(
                "vertex {} is unreachable from vertex {}",
                target, result.source
            ),
        },
        OutputFormat::Records => {
            println!(
                "H wayfind=1 records=1 mode=route source={} target={} found={}",
                result.source, target, found
            );
            match (distance, path) {
                (Some(distance), Some(path)) => {
                    println!("R {} {} {}", target, distance, format_path(&path));
                }
                _ => println!("U {}", target),
            }
        }
    }
    Ok(())
}

fn format_path(path: &[VertexId]) -> String {
    path.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
