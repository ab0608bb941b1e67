//! Adjacent command: edge lookup between two vertices
use crate::cli::{Cli, OutputFormat};
use wayfind_core::error::Result;
use wayfind_core::graph::{Graph, VertexId};

/// Execute the adjacent command. Vertices outside the graph are simply not
/// adjacent to anything; this is a query, not an error.
pub fn execute(cli: &Cli, graph: &Graph, u: VertexId, v: VertexId) -> Result<()> {
    let adjacent = graph.are_adjacent(u, v);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "u": u,
                "v": v,
                "adjacent": adjacent,
                "weight": graph.weight(u, v),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if adjacent {
                println!("vertices {} and {} are adjacent", u, v);
            } else {
                println!("vertices {} and {} are not adjacent", u, v);
            }
        }
        OutputFormat::Records => {
            println!("H wayfind=1 records=1 mode=adjacent");
            println!("A {} {} {}", u, v, if adjacent { "yes" } else { "no" });
        }
    }
    Ok(())
}
