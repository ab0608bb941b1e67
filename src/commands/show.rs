//! Show command: adjacency list and matrix display
use crate::cli::{Cli, OutputFormat};
use wayfind_core::error::Result;
use wayfind_core::graph::{AdjacencyMatrix, Graph};

/// Execute the show command
pub fn execute(cli: &Cli, graph: &Graph, with_matrix: bool) -> Result<()> {
    // The dense view is bounded; building it can fail for sparse graphs
    // with very large vertex ids.
    let matrix = if with_matrix {
        Some(AdjacencyMatrix::from_graph(graph)?)
    } else {
        None
    };

    match cli.format {
        OutputFormat::Json => output_json(graph, matrix.as_ref()),
        OutputFormat::Human => {
            output_human(graph, matrix.as_ref());
            Ok(())
        }
        OutputFormat::Records => {
            output_records(graph, matrix.as_ref());
            Ok(())
        }
    }
}

fn output_human(graph: &Graph, matrix: Option<&AdjacencyMatrix>) {
    println!("=== Adjacency List ===");
    for u in graph.vertices() {
        let neighbors: Vec<String> = graph
            .neighbors(u)
            .map(|(v, w)| format!("{}:{}", v, w))
            .collect();
        println!("{}: {}", u, neighbors.join(" "));
    }

    if let Some(matrix) = matrix {
        println!();
        println!("=== Adjacency Matrix ===");
        let header: Vec<String> = (0..matrix.order()).map(|i| i.to_string()).collect();
        println!("    {}", header.join(" "));
        for i in 0..matrix.order() {
            let row: Vec<String> = matrix.row(i).iter().map(|c| c.to_string()).collect();
            println!("{}:  {}", i, row.join(" "));
        }
    }
}

fn output_json(graph: &Graph, matrix: Option<&AdjacencyMatrix>) -> Result<()> {
    let mut adjacency = serde_json::Map::new();
    for u in graph.vertices() {
        let neighbors: Vec<_> = graph
            .neighbors(u)
            .map(|(v, w)| serde_json::json!({"vertex": v, "weight": w}))
            .collect();
        adjacency.insert(u.to_string(), serde_json::json!(neighbors));
    }

    let mut output = serde_json::json!({
        "vertices": graph.vertex_count(),
        "edges": graph.edge_count(),
        "adjacency": adjacency,
    });

    if let Some(matrix) = matrix {
        let rows: Vec<Vec<u8>> = (0..matrix.order()).map(|i| matrix.row(i).to_vec()).collect();
        output["matrix"] = serde_json::json!(rows);
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(graph: &Graph, matrix: Option<&AdjacencyMatrix>) {
    println!(
        "H wayfind=1 records=1 mode=show vertices={} edges={}",
        graph.vertex_count(),
        graph.edge_count()
    );
    for u in graph.vertices() {
        let neighbors: Vec<String> = graph
            .neighbors(u)
            .map(|(v, w)| format!("{}:{}", v, w))
            .collect();
        println!("A {} {}", u, neighbors.join(" "));
    }

    if let Some(matrix) = matrix {
        for i in 0..matrix.order() {
            let row: String = matrix.row(i).iter().map(|c| c.to_string()).collect();
            println!("M {} {}", i, row);
        }
    }
}
