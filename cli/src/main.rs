//! Dualpath CLI — run shortest-path queries over JSON / YAML graph files

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use dualpath::{
    algo::reconstruct_full_path, bfs_path, get_path, load_unweighted_graph, load_weighted_graph,
    path_string, shortest_shortest_path, ParentTable, UnweightedGraph,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dualpath", version, about = "Dual-criteria shortest paths and BFS trees")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Log filter directives
    #[arg(long, default_value = "warn", global = true, env = "DUALPATH_LOG")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// (weight, edge count) of the best path to every vertex
    Shortest {
        /// Weighted graph file (.json, .yaml)
        file: PathBuf,
        /// Source vertex
        source: String,
    },
    /// Breadth-first parent tree
    Bfs {
        /// Graph file (.json, .yaml)
        file: PathBuf,
        /// Source vertex
        source: String,
        /// Read a weighted graph file and ignore the weights
        #[arg(long)]
        weighted: bool,
    },
    /// Path from source to destination, destination excluded
    Path {
        /// Graph file (.json, .yaml)
        file: PathBuf,
        /// Source vertex
        source: String,
        /// Destination vertex
        destination: String,
        /// Read a weighted graph file and ignore the weights
        #[arg(long)]
        weighted: bool,
        /// Include the destination itself
        #[arg(long)]
        full: bool,
    },
}

/// Command result: rows for table/csv, a document for json
struct Output {
    columns: Vec<String>,
    records: Vec<Vec<serde_json::Value>>,
    document: serde_json::Value,
}

impl Output {
    fn new(columns: &[&str], document: serde_json::Value) -> Self {
        Output {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            records: Vec::new(),
            document,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    dualpath::init_logging(&cli.log_level);

    let result = match cli.command {
        Commands::Shortest { file, source } => run_shortest(&file, source),
        Commands::Bfs { file, source, weighted } => run_bfs(&file, source, weighted),
        Commands::Path { file, source, destination, weighted, full } => {
            run_path(&file, source, destination, weighted, full)
        }
    };

    let printed = result.and_then(|output| print_output(&output, &cli.format));
    if let Err(e) = printed {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_tree(file: &Path, weighted: bool) -> anyhow::Result<UnweightedGraph<String>> {
    let graph = if weighted {
        load_weighted_graph(file)?.to_unweighted()
    } else {
        load_unweighted_graph(file)?
    };
    Ok(graph)
}

fn bfs_from(file: &Path, source: String, weighted: bool) -> anyhow::Result<ParentTable<String>> {
    let graph = load_tree(file, weighted)
        .with_context(|| format!("loading {}", file.display()))?;
    Ok(bfs_path(&graph, &source)?)
}

fn run_shortest(file: &Path, source: String) -> anyhow::Result<Output> {
    let graph = load_weighted_graph(file).with_context(|| format!("loading {}", file.display()))?;
    let table = shortest_shortest_path(&graph, &source)?;
    tracing::info!(source = %source, reachable = table.reachable().count(), "shortest paths computed");

    let mut output = Output::new(&["vertex", "cost"], serde_json::to_value(&table)?);
    for (vertex, cost) in table.iter() {
        output.records.push(vec![vertex.clone().into(), serde_json::to_value(cost)?]);
    }
    Ok(output)
}

fn run_bfs(file: &Path, source: String, weighted: bool) -> anyhow::Result<Output> {
    let parents = bfs_from(file, source, weighted)?;

    let mut output = Output::new(&["vertex", "parent", "depth"], serde_json::to_value(&parents)?);
    for (vertex, parent) in parents.iter() {
        output.records.push(vec![
            vertex.clone().into(),
            parent.cloned().into(),
            parents.depth(vertex).into(),
        ]);
    }
    Ok(output)
}

fn run_path(
    file: &Path,
    source: String,
    destination: String,
    weighted: bool,
    full: bool,
) -> anyhow::Result<Output> {
    let parents = bfs_from(file, source, weighted)?;
    let path = if full {
        reconstruct_full_path(&parents, &destination).unwrap_or_default()
    } else {
        get_path(&parents, &destination)
    };
    if !parents.is_reached(&destination) {
        tracing::warn!(destination = %destination, "destination not reachable from source");
    }

    let hops = parents.depth(&destination);
    let document = serde_json::json!({ "destination": destination, "path": path, "hops": hops });
    let mut output = Output::new(&["path", "joined", "hops"], document);
    output.records.push(vec![
        path.join(" -> ").into(),
        path_string(&path).into(),
        hops.into(),
    ]);
    Ok(output)
}

fn print_output(output: &Output, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output.document)?);
        }
        OutputFormat::Csv => {
            println!("{}", output.columns.join(","));
            for row in &output.records {
                let cells: Vec<String> = row.iter().map(format_csv_value).collect();
                println!("{}", cells.join(","));
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(&output.columns);

            for row in &output.records {
                let cells: Vec<String> = row.iter().map(format_table_value).collect();
                table.add_row(cells);
            }

            println!("{}", table);
            println!("{} row(s)", output.records.len());
        }
    }

    Ok(())
}

fn format_table_value(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::Null => "-".to_string(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Object(map) => {
            // Cost pairs render as (weight, edges)
            if let (Some(weight), Some(edges)) = (map.get("weight"), map.get("edges")) {
                return format!("({}, {})", weight, edges);
            }
            serde_json::to_string(v).unwrap_or_default()
        }
        serde_json::Value::Array(_) => serde_json::to_string(v).unwrap_or_default(),
    }
}

fn format_csv_value(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::Null => "".to_string(),
        serde_json::Value::String(s) => {
            if s.contains(',') || s.contains('"') || s.contains('\n') {
                format!("\"{}\"", s.replace('"', "\"\""))
            } else {
                s.clone()
            }
        }
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => {
            let json = serde_json::to_string(v).unwrap_or_default();
            format!("\"{}\"", json.replace('"', "\"\""))
        }
    }
}
