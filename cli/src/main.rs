//! Graphcore CLI: run graph algorithms on JSON graph documents
//!
//! Every subcommand loads a document, builds a store and prints one result
//! table in the chosen format.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use graphcore::graph::{GraphStore, NodeId};
use graphcore::{algo, Distance, GraphDocument, GraphcoreConfig};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "graphcore", version, about = "Graph algorithms on JSON graph documents")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "GRAPHCORE_CONFIG")]
    config: Option<PathBuf>,

    /// Overrides the configured log level
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

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
    /// Minimum spanning forest (Kruskal)
    Mst {
        /// Graph document
        graph: PathBuf,
    },
    /// Distances from one node to every node (Bellman-Ford)
    ShortestPaths {
        graph: PathBuf,
        /// Source node label
        #[arg(long)]
        source: String,
    },
    /// Shortest path between two nodes (Dijkstra, or BFS with --unweighted)
    ShortestPath {
        graph: PathBuf,
        source: String,
        target: String,
        /// Count hops instead of summing weights
        #[arg(long)]
        unweighted: bool,
    },
    /// Distance matrix between all nodes (Floyd-Warshall)
    AllPairs { graph: PathBuf },
    /// Topological ordering (Kahn)
    Topo { graph: PathBuf },
    /// Follow single successors from a node and report whether they loop
    Cycle {
        graph: PathBuf,
        /// Start node label
        #[arg(long)]
        start: String,
    },
    /// Whether a target is reachable from a source
    Reach {
        graph: PathBuf,
        source: String,
        target: String,
    },
}

/// One printable result: column names and rows of JSON cells
struct Output {
    columns: Vec<String>,
    records: Vec<Vec<Value>>,
    footer: Option<String>,
}

impl Output {
    fn new(columns: &[&str]) -> Self {
        Output {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            records: Vec::new(),
            footer: None,
        }
    }

    fn push(&mut self, row: Vec<Value>) {
        self.records.push(row);
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => GraphcoreConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GraphcoreConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    tracing_subscriber::fmt()
        .with_max_level(config.log_level()?)
        .with_writer(std::io::stderr)
        .init();

    let output = match cli.command {
        Commands::Mst { graph } => run_mst(&load_store(&graph, &config)?),
        Commands::ShortestPaths { graph, source } => {
            run_shortest_paths(&load_store(&graph, &config)?, &source)?
        }
        Commands::ShortestPath {
            graph,
            source,
            target,
            unweighted,
        } => run_shortest_path(&load_store(&graph, &config)?, &source, &target, unweighted)?,
        Commands::AllPairs { graph } => run_all_pairs(&load_store(&graph, &config)?, &config)?,
        Commands::Topo { graph } => run_topo(&load_store(&graph, &config)?),
        Commands::Cycle { graph, start } => run_cycle(&load_store(&graph, &config)?, &start)?,
        Commands::Reach {
            graph,
            source,
            target,
        } => run_reach(&load_store(&graph, &config)?, &source, &target)?,
    };

    print_output(&output, &cli.format)
}

fn load_store(path: &Path, config: &GraphcoreConfig) -> Result<GraphStore> {
    let document = GraphDocument::load(path)
        .with_context(|| format!("failed to load graph document {}", path.display()))?;
    let store = document
        .to_store(config.default_weight)
        .with_context(|| format!("invalid graph in {}", path.display()))?;
    debug!(
        "Store built: {} nodes, {} edges",
        store.node_count(),
        store.edge_count()
    );
    Ok(store)
}

fn label(store: &GraphStore, id: NodeId) -> String {
    store
        .label_of(id)
        .map(|l| l.as_str().to_string())
        .unwrap_or_else(|| id.to_string())
}

fn distance_value(distance: Distance) -> Value {
    distance.value().map(Value::from).unwrap_or(Value::Null)
}

fn run_mst(store: &GraphStore) -> Output {
    let result = algo::minimum_spanning_tree(store);

    let mut output = Output::new(&["source", "target", "weight"]);
    for edge in &result.edges {
        output.push(vec![
            json!(label(store, NodeId::new(edge.source))),
            json!(label(store, NodeId::new(edge.target))),
            json!(edge.weight),
        ]);
    }
    output.footer = Some(if result.total_saturated {
        format!("total weight {} (overflowed, clamped)", result.total_weight)
    } else {
        format!("total weight {}", result.total_weight)
    });
    output
}

fn run_shortest_paths(store: &GraphStore, source: &str) -> Result<Output> {
    let source = store.resolve(source)?;
    let report = algo::bellman_ford(store, source)?;
    if report.negative_cycle_suspected {
        eprintln!("warning: a negative cycle is reachable; distances are not final");
    }

    let mut output = Output::new(&["node", "distance"]);
    for node in store.all_nodes() {
        output.push(vec![
            json!(node.label.as_str()),
            distance_value(report.distance(node.id.as_u64())),
        ]);
    }
    Ok(output)
}

fn run_shortest_path(store: &GraphStore, source: &str, target: &str, unweighted: bool) -> Result<Output> {
    let source = store.resolve(source)?;
    let target = store.resolve(target)?;
    let found = if unweighted {
        algo::unweighted_path(store, source, target)?
    } else {
        algo::shortest_path(store, source, target)?
    };

    let mut output = Output::new(&["step", "node"]);
    match found {
        Some(path) => {
            for (step, &node) in path.path.iter().enumerate() {
                output.push(vec![json!(step), json!(label(store, NodeId::new(node)))]);
            }
            output.footer = Some(format!("cost {}", path.cost));
        }
        None => output.footer = Some("unreachable".to_string()),
    }
    Ok(output)
}

fn run_all_pairs(store: &GraphStore, config: &GraphcoreConfig) -> Result<Output> {
    let matrix = algo::all_pairs_shortest_paths(store, config)?;

    let labels: Vec<String> = store.all_nodes().map(|n| n.label.as_str().to_string()).collect();
    let mut columns = vec![String::new()];
    columns.extend(labels.iter().cloned());

    let mut output = Output {
        columns,
        records: Vec::with_capacity(labels.len()),
        footer: None,
    };
    for (i, row_label) in labels.iter().enumerate() {
        let mut row = vec![json!(row_label)];
        row.extend(matrix.row(i).iter().map(|&d| distance_value(d)));
        output.push(row);
    }
    Ok(output)
}

fn run_topo(store: &GraphStore) -> Output {
    let order = algo::topological_ordering(store);

    let mut output = Output::new(&["position", "node"]);
    for (position, &id) in order.iter().enumerate() {
        output.push(vec![json!(position), json!(label(store, id))]);
    }
    if order.len() < store.node_count() {
        output.footer = Some(format!(
            "cycle detected: {} of {} nodes ordered",
            order.len(),
            store.node_count()
        ));
    }
    output
}

fn run_cycle(store: &GraphStore, start: &str) -> Result<Output> {
    if !store.is_directed() {
        bail!("cycle detection needs a directed graph");
    }
    let start_id = store.resolve(start)?;
    let cyclic = algo::detect_cycle(store, start_id)?;

    let mut output = Output::new(&["start", "cycle"]);
    output.push(vec![json!(start), json!(cyclic)]);
    Ok(output)
}

fn run_reach(store: &GraphStore, source: &str, target: &str) -> Result<Output> {
    let source_id = store.resolve(source)?;
    let target_id = store.resolve(target)?;
    let reachable = algo::is_reachable(store, source_id, target_id)?;

    let mut output = Output::new(&["source", "target", "reachable"]);
    output.push(vec![json!(source), json!(target), json!(reachable)]);
    Ok(output)
}

fn print_output(output: &Output, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let value = json!({
                "columns": output.columns,
                "records": output.records,
                "note": output.footer,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Csv => {
            println!("{}", output.columns.join(","));
            for row in &output.records {
                let cells: Vec<String> = row.iter().map(format_csv_value).collect();
                println!("{}", cells.join(","));
            }
        }
        OutputFormat::Table => {
            if output.records.is_empty() {
                println!("(no results)");
            } else {
                let mut table = Table::new();
                table.set_content_arrangement(ContentArrangement::Dynamic);
                table.set_header(&output.columns);

                for row in &output.records {
                    let cells: Vec<String> = row.iter().map(format_table_value).collect();
                    table.add_row(cells);
                }

                println!("{}", table);
            }
            if let Some(footer) = &output.footer {
                println!("{}", footer);
            }
        }
    }

    Ok(())
}

fn format_table_value(v: &Value) -> String {
    match v {
        // Only distances are ever null
        Value::Null => "inf".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn format_csv_value(v: &Value) -> String {
    match v {
        Value::Null => "".to_string(),
        Value::String(s) => {
            if s.contains(',') || s.contains('"') || s.contains('\n') {
                format!("\"{}\"", s.replace('"', "\"\""))
            } else {
                s.clone()
            }
        }
        other => format_table_value(other),
    }
}
