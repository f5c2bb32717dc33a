use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clades::{CladeNode, NameParser};
use tracing::info;
use utils::{init_logging, open_read, open_write};

use crate::flat_graph::FlatGraph;

mod flat_graph;

fn main() -> Result<()> {
    init_logging();
    let args = Cli::parse();

    let reader = open_read(&args.input).context("Unable to open clade tree")?;
    let tree: CladeNode = serde_json::from_reader(reader)
        .with_context(|| format!("Error parsing clade tree \"{}\"", args.input.display()))?;

    let parser = NameParser::new()?;
    let graph = FlatGraph::from_tree(&tree, &parser).context("Failed to flatten clade tree")?;
    graph.verify()?;
    info!("Flattened {} clades and {} edges", graph.nodes.len(), graph.edges.len());

    let mut writer = open_write(&args.output).context("Unable to open output file")?;
    serde_json::to_writer_pretty(&mut writer, &graph).context("Error writing flat graph")?;
    writeln!(writer).context("Error writing flat graph")?;
    writer.flush().context("Error writing flat graph")?;

    Ok(())
}

#[derive(Parser, Debug)]
struct Cli {
    /// Path to the nested clade tree written by clade-tree
    #[clap(long, default_value = "src/clades.json")]
    input: PathBuf,

    /// Path to the output file with node and edge lists
    #[clap(long, default_value = "src/clades2.json")]
    output: PathBuf,
}
