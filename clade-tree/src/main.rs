use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clades::CladeNode;
use tracing::info;
use utils::{init_logging, open_write};

use crate::clade_graph::CladeGraph;
use crate::hierarchy::{load_source, parse_hierarchy};

mod clade_graph;
mod error;
mod hierarchy;
mod husl;

const DEFAULT_SOURCE: &str = "https://raw.githubusercontent.com/nextstrain/ncov/7796ad66ed51c12663bd7b5ecc3c1084bda41151/defaults/clade_hierarchy.tsv";

fn main() -> Result<()> {
    init_logging();
    let args = Cli::parse();

    info!("Reading clade hierarchy from {}", args.source);
    let text = load_source(&args.source).context("Failed to load clade hierarchy")?;
    let rows = parse_hierarchy(&text).context("Failed to parse clade hierarchy")?;

    let graph = CladeGraph::from_rows(&rows).context("Failed to build clade graph")?;
    let root = graph.root().context("Failed to find the root clade")?;
    info!("Building tree of {} clades rooted at \"{}\"", graph.len(), graph.id(root));

    let tree = graph.build().context("Failed to build clade tree")?;
    write_tree(&tree, &args.output)
        .with_context(|| format!("Failed to write tree to \"{}\"", args.output.display()))?;

    info!("Wrote {}", args.output.display());
    Ok(())
}

fn write_tree(tree: &CladeNode, pb: &PathBuf) -> Result<()> {
    let mut writer = open_write(pb)?;
    serde_json::to_writer_pretty(&mut writer, tree).context("Error serializing clade tree")?;
    writer.flush().context("Error flushing clade tree")?;
    Ok(())
}

#[derive(Parser, Debug)]
struct Cli {
    /// URL or path of the tab separated clade hierarchy (parent, clade, WHO)
    #[clap(long, default_value = DEFAULT_SOURCE)]
    source: String,

    /// Path to the output JSON tree
    #[clap(long, default_value = "src/clades.json")]
    output: PathBuf,
}
