use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nesc_unparser::{Node, Unparser};

/// Render a nesC syntax tree (JSON) back into source text
#[derive(Debug, Parser)]
#[command(name = "nesc-unparse", version)]
struct Cli {
    /// JSON syntax tree to render; `-` reads standard input
    input: String,

    /// Write to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Dump the tree structure instead of rendering source
    #[arg(long)]
    ast: bool,

    /// Log rendering progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut json = String::new();
        io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read syntax tree from standard input")?;
        Ok(json)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
    }
}

fn run<W: Write>(cli: &Cli, root: &Node, sink: W) -> Result<()> {
    let mut unparser = Unparser::new(sink);
    if cli.ast {
        unparser.write_ast(root)
    } else {
        unparser.unparse(root)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = read_input(&cli.input)?;
    let root = Node::from_json(&json).with_context(|| format!("Invalid input {}", cli.input))?;
    info!(input = %cli.input, root = %root.kind(), "loaded syntax tree");

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            run(&cli, &root, BufWriter::new(file))
        }
        None => run(&cli, &root, io::stdout().lock()),
    }
}
