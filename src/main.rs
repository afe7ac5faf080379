use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;
use sufx::config::{CliConfig, get_config_path};
use sufx::utils::{BuildProgress, REPORT_INTERVAL, load_input};
use sufx::{BuildConfig, SuffixTree, SuffixTreeBuilder, output, verify};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sufx")]
#[command(about = "Build suffix trees in linear time with Ukkonen's algorithm")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Args)]
struct InputArgs {
    /// Input file (reads stdin when omitted or "-")
    file: Option<PathBuf>,

    /// Use this literal text instead of a file
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// Build over the raw input without appending a terminator
    #[arg(long)]
    no_terminator: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the tree and print its statistics
    Build {
        #[command(flatten)]
        input: InputArgs,

        /// Check all structural properties after building
        #[arg(long)]
        verify: bool,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build the tree and print it as an outline
    Print {
        #[command(flatten)]
        input: InputArgs,

        /// Maximum number of nodes to print
        #[arg(short = 'n', long)]
        max_nodes: Option<usize>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Build the tree and check all structural properties
    Verify {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CliConfig::load()?;

    match cli.command {
        Commands::Build {
            input,
            verify,
            json,
        } => {
            let tree = construct(&input, &config)?;
            if verify || config.verify {
                check(&tree)?;
            }
            let stats = tree.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                output::print_stats(&stats);
            }
        }
        Commands::Print {
            input,
            max_nodes,
            no_color,
        } => {
            let tree = construct(&input, &config)?;
            let max_nodes = max_nodes.unwrap_or(config.max_print_nodes);
            output::print_tree(&tree, config.color && !no_color, max_nodes)?;
        }
        Commands::Verify { input } => {
            let tree = construct(&input, &config)?;
            check(&tree)?;
            println!(
                "OK: {} nodes, {} leaves, all properties hold",
                tree.node_count(),
                tree.leaf_count()
            );
        }
        Commands::Config => {
            println!("Config file: {}", get_config_path()?.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "sufx=warn",
        1 => "sufx=debug",
        _ => "sufx=trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load input and run construction, drawing a progress bar on large inputs
fn construct(input: &InputArgs, config: &CliConfig) -> Result<SuffixTree<u8>> {
    let bytes = load_input(input.file.as_deref(), input.text.as_deref())?;
    let build_config = if input.no_terminator {
        BuildConfig::new()
    } else {
        config.build_config()
    };

    let start = Instant::now();
    let mut builder =
        SuffixTreeBuilder::new(bytes.to_vec(), &build_config).context("Invalid input")?;
    drop(bytes);

    let progress = BuildProgress::new(builder.len(), std::io::stderr().is_terminal());
    while builder.step() {
        if builder.position() % REPORT_INTERVAL == 0 {
            progress.set_position(builder.position());
        }
    }
    progress.finish();

    let tree = builder.finish();
    tracing::info!(
        symbols = tree.text().len(),
        nodes = tree.node_count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "construction complete"
    );
    Ok(tree)
}

fn check(tree: &SuffixTree<u8>) -> Result<()> {
    if let Err(violation) = verify(tree) {
        anyhow::bail!("Verification failed: {}", violation);
    }
    Ok(())
}
