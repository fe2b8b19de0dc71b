//! Walks a [`Tree`] through inserts, searches, every kind of delete, and a
//! degenerate ascending insert, printing what it finds along the way.
//!
//! Logs go to stderr. `RUST_LOG` takes precedence over `-v`.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use unbalanced_bst::Tree;

#[derive(Parser, Debug)]
#[command(name = "bst-demo")]
#[command(about = "Exercises an unbalanced binary search tree")]
struct Args {
    /// How many ascending keys to insert when building the unbalanced tree
    #[arg(long, default_value = "5")]
    chain_len: u16,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose)?;

    let mut tree = basic_insert_and_search();
    deletion(&mut tree);
    unbalanced(args.chain_len);

    Ok(())
}

fn setup_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env()
        .context("invalid RUST_LOG directive")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("failed to install the tracing subscriber")
}

fn basic_insert_and_search() -> Tree<i32, String> {
    println!("=== Test 1: basic insert and search ===");

    let data = [
        (50, "Root"),
        (30, "Node 30"),
        (70, "Node 70"),
        (20, "Node 20"),
        (40, "Node 40"),
        (60, "Node 60"),
        (80, "Node 80"),
    ];

    let mut tree = Tree::new();
    for (key, value) in data {
        tree.insert(key, value.to_string());
    }
    info!(len = tree.len(), "built tree");

    println!("Search 40: {:?}", tree.search(&40));
    println!("Search 99: {:?}", tree.search(&99));
    println!("Height: {}", tree.height());
    println!("Balanced: {}", tree.is_balanced());

    tree
}

fn deletion(tree: &mut Tree<i32, String>) {
    println!();
    println!("=== Test 2: deletion ===");

    // A leaf.
    tree.delete(&80);
    println!("Deleted 80. Search: {:?}", tree.search(&80));

    // 20 gets a single child so deleting it has to relink 25.
    tree.insert(25, "Node 25".to_string());
    tree.delete(&20);
    println!("Deleted 20. Child 25 kept: {:?}", tree.search(&25));

    // 30 has two children now (25 and 40).
    tree.delete(&30);
    println!("Deleted 30. Still connected (search 40): {:?}", tree.search(&40));

    let keys: Vec<_> = tree.iter().map(|(key, _)| *key).collect();
    info!(len = tree.len(), "finished deleting");
    println!("Remaining keys: {keys:?}");
}

fn unbalanced(chain_len: u16) {
    println!();
    println!("=== Test 3: unbalanced tree ===");

    let chain: Tree<i32, String> = (0..i32::from(chain_len))
        .map(|i| (i, format!("Val {i}")))
        .collect();

    println!("Height (should be {}): {}", chain.len(), chain.height());
    println!("Balanced: {}", chain.is_balanced());
}
