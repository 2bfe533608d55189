use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use listtree::{render_tree, RenderOptions, TreeBuilder};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "listtree",
    about = "Build and print a binary search tree of self-sorting integer lists"
)]
struct Cli {
    /// Input file with one integer list per line; stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Line that ends input
    #[arg(long, default_value = "stop")]
    stop_word: String,

    /// Spaces added per tree level in the printout
    #[arg(long, default_value_t = 2)]
    indent: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let builder = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            read_lists(BufReader::new(file), &cli.stop_word, false)?
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            read_lists(stdin.lock(), &cli.stop_word, interactive)?
        }
    };

    let tree = builder.finish();

    let mut out = String::new();
    render_tree(&tree, &RenderOptions { indent: cli.indent }, &mut out)?;
    print!("{out}");

    Ok(())
}

/// Consume integer lines until the reader ends or the stop word appears.
///
/// Blank lines are skipped; everything else must tokenize into
/// integers. The library never sees raw text.
fn read_lists<R: BufRead>(reader: R, stop_word: &str, interactive: bool) -> Result<TreeBuilder> {
    let mut builder = TreeBuilder::new();

    if interactive {
        println!("Enter one integer list per line. (Examples: 1 0 9 3 or 29 3 -23 93)");
        println!("Each list sorts itself as it is read.");
        println!("Type \"{stop_word}\" to finish and print the tree.");
    }

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", line_no + 1))?;
        let trimmed = line.trim();

        if trimmed == stop_word {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        let values = parse_line(trimmed)
            .with_context(|| format!("invalid integer list on line {}", line_no + 1))?;
        builder
            .push_sequence(&values)
            .with_context(|| format!("failed to add list from line {}", line_no + 1))?;

        if interactive {
            println!("Integer list added! Enter another, or type \"{stop_word}\" to print the tree.");
        }
    }

    Ok(builder)
}

fn parse_line(line: &str) -> Result<Vec<i64>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("invalid integer '{token}'"))
        })
        .collect()
}
