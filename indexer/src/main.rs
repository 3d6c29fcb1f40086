use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use keyidx::source::DocumentList;
use keyidx::{top5_search, IndexBuilder, KeywordIndex, NoiseWords};
use tracing_subscriber::{fmt, EnvFilter};

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a keyword index and run ranked two-keyword OR searches", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// File listing the document files to index, whitespace separated
    #[arg(long, conflicts_with = "dir", required_unless_present = "dir")]
    docs: Option<PathBuf>,
    /// Directory whose .txt files are indexed instead of a list file
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Noise-word file; the built-in English list is used when omitted
    #[arg(long)]
    noise: Option<PathBuf>,
    /// Index every word, ignoring noise words entirely
    #[arg(long, default_value_t = false, conflicts_with = "noise")]
    no_noise: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search "kw1 or kw2" once and print up to five documents
    Search {
        #[command(flatten)]
        source: SourceArgs,
        kw1: String,
        kw2: String,
    },
    /// Build once, then answer queries read from stdin until `exit`
    Repl {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print index size and optionally one keyword's occurrence list
    Stats {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long)]
        keyword: Option<String>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { source, kw1, kw2 } => {
            let index = build_index(&source)?;
            print_results(&index, &kw1, &kw2);
            Ok(())
        }
        Commands::Repl { source } => {
            let index = build_index(&source)?;
            repl(&index)
        }
        Commands::Stats { source, keyword } => {
            let index = build_index(&source)?;
            println!("documents: {}", index.documents().len());
            println!("keywords: {}", index.len());
            if let Some(keyword) = keyword {
                match index.get(&keyword.to_lowercase()) {
                    Some(occs) => {
                        for occ in occs {
                            println!("{}\t{}", occ.document, occ.frequency);
                        }
                    }
                    None => println!("{keyword}: not indexed"),
                }
            }
            Ok(())
        }
    }
}

fn build_index(args: &SourceArgs) -> Result<KeywordIndex> {
    let noise = match (&args.noise, args.no_noise) {
        (Some(path), _) => NoiseWords::from_file(path)?,
        (None, true) => NoiseWords::new(),
        (None, false) => NoiseWords::default_english(),
    };
    let list = match (&args.docs, &args.dir) {
        (Some(file), _) => DocumentList::from_file(file)?,
        (None, Some(dir)) => DocumentList::from_dir(dir)?,
        (None, None) => bail!("either --docs or --dir is required"),
    };
    tracing::info!(documents = list.len(), noise_words = noise.len(), "building index");
    IndexBuilder::build(noise, list.documents()).context("index build failed")
}

fn print_results(index: &KeywordIndex, kw1: &str, kw2: &str) {
    match top5_search(index, &kw1.to_lowercase(), &kw2.to_lowercase()) {
        Some(docs) => {
            for doc in docs {
                println!("{doc}");
            }
        }
        None => println!("no matches"),
    }
}

fn repl(index: &KeywordIndex) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("search (kw1 or kw2)> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() { continue; }
        if line.eq_ignore_ascii_case("exit") {
            return Ok(());
        }
        match parse_query(line) {
            Some((kw1, kw2)) => print_results(index, kw1, kw2),
            None => println!("expected two keywords, e.g. `apple or pear`"),
        }
    }
}

/// Accepts `kw1 kw2` or `kw1 or kw2`.
fn parse_query(line: &str) -> Option<(&str, &str)> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [kw1, kw2] => Some((*kw1, *kw2)),
        [kw1, or, kw2] if or.eq_ignore_ascii_case("or") => Some((*kw1, *kw2)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_query_forms() {
        assert_eq!(parse_query("bee ant"), Some(("bee", "ant")));
        assert_eq!(parse_query("bee OR ant"), Some(("bee", "ant")));
        assert_eq!(parse_query("bee"), None);
        assert_eq!(parse_query("bee and ant"), None);
    }
}
