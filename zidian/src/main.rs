//! Interactive dictionary lookup.
//!
//! Usage:
//!   cargo run -p zidian -- --base-url http://localhost:8000 --words data/words.txt
//!
//! Type any text and press Enter; the Chinese characters in it are segmented
//! and looked up. Lines starting with `:` are commands (`:help` lists them).

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use zidian::{open_session, ClientConfig, Session};

#[derive(Parser, Debug)]
#[command(name = "zidian")]
#[command(about = "Look up the Chinese words in a piece of text")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Root URL of the word service
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Word list (one word per line) used to segment input
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Look up this text once and exit instead of reading stdin
    #[arg(short, long)]
    query: Option<String>,
}

fn load_config(args: &Args) -> anyhow::Result<ClientConfig> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::load_toml(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))?,
        None => ClientConfig::default(),
    };
    if let Some(url) = &args.base_url {
        config.base_url = url.clone();
    }
    if let Some(ms) = args.timeout_ms {
        config.timeout_ms = ms;
    }
    if let Some(words) = &args.words {
        config.words_file = Some(words.clone());
    }
    Ok(config)
}

fn print_results(session: &Session) {
    if session.active().is_empty() {
        println!("  → (no entries found)\n");
        return;
    }
    for (token, entries) in session.state().active_entries() {
        let first = &entries[0];
        let gloss = first.glosses().next().unwrap_or("");
        let more = if entries.len() > 1 {
            format!(" (+{} more)", entries.len() - 1)
        } else {
            String::new()
        };
        println!("  {} [{}] {}{}", token, first.pinyin_accent, gloss, more);
    }
    println!();
}

fn run_search(session: &mut Session, text: &str) {
    let report = session.search(text);
    for failure in &report.failures {
        eprintln!("⚠ {}", failure);
    }
    print_results(session);
}

fn print_help() {
    println!("  <text>             look up the Chinese words in <text>");
    println!("  :entry <word> <n>  show entry n of a looked-up word");
    println!("  :char <c>          show the character record for <c>");
    println!("  :history           list searched words with counts");
    println!("  :stats             cache statistics");
    println!("  :quit              exit");
    println!();
}

/// Handle a `:` command. Returns `false` when the session should end.
fn run_command(session: &mut Session, line: &str) -> bool {
    let mut parts = line.split_whitespace();
    match parts.next().unwrap_or("") {
        ":quit" | ":q" => return false,
        ":help" => print_help(),
        ":history" => {
            if session.history().is_empty() {
                println!("  It's empty. Go study!\n");
            } else {
                for (token, count) in session.history().iter() {
                    println!("  {}: {}", token, count);
                }
                println!();
            }
        }
        ":stats" => {
            let cache = session.state().cache();
            let (hits, misses) = cache.stats();
            let rate = cache
                .hit_rate()
                .map(|r| format!("{:.1}%", r))
                .unwrap_or_else(|| "n/a".to_string());
            println!(
                "  cached words: {}, hits: {}, misses: {}, hit rate: {}\n",
                cache.len(),
                hits,
                misses,
                rate
            );
        }
        ":entry" => {
            let word = parts.next();
            let index = parts.next().and_then(|n| n.parse::<usize>().ok());
            match (word, index) {
                (Some(word), Some(index)) => match session.lookup(word) {
                    Some(entries) if index < entries.len() => {
                        let entry = session.lookup_at(word, index);
                        println!("  {} ({}) {}", entry.simplified, entry.traditional, entry.pinyin_accent);
                        for gloss in entry.glosses() {
                            println!("    - {}", gloss);
                        }
                        println!();
                    }
                    Some(entries) => {
                        println!("  '{}' has {} entries\n", word, entries.len());
                    }
                    None => println!("  '{}' has not been looked up yet\n", word),
                },
                _ => println!("  usage: :entry <word> <n>\n"),
            }
        }
        ":char" => match parts.next().and_then(|s| s.chars().next()) {
            Some(ch) => match session.service().character(ch) {
                Ok(Some(record)) => match serde_json::to_string_pretty(&record) {
                    Ok(text) => println!("{}\n", text),
                    Err(e) => eprintln!("⚠ {}", e),
                },
                Ok(None) => println!("  no record for '{}'\n", ch),
                Err(e) => eprintln!("⚠ {}", e),
            },
            None => println!("  usage: :char <c>\n"),
        },
        other => println!("  unknown command '{}' (try :help)\n", other),
    }
    true
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let mut session = open_session(&config)
        .map_err(|e| anyhow::anyhow!("Failed to start session: {}", e))?;

    if let Some(text) = &args.query {
        run_search(&mut session, text);
        return Ok(());
    }

    println!("═══════════════════════════════════════════════════");
    println!("  zidian - Chinese dictionary lookup");
    println!("═══════════════════════════════════════════════════");
    println!();
    match &config.words_file {
        Some(path) => println!("✓ Segmenting with word list {}", path.display()),
        None => println!("ℹ No word list given, looking up character by character"),
    }
    println!("✓ Word service at {}", config.base_url);
    println!("Type text and press Enter, :help for commands.");
    println!();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.starts_with(':') {
            if !run_command(&mut session, input) {
                break;
            }
        } else {
            run_search(&mut session, input);
        }
    }

    Ok(())
}
