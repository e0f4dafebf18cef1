//! Knowledge graph — writes the built-in concept table, reloads it, and
//! looks one concept up.
//!
//! Usage: knowledge_graph [CONCEPT]

use clap::Parser;
use concept_deck::core::pipeline::DEFAULT_CONCEPTS_PATH;
use concept_deck::core::store;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(about = "Persist the built-in concept table and query it")]
struct Args {
    /// Concept to look up (exact, case-sensitive)
    #[arg(default_value = "Trees")]
    concept: String,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let path = PathBuf::from(DEFAULT_CONCEPTS_PATH);

    let table = store::load_literal_table();
    if let Err(e) = store::persist(&table, &path) {
        eprintln!("Failed to write {}: {}", path.display(), e);
        return ExitCode::FAILURE;
    }

    let table = match store::reload(&path) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    match table.lookup(&args.concept) {
        Some((definition, related)) => {
            println!("📘 Concept: {}", args.concept);
            println!("📖 Definition: {}", definition);
            println!("🔗 Related Topics: {}", related.join(", "));
        }
        None => {
            println!(
                "❌ Sorry, the concept '{}' was not found in the knowledge graph.",
                args.concept
            );
            println!("Known concepts: {}", table.names().join(", "));
        }
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
