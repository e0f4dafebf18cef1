//! Slides — generates a slide deck, narration script, and Manim scene for
//! one concept from the persisted concept table.
//!
//! Usage: slides [CONCEPT] [LEVEL]
//!
//! Reads knowledge_graph.json and writes slides.json, script.txt and
//! generated_manim.py in the current directory.

use clap::Parser;
use concept_deck::core::pipeline::{DeckPipeline, PipelineOutcome};
use concept_deck::core::preview::render_preview;
use concept_deck::schema::deck::AudienceLevel;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(about = "Generate a slide deck and narration for a concept")]
struct Args {
    /// Concept to generate slides for (exact, case-sensitive)
    #[arg(default_value = "Trees")]
    concept: String,

    /// Audience level: beginner or advanced
    #[arg(default_value_t = AudienceLevel::Beginner)]
    level: AudienceLevel,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let pipeline = DeckPipeline::builder().build();

    match pipeline.run(&args.concept, args.level) {
        Ok(PipelineOutcome::NotFound { concept }) => {
            println!(
                "❌ Concept '{}' not found in {}",
                concept,
                pipeline.concepts_path().display()
            );
            ExitCode::SUCCESS
        }
        Ok(PipelineOutcome::Generated(generated)) => {
            println!("✅ Slide deck generated: {}", generated.deck_path.display());
            println!("✅ Narration script saved: {}", generated.script_path.display());
            if let Some(scene) = &generated.scene_path {
                println!("✅ Minimal Manim scene created: {}", scene.display());
            }
            println!();
            print!("{}", render_preview(&generated.deck, &generated.narration));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
