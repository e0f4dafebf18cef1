//! Lookup-to-generation orchestration: concept table → deck files.
//!
//! Reloads the persisted table, looks the concept up, generates the deck
//! and narration, and writes them (plus the optional scene script).

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::generator::{Clock, DeckGenerator};
use crate::core::scene;
use crate::core::store::{self, StoreError};
use crate::schema::deck::{AudienceLevel, Deck};

pub const DEFAULT_CONCEPTS_PATH: &str = "knowledge_graph.json";
pub const DEFAULT_DECK_PATH: &str = "slides.json";
pub const DEFAULT_SCRIPT_PATH: &str = "script.txt";
pub const DEFAULT_SCENE_PATH: &str = "generated_manim.py";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("concept store error: {0}")]
    Store(#[from] StoreError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// The concept is not in the table. Nothing was written.
    NotFound { concept: String },
    Generated(GeneratedDeck),
}

/// A generated deck and where its artifacts were written.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDeck {
    pub deck: Deck,
    pub narration: String,
    pub deck_path: PathBuf,
    pub script_path: PathBuf,
    pub scene_path: Option<PathBuf>,
}

/// Configured pipeline. Built via `DeckPipeline::builder()`.
#[derive(Debug, Clone)]
pub struct DeckPipeline {
    concepts_path: PathBuf,
    deck_path: PathBuf,
    script_path: PathBuf,
    scene_path: Option<PathBuf>,
    generator: DeckGenerator,
}

/// Builder for constructing a `DeckPipeline`.
#[derive(Debug, Clone)]
pub struct DeckPipelineBuilder {
    concepts_path: PathBuf,
    deck_path: PathBuf,
    script_path: PathBuf,
    scene_path: Option<PathBuf>,
    clock: Clock,
}

impl DeckPipeline {
    pub fn builder() -> DeckPipelineBuilder {
        DeckPipelineBuilder {
            concepts_path: PathBuf::from(DEFAULT_CONCEPTS_PATH),
            deck_path: PathBuf::from(DEFAULT_DECK_PATH),
            script_path: PathBuf::from(DEFAULT_SCRIPT_PATH),
            scene_path: Some(PathBuf::from(DEFAULT_SCENE_PATH)),
            clock: Clock::System,
        }
    }

    pub fn concepts_path(&self) -> &Path {
        &self.concepts_path
    }

    /// Generate and write the deck for `concept`.
    ///
    /// A concept missing from the table is reported as
    /// [`PipelineOutcome::NotFound`], not as an error.
    pub fn run(
        &self,
        concept: &str,
        audience_level: AudienceLevel,
    ) -> Result<PipelineOutcome, PipelineError> {
        let table = store::reload(&self.concepts_path)?;

        let Some((definition, related)) = table.lookup(concept) else {
            warn!(concept, path = %self.concepts_path.display(), "concept not found");
            return Ok(PipelineOutcome::NotFound {
                concept: concept.to_string(),
            });
        };

        let (deck, narration) = self
            .generator
            .generate(concept, definition, related, audience_level);

        std::fs::write(&self.deck_path, store::to_pretty_json(&deck)?)?;
        debug!(path = %self.deck_path.display(), "wrote deck");
        std::fs::write(&self.script_path, &narration)?;
        debug!(path = %self.script_path.display(), "wrote narration");

        let mut scene_path = None;
        if let Some(path) = &self.scene_path {
            if scene::write_scene(&deck, path)? {
                scene_path = Some(path.clone());
            }
        }

        info!(
            concept,
            audience = %audience_level,
            slides = deck.slides.len(),
            duration_sec = deck.duration_sec(),
            "generated deck"
        );

        Ok(PipelineOutcome::Generated(GeneratedDeck {
            deck,
            narration,
            deck_path: self.deck_path.clone(),
            script_path: self.script_path.clone(),
            scene_path,
        }))
    }
}

impl DeckPipelineBuilder {
    pub fn concepts_path(mut self, path: impl AsRef<Path>) -> Self {
        self.concepts_path = path.as_ref().to_path_buf();
        self
    }

    pub fn deck_path(mut self, path: impl AsRef<Path>) -> Self {
        self.deck_path = path.as_ref().to_path_buf();
        self
    }

    pub fn script_path(mut self, path: impl AsRef<Path>) -> Self {
        self.script_path = path.as_ref().to_path_buf();
        self
    }

    pub fn scene_path(mut self, path: impl AsRef<Path>) -> Self {
        self.scene_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Skip the scene script.
    pub fn no_scene(mut self) -> Self {
        self.scene_path = None;
        self
    }

    /// Place all outputs, and read the table, under `dir` using the
    /// default file names.
    pub fn in_dir(self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let with_scene = self.scene_path.is_some();
        let builder = self
            .concepts_path(dir.join(DEFAULT_CONCEPTS_PATH))
            .deck_path(dir.join(DEFAULT_DECK_PATH))
            .script_path(dir.join(DEFAULT_SCRIPT_PATH));
        if with_scene {
            builder.scene_path(dir.join(DEFAULT_SCENE_PATH))
        } else {
            builder
        }
    }

    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn build(self) -> DeckPipeline {
        DeckPipeline {
            concepts_path: self.concepts_path,
            deck_path: self.deck_path,
            script_path: self.script_path,
            scene_path: self.scene_path,
            generator: DeckGenerator::with_clock(self.clock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let pipeline = DeckPipeline::builder().build();
        assert_eq!(pipeline.concepts_path(), Path::new("knowledge_graph.json"));
        assert_eq!(pipeline.deck_path, PathBuf::from("slides.json"));
        assert_eq!(pipeline.script_path, PathBuf::from("script.txt"));
        assert_eq!(pipeline.scene_path, Some(PathBuf::from("generated_manim.py")));
    }

    #[test]
    fn in_dir_respects_no_scene() {
        let pipeline = DeckPipeline::builder().no_scene().in_dir("/tmp/out").build();
        assert_eq!(pipeline.concepts_path(), Path::new("/tmp/out/knowledge_graph.json"));
        assert_eq!(pipeline.deck_path, PathBuf::from("/tmp/out/slides.json"));
        assert!(pipeline.scene_path.is_none());
    }

    #[test]
    fn missing_table_is_io_error() {
        let pipeline = DeckPipeline::builder()
            .concepts_path("/nonexistent/dir/knowledge_graph.json")
            .build();
        let err = pipeline.run("Trees", AudienceLevel::Beginner).unwrap_err();
        assert!(matches!(err, PipelineError::Store(StoreError::Io(_))));
    }
}
