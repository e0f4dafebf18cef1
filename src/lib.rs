//! Concept Deck — concept lookup and template-driven slide generation.
//!
//! Stores a small table of concepts and their related concepts, persists
//! and reloads it, and turns one retrieved concept into a five-slide deck
//! with a narration script and an optional Manim scene for the title.

pub mod core;
pub mod schema;
