//! Console preview of a generated deck.

use std::fmt::Write;

use crate::core::text::clip_chars;
use crate::schema::deck::Deck;

const NOTES_PREVIEW_CHARS: usize = 200;
const NARRATION_PREVIEW_CHARS: usize = 600;

/// Human-readable slide listing followed by the start of the narration.
pub fn render_preview(deck: &Deck, narration: &str) -> String {
    let mut out = String::from("--- Slide preview ---\n");

    for (i, slide) in deck.slides.iter().enumerate() {
        let _ = writeln!(out, "\nSlide {}: ({}) {}", i, slide.kind, slide.title);
        for bullet in slide.bullets.iter().flatten() {
            let _ = writeln!(out, " - {bullet}");
        }
        if let Some(notes) = &slide.notes {
            let _ = writeln!(out, "Notes: {}", clip_chars(notes, NOTES_PREVIEW_CHARS));
        }
    }

    let _ = write!(
        out,
        "\n--- Full narration (first {} chars) ---\n\n{}\n",
        NARRATION_PREVIEW_CHARS,
        clip_chars(narration, NARRATION_PREVIEW_CHARS)
    );
    out
}
