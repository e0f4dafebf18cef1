//! Minimal Manim scene script for the title slide.

use std::path::Path;
use tracing::debug;

use crate::schema::deck::Deck;

const SCENE_CLASS: &str = "SimpleTitleScene";

/// Build the scene source for slide 0, or `None` if the deck is empty.
///
/// Strings are embedded as JSON string literals, which are also valid
/// Python literals.
pub fn render_scene(deck: &Deck, file_name: &str) -> Option<String> {
    let first = deck.slides.first()?;
    let title = quote(&first.title);
    let subtitle = quote(first.subtitle.as_deref().unwrap_or_default());

    Some(format!(
        "# Auto-generated Manim scene (Community Manim)
# To render: manim -pql {file_name} {SCENE_CLASS}
from manim import *

class {SCENE_CLASS}(Scene):
    def construct(self):
        title = Text({title}).scale(1.2).to_edge(UP)
        subtitle = Text({subtitle}).scale(0.6).next_to(title, DOWN)
        self.play(Write(title))
        self.wait(0.6)
        self.play(Write(subtitle))
        self.wait(2)
"
    ))
}

/// Write the scene for `deck` to `path`. Returns `Ok(false)` when the
/// deck has no slides and nothing was written.
pub fn write_scene(deck: &Deck, path: &Path) -> std::io::Result<bool> {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("generated_manim.py");
    let Some(source) = render_scene(deck, file_name) else {
        return Ok(false);
    };
    std::fs::write(path, source)?;
    debug!(path = %path.display(), "wrote scene script");
    Ok(true)
}

fn quote(s: &str) -> String {
    // Serializing a str to JSON cannot fail
    serde_json::Value::String(s.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::deck::{AudienceLevel, Slide};
    use chrono::Utc;

    fn deck_with(slides: Vec<Slide>) -> Deck {
        Deck {
            concept: "Trees".into(),
            generated_at: Utc::now(),
            audience_level: AudienceLevel::Beginner,
            slides,
        }
    }

    #[test]
    fn renders_title_and_subtitle() {
        let deck = deck_with(vec![Slide::title(
            "Introduction to Trees".into(),
            "A hierarchical data structure with nodes.".into(),
        )]);
        let source = render_scene(&deck, "scene.py").unwrap();
        assert!(source.contains("# To render: manim -pql scene.py SimpleTitleScene"));
        assert!(source.contains("class SimpleTitleScene(Scene):"));
        assert!(source.contains(r#"title = Text("Introduction to Trees").scale(1.2)"#));
        assert!(source
            .contains(r#"subtitle = Text("A hierarchical data structure with nodes.").scale(0.6)"#));
    }

    #[test]
    fn escapes_string_content() {
        let deck = deck_with(vec![Slide::title(
            "Say \"hi\"".into(),
            "back\\slash\nnewline".into(),
        )]);
        let source = render_scene(&deck, "scene.py").unwrap();
        assert!(source.contains(r#"Text("Say \"hi\"")"#));
        assert!(source.contains(r#"Text("back\\slash\nnewline")"#));
    }

    #[test]
    fn empty_deck_renders_nothing() {
        assert!(render_scene(&deck_with(Vec::new()), "scene.py").is_none());
    }
}
