//! Deck generation: one concept in, five slides and a narration script out.
//!
//! Output is a pure function of the inputs apart from the `generated_at`
//! stamp, which comes from the generator's [`Clock`].

use chrono::{DateTime, Utc};

use crate::core::template::{self, fill};
use crate::core::text::{join_present, truncate_words};
use crate::schema::deck::{AudienceLevel, Deck, Slide, SlideKind};

const SUBTITLE_WORDS: usize = 15;
const BULLET_WORDS: usize = 20;
const SUMMARY_WORDS: usize = 20;
const EXAMPLE_TITLE_WORDS: usize = 6;

/// Narration paragraphs are separated by a blank line.
pub const NARRATION_SEPARATOR: &str = "\n\n";

/// Source of the `generated_at` stamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Fixed(t) => *t,
        }
    }
}

/// Builds decks from concept records using the fixed templates.
#[derive(Debug, Clone, Default)]
pub struct DeckGenerator {
    clock: Clock,
}

impl DeckGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }

    /// Generate the deck and its narration script.
    ///
    /// Always produces exactly five slides in [`SlideKind::ORDER`]. An
    /// empty `related` list takes the fallback wording on the example and
    /// related slides.
    pub fn generate(
        &self,
        concept: &str,
        definition: &str,
        related: &[String],
        audience_level: AudienceLevel,
    ) -> (Deck, String) {
        let first_related = related.first().map(String::as_str);

        let title = Slide::title(
            format!("Introduction to {concept}"),
            truncate_words(definition, SUBTITLE_WORDS),
        );
        let greeting = fill(template::TITLE_INTRO, &[("concept", concept)]);

        let slides = vec![
            title,
            definition_slide(concept, definition, audience_level),
            example_slide(concept, first_related),
            related_slide(related),
            summary_slide(concept, definition),
        ];

        let narration = std::iter::once(greeting.as_str())
            .chain(slides.iter().filter_map(|s| s.notes.as_deref()))
            .collect::<Vec<_>>()
            .join(NARRATION_SEPARATOR);

        let deck = Deck {
            concept: concept.to_string(),
            generated_at: self.clock.now(),
            audience_level,
            slides,
        };

        (deck, narration)
    }
}

fn definition_slide(concept: &str, definition: &str, level: AudienceLevel) -> Slide {
    let notes = fill(
        template::definition_template(level),
        &[("concept", concept), ("definition", definition)],
    );
    Slide::content(
        SlideKind::Definition,
        format!("What is {concept}?"),
        vec![truncate_words(definition, BULLET_WORDS)],
        notes,
    )
}

fn example_slide(concept: &str, first_related: Option<&str>) -> Slide {
    let (brief, point) = first_related.map_or_else(
        || {
            (
                template::EXAMPLE_BRIEF_FALLBACK.to_string(),
                fill(template::EXAMPLE_POINT_FALLBACK, &[("concept", concept)]),
            )
        },
        |related| {
            let slots = [("concept", concept), ("related", related)];
            (
                fill(template::EXAMPLE_BRIEF_RELATED, &slots),
                fill(template::EXAMPLE_POINT_RELATED, &slots),
            )
        },
    );

    let notes = fill(
        template::EXAMPLE,
        &[("example_brief", brief.as_str()), ("example_point", point.as_str())],
    );
    Slide::content(
        SlideKind::Example,
        format!(
            "Simple example: {}",
            truncate_words(&brief, EXAMPLE_TITLE_WORDS)
        ),
        vec![
            "Set up the scenario".to_string(),
            format!("Apply the core idea of {concept}"),
            "Observe the result / takeaway".to_string(),
        ],
        notes,
    )
}

fn related_slide(related: &[String]) -> Slide {
    let (bullets, related_list) = if related.is_empty() {
        (
            vec![template::NO_FURTHER_READING.to_string()],
            template::NO_RELATED_TOPICS.to_string(),
        )
    } else {
        (related.to_vec(), join_present(related))
    };

    Slide::content(
        SlideKind::Related,
        "Related topics & next steps".to_string(),
        bullets,
        fill(template::RELATED, &[("related_list", related_list.as_str())]),
    )
}

fn summary_slide(concept: &str, definition: &str) -> Slide {
    let short = truncate_words(definition, SUMMARY_WORDS);
    let notes = fill(
        template::SUMMARY,
        &[("concept", concept), ("definition", short.as_str())],
    );
    Slide::content(SlideKind::Summary, "Summary".to_string(), vec![short], notes)
}
