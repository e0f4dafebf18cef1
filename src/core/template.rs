//! Fixed narration templates and slot filling.
//!
//! Templates use `{slot}` placeholders; `{{` and `}}` produce literal
//! braces. Filling never fails: a placeholder with no matching slot, or
//! an unclosed brace, is emitted unchanged.

use crate::schema::deck::AudienceLevel;

pub const TITLE_INTRO: &str = "Welcome — today we'll learn about {concept}.";
pub const EXAMPLE: &str =
    "Example: Consider {example_brief}. This demonstrates the main idea: {example_point}.";
pub const RELATED: &str = "Related topics you might want to learn next: {related_list}.";
pub const SUMMARY: &str = "In summary, {concept}: {definition}";

pub const EXAMPLE_BRIEF_RELATED: &str = "a simple case involving {related}";
pub const EXAMPLE_POINT_RELATED: &str = "how {concept} uses {related} in structure/operation";
pub const EXAMPLE_BRIEF_FALLBACK: &str = "a simple conceptual scenario";
pub const EXAMPLE_POINT_FALLBACK: &str = "the core intuition behind {concept}";

pub const NO_RELATED_TOPICS: &str = "No related topics available.";
pub const NO_FURTHER_READING: &str = "Further reading not available";

/// Definition-slide wording per audience level.
const DEFINITION_TEMPLATES: [(AudienceLevel, &str); 2] = [
    (
        AudienceLevel::Beginner,
        "{concept} can be understood as: {definition} \
         I'll explain the idea step by step with a simple example.",
    ),
    (
        AudienceLevel::Advanced,
        "Formally, {concept} is: {definition} \
         We'll also highlight important properties and implications.",
    ),
];

/// The definition template for `level`.
pub fn definition_template(level: AudienceLevel) -> &'static str {
    DEFINITION_TEMPLATES
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, t)| *t)
        .unwrap_or(DEFINITION_TEMPLATES[0].1)
}

/// Substitute `{name}` placeholders from `slots`.
pub fn fill(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        // Escaped braces
        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }

        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        match tail[1..].find(['{', '}']) {
            Some(end) if tail[1..].as_bytes()[end] == b'}' => {
                let name = &tail[1..1 + end];
                match slots.iter().find(|(slot, _)| *slot == name) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&tail[..end + 2]),
                }
                rest = &tail[end + 2..];
            }
            _ => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_single_slot() {
        assert_eq!(
            fill(TITLE_INTRO, &[("concept", "Trees")]),
            "Welcome — today we'll learn about Trees."
        );
    }

    #[test]
    fn fill_repeated_slot() {
        assert_eq!(fill("{a} and {a}", &[("a", "x")]), "x and x");
    }

    #[test]
    fn fill_unknown_slot_kept() {
        assert_eq!(fill("Hello {who}.", &[("name", "x")]), "Hello {who}.");
    }

    #[test]
    fn fill_escaped_braces() {
        assert_eq!(fill("Use {{braces}} here.", &[]), "Use {braces} here.");
    }

    #[test]
    fn fill_unclosed_and_stray_braces_kept() {
        assert_eq!(fill("Bad {unclosed here", &[]), "Bad {unclosed here");
        assert_eq!(fill("Bad } here", &[]), "Bad } here");
        assert_eq!(fill("{outer{x}}", &[("x", "1")]), "{outer1}");
    }

    #[test]
    fn value_braces_not_reinterpreted() {
        assert_eq!(fill("{a}", &[("a", "{b}")]), "{b}");
    }

    #[test]
    fn definition_templates_differ_by_level() {
        let beginner = fill(
            definition_template(AudienceLevel::Beginner),
            &[("concept", "Trees"), ("definition", "A tree.")],
        );
        let advanced = fill(
            definition_template(AudienceLevel::Advanced),
            &[("concept", "Trees"), ("definition", "A tree.")],
        );
        assert_eq!(
            beginner,
            "Trees can be understood as: A tree. I'll explain the idea step by step with a simple example."
        );
        assert_eq!(
            advanced,
            "Formally, Trees is: A tree. We'll also highlight important properties and implications."
        );
    }

    #[test]
    fn standard_templates_fully_bound() {
        let slots = [
            ("concept", "C"),
            ("definition", "D"),
            ("related", "R"),
            ("related_list", "L"),
            ("example_brief", "B"),
            ("example_point", "P"),
        ];
        for t in [
            TITLE_INTRO,
            EXAMPLE,
            RELATED,
            SUMMARY,
            EXAMPLE_BRIEF_RELATED,
            EXAMPLE_POINT_RELATED,
            EXAMPLE_BRIEF_FALLBACK,
            EXAMPLE_POINT_FALLBACK,
            definition_template(AudienceLevel::Beginner),
            definition_template(AudienceLevel::Advanced),
        ] {
            let filled = fill(t, &slots);
            assert!(!filled.contains('{') && !filled.contains('}'), "{filled}");
        }
    }
}
