//! Prompt construction for the image API.
//!
//! Derives a short hook text from a course topic and renders the thumbnail
//! prompt template with it.

pub const THUMBNAIL: &str = include_str!("../data/prompts/thumbnail.txt");

/// Single words dropped from topics when deriving a hook.
const FILLER_WORDS: &[&str] = &[
    "fundamentals",
    "basics",
    "beginner",
    "complete",
    "masterclass",
    "course",
    "101",
];

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

/// Short 2-4 word hook derived from the topic, uppercased for impact.
///
/// Filler words ("introduction to", "basics", ...) are dropped first. Topics
/// left with two words or fewer become "Master <topic>"; longer topics keep
/// their first three words.
pub fn hook_text(topic: &str) -> String {
    let words: Vec<&str> = topic.split_whitespace().collect();
    let mut kept: Vec<&str> = Vec::new();

    let mut i = 0;
    while i < words.len() {
        let lower = words[i].to_lowercase();
        if (lower == "introduction" || lower == "intro")
            && words.get(i + 1).is_some_and(|w| w.eq_ignore_ascii_case("to"))
        {
            i += 2;
            continue;
        }
        if FILLER_WORDS.contains(&lower.as_str()) {
            i += 1;
            continue;
        }
        kept.push(words[i]);
        i += 1;
    }

    // Stripping everything means the topic was all filler; keep it as-is.
    if kept.is_empty() {
        kept = words;
    }

    let hook = if kept.len() <= 2 {
        format!("Master {}", kept.join(" "))
    } else {
        kept[..3].join(" ")
    };

    hook.trim().to_uppercase()
}

/// Full generation prompt for a course topic.
pub fn thumbnail_prompt(topic: &str, style: &str) -> String {
    let hook = hook_text(topic);
    render(
        THUMBNAIL,
        &[("topic", topic), ("hook", &hook), ("style", style)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("{{a}} and {{b}}", &[("a", "cats"), ("b", "dogs")]),
            "cats and dogs"
        );
    }

    #[test]
    fn test_hook_text_short_topic_gets_master_prefix() {
        assert_eq!(hook_text("Python"), "MASTER PYTHON");
        assert_eq!(hook_text("Machine Learning"), "MASTER MACHINE LEARNING");
    }

    #[test]
    fn test_hook_text_strips_filler_words() {
        assert_eq!(hook_text("Introduction to Python"), "MASTER PYTHON");
        assert_eq!(hook_text("Intro to Rust"), "MASTER RUST");
        assert_eq!(
            hook_text("Machine Learning Fundamentals"),
            "MASTER MACHINE LEARNING"
        );
    }

    #[test]
    fn test_hook_text_long_topic_keeps_first_three_words() {
        assert_eq!(
            hook_text("Effective Business Communication For Managers"),
            "EFFECTIVE BUSINESS COMMUNICATION"
        );
    }

    #[test]
    fn test_hook_text_all_filler_falls_back_to_topic() {
        assert_eq!(hook_text("Complete Course 101"), "COMPLETE COURSE 101");
    }

    #[test]
    fn test_thumbnail_prompt_embeds_topic_hook_and_style() {
        let prompt = thumbnail_prompt("Machine Learning Basics", "cinematic");
        assert!(prompt.contains("Machine Learning Basics"));
        assert!(prompt.contains("MASTER MACHINE LEARNING"));
        assert!(prompt.contains("cinematic"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_template_has_placeholders() {
        assert!(THUMBNAIL.contains("{{topic}}"));
        assert!(THUMBNAIL.contains("{{hook}}"));
        assert!(THUMBNAIL.contains("{{style}}"));
    }
}
