//! Deterministic prompt templates. Pure string construction, no I/O.

use itertools::Itertools;

/// Renders the per-segment summarization prompt.
pub fn build_segment_prompt(segment_text: &str, podcast_title: &str, episode_title: &str) -> String {
    format!(
        "Create a summary based on the podcast transcript.\n\
         Podcast Title: {podcast_title} - {episode_title}\n\
         Podcast Transcript: {segment_text}\n\
         Summary:"
    )
}

/// Renders the second-pass "summary of summaries" prompt over partial
/// summaries, which callers supply in segment order.
pub fn build_reduce_prompt(partials: &[String], podcast_title: &str, episode_title: &str) -> String {
    let description = partials.iter().map(|p| format!("- {}", p.trim())).join("\n");
    format!(
        "Create a summary based on the podcast description.\n\
         Podcast Title: {podcast_title} - {episode_title}\n\
         Podcast Description:\n{description}\n\
         Summary:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_prompt_carries_titles_and_text() {
        let prompt = build_segment_prompt("hello world", "Acme FM", "Pilot");
        assert!(prompt.contains("Podcast Title: Acme FM - Pilot"));
        assert!(prompt.contains("Podcast Transcript: hello world"));
        assert!(prompt.ends_with("Summary:"));
    }

    #[test]
    fn reduce_prompt_lists_partials_in_given_order() {
        let partials = vec!["first part".to_string(), "second part".to_string()];
        let prompt = build_reduce_prompt(&partials, "Acme FM", "Pilot");

        assert!(prompt.contains("Podcast Description:\n- first part\n- second part"));
        let first = prompt.find("first part").unwrap();
        let second = prompt.find("second part").unwrap();
        assert!(first < second);
    }

    #[test]
    fn identical_inputs_render_identical_prompts() {
        let a = build_segment_prompt("x y z", "T", "E");
        let b = build_segment_prompt("x y z", "T", "E");
        assert_eq!(a, b);
    }
}
