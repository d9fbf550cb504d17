//! # Segmenter
//!
//! Splits a raw transcript into an ordered sequence of bounded word windows.
//! Each window becomes one independent unit of summarization work.

/// A contiguous slice of the transcript's whitespace-delimited words,
/// identified by its 0-based position in the segment sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub index: usize,
    pub text: String,
}

/// Partitions `text` into consecutive windows of at most
/// `max_words_per_segment` words each. Window bounds are inclusive: no word
/// is lost between adjacent segments, only the final window may be short.
///
/// Runs of whitespace collapse to single spaces in segment text. Empty
/// input yields a single empty segment; callers that need to reject empty
/// transcripts do so before segmenting.
///
/// `max_words_per_segment` must be non-zero.
pub fn segment(text: &str, max_words_per_segment: usize) -> Vec<Segment> {
    debug_assert!(max_words_per_segment > 0);

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words_per_segment {
        return vec![Segment {
            index: 0,
            text: words.join(" "),
        }];
    }

    words
        .chunks(max_words_per_segment)
        .enumerate()
        .map(|(index, window)| Segment {
            index,
            text: window.join(" "),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_count(s: &str) -> usize {
        s.split_whitespace().count()
    }

    #[test]
    fn short_input_yields_single_segment() {
        let segments = segment("a b c", 2000);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].index, 0);
        assert_eq!(segments[0].text, "a b c");
    }

    #[test]
    fn input_at_exact_boundary_yields_single_segment() {
        let text = (0..2000).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let segments = segment(&text, 2000);
        assert_eq!(segments.len(), 1);
        assert_eq!(word_count(&segments[0].text), 2000);
    }

    #[test]
    fn oversized_input_partitions_into_inclusive_windows() {
        let text = (0..4500).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let segments = segment(&text, 2000);

        assert_eq!(segments.len(), 3);
        assert_eq!(word_count(&segments[0].text), 2000);
        assert_eq!(word_count(&segments[1].text), 2000);
        assert_eq!(word_count(&segments[2].text), 500);

        // no word lost at window boundaries
        assert!(segments[0].text.ends_with("w1999"));
        assert!(segments[1].text.starts_with("w2000"));

        // indices are ordered and contiguous
        for (i, seg) in segments.iter().enumerate() {
            assert_eq!(seg.index, i);
        }

        // segments collectively cover the input
        let rejoined = segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn whitespace_runs_collapse() {
        let segments = segment("  a \t b\n\nc ", 2000);
        assert_eq!(segments[0].text, "a b c");
    }

    #[test]
    fn empty_input_yields_one_empty_segment() {
        let segments = segment("", 2000);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].text.is_empty());
    }
}
