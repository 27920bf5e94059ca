//! Content filtering: discard candidates too short to be useful.
//!
//! Runs after boosting and before enrichment, so no enrichment work is
//! spent on chunks that would be discarded anyway.

use tracing::debug;

use folio_core::models::Candidate;

/// Drop candidates below the word or character thresholds.
///
/// Both checks are enforced independently; a threshold of 0 disables that
/// specific check.
pub fn filter_content(
    candidates: Vec<Candidate>,
    min_word_count: usize,
    min_char_count: usize,
) -> Vec<Candidate> {
    if min_word_count == 0 && min_char_count == 0 {
        return candidates;
    }

    let before = candidates.len();
    let surviving: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| {
            let words_ok = min_word_count == 0
                || c.text.split_whitespace().count() >= min_word_count;
            let chars_ok = min_char_count == 0 || c.text.chars().count() >= min_char_count;
            words_ok && chars_ok
        })
        .collect();

    if surviving.len() < before {
        debug!(dropped = before - surviving.len(), "content filter dropped candidates");
    }
    surviving
}
