use crate::config::SearchWeights;
use crate::episode::EpisodeRef;

/// Case-insensitive substring test shared by all scoring signals.
///
/// Lowercases both sides via `str::to_lowercase` so every signal applies the
/// same (Unicode-aware) folding instead of each rolling its own.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches_title(thread_title: &str, anime_title: &str) -> bool {
    contains_ignore_case(thread_title, anime_title)
}

/// Episode signal.
///
/// Text labels use the shared case-insensitive test. Numeric episodes look
/// for the literal substrings " {n}" and " 0{n}": the single-zero form
/// catches titles like "Episode 05". It does not extend to deeper padding
/// ("005") and does not match a number at the very start of a title.
fn matches_episode(thread_title: &str, episode: &EpisodeRef) -> bool {
    match episode {
        EpisodeRef::Text(label) => contains_ignore_case(thread_title, label),
        EpisodeRef::Number(n) => {
            let plain = format!(" {}", n);
            let zero_padded = format!(" 0{}", n);
            thread_title.contains(&plain) || thread_title.contains(&zero_padded)
        }
    }
}

fn matches_discussion_keyword(thread_title: &str) -> bool {
    contains_ignore_case(thread_title, "discussion")
}

fn matches_spoiler_keyword(thread_title: &str) -> bool {
    contains_ignore_case(thread_title, "spoiler")
}

/// Computes the certainty that a thread discusses the searched episode.
///
/// Four boolean signals each contribute their weight when they match; the
/// earned sum is normalized by the weight total to a value in [0, 1].
///
/// Precondition: `weights.total() > 0`, guaranteed by config validation.
pub fn score(
    thread_title: &str,
    anime_title: &str,
    episode: &EpisodeRef,
    weights: &SearchWeights,
) -> f32 {
    let mut earned = 0;

    earned += if matches_title(thread_title, anime_title) {
        weights.title
    } else {
        0
    };
    earned += if matches_episode(thread_title, episode) {
        weights.episode
    } else {
        0
    };
    earned += if matches_discussion_keyword(thread_title) {
        weights.discussion
    } else {
        0
    };
    earned += if matches_spoiler_keyword(thread_title) {
        weights.spoiler
    } else {
        0
    };

    earned as f32 / weights.total() as f32
}
