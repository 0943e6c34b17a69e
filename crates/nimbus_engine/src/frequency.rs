use std::collections::HashMap;

use crate::stopwords::StopwordSet;

/// One ranked word: its raw count and its weight relative to the top word.
#[derive(Debug, Clone, PartialEq)]
pub struct WordWeight {
    pub word: String,
    pub count: u64,
    /// In (0, 1]; the most frequent word has weight 1.0.
    pub weight: f32,
}

/// Counts stopword-filtered tokens, folds plural forms into their singular
/// when both occur, and returns at most `max_words` entries ordered by
/// descending count (ties broken alphabetically for determinism).
///
/// An empty return value is the distinguished "no renderable words" outcome.
pub fn rank_frequencies(
    tokens: &[String],
    stopwords: &StopwordSet,
    max_words: u32,
) -> Vec<WordWeight> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for token in tokens {
        if stopwords.contains(token.as_str()) {
            continue;
        }
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    // Fold "words" into "word" when the singular also occurs. Words ending
    // in "ss" are left alone ("glass" is not a plural of "glas").
    let plurals: Vec<String> = counts
        .keys()
        .filter(|w| w.ends_with('s') && !w.ends_with("ss"))
        .map(|w| w.to_string())
        .collect();
    let mut folded: HashMap<String, u64> = counts
        .iter()
        .map(|(w, c)| (w.to_string(), *c))
        .collect();
    for plural in plurals {
        let singular = &plural[..plural.len() - 1];
        if folded.contains_key(singular) {
            let extra = folded.remove(&plural).unwrap_or(0);
            if let Some(count) = folded.get_mut(singular) {
                *count += extra;
            }
        }
    }

    let mut ranked: Vec<(String, u64)> = folded.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(max_words as usize);

    let top = match ranked.first() {
        Some((_, count)) => *count as f32,
        None => return Vec::new(),
    };
    ranked
        .into_iter()
        .map(|(word, count)| WordWeight {
            weight: count as f32 / top,
            word,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::rank_frequencies;
    use crate::stopwords::build_stopword_set;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn ranks_by_count_with_relative_weights() {
        let stopwords = build_stopword_set("");
        let ranked = rank_frequencies(
            &tokens(&["dog", "dog", "cat", "bird", "dog", "cat"]),
            &stopwords,
            100,
        );
        assert_eq!(ranked[0].word, "dog");
        assert_eq!(ranked[0].count, 3);
        assert_eq!(ranked[0].weight, 1.0);
        assert_eq!(ranked[1].word, "cat");
        assert_eq!(ranked[2].word, "bird");
        assert!(ranked[2].weight < ranked[1].weight);
    }

    #[test]
    fn all_stopwords_yields_empty() {
        let stopwords = build_stopword_set("");
        let ranked = rank_frequencies(&tokens(&["the", "an", "the", "a"]), &stopwords, 100);
        assert!(ranked.is_empty());
    }

    #[test]
    fn extra_stopwords_remove_words() {
        let stopwords = build_stopword_set("dog");
        let ranked = rank_frequencies(&tokens(&["dog", "dog", "cat"]), &stopwords, 100);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].word, "cat");
    }

    #[test]
    fn plural_folds_into_singular() {
        let stopwords = build_stopword_set("");
        let ranked = rank_frequencies(&tokens(&["cloud", "clouds", "clouds", "grass"]), &stopwords, 100);
        assert_eq!(ranked[0].word, "cloud");
        assert_eq!(ranked[0].count, 3);
        // "grass" survives untouched; no "gras" folding.
        assert_eq!(ranked[1].word, "grass");
    }

    #[test]
    fn max_words_truncates_after_ranking() {
        let stopwords = build_stopword_set("");
        let ranked = rank_frequencies(
            &tokens(&["dog", "dog", "cat", "cat", "bird", "fish"]),
            &stopwords,
            2,
        );
        assert_eq!(ranked.len(), 2);
        let words: Vec<&str> = ranked.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn ties_break_alphabetically() {
        let stopwords = build_stopword_set("");
        let ranked = rank_frequencies(&tokens(&["zebra", "apple"]), &stopwords, 100);
        assert_eq!(ranked[0].word, "apple");
        assert_eq!(ranked[1].word, "zebra");
    }
}
