pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Default tokenizer for cloud input text.
///
/// Words are maximal runs of alphanumeric characters and interior
/// apostrophes, lower-cased. Single-character tokens, pure numbers, and a
/// trailing possessive `'s` are dropped, matching the behavior users expect
/// from word cloud frequency counting.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut words = Vec::new();
        let mut current = String::new();
        for c in text.chars() {
            if c.is_alphanumeric() || c == '\'' || c == '\u{2019}' {
                // Normalize curly apostrophes so "don’t" and "don't" agree.
                current.push(if c == '\u{2019}' { '\'' } else { c });
            } else {
                flush(&mut current, &mut words);
            }
        }
        flush(&mut current, &mut words);
        words
    }
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let word = std::mem::take(current);
    let word = word.trim_matches('\'');
    let word = word.strip_suffix("'s").unwrap_or(word);
    if word.chars().count() < 2 {
        return;
    }
    if word.chars().all(|c| c.is_ascii_digit()) {
        return;
    }
    words.push(word.to_lowercase());
}

#[cfg(test)]
mod tests {
    use super::{Tokenizer, WordTokenizer};

    fn tok(text: &str) -> Vec<String> {
        WordTokenizer.tokenize(text)
    }

    #[test]
    fn splits_on_punctuation_and_folds_case() {
        assert_eq!(tok("Dog, dog! CAT?"), vec!["dog", "dog", "cat"]);
    }

    #[test]
    fn drops_short_and_numeric_tokens() {
        assert_eq!(tok("a I 42 ok 3rd"), vec!["ok", "3rd"]);
    }

    #[test]
    fn keeps_interior_apostrophes_and_strips_possessive() {
        assert_eq!(tok("don't won't"), vec!["don't", "won't"]);
        assert_eq!(tok("dog's bone"), vec!["dog", "bone"]);
        assert_eq!(tok("'quoted'"), vec!["quoted"]);
    }

    #[test]
    fn whitespace_only_yields_nothing() {
        assert!(tok("  \t\n ").is_empty());
    }
}
