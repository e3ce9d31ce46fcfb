use std::sync::LazyLock;

use regex::Regex;

use crate::templating::template::Token;

static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[.,;:`!?#\-()\\"]"#).expect("punctuation pattern is valid"));

/// Drops punctuation, then splits the line into lowercase tokens on whitespace.
pub fn tokenize(line: &str) -> Vec<Token> {
    PUNCTUATION
        .replace_all(line, "")
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation() {
        assert_eq!(vec!["hello", "there"], tokenize("Hello, there!"));
        assert_eq!(vec!["well", "i", "think", "so"], tokenize("(well) I think: so?"));
        assert_eq!(vec!["say", "it", "again"], tokenize("\"say\" `it` #again\\"));
    }

    #[test]
    fn punctuation_inside_words_is_removed() {
        assert_eq!(vec!["goodbye"], tokenize("good-bye"));
        assert_eq!(vec!["eg"], tokenize("e.g."));
        assert_eq!(vec!["ab"], tokenize("a.b"));
    }

    #[test]
    fn apostrophes_are_kept() {
        assert_eq!(vec!["don't"], tokenize("Don't"));
    }

    #[test]
    fn empty_lines_have_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t").is_empty());
        assert!(tokenize("?!...").is_empty());
    }
}
