/// Lazily yields normalized tokens from raw transcript text.
///
/// Tokens are lowercased and split on any non-alphanumeric scalar, so
/// punctuation and symbols never survive into a token and whitespace runs
/// collapse for free. The rule is Unicode-aware: alphabetic characters of
/// non-Latin scripts are kept, which matters because the transcription
/// service auto-detects the spoken language.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn collect(text: &str) -> Vec<String> {
        tokens(text).collect()
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(
            collect("Hello, World! It's fine."),
            vec!["hello", "world", "it", "s", "fine"]
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n  \n")]
    #[case("!?... --- ,,,")]
    fn test_empty_or_tokenless_input_yields_nothing(#[case] input: &str) {
        assert!(collect(input).is_empty());
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(collect("one   two\n\nthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_keeps_non_latin_scripts() {
        assert_eq!(collect("Привет мир"), vec!["привет", "мир"]);
        assert_eq!(collect("こんにちは 世界"), vec!["こんにちは", "世界"]);
    }

    #[test]
    fn test_digits_are_tokens() {
        assert_eq!(collect("track 42"), vec!["track", "42"]);
    }

    #[test]
    fn test_never_emits_empty_tokens() {
        assert!(collect("a--b  ,c").iter().all(|t| !t.is_empty()));
    }
}
