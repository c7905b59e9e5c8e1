// Text normalization for the automod matcher.
//
// Every message is turned into two views:
// - leet-preserved: lowercased, look-alike symbols folded to letters, punctuation kept
// - fully-normalized: leet-preserved with everything but letters and digits
//   removed and runs of the same character collapsed to one
//
// Letters and digits are Unicode-aware, so "café" and "сука" survive intact.
//
// The order is fixed: lowercase, fold, strip, collapse.

/// The two normalized views of one raw message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub leet_preserved: String,
    pub fully_normalized: String,
}

/// Fold a lowercased character that visually stands in for a letter.
///
/// `l` is already a letter and is left alone.
pub fn fold_leet(c: char) -> char {
    match c {
        '1' | '!' => 'i',
        '3' => 'e',
        '4' | '@' => 'a',
        '0' => 'o',
        '5' | '$' => 's',
        other => other,
    }
}

fn is_kept(c: char) -> bool {
    c.is_alphanumeric()
}

/// Lowercase and leet-fold, keeping punctuation and spacing.
pub fn leet_preserved(raw: &str) -> String {
    raw.to_lowercase().chars().map(fold_leet).collect()
}

/// Drop anything that isn't a letter or digit.
pub fn strip_separators(text: &str) -> String {
    text.chars().filter(|c| is_kept(*c)).collect()
}

/// Collapse runs of one character: "heeellllo" -> "helo".
pub fn collapse_repeats(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = None;
    for c in text.chars() {
        if last != Some(c) {
            out.push(c);
            last = Some(c);
        }
    }
    out
}

/// Produce both views of a raw message. Total over all inputs.
pub fn normalize(raw: &str) -> NormalizedText {
    let leet_preserved = leet_preserved(raw);
    let fully_normalized = collapse_repeats(&strip_separators(&leet_preserved));
    NormalizedText {
        leet_preserved,
        fully_normalized,
    }
}

/// The form of a banned term that the tiers compare against.
///
/// Folded and stripped like a message, but not collapsed: a stored "hello"
/// stays five characters so the fuzzy tier can still measure "helo" as one
/// edit away.
pub fn term_key(term: &str) -> String {
    strip_separators(&leet_preserved(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leet_substitutions() {
        let text = normalize("H3LL0");
        assert_eq!(text.leet_preserved, "hello");
        assert_eq!(text.fully_normalized, "helo");
    }

    #[test]
    fn test_collapse_repeats() {
        assert_eq!(normalize("heeello").fully_normalized, "helo");
        assert_eq!(collapse_repeats("heeeellllo"), "helo");
        assert_eq!(collapse_repeats("abab"), "abab");
    }

    #[test]
    fn test_symbol_classes() {
        assert_eq!(leet_preserved("1!3 4@0 5$"), "iie aao ss");
        // Unmapped digits survive both views
        assert_eq!(normalize("r2d2").fully_normalized, "r2d2");
    }

    #[test]
    fn test_punctuation_kept_then_stripped() {
        let text = normalize("B a-D!!");
        assert_eq!(text.leet_preserved, "b a-dii");
        assert_eq!(text.fully_normalized, "badi");
    }

    #[test]
    fn test_non_ascii_letters_are_kept() {
        assert_eq!(normalize("Caté ☕").fully_normalized, "caté");
        assert_eq!(normalize("ты, СУКА!").fully_normalized, "тысукаi");
        assert_eq!(term_key("Café"), "café");
        assert_eq!(term_key("сука"), "сука");
    }

    #[test]
    fn test_empty_input() {
        let text = normalize("");
        assert_eq!(text.leet_preserved, "");
        assert_eq!(text.fully_normalized, "");
        assert_eq!(normalize("  ...  ").fully_normalized, "");
    }

    #[test]
    fn test_term_key_keeps_repeats() {
        assert_eq!(term_key("Hello"), "hello");
        assert_eq!(term_key("b@d w0rd"), "badword");
        assert_eq!(term_key("..."), "");
    }
}
