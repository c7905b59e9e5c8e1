// The three detection tiers for a single term.
//
// The service walks the term list once and calls `check_term` for each term;
// the first hit wins. Within a term the tiers run in fixed order:
// direct, spaced, fuzzy.

use super::automod_models::{AutomodConfig, MatchEvidence, MatchTier, MatchVerdict};
use super::normalizer::NormalizedText;
use super::pattern_cache::CompiledTerm;

/// Classic Levenshtein distance (insert, delete, substitute all cost 1).
///
/// Works on chars, keeping two rows of the DP table.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Run the tiers for one term. `None` means this term didn't match.
pub fn check_term(
    term: &str,
    compiled: &CompiledTerm,
    text: &NormalizedText,
    config: &AutomodConfig,
) -> Option<MatchVerdict> {
    if !compiled.is_matchable() {
        return None;
    }

    let normalized = text.fully_normalized.as_str();

    // 1) direct substring on the normalized text
    if !normalized.is_empty() && normalized.contains(compiled.key.as_str()) {
        return Some(hit(
            term,
            MatchTier::Direct,
            MatchEvidence::Normalized {
                text: normalized.to_string(),
            },
        ));
    }

    // 2) separators inserted between the term's characters
    if let Some(found) = compiled
        .spaced
        .as_ref()
        .and_then(|re| re.find(&text.leet_preserved))
    {
        return Some(hit(
            term,
            MatchTier::Spaced,
            MatchEvidence::Separated {
                matched: found.as_str().to_string(),
            },
        ));
    }

    // 3) whole message within a small edit distance of the term
    if !normalized.is_empty() {
        let distance = levenshtein(normalized, &compiled.key);
        if distance <= config.max_edits_for(compiled.key.chars().count()) {
            return Some(hit(
                term,
                MatchTier::Fuzzy,
                MatchEvidence::EditDistance {
                    candidate: normalized.to_string(),
                    distance,
                },
            ));
        }
    }

    None
}

fn hit(term: &str, tier: MatchTier, evidence: MatchEvidence) -> MatchVerdict {
    MatchVerdict::Hit {
        tier,
        term: term.to_string(),
        evidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::automod::normalizer::normalize;

    fn check(term: &str, message: &str) -> Option<MatchVerdict> {
        let compiled = CompiledTerm::build(term);
        check_term(
            term,
            &compiled,
            &normalize(message),
            &AutomodConfig::default(),
        )
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("helo", "hello"), 1);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("banana", "cat"), 5);
    }

    #[test]
    fn test_direct_tier() {
        let verdict = check("cat", "I have a cat").unwrap();
        assert_eq!(verdict.tier(), Some(MatchTier::Direct));
        assert_eq!(
            verdict,
            MatchVerdict::Hit {
                tier: MatchTier::Direct,
                term: "cat".to_string(),
                evidence: MatchEvidence::Normalized {
                    text: "ihaveacat".to_string()
                },
            }
        );
    }

    #[test]
    fn test_direct_tier_sees_through_leet_and_punctuation() {
        assert_eq!(check("cat", "c.a.t").unwrap().tier(), Some(MatchTier::Direct));
        assert_eq!(check("bad", "b@d").unwrap().tier(), Some(MatchTier::Direct));
    }

    #[test]
    fn test_accented_term_keeps_its_accent() {
        // "café" must not shrink to "caf" and catch ordinary words
        assert!(check("café", "I love caffeine").is_none());
        assert!(check("café", "meet me at the cafeteria").is_none());
        assert_eq!(
            check("café", "un CAFÉ noir").unwrap().tier(),
            Some(MatchTier::Direct)
        );
    }

    #[test]
    fn test_non_latin_term() {
        let verdict = check("сука", "ты сука").unwrap();
        assert_eq!(
            verdict,
            MatchVerdict::Hit {
                tier: MatchTier::Direct,
                term: "сука".to_string(),
                evidence: MatchEvidence::Normalized {
                    text: "тысука".to_string()
                },
            }
        );
        assert_eq!(
            check("сука", "с у к а").unwrap().tier(),
            Some(MatchTier::Direct)
        );
    }

    #[test]
    fn test_spaced_tier_when_collapse_hides_term() {
        // Collapsing turns "h e l l o" into "helo", so only the spacing
        // pattern on the leet-preserved text can see the double l.
        let verdict = check("hello", "say h e l l o now").unwrap();
        assert_eq!(
            verdict,
            MatchVerdict::Hit {
                tier: MatchTier::Spaced,
                term: "hello".to_string(),
                evidence: MatchEvidence::Separated {
                    matched: "h e l l o ".to_string()
                },
            }
        );
    }

    #[test]
    fn test_fuzzy_tier() {
        let verdict = check("hello", "helo").unwrap();
        assert_eq!(
            verdict,
            MatchVerdict::Hit {
                tier: MatchTier::Fuzzy,
                term: "hello".to_string(),
                evidence: MatchEvidence::EditDistance {
                    candidate: "helo".to_string(),
                    distance: 1
                },
            }
        );
    }

    #[test]
    fn test_short_terms_get_tighter_tolerance() {
        assert_eq!(check("cat", "cap").unwrap().tier(), Some(MatchTier::Fuzzy));
        assert!(check("cat", "cop").is_none());
        assert!(check("cat", "banana").is_none());
    }

    #[test]
    fn test_custom_thresholds() {
        let config = AutomodConfig {
            long_term_min_len: 5,
            long_term_max_edits: 0,
            short_term_max_edits: 0,
        };
        let compiled = CompiledTerm::build("hello");
        assert!(check_term("hello", &compiled, &normalize("helo"), &config).is_none());
    }

    #[test]
    fn test_empty_message_is_clean() {
        assert!(check("cat", "").is_none());
        assert!(check("a", "   ").is_none());
    }

    #[test]
    fn test_unmatchable_term_never_hits() {
        assert!(check("...", "...").is_none());
    }
}
