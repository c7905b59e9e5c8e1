// Automod domain models - verdicts and tuning knobs.
//
// These are pure domain types with no Discord dependencies.
// The Discord layer turns a hit into a deletion and a log embed.

use serde::Serialize;

/// Which detection strategy caught the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Term found as a substring of the fully-normalized message
    Direct,
    /// Term found with separators inserted between its characters
    Spaced,
    /// Whole message is within a few edits of the term
    Fuzzy,
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchTier::Direct => write!(f, "direct"),
            MatchTier::Spaced => write!(f, "spaced"),
            MatchTier::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

/// Tier-specific diagnostic data attached to a hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchEvidence {
    /// The fully-normalized message that contained the term
    Normalized { text: String },
    /// The slice of the leet-preserved message the spacing pattern matched
    Separated { matched: String },
    /// The normalized message and its edit distance from the term
    EditDistance { candidate: String, distance: usize },
}

/// Result of evaluating one message against the banned-term list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchVerdict {
    Clean,
    Hit {
        tier: MatchTier,
        /// The banned term as stored (canonical form)
        term: String,
        evidence: MatchEvidence,
    },
}

impl MatchVerdict {
    #[allow(dead_code)]
    pub fn is_hit(&self) -> bool {
        matches!(self, MatchVerdict::Hit { .. })
    }

    pub fn tier(&self) -> Option<MatchTier> {
        match self {
            MatchVerdict::Hit { tier, .. } => Some(*tier),
            MatchVerdict::Clean => None,
        }
    }

    #[allow(dead_code)]
    pub fn term(&self) -> Option<&str> {
        match self {
            MatchVerdict::Hit { term, .. } => Some(term),
            MatchVerdict::Clean => None,
        }
    }

    /// One-line JSON record of the verdict for the audit log.
    pub fn audit_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

/// Tuning for the fuzzy tier.
///
/// The thresholds are empirical. Short terms get a tighter tolerance so they
/// don't collide with ordinary words.
#[derive(Debug, Clone)]
pub struct AutomodConfig {
    /// Terms at least this many characters long use `long_term_max_edits`
    pub long_term_min_len: usize,
    /// Max edit distance for long terms
    pub long_term_max_edits: usize,
    /// Max edit distance for everything shorter
    pub short_term_max_edits: usize,
}

impl AutomodConfig {
    /// Edit budget for a term whose match key has `term_len` characters.
    pub fn max_edits_for(&self, term_len: usize) -> usize {
        if term_len >= self.long_term_min_len {
            self.long_term_max_edits
        } else {
            self.short_term_max_edits
        }
    }
}

impl Default for AutomodConfig {
    fn default() -> Self {
        Self {
            long_term_min_len: 5,    // "hello" and up...
            long_term_max_edits: 2,  // ...tolerate two edits
            short_term_max_edits: 1, // everything else only one
        }
    }
}
