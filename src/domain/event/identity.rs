//! Participant identity normalization and fuzzy matching.
//!
//! Upstream identity strings are free-typed emails with no validation
//! gate, so lookup tolerates cosmetic differences (case, whitespace,
//! dot-variants in the local part) and a short list of well-known
//! domain typos. Anything in the ambiguous similarity band resolves to
//! *no match* and synthesizes a fresh participant instead of merging.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Similarity ratio above which two identities are treated as the same
/// person.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.9;

/// Well-known domain typos mapped to their canonical form.
///
/// Keys are compared after lowercasing and dot-stripping, so
/// `gmail.com` and `gmailcom` both canonicalize to `gmailcom`.
const DOMAIN_CORRECTIONS: &[(&str, &str)] = &[
    ("gamilcom", "gmailcom"),
    ("gmalcom", "gmailcom"),
    ("gmialcom", "gmailcom"),
    ("hotmialcom", "hotmailcom"),
    ("hotmalcom", "hotmailcom"),
    ("yahocom", "yahoocom"),
    ("outlookcm", "outlookcom"),
];

/// One invitee's identity: a free-typed email address.
///
/// Stores the raw string as entered; all comparison goes through
/// [`ParticipantIdentity::normalized`] or an [`IdentityMatcher`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantIdentity(String);

impl ParticipantIdentity {
    /// Creates an identity from a raw email string.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if the string is empty after trimming.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::empty_field("identity"));
        }
        Ok(Self(raw))
    }

    /// Returns the raw string as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical form: lowercased, trimmed, dots stripped from the
    /// local part (the portion before `@`) only.
    pub fn normalized(&self) -> String {
        let lowered = self.0.trim().to_lowercase();
        match lowered.split_once('@') {
            Some((local, domain)) => {
                let local: String = local.chars().filter(|c| *c != '.').collect();
                format!("{}@{}", local, domain)
            }
            None => lowered,
        }
    }

    /// Local part and domain of the normalized form, if an `@` is present.
    fn normalized_parts(&self) -> Option<(String, String)> {
        let normalized = self.normalized();
        normalized
            .split_once('@')
            .map(|(local, domain)| (local.to_string(), domain.to_string()))
    }
}

impl fmt::Display for ParticipantIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Matcher deciding whether two identity strings denote the same person.
#[derive(Debug, Clone)]
pub struct IdentityMatcher {
    similarity_threshold: f64,
}

impl IdentityMatcher {
    /// Creates a matcher with the given similarity threshold.
    pub fn new(similarity_threshold: f64) -> Self {
        Self { similarity_threshold }
    }

    /// Decides whether `a` and `b` refer to the same invitee.
    ///
    /// Checks, in order:
    /// 1. Exact equality after normalization.
    /// 2. Equal local parts plus equal domains after dot-stripping the
    ///    domain and applying the typo correction table.
    /// 3. Normalized edit-distance similarity above the threshold.
    pub fn matches(&self, a: &ParticipantIdentity, b: &ParticipantIdentity) -> bool {
        let norm_a = a.normalized();
        let norm_b = b.normalized();
        if norm_a == norm_b {
            return true;
        }

        if let (Some((local_a, domain_a)), Some((local_b, domain_b))) =
            (a.normalized_parts(), b.normalized_parts())
        {
            if local_a == local_b && domain_key(&domain_a) == domain_key(&domain_b) {
                return true;
            }
        }

        similarity(&norm_a, &norm_b) > self.similarity_threshold
    }
}

impl Default for IdentityMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}

/// Convenience wrapper over [`IdentityMatcher`] with default settings.
pub fn matches(a: &ParticipantIdentity, b: &ParticipantIdentity) -> bool {
    IdentityMatcher::default().matches(a, b)
}

/// Canonical comparison key for an email domain: dots stripped, then
/// looked up in the typo correction table.
fn domain_key(domain: &str) -> String {
    let stripped: String = domain.chars().filter(|c| *c != '.').collect();
    for (typo, canonical) in DOMAIN_CORRECTIONS {
        if stripped == *typo {
            return (*canonical).to_string();
        }
    }
    stripped
}

/// Normalized similarity ratio: `1 - levenshtein(a, b) / max(len)`.
///
/// Operates on chars, not bytes, so multi-byte input cannot skew the
/// ratio. Returns 1.0 for two empty strings.
fn similarity(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let max_len = len_a.max(len_b);
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

/// Classic two-row Levenshtein edit distance over chars.
fn levenshtein(a: &str, b: &str) -> usize {
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
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(raw: &str) -> ParticipantIdentity {
        ParticipantIdentity::new(raw).unwrap()
    }

    #[test]
    fn rejects_empty_identity() {
        assert!(ParticipantIdentity::new("").is_err());
        assert!(ParticipantIdentity::new("   ").is_err());
    }

    #[test]
    fn normalized_lowercases_and_trims() {
        assert_eq!(identity("  Jane@X.COM ").normalized(), "jane@x.com");
    }

    #[test]
    fn normalized_strips_dots_from_local_part_only() {
        assert_eq!(identity("j.doe@x.com").normalized(), "jdoe@x.com");
        // Domain dots survive normalization
        assert_eq!(identity("jdoe@mail.x.com").normalized(), "jdoe@mail.x.com");
    }

    #[test]
    fn matches_is_reflexive() {
        let id = identity("someone@example.com");
        assert!(matches(&id, &id));
    }

    #[test]
    fn matches_is_symmetric() {
        let a = identity("J.Doe@Gmail.com");
        let b = identity("jdoe@gmailcom");
        assert_eq!(matches(&a, &b), matches(&b, &a));
        assert!(matches(&a, &b));
    }

    #[test]
    fn matches_case_and_whitespace_variants() {
        assert!(matches(&identity("Jane@X.com"), &identity(" jane@x.com")));
    }

    #[test]
    fn matches_dot_variant_in_local_part() {
        assert!(matches(&identity("j.doe@x.com"), &identity("jdoe@x.com")));
    }

    #[test]
    fn matches_missing_dot_in_domain() {
        assert!(matches(&identity("jdoe@gmail.com"), &identity("jdoe@gmailcom")));
    }

    #[test]
    fn matches_known_domain_typo() {
        assert!(matches(&identity("jdoe@gamil.com"), &identity("jdoe@gmail.com")));
        assert!(matches(&identity("amy@hotmial.com"), &identity("amy@hotmail.com")));
    }

    #[test]
    fn matches_near_identical_by_similarity() {
        // One transposition in a long address: ratio well above 0.9
        assert!(matches(
            &identity("alexandra.johnson@example.com"),
            &identity("alexandra.johnsno@example.com")
        ));
    }

    #[test]
    fn rejects_distinct_people() {
        assert!(!matches(&identity("jane@x.com"), &identity("john@x.com")));
        assert!(!matches(&identity("a@x.com"), &identity("b@y.org")));
    }

    #[test]
    fn ambiguous_band_resolves_to_no_match() {
        // Similar but below the 0.9 bar: must NOT merge
        assert!(!matches(&identity("jdoe@x.com"), &identity("jdot@y.com")));
    }

    #[test]
    fn threshold_is_configurable() {
        let strict = IdentityMatcher::new(0.99);
        let a = identity("alexandra.johnson@example.com");
        let b = identity("alexandra.johnsno@example.com");
        assert!(!strict.matches(&a, &b));
    }

    #[test]
    fn levenshtein_computes_known_distances() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", "abc"), 0);
    }

    #[test]
    fn similarity_of_empty_strings_is_one() {
        assert_eq!(similarity("", ""), 1.0);
    }
}
