//! "Did you mean" suggestions for names that were not found.
//!
//! Lookups in the directory are always exact; this module only ranks the
//! existing names so a failed lookup can point at likely typos.

/// A candidate name with its similarity score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The existing contact name
    pub name: String,

    /// Confidence score (0-95, where 95 is a case-insensitive exact match)
    pub confidence: u8,
}

/// Ranks contact names by similarity to a query.
pub struct NameMatcher;

impl NameMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Return up to `max_results` names scoring at least `min_confidence`.
    ///
    /// Results are sorted by confidence (highest first), then by name.
    pub fn suggest<'a>(
        &self,
        query: &str,
        names: impl IntoIterator<Item = &'a str>,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<Suggestion> {
        let query = Self::normalize_name(query);

        let mut results: Vec<Suggestion> = names
            .into_iter()
            .filter_map(|name| {
                let confidence = Self::calculate_fuzzy_score(&query, &Self::normalize_name(name));
                (confidence > 0 && confidence >= min_confidence).then(|| Suggestion {
                    name: name.to_string(),
                    confidence,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.name.cmp(&b.name))
        });
        results.truncate(max_results);
        results
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95.
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        let query_len = query.chars().count();
        let target_len = target.chars().count();

        if target.contains(query) {
            let ratio = query_len as f64 / target_len as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            let ratio = target_len as f64 / query_len as f64;
            return (85.0 * ratio) as u8;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query_len.max(target_len);

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row instead of the full matrix.
        let mut prev: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut curr = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            curr[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        prev[s2_chars.len()]
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new()
    }
}
