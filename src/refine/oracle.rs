use nucleo::pattern::{CaseMatching, Normalization, Pattern};
use nucleo::{Config, Matcher, Utf32Str};

/// Approximate-match scoring seam between the refiner and whichever fuzzy
/// backend provides it. Implemented by `NucleoOracle` for production; mock
/// implementations used in tests.
///
/// `None` means the candidate is below the oracle's strictness threshold
/// and must be treated as no match; higher `Some` ranks are more relevant.
pub trait MatchOracle {
    fn score(&mut self, query: &str, candidate: &str) -> Option<u32>;
}

/// Oracle backed by nucleo's fuzzy matcher.
///
/// Matching is case-insensitive with unicode normalization. Every
/// whitespace-separated atom of the query has to land somewhere in the
/// candidate; that is the fixed strictness gate, so reordered or partial
/// words still rank while unrelated titles come back as `None`.
pub struct NucleoOracle {
    matcher: Matcher,
    buf: Vec<char>,
}

impl NucleoOracle {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            buf: Vec::new(),
        }
    }
}

impl Default for NucleoOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchOracle for NucleoOracle {
    fn score(&mut self, query: &str, candidate: &str) -> Option<u32> {
        let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
        pattern.score(Utf32Str::new(candidate, &mut self.buf), &mut self.matcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_title_matches() {
        let mut oracle = NucleoOracle::new();
        assert!(oracle.score("Dune", "Dune").is_some());
    }

    #[test]
    fn case_is_ignored() {
        let mut oracle = NucleoOracle::new();
        assert!(oracle.score("dune", "DUNE").is_some());
    }

    #[test]
    fn unrelated_candidate_is_no_match() {
        let mut oracle = NucleoOracle::new();
        assert_eq!(oracle.score("Dune", "Pride and Prejudice"), None);
    }

    #[test]
    fn closer_match_ranks_higher() {
        let mut oracle = NucleoOracle::new();
        let exact = oracle.score("Dune", "Dune").unwrap();
        let padded = oracle.score("Dune", "The Road to Dune").unwrap();
        assert!(exact > padded);
    }
}
