pub mod oracle;

use tracing::debug;

use crate::books::query::SearchQuery;
use crate::books::types::{Volume, VolumeInfo};
use oracle::MatchOracle;

/// Display-side result toggles. Both default to off: English-only,
/// 1970-and-newer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub include_non_english: bool,
    pub include_old_books: bool,
}

const ENGLISH_TAG: &str = "en";
const MODERN_FLOOR: i32 = 1970;

/// Field weights for the fuzzy rerank: the title dominates, the subtitle
/// counts for something, authors barely tip the scale.
const WEIGHT_TITLE: u32 = 4;
const WEIGHT_SUBTITLE: u32 = 2;
const WEIGHT_AUTHORS: u32 = 1;

/// Narrow and reorder a fetched result set: language filter, fuzzy rerank
/// (only when a title term was supplied), publication-year filter, in that
/// order. Records are never mutated, and a predicate that cannot evaluate
/// its condition keeps the record.
pub fn refine(
    volumes: Vec<Volume>,
    query: &SearchQuery,
    options: &FilterOptions,
    oracle: &mut impl MatchOracle,
) -> Vec<Volume> {
    let admissible: Vec<Volume> = volumes
        .into_iter()
        .filter(|v| keep_language(v, options))
        .collect();

    let ranked = match query.rank_terms() {
        Some(terms) => rerank(admissible, &terms, oracle),
        None => admissible,
    };

    ranked
        .into_iter()
        .filter(|v| keep_year(v, options))
        .collect()
}

fn keep_language(volume: &Volume, options: &FilterOptions) -> bool {
    options.include_non_english
        || match volume.volume_info.language.as_deref() {
            Some(tag) => tag == ENGLISH_TAG,
            None => true,
        }
}

fn keep_year(volume: &Volume, options: &FilterOptions) -> bool {
    if options.include_old_books {
        return true;
    }
    let Some(date) = volume.volume_info.published_date.as_deref() else {
        return true;
    };
    // Year = leading 4 characters of a free-text date. Anything that does
    // not slice or parse cleanly keeps the record.
    match date.get(..4).and_then(|y| y.parse::<i32>().ok()) {
        Some(year) => year >= MODERN_FLOOR,
        None => true,
    }
}

/// Replace the set with oracle-matched records in descending relevance.
/// When nothing clears the threshold the input comes back untouched.
fn rerank(volumes: Vec<Volume>, terms: &str, oracle: &mut impl MatchOracle) -> Vec<Volume> {
    let scores: Vec<Option<u32>> = volumes
        .iter()
        .map(|v| rank_score(oracle, terms, &v.volume_info))
        .collect();

    if scores.iter().all(Option::is_none) {
        debug!(terms, "no records within match threshold, keeping original order");
        return volumes;
    }

    let mut matched: Vec<(u32, Volume)> = volumes
        .into_iter()
        .zip(scores)
        .filter_map(|(volume, score)| score.map(|s| (s, volume)))
        .collect();
    // Stable sort: equal ranks keep the pre-rank order.
    matched.sort_by(|a, b| b.0.cmp(&a.0));
    matched.into_iter().map(|(_, volume)| volume).collect()
}

fn rank_score(oracle: &mut impl MatchOracle, terms: &str, info: &VolumeInfo) -> Option<u32> {
    let title = info.title.as_deref().unwrap_or_default();
    let subtitle = info.subtitle.as_deref().unwrap_or_default();
    let authors = info.authors.as_deref().unwrap_or_default().join(" ");

    // The oracle wants every query atom to land somewhere, so the match
    // gate runs against all searchable text at once; the per-field passes
    // below only weight the rank.
    let haystack = format!("{title} {subtitle} {authors}");
    let base = oracle.score(terms, haystack.trim())?;

    let mut rank = base;
    for (field, weight) in [
        (title, WEIGHT_TITLE),
        (subtitle, WEIGHT_SUBTITLE),
        (authors.as_str(), WEIGHT_AUTHORS),
    ] {
        if field.is_empty() {
            continue;
        }
        if let Some(score) = oracle.score(terms, field) {
            rank = rank.saturating_add(weight.saturating_mul(score));
        }
    }
    Some(rank)
}
