use crate::types::result::{FitResult, RankingEntry, Summary};

/// Picks the recommended profile and builds the descending ranking.
///
/// The best profile is the first result holding the maximum score, so ties
/// resolve to registry order. The ranking is a projection of the same
/// results sorted by score; the sort is stable, so tied entries also keep
/// registry order.
///
/// # Panics
///
/// Panics if `results` is empty. The registry is a non-empty constant, so
/// every caller in this crate scores at least one profile.
pub fn summarize(results: &[FitResult]) -> Summary {
    assert!(
        !results.is_empty(),
        "summarize requires at least one scored profile"
    );

    let mut best = &results[0];
    for result in &results[1..] {
        if result.fit_score > best.fit_score {
            best = result;
        }
    }

    let mut ranking: Vec<RankingEntry> = results
        .iter()
        .map(|result| RankingEntry {
            profile: result.profile.clone(),
            name: result.name.clone(),
            fit_score: result.fit_score,
            fit_label: result.fit_label,
        })
        .collect();
    ranking.sort_by(|a, b| b.fit_score.total_cmp(&a.fit_score));

    Summary {
        best_profile: best.profile.clone(),
        best_name: best.name.clone(),
        best_fit_score: best.fit_score,
        best_fit_label: best.fit_label,
        ranking,
    }
}
