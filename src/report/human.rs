use crate::types::needs::UserNeeds;
use crate::types::result::{FitResult, Score, Summary};

/// Renders the human-readable console report.
///
/// The caller prints the returned string with a trailing newline, so the
/// report itself ends without one.
pub fn to_text(needs: &UserNeeds, results: &[FitResult], summary: &Summary) -> String {
    let mut out = String::new();

    out.push_str("\u{1f9ed} archnav\n\n");

    out.push_str("Input profile:\n");
    out.push_str(&format!(
        "  {:<24}: {} / 10\n",
        "Need privacy", needs.need_privacy
    ));
    out.push_str(&format!(
        "  {:<24}: {} / 10\n",
        "Need formal verification", needs.need_formal
    ));
    out.push_str(&format!(
        "  {:<24}: {} / 10\n",
        "Need throughput", needs.need_throughput
    ));
    out.push_str(&format!(
        "  {:<24}: {} / 10\n",
        "Latency tolerance", needs.latency_tolerance
    ));
    out.push_str(&format!(
        "  {:<24}: {} / 10\n",
        "Team crypto experience", needs.crypto_experience
    ));
    out.push('\n');

    out.push_str("Fit scores by architecture:\n");
    for entry in &summary.ranking {
        out.push_str(&format!(
            "- {} ({}): {:.3} ({}) {}\n",
            entry.name,
            entry.profile,
            entry.fit_score,
            entry.fit_label,
            bar(entry.fit_score)
        ));
    }
    out.push('\n');

    out.push_str("Recommended direction:\n");
    out.push_str(&format!(
        "  \u{2192} {} ({})\n\n",
        summary.best_name, summary.best_profile
    ));

    if let Some(best) = results.iter().find(|r| r.profile == summary.best_profile) {
        out.push_str("Why this might fit:\n");
        out.push_str(&format!("  {}\n\n", best.tagline));
        out.push_str("Short description:\n");
        out.push_str(&format!("  {}", best.description));
    }

    out
}

/// One filled block per 0.05 of score, truncated.
fn bar(score: Score) -> String {
    "\u{2588}".repeat((score * 20.0) as usize)
}
