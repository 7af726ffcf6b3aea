pub mod fit;
pub mod summary;

use crate::types::needs::UserNeeds;
use crate::types::profile::ArchProfile;
use crate::types::result::FitResult;

/// Scores every profile in input order.
pub fn score_all(profiles: &[ArchProfile], needs: &UserNeeds) -> Vec<FitResult> {
    profiles
        .iter()
        .map(|profile| {
            let result = fit::score_fit(profile, needs);
            tracing::debug!(
                profile = result.profile.as_str(),
                fit_score = result.fit_score,
                label = %result.fit_label,
                "scored profile"
            );
            result
        })
        .collect()
}
