use crate::types::needs::UserNeeds;
use crate::types::profile::ArchProfile;
use crate::types::result::{FitLabel, FitResult, Score};

/// Scores one profile against the user's needs.
///
/// Need values are echoed exactly as given; the CLI clamps them to 0-10
/// before calling. Only the final score is clamped here, so echoed needs can
/// legally sit outside the scale while the score stays in [0, 1].
pub fn score_fit(profile: &ArchProfile, needs: &UserNeeds) -> FitResult {
    let privacy_need = needs.need_privacy as f64 / 10.0;
    let formal_need = needs.need_formal as f64 / 10.0;
    let throughput_need = needs.need_throughput as f64 / 10.0;
    let latency_tolerance = needs.latency_tolerance as f64 / 10.0;
    let crypto_skill = needs.crypto_experience as f64 / 10.0;

    let privacy_match = 1.0 - (privacy_need - profile.privacy_focus).abs();
    let soundness_match = 1.0 - (formal_need - profile.soundness_focus).abs();
    let perf_match = 1.0 - (throughput_need - profile.performance_focus).abs();

    let latency_penalty = (1.0 - latency_tolerance) * (profile.complexity * 0.5);
    let complexity_penalty = (profile.complexity - crypto_skill).max(0.0);

    let raw_score = privacy_match * 0.40
        + soundness_match * 0.30
        + perf_match * 0.30
        - latency_penalty * 0.30
        - complexity_penalty * 0.40;

    let final_score = raw_score.clamp(0.0, 1.0);

    FitResult {
        profile: profile.key.to_string(),
        name: profile.name.to_string(),
        tagline: profile.tagline.to_string(),
        description: profile.description.to_string(),
        privacy_focus: round3(profile.privacy_focus),
        soundness_focus: round3(profile.soundness_focus),
        performance_focus: round3(profile.performance_focus),
        complexity: round3(profile.complexity),
        privacy_need: needs.need_privacy,
        formal_need: needs.need_formal,
        throughput_need: needs.need_throughput,
        latency_tolerance: needs.latency_tolerance,
        crypto_experience: needs.crypto_experience,
        fit_score: round3(final_score),
        // label reads the unrounded score; rounding is presentation only
        fit_label: FitLabel::from_score(final_score),
    }
}

fn round3(value: Score) -> Score {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PROFILES;

    fn default_needs() -> UserNeeds {
        UserNeeds::clamped(8, 7, 6, 5, 6)
    }

    #[test]
    fn default_scenario_reproduces_reference_scores() {
        let needs = default_needs();
        let scores: Vec<(&str, Score)> = PROFILES
            .iter()
            .map(|profile| (profile.key, score_fit(profile, &needs).fit_score))
            .collect();
        assert_eq!(
            scores,
            vec![("aztec", 0.774), ("zama", 0.674), ("soundness", 0.711)]
        );
    }

    #[test]
    fn default_scenario_labels_every_profile_good() {
        let needs = default_needs();
        for profile in &PROFILES {
            assert_eq!(score_fit(profile, &needs).fit_label, FitLabel::Good);
        }
    }

    #[test]
    fn aligned_needs_score_excellent_for_every_profile() {
        // each tuple is the profile's own focus values on the 0-10 scale,
        // full latency tolerance, and enough experience to absorb complexity
        let aligned = [
            ("aztec", UserNeeds::clamped(10, 8, 6, 10, 8)),
            ("zama", UserNeeds::clamped(9, 9, 4, 10, 9)),
            ("soundness", UserNeeds::clamped(6, 10, 7, 10, 7)),
        ];
        for (key, needs) in aligned {
            let profile = PROFILES
                .iter()
                .find(|profile| profile.key == key)
                .expect("aligned profile should exist");
            let result = score_fit(profile, &needs);
            assert!(
                result.fit_score >= 0.8,
                "{} aligned score {} fell below the excellent band",
                key,
                result.fit_score
            );
            assert_eq!(result.fit_label, FitLabel::Excellent);
        }
    }

    #[test]
    fn extreme_inputs_keep_score_inside_unit_interval() {
        let extremes = [
            UserNeeds::clamped(0, 0, 0, 0, 0),
            UserNeeds::clamped(10, 10, 10, 10, 10),
            UserNeeds::clamped(10, 10, 10, 10, 0),
            UserNeeds::clamped(0, 0, 0, 0, 10),
            UserNeeds::clamped(0, 10, 0, 10, 0),
        ];
        for needs in &extremes {
            for profile in &PROFILES {
                let result = score_fit(profile, needs);
                assert!(
                    (0.0..=1.0).contains(&result.fit_score),
                    "{} scored {} outside [0, 1] for {:?}",
                    profile.key,
                    result.fit_score,
                    needs
                );
            }
        }
    }

    #[test]
    fn negative_raw_score_clamps_to_zero() {
        // all-zero needs push every profile's raw score below zero
        let needs = UserNeeds::clamped(0, 0, 0, 0, 0);
        for profile in &PROFILES {
            let result = score_fit(profile, &needs);
            assert_eq!(result.fit_score, 0.0);
            assert_eq!(result.fit_label, FitLabel::Weak);
        }
    }

    #[test]
    fn out_of_range_needs_are_echoed_unchanged() {
        let unclamped = UserNeeds {
            need_privacy: 15,
            need_formal: -3,
            need_throughput: 6,
            latency_tolerance: 5,
            crypto_experience: 6,
        };
        let result = score_fit(&PROFILES[0], &unclamped);
        assert_eq!(result.privacy_need, 15);
        assert_eq!(result.formal_need, -3);
        assert!((0.0..=1.0).contains(&result.fit_score));
    }

    #[test]
    fn result_echoes_profile_attributes_rounded() {
        let result = score_fit(&PROFILES[0], &default_needs());
        assert_eq!(result.profile, "aztec");
        assert_eq!(result.name, "Aztec-style zk Rollup");
        assert_eq!(result.privacy_focus, 0.95);
        assert_eq!(result.soundness_focus, 0.82);
        assert_eq!(result.performance_focus, 0.6);
        assert_eq!(result.complexity, 0.78);
    }

    #[test]
    fn round3_rounds_half_away_from_zero() {
        assert_eq!(round3(0.7735000000000001), 0.774);
        assert_eq!(round3(0.71125), 0.711);
        assert_eq!(round3(0.0), 0.0);
        assert_eq!(round3(1.0), 1.0);
    }
}
