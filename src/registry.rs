use crate::types::profile::ArchProfile;

/// The fixed set of architecture directions this tool scores. Order here is
/// presentation order: JSON `results` are emitted exactly as listed.
pub const PROFILES: [ArchProfile; 3] = [
    ArchProfile {
        key: "aztec",
        name: "Aztec-style zk Rollup",
        tagline: "Encrypted state + zk circuits on Ethereum.",
        description: "Privacy-first rollup that uses zero-knowledge proofs for \
                      encrypted balances and private smart contracts. Most suitable \
                      when you need on-chain privacy and Ethereum composability.",
        privacy_focus: 0.95,
        soundness_focus: 0.82,
        performance_focus: 0.60,
        complexity: 0.78,
    },
    ArchProfile {
        key: "zama",
        name: "Zama-style FHE Compute Stack",
        tagline: "Fully homomorphic encrypted compute around Web3 data.",
        description: "FHE-heavy design where application logic and analytics operate \
                      on encrypted data. Useful when you need strong privacy across \
                      off-chain or hybrid compute pipelines.",
        privacy_focus: 0.90,
        soundness_focus: 0.86,
        performance_focus: 0.40,
        complexity: 0.88,
    },
    ArchProfile {
        key: "soundness",
        name: "Soundness-first Protocol Lab",
        tagline: "Formally specified and verified Web3 protocols.",
        description: "Design discipline centered on specifications, proofs, and \
                      verified implementations. Best suited when correctness and \
                      long-term maintainability are the primary constraints.",
        privacy_focus: 0.55,
        soundness_focus: 0.98,
        performance_focus: 0.72,
        complexity: 0.65,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_three_profiles_in_presentation_order() {
        let keys: Vec<&str> = PROFILES.iter().map(|profile| profile.key).collect();
        assert_eq!(keys, vec!["aztec", "zama", "soundness"]);
    }

    #[test]
    fn authored_attributes_stay_inside_unit_interval() {
        for profile in &PROFILES {
            for value in [
                profile.privacy_focus,
                profile.soundness_focus,
                profile.performance_focus,
                profile.complexity,
            ] {
                assert!(
                    (0.0..=1.0).contains(&value),
                    "{} carries attribute {} outside [0, 1]",
                    profile.key,
                    value
                );
            }
        }
    }

    #[test]
    fn display_strings_are_present() {
        for profile in &PROFILES {
            assert!(!profile.name.is_empty());
            assert!(!profile.tagline.is_empty());
            assert!(!profile.description.is_empty());
        }
    }
}
