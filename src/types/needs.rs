use serde::{Deserialize, Serialize};

/// The user's stated requirements, one integer per dimension on a 0-10 scale.
/// Serializes with the camelCase keys the JSON `inputs` block expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNeeds {
    pub need_privacy: i64,
    pub need_formal: i64,
    pub need_throughput: i64,
    pub latency_tolerance: i64,
    pub crypto_experience: i64,
}

impl UserNeeds {
    /// Builds a need set with every value clamped to the 0-10 scale.
    /// Out-of-range input is folded back silently, never rejected.
    pub fn clamped(
        need_privacy: i64,
        need_formal: i64,
        need_throughput: i64,
        latency_tolerance: i64,
        crypto_experience: i64,
    ) -> Self {
        Self {
            need_privacy: need_privacy.clamp(0, 10),
            need_formal: need_formal.clamp(0, 10),
            need_throughput: need_throughput.clamp(0, 10),
            latency_tolerance: latency_tolerance.clamp(0, 10),
            crypto_experience: crypto_experience.clamp(0, 10),
        }
    }
}
