use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NavigatorConfig {
    pub defaults: Option<DefaultsConfig>,
}

/// Optional `[defaults]` table: per-need starting values used when the
/// matching CLI flag is absent. Values are clamped downstream exactly like
/// CLI input.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    pub need_privacy: Option<i64>,
    pub need_formal: Option<i64>,
    pub need_throughput: Option<i64>,
    pub latency_tolerance: Option<i64>,
    pub crypto_experience: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeedDefaults {
    pub need_privacy: i64,
    pub need_formal: i64,
    pub need_throughput: i64,
    pub latency_tolerance: i64,
    pub crypto_experience: i64,
}

impl Default for NeedDefaults {
    fn default() -> Self {
        Self {
            need_privacy: 8,
            need_formal: 7,
            need_throughput: 6,
            latency_tolerance: 5,
            crypto_experience: 6,
        }
    }
}

impl NavigatorConfig {
    pub fn need_defaults(&self) -> NeedDefaults {
        let defaults = NeedDefaults::default();
        match &self.defaults {
            Some(overrides) => NeedDefaults {
                need_privacy: overrides.need_privacy.unwrap_or(defaults.need_privacy),
                need_formal: overrides.need_formal.unwrap_or(defaults.need_formal),
                need_throughput: overrides
                    .need_throughput
                    .unwrap_or(defaults.need_throughput),
                latency_tolerance: overrides
                    .latency_tolerance
                    .unwrap_or(defaults.latency_tolerance),
                crypto_experience: overrides
                    .crypto_experience
                    .unwrap_or(defaults.crypto_experience),
            },
            None => defaults,
        }
    }
}
