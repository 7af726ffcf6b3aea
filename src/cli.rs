use clap::Parser;

use crate::types::config::NeedDefaults;
use crate::types::needs::UserNeeds;

#[derive(Parser)]
#[command(
    name = "archnav",
    version,
    about = "Scores Web3 architecture directions against your privacy, soundness, and performance constraints"
)]
pub struct Cli {
    /// How strong is your need for privacy? 0-10 (default: 8)
    #[arg(long, value_name = "0-10", allow_negative_numbers = true)]
    pub need_privacy: Option<i64>,

    /// How strong is your need for formal verification / proofs? 0-10 (default: 7)
    #[arg(long, value_name = "0-10", allow_negative_numbers = true)]
    pub need_formal: Option<i64>,

    /// How strong is your need for high throughput? 0-10 (default: 6)
    #[arg(long, value_name = "0-10", allow_negative_numbers = true)]
    pub need_throughput: Option<i64>,

    /// Tolerance for higher latency / proving time. 0-10 (default: 5)
    #[arg(long, value_name = "0-10", allow_negative_numbers = true)]
    pub latency_tolerance: Option<i64>,

    /// Average team cryptography experience. 0-10 (default: 6)
    #[arg(long, value_name = "0-10", allow_negative_numbers = true)]
    pub crypto_experience: Option<i64>,

    /// Output JSON instead of the human-readable summary
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolves the five need values: flag first, configured default second,
    /// built-in default last. The result is clamped to the 0-10 scale.
    pub fn needs(&self, defaults: &NeedDefaults) -> UserNeeds {
        UserNeeds::clamped(
            self.need_privacy.unwrap_or(defaults.need_privacy),
            self.need_formal.unwrap_or(defaults.need_formal),
            self.need_throughput.unwrap_or(defaults.need_throughput),
            self.latency_tolerance.unwrap_or(defaults.latency_tolerance),
            self.crypto_experience.unwrap_or(defaults.crypto_experience),
        )
    }
}
