use crate::types::result::Score;

/// A fixed architecture archetype. The four affinity values are authored in
/// [0, 1]; nothing re-validates them at runtime, so the registry test pins
/// that invariant down.
#[derive(Debug, Clone, Copy)]
pub struct ArchProfile {
    pub key: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub privacy_focus: Score,
    pub soundness_focus: Score,
    pub performance_focus: Score,
    pub complexity: Score,
}
