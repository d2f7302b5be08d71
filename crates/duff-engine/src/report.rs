//! Zone-level routing report.

use duff_routing::FamilyReport;

/// Outcome of routing every family in a zone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZoneReport {
    /// Per-family reports, in zone registration order.
    pub families: Vec<FamilyReport>,
    /// Families actually routed (≥2 patches).
    pub routed: usize,
    /// Inert families skipped untouched.
    pub skipped: usize,
    /// Conservation warnings across all families and pools.
    pub warnings: usize,
    /// Wall-clock time for the whole zone pass, in microseconds.
    pub elapsed_us: u64,
}

impl ZoneReport {
    /// Assemble a zone report from family reports and a timing.
    pub fn from_reports(families: Vec<FamilyReport>, elapsed_us: u64) -> Self {
        let routed = families.iter().filter(|r| !r.skipped).count();
        let skipped = families.len() - routed;
        let warnings = families.iter().map(|r| r.warnings().count()).sum();
        Self {
            families,
            routed,
            skipped,
            warnings,
            elapsed_us,
        }
    }
}
