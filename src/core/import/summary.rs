//! Import summary and reporting
//!
//! The summary is the sole contract surface toward read-side consumers: the
//! four-tuple of inserted, updated, skipped, and elapsed duration, plus the
//! capped skip report.

use crate::core::reconcile::engine::ImportPlan;
use std::time::Duration;

/// Maximum number of skip entries carried in the report
///
/// Skips beyond the cap are still counted, never silently dropped.
pub const SKIP_REPORT_CAP: usize = 20;

/// Summary of an import operation
#[derive(Debug, Clone)]
pub struct ImportSummary {
    /// Number of records inserted
    pub inserted: usize,

    /// Number of records updated
    pub updated: usize,

    /// Number of candidates skipped
    pub skipped: usize,

    /// Wall-clock duration of the batch
    pub duration: Duration,

    /// Skip reasons, in document order, capped at [`SKIP_REPORT_CAP`]
    pub skip_report: Vec<String>,

    /// Number of skipped candidates beyond the report cap
    pub skips_beyond_report: usize,
}

impl ImportSummary {
    /// Builds the summary from a reconciled plan and the batch duration
    pub fn from_plan(plan: &ImportPlan, duration: Duration) -> Self {
        let skip_report: Vec<String> = plan
            .skipped
            .iter()
            .take(SKIP_REPORT_CAP)
            .map(ToString::to_string)
            .collect();

        Self {
            inserted: plan.inserted(),
            updated: plan.updated(),
            skipped: plan.skipped_count(),
            duration,
            skips_beyond_report: plan.skipped_count().saturating_sub(SKIP_REPORT_CAP),
            skip_report,
        }
    }

    /// True if no candidate was skipped
    pub fn is_clean(&self) -> bool {
        self.skipped == 0
    }

    /// Total number of staged mutations that were committed
    pub fn committed(&self) -> usize {
        self.inserted + self.updated
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            inserted = self.inserted,
            updated = self.updated,
            skipped = self.skipped,
            duration_ms = self.duration.as_millis() as u64,
            "Import completed"
        );

        if !self.skip_report.is_empty() {
            tracing::warn!(skipped = self.skipped, "Import completed with skips");
            for reason in &self.skip_report {
                tracing::warn!(reason = %reason, "Skipped candidate");
            }
            if self.skips_beyond_report > 0 {
                tracing::warn!(
                    remainder = self.skips_beyond_report,
                    "Further skips not listed"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reconcile::engine::SkipEntry;

    fn plan_with_skips(count: usize) -> ImportPlan {
        let mut plan = ImportPlan::default();
        for i in 0..count {
            plan.skipped.push(SkipEntry {
                label: format!("element #{}", i + 1),
                reason: "Score 150 is out of range [0, 100]".to_string(),
            });
        }
        plan
    }

    #[test]
    fn test_from_empty_plan() {
        let summary = ImportSummary::from_plan(&ImportPlan::default(), Duration::from_secs(0));

        assert_eq!(summary.inserted, 0);
        assert_eq!(summary.updated, 0);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.committed(), 0);
        assert!(summary.is_clean());
        assert!(summary.skip_report.is_empty());
    }

    #[test]
    fn test_skip_report_under_cap() {
        let summary = ImportSummary::from_plan(&plan_with_skips(3), Duration::from_millis(5));

        assert_eq!(summary.skipped, 3);
        assert_eq!(summary.skip_report.len(), 3);
        assert_eq!(summary.skips_beyond_report, 0);
        assert!(summary.skip_report[0].contains("element #1"));
        assert!(summary.skip_report[0].contains("out of range"));
    }

    #[test]
    fn test_skip_report_capped_with_remainder() {
        let summary = ImportSummary::from_plan(&plan_with_skips(25), Duration::from_millis(5));

        assert_eq!(summary.skipped, 25);
        assert_eq!(summary.skip_report.len(), SKIP_REPORT_CAP);
        assert_eq!(summary.skips_beyond_report, 5);
        // Document order preserved
        assert!(summary.skip_report[19].contains("element #20"));
    }

    #[test]
    fn test_skip_report_exactly_at_cap() {
        let summary = ImportSummary::from_plan(&plan_with_skips(20), Duration::from_millis(5));

        assert_eq!(summary.skip_report.len(), SKIP_REPORT_CAP);
        assert_eq!(summary.skips_beyond_report, 0);
    }

    #[test]
    fn test_duration_carried() {
        let summary =
            ImportSummary::from_plan(&ImportPlan::default(), Duration::from_millis(1234));
        assert_eq!(summary.duration, Duration::from_millis(1234));
    }
}
