//! Reconciled per-day outcomes and the monthly productivity report.
//!
//! Attendance data is sparse on input and dense on output: a report always
//! carries exactly one [`DailyOutcome`] per calendar day of its month, gaps
//! filled in as inferred absences.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::attendance::AttendanceEntry;
use crate::calendar::DayCategory;
use crate::ServiceError;

#[derive(Clone, Debug, PartialEq)]
pub struct DailyOutcome {
    pub date: time::Date,
    pub category: DayCategory,
    pub expected_hours: f32,
    pub actual_hours: f32,
    pub in_time: Option<Arc<str>>,
    pub out_time: Option<Arc<str>>,
    /// True only for ordinary/reduced days without usable attendance.
    /// Zero-category days never count as absences.
    pub is_absent: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyReport {
    pub person: Arc<str>,
    pub month: u8,
    pub year: i32,
    pub total_expected_hours: f32,
    pub total_actual_hours: f32,
    pub absence_count: u32,
    /// `100 * actual / expected`, rounded to two decimal places; 0.0 when
    /// no hours were expected at all.
    pub productivity_percent: f32,
    /// Dense, ascending by date, exactly days-in-month long.
    pub days: Arc<[DailyOutcome]>,
}

/// Result of a report query.  No data for the requested person yields an
/// explicit signal instead of a fabricated zero-valued report.
#[derive(Clone, Debug, PartialEq)]
pub enum ReportOutcome {
    Report(MonthlyReport),
    NoData,
}

#[automock]
#[async_trait]
pub trait ReportingService {
    /// Reconcile one person's entries against the calendar of
    /// (month, year) and aggregate them into a monthly report.
    ///
    /// Returns [`ReportOutcome::NoData`] when `entries` is empty.  Errors
    /// only on impossible calendar coordinates such as month 13.
    async fn build_monthly_report(
        &self,
        entries: &[AttendanceEntry],
        month: u8,
        year: i32,
    ) -> Result<ReportOutcome, ServiceError>;
}
