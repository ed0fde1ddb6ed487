use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use service::attendance::AttendanceEntry;
use service::calendar::DayCategory;
use service::reporting::{DailyOutcome, MonthlyReport, ReportOutcome, ReportingService};
use service::ServiceError;
use tally_utils::{month_dates, worked_hours};
use time::Date;
use tracing::info;

pub struct ReportingServiceImpl;

#[async_trait]
impl ReportingService for ReportingServiceImpl {
    async fn build_monthly_report(
        &self,
        entries: &[AttendanceEntry],
        month: u8,
        year: i32,
    ) -> Result<ReportOutcome, ServiceError> {
        let Some(first) = entries.first() else {
            return Ok(ReportOutcome::NoData);
        };
        let person = first.person.clone();
        let days = reconcile_month(entries, month, year)?;
        let report = aggregate_report(person, month, year, days);
        info!(
            "Built monthly report for {} {}-{:02}: productivity {}%",
            report.person, report.year, report.month, report.productivity_percent
        );
        Ok(ReportOutcome::Report(report))
    }
}

/// Walk every calendar day of (month, year) and synthesize one outcome per
/// day, whether or not raw data exists for it.
///
/// Zero-category days always come out with zero expected and actual hours
/// and are never absences; an entry recorded on such a day is ignored.  On
/// the remaining days a missing or absent-marked entry becomes an inferred
/// absence with zero actual hours.
pub fn reconcile_month(
    entries: &[AttendanceEntry],
    month: u8,
    year: i32,
) -> Result<Arc<[DailyOutcome]>, ServiceError> {
    // Insertion order means a duplicate date from the caller resolves
    // last-wins, matching the normalizer's policy.
    let mut by_date: HashMap<Date, &AttendanceEntry> = HashMap::with_capacity(entries.len());
    for entry in entries {
        by_date.insert(entry.date, entry);
    }

    let mut outcomes = Vec::new();
    for date in month_dates(year, month)? {
        let category = DayCategory::from_date(date);
        if category == DayCategory::Zero {
            outcomes.push(DailyOutcome {
                date,
                category,
                expected_hours: 0.0,
                actual_hours: 0.0,
                in_time: None,
                out_time: None,
                is_absent: false,
            });
            continue;
        }

        let expected_hours = category.expected_hours();
        match by_date.get(&date) {
            Some(entry) if !entry.is_absent => outcomes.push(DailyOutcome {
                date,
                category,
                expected_hours,
                actual_hours: worked_hours(entry.in_time.as_deref(), entry.out_time.as_deref()),
                in_time: entry.in_time.clone(),
                out_time: entry.out_time.clone(),
                is_absent: false,
            }),
            _ => outcomes.push(DailyOutcome {
                date,
                category,
                expected_hours,
                actual_hours: 0.0,
                in_time: None,
                out_time: None,
                is_absent: true,
            }),
        }
    }
    Ok(outcomes.into())
}

/// Sum a reconciled month into its report.
///
/// The productivity ratio is undefined-safe: a month with no expected
/// hours reports 0 instead of dividing by zero.  Rounding to two decimal
/// places happens once, here at the end.
pub fn aggregate_report(
    person: Arc<str>,
    month: u8,
    year: i32,
    days: Arc<[DailyOutcome]>,
) -> MonthlyReport {
    let total_expected_hours: f32 = days.iter().map(|day| day.expected_hours).sum();
    let total_actual_hours: f32 = days.iter().map(|day| day.actual_hours).sum();
    let absence_count = days.iter().filter(|day| day.is_absent).count() as u32;
    let productivity_percent = if total_expected_hours > 0.0 {
        (100.0 * total_actual_hours / total_expected_hours * 100.0).round() / 100.0
    } else {
        0.0
    };

    MonthlyReport {
        person,
        month,
        year,
        total_expected_hours,
        total_actual_hours,
        absence_count,
        productivity_percent,
        days,
    }
}
