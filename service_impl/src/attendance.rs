use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use service::attendance::{
    AttendanceEntry, AttendanceService, PersonKey, RawAttendanceRow, RawDateToken,
};
use service::ServiceError;
use tally_utils::{decode_serial_date, parse_iso_date};
use tracing::debug;

pub struct AttendanceServiceImpl;

#[async_trait]
impl AttendanceService for AttendanceServiceImpl {
    async fn normalize(
        &self,
        rows: &[RawAttendanceRow],
    ) -> Result<BTreeMap<PersonKey, Arc<[AttendanceEntry]>>, ServiceError> {
        Ok(normalize_rows(rows))
    }
}

/// Canonical matching key: interior whitespace collapsed, lowercased.
pub fn canonical_person_key(identity: &str) -> PersonKey {
    identity
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .into()
}

fn trimmed_token(token: Option<&str>) -> Option<Arc<str>> {
    token
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(Arc::from)
}

fn decode_date_token(token: &RawDateToken) -> Option<time::Date> {
    match token {
        RawDateToken::Text(text) => parse_iso_date(text),
        RawDateToken::Serial(serial) => decode_serial_date(*serial),
    }
}

/// Condense raw rows into canonical entries, grouped by person key.
///
/// Best-effort: rows without an identity or a decodable date are dropped
/// silently.  A later row for the same (person, date) replaces the earlier
/// one in place, so per-person collections keep first-seen order.
pub fn normalize_rows(
    rows: &[RawAttendanceRow],
) -> BTreeMap<PersonKey, Arc<[AttendanceEntry]>> {
    let mut groups: BTreeMap<PersonKey, Vec<AttendanceEntry>> = BTreeMap::new();
    let mut dropped = 0usize;

    for row in rows {
        let Some(display_name) = row
            .identity
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
        else {
            dropped += 1;
            continue;
        };
        let Some(date) = row.date.as_ref().and_then(decode_date_token) else {
            dropped += 1;
            continue;
        };

        let in_time = trimmed_token(row.in_time.as_deref());
        let out_time = trimmed_token(row.out_time.as_deref());
        let entry = AttendanceEntry {
            person: display_name.into(),
            date,
            is_absent: in_time.is_none() || out_time.is_none(),
            in_time,
            out_time,
        };

        let entries = groups.entry(canonical_person_key(display_name)).or_default();
        match entries.iter_mut().find(|existing| existing.date == date) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }
    }

    if dropped > 0 {
        debug!("Dropped {} rows without identity or a usable date", dropped);
    }
    groups
        .into_iter()
        .map(|(key, entries)| (key, entries.into()))
        .collect()
}
