//! Raw spreadsheet rows and the canonical attendance entries the normalizer
//! condenses them into.
//!
//! Raw rows are untrusted external input with no invariants: identity and
//! date may be missing, time tokens may be blank or malformed.  Canonical
//! entries are immutable facts, exactly one per (person, date) after
//! normalization.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::ServiceError;

/// Canonical matching key for one person: whitespace-collapsed, lowercased.
pub type PersonKey = Arc<str>;

/// A date cell as extracted from a spreadsheet: either a textual date or a
/// day-count serial in the 1900 system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RawDateToken {
    Text(String),
    Serial(f64),
}

/// One row as handed over by the ingestion collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct RawAttendanceRow {
    pub identity: Option<String>,
    pub date: Option<RawDateToken>,
    pub in_time: Option<String>,
    pub out_time: Option<String>,
}

/// One person's attendance fact for exactly one calendar date.
#[derive(Clone, Debug, PartialEq)]
pub struct AttendanceEntry {
    /// Display name as written in the source, trimmed.
    pub person: Arc<str>,
    pub date: time::Date,
    pub in_time: Option<Arc<str>>,
    pub out_time: Option<Arc<str>>,
    /// True whenever either time token is absent.
    pub is_absent: bool,
}

#[automock]
#[async_trait]
pub trait AttendanceService {
    /// Best-effort extraction of canonical entries, grouped by person key.
    ///
    /// Rows without an identity or without a decodable date are dropped
    /// silently; a later row for the same (person, date) replaces the
    /// earlier one.  An empty map is the caller's signal that nothing
    /// usable was found — it is not an error.
    async fn normalize(
        &self,
        rows: &[RawAttendanceRow],
    ) -> Result<BTreeMap<PersonKey, Arc<[AttendanceEntry]>>, ServiceError>;
}
