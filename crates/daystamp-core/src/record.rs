//! Attendance records and the ledger that holds them.
//!
//! A record tracks one user's attendance inside one context (a group chat or
//! a private conversation). The ledger is the full persisted collection,
//! keyed context id -> user id -> record. Keys are the sole identity;
//! display names are cosmetic and overwritten freely.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-user attendance state within one context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Last observed display name. Never used as an identity key.
    #[serde(default)]
    pub display_name: String,

    /// Count of all successful check-ins ever.
    #[serde(default)]
    pub total_days: u32,

    /// Length of the current unbroken daily streak.
    #[serde(default)]
    pub continuous_days: u32,

    /// Successful check-ins within the current calendar month.
    #[serde(default)]
    pub month_days: u32,

    /// Cumulative reward points earned.
    #[serde(default)]
    pub total_rewards: u64,

    /// Reward points earned within the current calendar month.
    #[serde(default)]
    pub month_rewards: u64,

    /// Date of the most recent successful check-in (ISO `YYYY-MM-DD`).
    /// `None` only before the user's first check-in.
    #[serde(default)]
    pub last_checkin: Option<NaiveDate>,
}

/// All records of one context, keyed by user id.
pub type ContextRecords = BTreeMap<String, AttendanceRecord>;

/// Full persisted collection of all contexts' attendance records.
///
/// `BTreeMap` keys give deterministic iteration order (user id ascending),
/// which ranking relies on as its tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    contexts: BTreeMap<String, ContextRecords>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Existing record for `(context_id, user_id)`, or a freshly
    /// zero-initialized one inserted on first sight.
    ///
    /// `display_name` only seeds a new record; refreshing the name on an
    /// existing record is the check-in transition's job, keeping this a
    /// pure read-or-insert.
    pub fn get_or_create(
        &mut self,
        context_id: &str,
        user_id: &str,
        display_name: &str,
    ) -> &mut AttendanceRecord {
        self.contexts
            .entry(context_id.to_string())
            .or_default()
            .entry(user_id.to_string())
            .or_insert_with(|| AttendanceRecord {
                display_name: display_name.to_string(),
                ..AttendanceRecord::default()
            })
    }

    /// Record for `(context_id, user_id)`, if one exists.
    pub fn get(&self, context_id: &str, user_id: &str) -> Option<&AttendanceRecord> {
        self.contexts.get(context_id)?.get(user_id)
    }

    /// All records of one context, user id ascending.
    ///
    /// Absent contexts are implicitly empty, never an error.
    pub fn context<'a>(
        &'a self,
        context_id: &str,
    ) -> impl Iterator<Item = (&'a str, &'a AttendanceRecord)> {
        self.contexts
            .get(context_id)
            .into_iter()
            .flat_map(|records| records.iter().map(|(uid, rec)| (uid.as_str(), rec)))
    }

    /// Number of contexts with at least one record.
    pub fn context_count(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}
