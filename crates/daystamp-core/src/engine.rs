//! The once-per-day check-in state transition.
//!
//! Each record is a two-state machine: eligible (no check-in today) or
//! checked-in-today, which blocks re-entry until the date advances. The
//! eligible -> checked-in transition updates every counter and persists the
//! ledger as its final step, so no partial update is ever observable.

use chrono::{Datelike, NaiveDate};

use crate::record::{AttendanceRecord, Ledger};
use crate::reward::RewardGenerator;
use crate::store::LedgerStore;

/// Result of one check-in attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user already checked in on this date; nothing changed and
    /// nothing was persisted.
    Duplicate,
    /// The transition ran. `record` is a snapshot taken after the update.
    Success {
        record: AttendanceRecord,
        reward: u32,
        date: NaiveDate,
    },
}

/// Owns the in-memory ledger, its storage handle, and the reward source.
///
/// One engine per host process; the hosting bot passes a handle around
/// instead of touching any ambient state.
pub struct CheckInEngine {
    store: LedgerStore,
    ledger: Ledger,
    rewards: RewardGenerator,
}

impl CheckInEngine {
    /// Load the ledger from `store` and serve check-ins against it.
    pub fn new(store: LedgerStore) -> Self {
        Self::with_rewards(store, RewardGenerator::new())
    }

    /// Like [`CheckInEngine::new`] with an explicit reward source, for
    /// deterministic runs.
    pub fn with_rewards(store: LedgerStore, rewards: RewardGenerator) -> Self {
        let ledger = store.load();
        Self {
            store,
            ledger,
            rewards,
        }
    }

    /// The current in-memory ledger, for ranking queries.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Apply one check-in attempt dated `today` (caller-supplied local
    /// calendar date; the system reasons in whole days only).
    ///
    /// The first call on a given date runs the full counter update and
    /// persists the ledger; any repeat that day is a no-op [`Outcome::Duplicate`],
    /// so user-triggered retries never double-count.
    pub fn process_check_in(
        &mut self,
        context_id: &str,
        user_id: &str,
        display_name: &str,
        today: NaiveDate,
    ) -> Outcome {
        let record = self.ledger.get_or_create(context_id, user_id, display_name);

        if record.last_checkin == Some(today) {
            return Outcome::Duplicate;
        }

        let prev = record.last_checkin;

        // Streak: exactly one day after the previous check-in extends it.
        // Anything else (first ever, a gap, a clock running backwards)
        // restarts at 1.
        record.continuous_days = match prev {
            Some(p) if today.signed_duration_since(p).num_days() == 1 => {
                record.continuous_days + 1
            }
            _ => 1,
        };

        // Month buckets restart whenever the previous check-in belongs to a
        // different calendar month; the current check-in is always credited
        // afterwards. Independent of the streak rule: a +1-day check-in
        // across a month boundary keeps the streak and still restarts these.
        let same_month =
            prev.is_some_and(|p| (p.year(), p.month()) == (today.year(), today.month()));
        if !same_month {
            record.month_days = 0;
            record.month_rewards = 0;
        }

        let reward = self.rewards.draw();

        record.total_days += 1;
        record.month_days += 1;
        record.total_rewards += u64::from(reward);
        record.month_rewards += u64::from(reward);
        record.last_checkin = Some(today);
        record.display_name = display_name.to_string();

        let snapshot = record.clone();
        tracing::debug!(
            context_id,
            user_id,
            total_days = snapshot.total_days,
            continuous_days = snapshot.continuous_days,
            reward,
            "check-in recorded"
        );
        self.store.save(&self.ledger);

        Outcome::Success {
            record: snapshot,
            reward,
            date: today,
        }
    }
}
