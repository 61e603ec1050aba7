//! Read-only leaderboard queries over one context's records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{AttendanceRecord, Ledger};

/// Leaderboards truncate to this many entries unless told otherwise.
pub const DEFAULT_TOP_N: usize = 10;

/// Metric a leaderboard orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    TotalDays,
    ContinuousDays,
    MonthDays,
    TotalRewards,
    MonthRewards,
}

impl Metric {
    /// The metric's value in a record, widened for uniform comparison.
    pub fn value(self, record: &AttendanceRecord) -> u64 {
        match self {
            Metric::TotalDays => u64::from(record.total_days),
            Metric::ContinuousDays => u64::from(record.continuous_days),
            Metric::MonthDays => u64::from(record.month_days),
            Metric::TotalRewards => record.total_rewards,
            Metric::MonthRewards => record.month_rewards,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::TotalDays => "total-days",
            Metric::ContinuousDays => "continuous-days",
            Metric::MonthDays => "month-days",
            Metric::TotalRewards => "total-rewards",
            Metric::MonthRewards => "month-rewards",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "total-days" => Ok(Metric::TotalDays),
            "continuous-days" => Ok(Metric::ContinuousDays),
            "month-days" => Ok(Metric::MonthDays),
            "total-rewards" => Ok(Metric::TotalRewards),
            "month-rewards" => Ok(Metric::MonthRewards),
            other => Err(format!(
                "unknown metric '{other}' (expected one of: total-days, \
                 continuous-days, month-days, total-rewards, month-rewards)"
            )),
        }
    }
}

/// Top `n` records in a context, descending by `metric`.
///
/// The sort is stable over the ledger's user-id ordering, so ties resolve
/// to user id ascending.
pub fn top_n<'a>(
    ledger: &'a Ledger,
    context_id: &str,
    metric: Metric,
    n: usize,
) -> Vec<(&'a str, &'a AttendanceRecord)> {
    let mut entries: Vec<_> = ledger.context(context_id).collect();
    entries.sort_by(|a, b| metric.value(b.1).cmp(&metric.value(a.1)));
    entries.truncate(n);
    entries
}

/// Records that checked in on `today`, descending by streak length.
pub fn today_rank<'a>(
    ledger: &'a Ledger,
    context_id: &str,
    today: NaiveDate,
    n: usize,
) -> Vec<(&'a str, &'a AttendanceRecord)> {
    let mut entries: Vec<_> = ledger
        .context(context_id)
        .filter(|(_, record)| record.last_checkin == Some(today))
        .collect();
    entries.sort_by(|a, b| b.1.continuous_days.cmp(&a.1.continuous_days));
    entries.truncate(n);
    entries
}

/// Render a ranking as a 1-indexed list under a title header.
///
/// Records whose display name was never observed render as `unknown`.
pub fn format_rank(ranked: &[(&str, &AttendanceRecord)], title: &str, metric: Metric) -> String {
    let mut lines = vec![format!("🏆 {title}")];
    for (i, (_, record)) in ranked.iter().enumerate() {
        let name = if record.display_name.is_empty() {
            "unknown"
        } else {
            record.display_name.as_str()
        };
        lines.push(format!("{}. {} - {}", i + 1, name, metric.value(record)));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger_with(entries: &[(&str, u32, u64, Option<NaiveDate>)]) -> Ledger {
        let mut ledger = Ledger::new();
        for (uid, days, rewards, last) in entries {
            let record = ledger.get_or_create("group_1", uid, &format!("name-{uid}"));
            record.total_days = *days;
            record.continuous_days = *days;
            record.total_rewards = *rewards;
            record.last_checkin = *last;
        }
        ledger
    }

    #[test]
    fn top_n_orders_descending_and_truncates() {
        let ledger = ledger_with(&[
            ("a", 3, 300, None),
            ("b", 9, 900, None),
            ("c", 1, 100, None),
            ("d", 7, 700, None),
        ]);

        let ranked = top_n(&ledger, "group_1", Metric::TotalDays, 3);
        let ids: Vec<_> = ranked.iter().map(|(uid, _)| *uid).collect();
        assert_eq!(ids, vec!["b", "d", "a"]);

        let values: Vec<_> = ranked
            .iter()
            .map(|(_, r)| Metric::TotalDays.value(r))
            .collect();
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn top_n_ties_break_by_user_id_ascending() {
        let ledger = ledger_with(&[
            ("zeta", 5, 0, None),
            ("alpha", 5, 0, None),
            ("mid", 5, 0, None),
        ]);

        let ranked = top_n(&ledger, "group_1", Metric::TotalDays, 10);
        let ids: Vec<_> = ranked.iter().map(|(uid, _)| *uid).collect();
        assert_eq!(ids, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn top_n_on_absent_context_is_empty() {
        let ledger = Ledger::new();
        assert!(top_n(&ledger, "group_missing", Metric::TotalRewards, 10).is_empty());
    }

    #[test]
    fn today_rank_filters_to_supplied_date() {
        let today = date(2024, 3, 15);
        let ledger = ledger_with(&[
            ("a", 4, 0, Some(today)),
            ("b", 9, 0, Some(date(2024, 3, 14))),
            ("c", 2, 0, Some(today)),
            ("d", 1, 0, None),
        ]);

        let ranked = today_rank(&ledger, "group_1", today, 10);
        let ids: Vec<_> = ranked.iter().map(|(uid, _)| *uid).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn today_rank_orders_by_streak() {
        let today = date(2024, 3, 15);
        let ledger = ledger_with(&[
            ("a", 2, 0, Some(today)),
            ("b", 8, 0, Some(today)),
            ("c", 5, 0, Some(today)),
        ]);

        let ranked = today_rank(&ledger, "group_1", today, 10);
        let streaks: Vec<_> = ranked.iter().map(|(_, r)| r.continuous_days).collect();
        assert_eq!(streaks, vec![8, 5, 2]);
    }

    #[test]
    fn format_rank_renders_numbered_lines() {
        let ledger = ledger_with(&[("a", 3, 300, None), ("b", 9, 900, None)]);
        let ranked = top_n(&ledger, "group_1", Metric::TotalRewards, 10);

        let out = format_rank(&ranked, "All-time rewards", Metric::TotalRewards);
        assert_eq!(
            out,
            "🏆 All-time rewards\n1. name-b - 900\n2. name-a - 300"
        );
    }

    #[test]
    fn format_rank_falls_back_to_unknown_name() {
        let mut ledger = Ledger::new();
        let record = ledger.get_or_create("group_1", "a", "");
        record.total_days = 2;

        let ranked = top_n(&ledger, "group_1", Metric::TotalDays, 10);
        let out = format_rank(&ranked, "Days", Metric::TotalDays);
        assert!(out.contains("1. unknown - 2"));
    }

    #[test]
    fn metric_parses_its_display_form() {
        for metric in [
            Metric::TotalDays,
            Metric::ContinuousDays,
            Metric::MonthDays,
            Metric::TotalRewards,
            Metric::MonthRewards,
        ] {
            assert_eq!(metric.as_str().parse::<Metric>().unwrap(), metric);
        }
        assert!("streak".parse::<Metric>().is_err());
    }
}
