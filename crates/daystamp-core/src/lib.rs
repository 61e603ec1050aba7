//! # Daystamp Core Library
//!
//! This library provides the core business logic for Daystamp, a daily
//! check-in (attendance) feature for chat-bot hosts. A user checks in once
//! per day to record attendance, accrue reward points, and grow a streak;
//! leaderboard queries rank a conversation's users over several metrics.
//!
//! The hosting bot is expected to be a thin adapter: it resolves a
//! `(context_id, user_id, display_name)` triple per inbound command, calls
//! into this library, and renders the returned summary or leaderboard. The
//! bundled `daystamp` CLI plays that role for local use and testing.
//!
//! ## Key Components
//!
//! - [`CheckInEngine`]: the once-per-day check-in state transition
//! - [`LedgerStore`]: flat-file persistence for the attendance ledger
//! - [`rank`]: read-only leaderboard queries and rendering
//! - [`RewardGenerator`]: seedable per-check-in reward draws

pub mod context;
pub mod engine;
pub mod error;
pub mod messages;
pub mod rank;
pub mod record;
pub mod reward;
pub mod store;

pub use context::{resolve_context_id, RawEvent};
pub use engine::{CheckInEngine, Outcome};
pub use error::StoreError;
pub use messages::MessagePool;
pub use rank::Metric;
pub use record::{AttendanceRecord, Ledger};
pub use reward::RewardGenerator;
pub use store::LedgerStore;
