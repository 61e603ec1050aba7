//! Congratulatory message pool for successful check-ins.

use rand::prelude::*;

const FALLBACK_MESSAGE: &str = "Keep the streak going!";

/// Pool of short congratulatory lines; one is attached to every successful
/// check-in summary.
pub struct MessagePool {
    messages: Vec<String>,
}

impl MessagePool {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// One random line from the pool.
    pub fn pick(&self) -> &str {
        self.pick_with(&mut rand::thread_rng())
    }

    /// Like [`MessagePool::pick`] with an injected RNG, for deterministic
    /// selection.
    pub fn pick_with(&self, rng: &mut impl Rng) -> &str {
        self.messages
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(FALLBACK_MESSAGE)
    }
}

impl Default for MessagePool {
    fn default() -> Self {
        Self::new(
            [
                "Another day, another stamp. Nicely done!",
                "Showing up is half the battle, and you just won it.",
                "Your streak thanks you.",
                "Consistency looks good on you.",
                "The leaderboard trembles.",
                "Small steps every day add up to big numbers.",
                "See you again tomorrow!",
                "Attendance: impeccable.",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        )
    }
}
