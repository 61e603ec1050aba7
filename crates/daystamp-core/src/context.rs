//! Context identity resolution for host events.
//!
//! Hosts deliver messages from many platforms with uneven event shapes;
//! the only thing the ledger needs is a stable per-conversation key. Group
//! chats map to `group_<id>`, direct messages to `private_<id>`, and a
//! pathological event with neither still gets a deterministic hash-derived
//! fallback instead of an error.

use sha2::{Digest, Sha256};

/// The host-event fields identity resolution probes.
#[derive(Debug, Clone, Default)]
pub struct RawEvent {
    /// Group/channel id, when the message came from a group conversation.
    pub group_id: Option<String>,
    /// Sender id, used for private-conversation scoping.
    pub sender_id: Option<String>,
    /// Host-assigned message id, fallback hash input.
    pub message_id: String,
    /// Host-assigned event timestamp, fallback hash input.
    pub timestamp: i64,
}

/// Derive the leaderboard-scoping context id for an event. Never fails.
pub fn resolve_context_id(event: &RawEvent) -> String {
    if let Some(group_id) = event.group_id.as_deref().filter(|id| !id.is_empty()) {
        return format!("group_{group_id}");
    }
    if let Some(sender_id) = event.sender_id.as_deref().filter(|id| !id.is_empty()) {
        return format!("private_{sender_id}");
    }

    // Last resort: short stable digest of message id + timestamp.
    let digest = Sha256::digest(format!("{}-{}", event.message_id, event.timestamp));
    format!("ctx_{}", &hex::encode(digest)[..6])
}
