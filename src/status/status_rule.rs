use super::StatusState;

/*
 * Ordered by how often each phrase shows up during a session,
 * the steady "Up to date" first. First match wins, so the order is
 * part of the contract: "Up" also catches "Upgrading..."
 */
pub const STATUS_RULES: &[(&str, StatusState)] = &[
    ("Up", StatusState::Done),
    ("Syncing", StatusState::Syncing),
    ("Connecting...", StatusState::Offline),
    ("Can't", StatusState::Blocked),
    ("Applying", StatusState::Applying),
    ("Checking", StatusState::Starting),
    ("Starting...", StatusState::Starting),
    ("Upgrading", StatusState::Upgrading),
];

pub fn classify(text: &[u8]) -> StatusState {
    STATUS_RULES
        .iter()
        .find(|(prefix, _)| text.starts_with(prefix.as_bytes()))
        .map(|(_, state)| *state)
        .unwrap_or_default()
}
