use std::fmt;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StatusState {
    // Dropbox is applying a setting
    Applying,

    // Dropbox is blocked from operating
    Blocked,

    // Dropbox has finished synchronizing
    Done,

    // `dropbox` is not in PATH, or its output is not recognized
    #[default]
    Missing,

    // No network connection
    Offline,

    // Dropbox is initializing
    Starting,

    // Dropbox is synchronizing
    Syncing,

    // Dropbox is upgrading
    Upgrading,
}

const MISSING_ICON: &str = "goa-panel-symbolic";

/*
 * A state without an entry here falls back to MISSING_ICON,
 * so extending the enum never leaves the button without an icon
 */
const ICONS: &[(StatusState, &str)] = &[
    (StatusState::Applying, "dialog-information-symbolic"),
    (StatusState::Blocked, "dialog-warning-symbolic"),
    (StatusState::Done, "emblem-ok-symbolic"),
    (StatusState::Missing, MISSING_ICON),
    (StatusState::Offline, "network-offline-symbolic"),
    (StatusState::Starting, "content-loading-symbolic"),
    (StatusState::Syncing, "emblem-synchronizing-symbolic"),
    (StatusState::Upgrading, "software-update-available-symbolic"),
];

impl StatusState {
    pub fn icon_name(&self) -> &'static str {
        ICONS
            .iter()
            .find(|(state, _)| state == self)
            .map(|(_, icon)| *icon)
            .unwrap_or(MISSING_ICON)
    }
}

impl fmt::Display for StatusState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatusState::Applying => write!(f, "APPLYING"),
            StatusState::Blocked => write!(f, "BLOCKED"),
            StatusState::Done => write!(f, "DONE"),
            StatusState::Missing => write!(f, "MISSING"),
            StatusState::Offline => write!(f, "OFFLINE"),
            StatusState::Starting => write!(f, "STARTING"),
            StatusState::Syncing => write!(f, "SYNCING"),
            StatusState::Upgrading => write!(f, "UPGRADING"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [StatusState; 8] = [
        StatusState::Applying,
        StatusState::Blocked,
        StatusState::Done,
        StatusState::Missing,
        StatusState::Offline,
        StatusState::Starting,
        StatusState::Syncing,
        StatusState::Upgrading,
    ];

    #[test]
    fn test_default_is_missing() {
        assert_eq!(StatusState::default(), StatusState::Missing);
    }

    #[test]
    fn test_icon_names() {
        assert_eq!(StatusState::Applying.icon_name(), "dialog-information-symbolic");
        assert_eq!(StatusState::Blocked.icon_name(), "dialog-warning-symbolic");
        assert_eq!(StatusState::Done.icon_name(), "emblem-ok-symbolic");
        assert_eq!(StatusState::Missing.icon_name(), "goa-panel-symbolic");
        assert_eq!(StatusState::Offline.icon_name(), "network-offline-symbolic");
        assert_eq!(StatusState::Starting.icon_name(), "content-loading-symbolic");
        assert_eq!(StatusState::Syncing.icon_name(), "emblem-synchronizing-symbolic");
        assert_eq!(
            StatusState::Upgrading.icon_name(),
            "software-update-available-symbolic"
        );
    }

    #[test]
    fn test_every_state_has_its_own_icon_entry() {
        for state in ALL {
            let entries = ICONS.iter().filter(|(s, _)| *s == state).count();
            assert_eq!(entries, 1, "state {} must have exactly one icon", state);
        }
    }

    #[test]
    fn test_display() {
        let names: Vec<String> = ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            names,
            [
                "APPLYING",
                "BLOCKED",
                "DONE",
                "MISSING",
                "OFFLINE",
                "STARTING",
                "SYNCING",
                "UPGRADING"
            ]
        );
    }
}
