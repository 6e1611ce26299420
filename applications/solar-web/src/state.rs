use crate::models::StatusSnapshot;

/// What the page has already shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientState {
    pub last_refresh_seen: i64,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the snapshot carries a timestamp other than the one last rendered
    pub fn is_new(&self, snapshot: &StatusSnapshot) -> bool {
        snapshot.last_refresh != self.last_refresh_seen
    }

    pub fn record(&mut self, snapshot: &StatusSnapshot) {
        self.last_refresh_seen = snapshot.last_refresh;
    }
}
