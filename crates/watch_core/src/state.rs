use crate::Availability;

/// Opaque chat identifier of a subscriber.
pub type ChatId = String;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WatchState {
    last_known: Option<Availability>,
}

impl WatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State restored from the last-state file.
    pub fn restored(last_known: Option<Availability>) -> Self {
        Self { last_known }
    }

    pub fn last_known(&self) -> Option<Availability> {
        self.last_known
    }

    pub(crate) fn record(&mut self, availability: Availability) {
        self.last_known = Some(availability);
    }
}
