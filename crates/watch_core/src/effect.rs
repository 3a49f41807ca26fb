use crate::Availability;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `text` to every subscriber.
    Broadcast { text: String, format: MessageFormat },
    /// Overwrite the last-state file.
    PersistAvailability(Availability),
    /// Log only; nobody is messaged.
    Note(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageFormat {
    Plain,
    #[default]
    Markdown,
}

impl MessageFormat {
    /// Value of the chat API `parse_mode` field, if any.
    pub fn parse_mode(self) -> Option<&'static str> {
        match self {
            MessageFormat::Plain => None,
            MessageFormat::Markdown => Some("Markdown"),
        }
    }
}
