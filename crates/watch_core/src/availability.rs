use std::fmt;
use std::str::FromStr;

/// Registration availability of the monitored page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    /// The event is announced but no signup link is published yet.
    Upcoming,
    /// At least one signup link is live.
    OpenForSignup,
    /// Anything the watcher cannot place. Never produced by classification.
    Unknown,
}

impl Availability {
    /// Name written to the last-state file.
    pub fn as_str(self) -> &'static str {
        match self {
            Availability::Upcoming => "upcoming",
            Availability::OpenForSignup => "open_for_signup",
            Availability::Unknown => "unknown",
        }
    }

    /// Parses persisted text, mapping anything unrecognised to `Unknown`.
    ///
    /// Returns `None` for blank input, i.e. nothing was persisted yet.
    pub fn from_persisted(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.parse().unwrap_or(Availability::Unknown))
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAvailabilityError {
    pub input: String,
}

impl fmt::Display for ParseAvailabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised availability {:?}", self.input)
    }
}

impl std::error::Error for ParseAvailabilityError {}

impl FromStr for Availability {
    type Err = ParseAvailabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Spanish names are what the first deployment wrote to disk.
        match s.trim() {
            "upcoming" | "proximamente" => Ok(Availability::Upcoming),
            "open_for_signup" | "inscribite" => Ok(Availability::OpenForSignup),
            "unknown" | "desconocido" => Ok(Availability::Unknown),
            other => Err(ParseAvailabilityError {
                input: other.to_string(),
            }),
        }
    }
}

/// Result of one classification pass over the target page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub availability: Availability,
    pub signup_links: Vec<String>,
}

impl Classification {
    /// Any signup link means registration is open; none means upcoming.
    pub fn from_links(signup_links: Vec<String>) -> Self {
        let availability = if signup_links.is_empty() {
            Availability::Upcoming
        } else {
            Availability::OpenForSignup
        };
        Self {
            availability,
            signup_links,
        }
    }
}
