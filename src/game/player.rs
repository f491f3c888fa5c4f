use std::fmt;

/// Longest player name accepted by the name field.
pub const MAX_PLAYER_NAME_LEN: usize = 20;

/// A non-empty, trimmed player name of at most [`MAX_PLAYER_NAME_LEN`] characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerName(String);

impl PlayerName {
    /// Truncates the raw input to the field length, then trims it.
    /// Returns `None` when nothing but whitespace is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let truncated: String = raw.chars().take(MAX_PLAYER_NAME_LEN).collect();
        let trimmed = truncated.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
