//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Maximum number of characters allowed in a player name
pub const PLAYER_NAME_MAX_CHARS: usize = 100;

/// Tournament identifier value object.
///
/// Assigned by the tournament store on first save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TournamentId(i32);

impl TournamentId {
    /// Create a new TournamentId.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the inner integer value.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for TournamentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player identifier value object.
///
/// Assigned by the player store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(i32);

impl PlayerId {
    /// Create a new PlayerId.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the inner integer value.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player name value object.
///
/// Surrounding whitespace is trimmed; the remaining name must be non-empty
/// and at most [`PLAYER_NAME_MAX_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a new PlayerName.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError` if the trimmed name is empty or too long
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::PlayerNameEmpty);
        }
        let len = trimmed.chars().count();
        if len > PLAYER_NAME_MAX_CHARS {
            return Err(ValueObjectError::PlayerNameTooLong {
                max: PLAYER_NAME_MAX_CHARS,
                actual: len,
            });
        }
        if trimmed.len() == name.len() {
            Ok(Self(name))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.into_string()
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
