// ABOUTME: Validated preview channel identifier.
// ABOUTME: Restricts channel ids to characters valid in file names, JS identifiers and function names.

use serde::{Deserialize, Deserializer};
use std::fmt;
use thiserror::Error;

/// Channel tag used for production deploys, which have no channel id.
pub const LIVE_CHANNEL: &str = "live";

#[derive(Debug, Error)]
pub enum ChannelIdError {
    #[error("channel id cannot be empty")]
    Empty,

    #[error("channel id exceeds maximum length of 63 characters")]
    TooLong,

    #[error("channel id '{0}' is reserved for production deploys")]
    Reserved(String),

    #[error(
        "invalid character in channel id: '{0}' would produce an invalid export alias (allowed: letters, digits, '_')"
    )]
    InvalidChar(char),
}

/// Identifier of a preview channel.
///
/// The id is appended verbatim to export names, function names and the
/// rewritten entry-point file name, so only ASCII letters, digits and `_`
/// are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(value: &str) -> Result<Self, ChannelIdError> {
        if value.is_empty() {
            return Err(ChannelIdError::Empty);
        }

        if value.len() > 63 {
            return Err(ChannelIdError::TooLong);
        }

        if value == LIVE_CHANNEL {
            return Err(ChannelIdError::Reserved(value.to_string()));
        }

        if let Some(c) = value
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '_')
        {
            return Err(ChannelIdError::InvalidChar(c));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ChannelId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ChannelId::new(&s).map_err(serde::de::Error::custom)
    }
}
