//! Room identifiers: normalization and validation of user input.

use std::fmt;

use percent_encoding::{utf8_percent_encode, CONTROLS};

use crate::util::id::MAX_ROOM_ID_LEN;

/// Chars that would change the meaning of `/room/<id>` if passed through.
const FORBIDDEN: &[char] = &['/', '?', '#', '%', '\\'];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RoomIdError {
    #[error("room id is empty")]
    Empty,
    #[error("room id can't contain {0:?}")]
    ForbiddenChar(char),
    #[error("room id can't be {0:?}")]
    DotSegment(&'static str),
    #[error("room id is longer than {max} chars")]
    TooLong { max: usize },
}

/// A normalized room id, safe to use as a single path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomId(String);

impl RoomId {
    /// Normalize then validate raw input.
    pub fn parse(raw: &str) -> Result<Self, RoomIdError> {
        let id = normalize(raw);
        if id.is_empty() {
            return Err(RoomIdError::Empty);
        }
        if id.chars().count() > MAX_ROOM_ID_LEN {
            return Err(RoomIdError::TooLong { max: MAX_ROOM_ID_LEN });
        }
        if let Some(c) = id.chars().find(|c| FORBIDDEN.contains(c) || c.is_control()) {
            return Err(RoomIdError::ForbiddenChar(c));
        }
        // Clients collapse these before the request ever reaches `/room/`.
        match id.as_str() {
            "." => return Err(RoomIdError::DotSegment(".")),
            ".." => return Err(RoomIdError::DotSegment("..")),
            _ => {}
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the room page this id points at.
    pub fn path(&self) -> String {
        format!("/room/{}", self.0)
    }

    /// `path()` as an ASCII `Location` value, non-ASCII bytes percent-encoded.
    pub fn location(&self) -> String {
        utf8_percent_encode(&self.path(), CONTROLS).to_string()
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replace every space with a hyphen. Nothing else is touched.
pub fn normalize(raw: &str) -> String {
    raw.replace(' ', "-")
}
