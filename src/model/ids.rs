// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smol_str::SmolStr;

/// An opaque identifier for board objects.
///
/// Ids are compared and ordered as plain strings so every map keyed by them iterates in a
/// stable order. The only structural rule is that an id is non-empty and carries no whitespace
/// or control characters, since ids travel through snapshots and CLI arguments verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: SmolStr,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl AsRef<str>) -> Result<Self, IdError> {
        let value = value.as_ref();
        validate_id(value)?;
        Ok(Self {
            value: SmolStr::new(value),
            _marker: PhantomData,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = SmolStr::deserialize(deserializer)?;
        Self::new(raw.as_str()).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    InvalidChar(char),
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("id must not be empty"),
            Self::InvalidChar(ch) => write!(f, "id must not contain {ch:?}"),
        }
    }
}

impl std::error::Error for IdError {}

fn validate_id(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if let Some(ch) = value.chars().find(|ch| ch.is_whitespace() || ch.is_control()) {
        return Err(IdError::InvalidChar(ch));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardIdTag {}
pub type CardId = Id<CardIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConnectionIdTag {}
pub type ConnectionId = Id<ConnectionIdTag>;

#[cfg(test)]
mod tests {
    use super::{CardId, IdError};

    #[test]
    fn id_rejects_empty() {
        assert_eq!(CardId::new(""), Err(IdError::Empty));
    }

    #[test]
    fn id_rejects_whitespace() {
        assert_eq!(CardId::new("card 1"), Err(IdError::InvalidChar(' ')));
        assert_eq!(CardId::new("a\tb"), Err(IdError::InvalidChar('\t')));
    }

    #[test]
    fn id_round_trips_through_json_and_validates_on_load() {
        let id = CardId::new("c:root").expect("card id");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"c:root\"");
        let back: CardId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);

        let err = serde_json::from_str::<CardId>("\"\"").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
