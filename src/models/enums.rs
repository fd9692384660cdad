//! Enums for the catalog

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CatalogError;

/// The three slug-addressable entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Artist,
    Album,
    Song,
}

impl EntityKind {
    #[cfg(test)]
    pub const ALL: [EntityKind; 3] = [EntityKind::Artist, EntityKind::Album, EntityKind::Song];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Artist => "artist",
            EntityKind::Album => "album",
            EntityKind::Song => "song",
        }
    }

    /// Backing table name
    pub fn table(&self) -> &'static str {
        self.as_str()
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "artist" | "artists" => Ok(EntityKind::Artist),
            "album" | "albums" => Ok(EntityKind::Album),
            "song" | "songs" => Ok(EntityKind::Song),
            other => Err(CatalogError::InvalidInput(format!(
                "unknown entity kind '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entity_kind() {
        assert_eq!("albums".parse::<EntityKind>().unwrap(), EntityKind::Album);
        assert_eq!("song".parse::<EntityKind>().unwrap(), EntityKind::Song);
        assert_eq!("artists".parse::<EntityKind>().unwrap(), EntityKind::Artist);
    }

    #[test]
    fn test_unknown_kind_is_invalid_input() {
        let err = "playlist".parse::<EntityKind>().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput(_)));

        // exact match only
        assert!("Album".parse::<EntityKind>().is_err());
    }
}
