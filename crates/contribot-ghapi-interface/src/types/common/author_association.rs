use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Relationship of a comment, issue or pull request author with the repository.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Default, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GhAuthorAssociation {
    /// Collaborator.
    Collaborator,
    /// Contributor.
    Contributor,
    /// First timer.
    FirstTimer,
    /// First time contributor.
    FirstTimeContributor,
    /// Mannequin.
    Mannequin,
    /// Member.
    Member,
    /// Owner.
    Owner,
    /// None.
    #[default]
    None,
}

impl Display for GhAuthorAssociation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serde_plain::to_string(&self).map_err(|_| std::fmt::Error)?)
    }
}

impl FromStr for GhAuthorAssociation {
    type Err = serde_plain::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_plain::from_str(s)
    }
}
