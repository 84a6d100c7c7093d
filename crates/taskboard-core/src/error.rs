use std::fmt;

use thiserror::Error;

/// The entity types addressable by id across the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Board,
    Column,
    Card,
    Tag,
    User,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Board => "board",
            EntityKind::Column => "column",
            EntityKind::Card => "card",
            EntityKind::Tag => "tag",
            EntityKind::User => "user",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskboardError {
    #[error("{0} not found: {1}")]
    NotFound(EntityKind, String),

    #[error("duplicate {0} id: {1}")]
    DuplicateId(EntityKind, String),
}
