//! Entity kinds and how each kind is removed from the store.

use std::fmt;

use uuid::Uuid;

/// How a record leaves the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionPolicy {
    /// The row is retained and stamped with a deletion timestamp.
    Soft,
    /// The row is physically removed.
    Hard,
}

/// The four content record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// [`Post`](super::Post) records.
    Post,
    /// [`Category`](super::Category) records.
    Category,
    /// [`Comment`](super::Comment) records.
    Comment,
    /// [`Reply`](super::Reply) records.
    Reply,
}

impl EntityKind {
    /// Deletion policy the store applies to this kind.
    pub const fn deletion_policy(self) -> DeletionPolicy {
        match self {
            Self::Post => DeletionPolicy::Soft,
            Self::Category | Self::Comment | Self::Reply => DeletionPolicy::Hard,
        }
    }

    /// Lower-case noun used in messages.
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Category => "category",
            Self::Comment => "comment",
            Self::Reply => "reply",
        }
    }

    /// Message for a missing record of this kind.
    pub fn not_found_message(self) -> String {
        format!("{} not found!", self.noun())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// Acknowledgement returned after a record is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionReceipt {
    /// Identifier of the deleted record.
    pub id: Uuid,
    /// Kind of the deleted record.
    pub kind: EntityKind,
}

impl DeletionReceipt {
    /// Build a receipt for `kind`.
    pub fn new(kind: EntityKind, id: impl Into<Uuid>) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    /// Human-readable confirmation.
    pub fn message(&self) -> String {
        format!("{} has been deleted!", self.kind.noun())
    }
}
