//! RemoteItem domain entity
//!
//! Represents a file or folder observed in a watched remote folder.
//! Items are ephemeral: they are reconstructed fresh from every listing
//! query and never persisted themselves — only their identifier survives
//! a run, inside the [`SeenSet`](super::seen_set::SeenSet).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::newtypes::ItemId;

/// Kind of a remote item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Regular file
    File,
    /// Folder (container of further items)
    Folder,
}

impl ItemKind {
    /// Returns true if the item is a folder
    pub fn is_folder(&self) -> bool {
        matches!(self, ItemKind::Folder)
    }

    /// Human-readable label used in notification payloads
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::File => "File",
            ItemKind::Folder => "Folder",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::File => write!(f, "file"),
            ItemKind::Folder => write!(f, "folder"),
        }
    }
}

/// A file or folder observed in a watched location
///
/// `created_at` is optional: the remote side occasionally omits or mangles
/// the creation timestamp, and a malformed timestamp must not abort a run.
/// Items without a timestamp sort after all well-formed items in a delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteItem {
    /// Opaque, stable identifier (primary key)
    pub id: ItemId,
    /// Display name; not unique
    pub name: String,
    /// File or folder
    pub kind: ItemKind,
    /// Creation timestamp, used only for ordering within a poll batch
    pub created_at: Option<DateTime<Utc>>,
}

impl RemoteItem {
    /// Creates a new `RemoteItem`
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        kind: ItemKind,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            created_at,
        }
    }

    /// Returns true if this item is a folder
    pub fn is_folder(&self) -> bool {
        self.kind.is_folder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, kind: ItemKind) -> RemoteItem {
        RemoteItem::new(ItemId::new(id).unwrap(), "name", kind, None)
    }

    #[test]
    fn test_kind_is_folder() {
        assert!(ItemKind::Folder.is_folder());
        assert!(!ItemKind::File.is_folder());
        assert!(item("f1", ItemKind::Folder).is_folder());
        assert!(!item("f2", ItemKind::File).is_folder());
    }

    #[test]
    fn test_kind_label() {
        assert_eq!(ItemKind::File.label(), "File");
        assert_eq!(ItemKind::Folder.label(), "Folder");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", ItemKind::File), "file");
        assert_eq!(format!("{}", ItemKind::Folder), "folder");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let item = RemoteItem::new(
            ItemId::new("abc").unwrap(),
            "report.pdf",
            ItemKind::File,
            Some("2026-01-15T10:00:00Z".parse().unwrap()),
        );
        let json = serde_json::to_string(&item).unwrap();
        let back: RemoteItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }
}
