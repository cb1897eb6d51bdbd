//! Directory listing entries and listing keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether an entry can be descended into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    File,
}

/// Coarse file category, used to pick an icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileCategory {
    Folder,
    Archive,
    Audio,
    Image,
    Video,
    Document,
}

impl FileCategory {
    /// Categorize by file extension (case-insensitive).
    pub fn from_name(name: &str) -> Self {
        let ext = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "zip" | "tar" | "gz" | "7z" | "rar" => Self::Archive,
            "mp3" | "wav" | "flac" | "m4a" => Self::Audio,
            "jpg" | "jpeg" | "png" | "gif" | "webp" | "heic" => Self::Image,
            "mp4" | "mov" | "mkv" | "avi" => Self::Video,
            _ => Self::Document,
        }
    }
}

/// One row of a directory listing.
///
/// `size` and `last_modified` are display strings; `None` renders as "-".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique within its listing
    pub id: String,
    pub name: String,
    pub kind: EntryKind,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default, rename = "modified")]
    pub last_modified: Option<String>,
    /// Per-listing selection flag; never read from listing data
    #[serde(skip)]
    pub selected: bool,
}

impl Entry {
    pub fn folder(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: EntryKind::Folder,
            size: None,
            last_modified: None,
            selected: false,
        }
    }

    pub fn file(
        id: impl Into<String>,
        name: impl Into<String>,
        size: impl Into<String>,
        last_modified: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: EntryKind::File,
            size: Some(size.into()),
            last_modified: Some(last_modified.into()),
            selected: false,
        }
    }

    #[inline]
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    pub fn category(&self) -> FileCategory {
        match self.kind {
            EntryKind::Folder => FileCategory::Folder,
            EntryKind::File => FileCategory::from_name(&self.name),
        }
    }

    pub fn size_label(&self) -> &str {
        self.size.as_deref().unwrap_or("-")
    }

    pub fn modified_label(&self) -> &str {
        self.last_modified.as_deref().unwrap_or("-")
    }
}

// ============================================================================
// DirectoryKey
// ============================================================================

/// Provider plus ordered path segments identifying one listing.
///
/// Serialized as `"<provider>"` for the root and
/// `"<provider>/<seg1>/<seg2>"` for nested folders.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DirectoryKey {
    pub provider_id: String,
    pub segments: Vec<String>,
}

impl DirectoryKey {
    pub fn new(provider_id: impl Into<String>, segments: Vec<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            segments,
        }
    }

    /// Key of a provider's root listing.
    pub fn root(provider_id: impl Into<String>) -> Self {
        Self::new(provider_id, Vec::new())
    }

    /// Key of the folder `name` inside this one.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self::new(self.provider_id.clone(), segments)
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Parse a serialized key. Returns `None` for an empty provider part.
    pub fn parse(key: &str) -> Option<Self> {
        let mut parts = key.split('/');
        let provider_id = parts.next().filter(|p| !p.is_empty())?;
        let segments = parts
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Some(Self::new(provider_id, segments))
    }

    pub fn to_key_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DirectoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.provider_id)?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_serialization() {
        assert_eq!(DirectoryKey::root("google-drive").to_key_string(), "google-drive");
        let key = DirectoryKey::root("google-drive")
            .child("Work_Files")
            .child("Projects");
        assert_eq!(key.to_key_string(), "google-drive/Work_Files/Projects");
    }

    #[test]
    fn test_key_parse() {
        let key = DirectoryKey::parse("google-drive/Documents").unwrap();
        assert_eq!(key.provider_id, "google-drive");
        assert_eq!(key.segments, vec!["Documents".to_string()]);
        assert!(DirectoryKey::parse("dropbox").unwrap().is_root());
        assert!(DirectoryKey::parse("").is_none());
        assert!(DirectoryKey::parse("/Documents").is_none());
    }

    #[test]
    fn test_structural_equality() {
        let a = DirectoryKey::new("p", vec!["x".into(), "y".into()]);
        let b = DirectoryKey::root("p").child("x").child("y");
        let c = DirectoryKey::root("p").child("y").child("x");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_entry_deserialize() {
        let json = r#"[
            {"id": "1", "name": "Documents", "kind": "folder"},
            {"id": "5", "name": "Backup.zip", "kind": "file", "size": "2.3 GB", "modified": "2024-07-10"}
        ]"#;
        let entries: Vec<Entry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0], Entry::folder("1", "Documents"));
        assert_eq!(
            entries[1],
            Entry::file("5", "Backup.zip", "2.3 GB", "2024-07-10")
        );
        assert!(entries.iter().all(|e| !e.selected));
    }

    #[test]
    fn test_labels() {
        let folder = Entry::folder("1", "Photos");
        assert_eq!(folder.size_label(), "-");
        assert_eq!(folder.modified_label(), "-");
        assert_eq!(folder.category(), FileCategory::Folder);
    }

    #[test]
    fn test_category() {
        assert_eq!(FileCategory::from_name("Backup.zip"), FileCategory::Archive);
        assert_eq!(FileCategory::from_name("Music_Playlist.mp3"), FileCategory::Audio);
        assert_eq!(FileCategory::from_name("Family_Portrait.PNG"), FileCategory::Image);
        assert_eq!(FileCategory::from_name("Tutorial.mp4"), FileCategory::Video);
        assert_eq!(FileCategory::from_name("README"), FileCategory::Document);
    }
}
