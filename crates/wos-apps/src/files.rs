//! File Explorer state: a flat record list forming a folder tree.
//!
//! Records reference their parent by id, with `None` meaning the root
//! folder. The whole list is written back to the store on every change.

use serde::{Deserialize, Serialize};
use wos_store::{keys, BlobStore, BlobStoreExt};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Folder,
}

impl FileKind {
    pub fn label(&self) -> &'static str {
        match self {
            FileKind::File => "file",
            FileKind::Folder => "folder",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// Files carry text content; folders carry nothing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub parent_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilesError {
    NameRequired,
    AlreadyExists,
}

impl std::fmt::Display for FilesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilesError::NameRequired => write!(f, "a name is required"),
            FilesError::AlreadyExists => {
                write!(f, "an item with this name already exists in the folder")
            }
        }
    }
}

impl std::error::Error for FilesError {}

/// The full file tree for one user.
#[derive(Clone, Debug, Default)]
pub struct FilesState {
    records: Vec<FileRecord>,
}

impl FilesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<S: BlobStore + ?Sized>(store: &S, user_id: &str) -> Self {
        Self {
            records: store.get_json(&keys::files(user_id)).unwrap_or_default(),
        }
    }

    pub fn save<S: BlobStore + ?Sized>(&self, store: &S, user_id: &str) {
        store.set_json(&keys::files(user_id), &self.records);
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&FileRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Direct children of a folder (`None` = root), in insertion order.
    pub fn children(&self, parent_id: Option<&str>) -> Vec<&FileRecord> {
        self.records
            .iter()
            .filter(|r| r.parent_id.as_deref() == parent_id)
            .collect()
    }

    fn name_taken(&self, parent_id: Option<&str>, name: &str, kind: FileKind) -> bool {
        self.records.iter().any(|r| {
            r.parent_id.as_deref() == parent_id
                && r.kind == kind
                && r.name.eq_ignore_ascii_case(name)
        })
    }

    /// Create a file or folder in the given parent folder.
    ///
    /// Names are unique per folder per kind, compared case-insensitively.
    pub fn create(
        &mut self,
        name: &str,
        kind: FileKind,
        parent_id: Option<&str>,
        now_ms: u64,
    ) -> Result<String, FilesError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FilesError::NameRequired);
        }
        if self.name_taken(parent_id, name, kind) {
            return Err(FilesError::AlreadyExists);
        }

        let mut id = format!("{}-{now_ms}", kind.label());
        let mut bump = 1u64;
        while self.records.iter().any(|r| r.id == id) {
            id = format!("{}-{now_ms}-{bump}", kind.label());
            bump += 1;
        }

        self.records.push(FileRecord {
            id: id.clone(),
            name: name.to_string(),
            kind,
            content: match kind {
                FileKind::File => Some(String::new()),
                FileKind::Folder => None,
            },
            parent_id: parent_id.map(str::to_string),
        });
        Ok(id)
    }

    /// Remove a record; deleting a folder removes everything under it.
    /// Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) {
        let Some(target) = self.get(id) else { return };

        let mut doomed = vec![target.id.clone()];
        if target.kind == FileKind::Folder {
            let mut frontier = vec![target.id.clone()];
            while let Some(parent) = frontier.pop() {
                for record in &self.records {
                    if record.parent_id.as_deref() == Some(parent.as_str()) {
                        doomed.push(record.id.clone());
                        if record.kind == FileKind::Folder {
                            frontier.push(record.id.clone());
                        }
                    }
                }
            }
        }

        self.records.retain(|r| !doomed.contains(&r.id));
    }

    pub fn rename(&mut self, id: &str, name: &str) -> Result<(), FilesError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FilesError::NameRequired);
        }
        let Some(target) = self.get(id) else {
            return Ok(());
        };
        let (parent, kind, old_name) = (target.parent_id.clone(), target.kind, target.name.clone());
        if !name.eq_ignore_ascii_case(&old_name) && self.name_taken(parent.as_deref(), name, kind) {
            return Err(FilesError::AlreadyExists);
        }
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            record.name = name.to_string();
        }
        Ok(())
    }

    /// Replace a file's content. No-op for folders and unknown ids.
    pub fn set_content(&mut self, id: &str, content: &str) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            if record.kind == FileKind::File {
                record.content = Some(content.to_string());
            }
        }
    }

    /// Breadcrumb path from the root down to (and including) a folder.
    pub fn path(&self, folder_id: &str) -> Vec<&FileRecord> {
        let mut path = Vec::new();
        let mut cursor = self.get(folder_id);
        while let Some(record) = cursor {
            path.push(record);
            cursor = record.parent_id.as_deref().and_then(|pid| self.get(pid));
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wos_store::MemoryStore;

    #[test]
    fn test_create_and_children() {
        let mut files = FilesState::new();
        let docs = files.create("Documents", FileKind::Folder, None, 1).unwrap();
        let readme = files
            .create("readme.txt", FileKind::File, Some(&docs), 2)
            .unwrap();

        assert_eq!(files.children(None).len(), 1);
        let inside = files.children(Some(&docs));
        assert_eq!(inside.len(), 1);
        assert_eq!(inside[0].id, readme);
        assert_eq!(inside[0].content.as_deref(), Some(""));
    }

    #[test]
    fn test_duplicate_name_in_folder_rejected() {
        let mut files = FilesState::new();
        files.create("notes.txt", FileKind::File, None, 1).unwrap();
        assert_eq!(
            files.create("NOTES.TXT", FileKind::File, None, 2),
            Err(FilesError::AlreadyExists)
        );
        // same name is fine for a different kind or folder
        files.create("notes.txt", FileKind::Folder, None, 3).unwrap();
    }

    #[test]
    fn test_same_timestamp_ids_stay_distinct() {
        let mut files = FilesState::new();
        let a = files.create("a.txt", FileKind::File, None, 9).unwrap();
        let b = files.create("b.txt", FileKind::File, None, 9).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_delete_folder_is_recursive() {
        let mut files = FilesState::new();
        let top = files.create("top", FileKind::Folder, None, 1).unwrap();
        let nested = files.create("nested", FileKind::Folder, Some(&top), 2).unwrap();
        files.create("deep.txt", FileKind::File, Some(&nested), 3).unwrap();
        files.create("other.txt", FileKind::File, None, 4).unwrap();

        files.delete(&top);
        assert_eq!(files.records().len(), 1);
        assert_eq!(files.records()[0].name, "other.txt");
    }

    #[test]
    fn test_rename_checks_siblings() {
        let mut files = FilesState::new();
        let a = files.create("a.txt", FileKind::File, None, 1).unwrap();
        files.create("b.txt", FileKind::File, None, 2).unwrap();

        assert_eq!(files.rename(&a, "b.txt"), Err(FilesError::AlreadyExists));
        // renaming to a different casing of itself is allowed
        assert_eq!(files.rename(&a, "A.TXT"), Ok(()));
        assert_eq!(files.get(&a).unwrap().name, "A.TXT");
    }

    #[test]
    fn test_path_walks_to_root() {
        let mut files = FilesState::new();
        let top = files.create("top", FileKind::Folder, None, 1).unwrap();
        let nested = files.create("nested", FileKind::Folder, Some(&top), 2).unwrap();

        let path: Vec<_> = files.path(&nested).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(path, ["top", "nested"]);
    }

    #[test]
    fn test_set_content_ignores_folders() {
        let mut files = FilesState::new();
        let folder = files.create("dir", FileKind::Folder, None, 1).unwrap();
        files.set_content(&folder, "text");
        assert!(files.get(&folder).unwrap().content.is_none());
    }

    #[test]
    fn test_round_trip_through_store() {
        let store = MemoryStore::new();
        let mut files = FilesState::new();
        files.create("Documents", FileKind::Folder, None, 1).unwrap();
        files.save(&store, "u1");

        let reloaded = FilesState::load(&store, "u1");
        assert_eq!(reloaded.records().len(), 1);
        assert_eq!(reloaded.records()[0].kind, FileKind::Folder);

        // field names in the blob match the persisted shape
        let raw = store.get("webOS_files_u1").unwrap();
        assert!(raw.contains("\"parentId\""));
        assert!(raw.contains("\"type\":\"folder\""));
    }
}
