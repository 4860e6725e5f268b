//! Code Editor state: a flat list of open code files.

use serde::{Deserialize, Serialize};
use wos_store::{keys, BlobStore, BlobStoreExt};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CodeFile {
    pub id: String,
    pub name: String,
    pub content: String,
    pub language: String,
}

/// Map a file extension to the editor's language tag.
fn language_for(name: &str) -> &'static str {
    match name.rsplit('.').next().unwrap_or("") {
        "js" | "jsx" => "javascript",
        "ts" | "tsx" => "typescript",
        "html" => "html",
        "css" => "css",
        "py" => "python",
        _ => "text",
    }
}

#[derive(Clone, Debug)]
pub struct EditorState {
    files: Vec<CodeFile>,
}

impl Default for EditorState {
    /// A fresh editor opens with one starter file, never empty.
    fn default() -> Self {
        Self {
            files: vec![CodeFile {
                id: "default-file".to_string(),
                name: "main.js".to_string(),
                content: "// Welcome to WebOS Code Editor\nconsole.log(\"Hello, World!\");"
                    .to_string(),
                language: "javascript".to_string(),
            }],
        }
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<S: BlobStore + ?Sized>(store: &S, user_id: &str) -> Self {
        match store.get_json::<Vec<CodeFile>>(&keys::code_files(user_id)) {
            Some(files) if !files.is_empty() => Self { files },
            _ => Self::default(),
        }
    }

    pub fn save<S: BlobStore + ?Sized>(&self, store: &S, user_id: &str) {
        store.set_json(&keys::code_files(user_id), &self.files);
    }

    pub fn files(&self) -> &[CodeFile] {
        &self.files
    }

    pub fn get(&self, id: &str) -> Option<&CodeFile> {
        self.files.iter().find(|f| f.id == id)
    }

    /// Create a file, inferring the language from the extension.
    /// Returns the new file's id, or `None` for a blank name.
    pub fn create(&mut self, name: &str, now_ms: u64) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let mut id = format!("file-{now_ms}");
        let mut bump = 1u64;
        while self.files.iter().any(|f| f.id == id) {
            id = format!("file-{now_ms}-{bump}");
            bump += 1;
        }

        self.files.push(CodeFile {
            id: id.clone(),
            name: name.to_string(),
            content: String::new(),
            language: language_for(name).to_string(),
        });
        Some(id)
    }

    pub fn set_content(&mut self, id: &str, content: &str) {
        if let Some(file) = self.files.iter_mut().find(|f| f.id == id) {
            content.clone_into(&mut file.content);
        }
    }

    /// Close (delete) a file. The last remaining file cannot be closed.
    pub fn close(&mut self, id: &str) -> bool {
        if self.files.len() <= 1 || !self.files.iter().any(|f| f.id == id) {
            return false;
        }
        self.files.retain(|f| f.id != id);
        true
    }
}
