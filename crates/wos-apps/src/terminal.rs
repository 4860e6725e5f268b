//! Terminal state: a small command interpreter over the file tree,
//! with persisted scrollback and arrow-key recall history.

use serde::{Deserialize, Serialize};
use wos_store::{keys, BlobStore, BlobStoreExt};

use crate::files::{FileKind, FilesState};

const WELCOME: &str = "Welcome to WebOS Terminal v1.0.0\nType \"help\" to see available commands.\n";

const HELP: &str = "\
Available commands:
  help            - Show this help message
  echo [text]     - Display text
  ls              - List files in current directory
  clear           - Clear the terminal
  date            - Show current date and time
  whoami          - Show current user
  pwd             - Print working directory
  mkdir [name]    - Create a directory
  touch [name]    - Create a file
  cat [file]      - Display file contents
  rm [file]       - Remove a file
  uname           - Show system information";

/// One scrollback entry: the line as typed and what it printed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TerminalLine {
    pub command: String,
    pub output: String,
}

/// Ambient values commands read from the hosting shell.
#[derive(Clone, Debug)]
pub struct TerminalEnv {
    pub username: String,
    /// Preformatted wall-clock string for `date`
    pub date_string: String,
    /// Id seed for `mkdir`/`touch`
    pub now_ms: u64,
}

#[derive(Clone, Debug)]
pub struct TerminalState {
    scrollback: Vec<TerminalLine>,
    recall: Vec<String>,
    recall_index: Option<usize>,
    cwd: String,
}

impl Default for TerminalState {
    fn default() -> Self {
        Self {
            scrollback: vec![TerminalLine {
                command: String::new(),
                output: WELCOME.to_string(),
            }],
            recall: Vec::new(),
            recall_index: None,
            cwd: "/home/user".to_string(),
        }
    }
}

impl TerminalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the scrollback persists; recall history is per session.
    pub fn load<S: BlobStore + ?Sized>(store: &S, user_id: &str) -> Self {
        match store.get_json::<Vec<TerminalLine>>(&keys::terminal_history(user_id)) {
            Some(scrollback) if !scrollback.is_empty() => Self {
                scrollback,
                ..Self::default()
            },
            _ => Self::default(),
        }
    }

    pub fn save<S: BlobStore + ?Sized>(&self, store: &S, user_id: &str) {
        store.set_json(&keys::terminal_history(user_id), &self.scrollback);
    }

    pub fn scrollback(&self) -> &[TerminalLine] {
        &self.scrollback
    }

    /// Step back through typed commands (arrow-up). Stays on the oldest.
    pub fn recall_prev(&mut self) -> Option<&str> {
        if self.recall.is_empty() {
            return None;
        }
        let next = match self.recall_index {
            None => 0,
            Some(i) => (i + 1).min(self.recall.len() - 1),
        };
        self.recall_index = Some(next);
        Some(&self.recall[self.recall.len() - 1 - next])
    }

    /// Step forward (arrow-down); past the newest returns to a blank line.
    pub fn recall_next(&mut self) -> Option<&str> {
        match self.recall_index {
            None | Some(0) => {
                self.recall_index = None;
                None
            }
            Some(i) => {
                self.recall_index = Some(i - 1);
                Some(&self.recall[self.recall.len() - i])
            }
        }
    }

    /// Run one command line. Blank input is ignored.
    pub fn exec(&mut self, input: &str, files: &mut FilesState, env: &TerminalEnv) {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return;
        }

        self.recall.push(trimmed.to_string());
        self.recall_index = None;

        let args: Vec<&str> = trimmed.split(' ').collect();
        let command = args[0].to_lowercase();

        let output = match command.as_str() {
            "help" => HELP.to_string(),
            "echo" => args[1..].join(" "),
            "ls" => list_root(files),
            "clear" => {
                self.scrollback = vec![TerminalLine {
                    command: String::new(),
                    output: String::new(),
                }];
                return;
            }
            "date" => env.date_string.clone(),
            "whoami" => format!("{}@webos", env.username),
            "pwd" => self.cwd.clone(),
            "mkdir" => match args.get(1) {
                None => missing_operand("mkdir", "operand"),
                Some(name) => match files.create(name, FileKind::Folder, None, env.now_ms) {
                    Ok(_) => format!("Directory '{name}' created"),
                    Err(_) => format!("mkdir: cannot create directory '{name}': File exists"),
                },
            },
            "touch" => match args.get(1) {
                None => missing_operand("touch", "file operand"),
                Some(name) => match files.create(name, FileKind::File, None, env.now_ms) {
                    Ok(_) => format!("File '{name}' created"),
                    Err(_) => format!("touch: cannot touch '{name}': File exists"),
                },
            },
            "cat" => match args.get(1) {
                None => missing_operand("cat", "file operand"),
                Some(name) => cat_file(files, name),
            },
            "rm" => match args.get(1) {
                None => missing_operand("rm", "operand"),
                Some(name) => remove_file(files, name),
            },
            "uname" => "WebOS 1.0.0 Virtual Environment".to_string(),
            _ => format!("{command}: command not found"),
        };

        self.scrollback.push(TerminalLine {
            command: trimmed.to_string(),
            output,
        });
    }
}

fn missing_operand(command: &str, what: &str) -> String {
    format!("{command}: missing {what}\nTry '{command} --help' for more information.")
}

/// Root directory listing: folders first with a trailing slash.
fn list_root(files: &FilesState) -> String {
    let entries = files.children(None);
    if entries.is_empty() {
        return String::new();
    }
    let mut lines: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries.iter().filter(|e| e.kind == FileKind::Folder) {
        lines.push(format!("{}/", entry.name));
    }
    for entry in entries.iter().filter(|e| e.kind == FileKind::File) {
        lines.push(entry.name.clone());
    }
    lines.join("\n")
}

fn cat_file(files: &FilesState, name: &str) -> String {
    let found = files
        .children(None)
        .into_iter()
        .find(|r| r.name == name && r.kind == FileKind::File);
    match found {
        Some(record) => record.content.clone().unwrap_or_default(),
        None => format!("cat: {name}: No such file or directory"),
    }
}

fn remove_file(files: &mut FilesState, name: &str) -> String {
    let found = files
        .children(None)
        .into_iter()
        .find(|r| r.name == name)
        .map(|r| (r.id.clone(), r.kind));
    match found {
        Some((_, FileKind::Folder)) => format!("rm: cannot remove '{name}': Is a directory"),
        Some((id, FileKind::File)) => {
            files.delete(&id);
            format!("'{name}' removed")
        }
        None => format!("rm: cannot remove '{name}': No such file or directory"),
    }
}
