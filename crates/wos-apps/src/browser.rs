//! Browser state: tabs, bookmarks, and per-session navigation history.

use serde::{Deserialize, Serialize};
use wos_store::{keys, BlobStore, BlobStoreExt};

const HOME_URL: &str = "https://www.google.com";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub title: String,
    pub favicon: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
}

/// Turn address-bar input into a navigable URL. Input with a space or
/// no dot becomes a search query; a bare host gets an https scheme.
pub fn normalize_url(input: &str) -> String {
    let input = input.trim();
    if input.starts_with("http://") || input.starts_with("https://") {
        return input.to_string();
    }
    if input.contains(' ') || !input.contains('.') {
        return format!("{HOME_URL}/search?q={}", encode_query(input));
    }
    format!("https://{input}")
}

fn encode_query(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    for byte in query.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// The display name for a URL: its host, without a leading `www.`.
pub fn domain(url: &str) -> String {
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let host = stripped
        .split(['/', '?', '#'])
        .next()
        .unwrap_or(stripped);
    host.strip_prefix("www.").unwrap_or(host).to_string()
}

#[derive(Clone, Debug)]
pub struct BrowserState {
    tabs: Vec<Tab>,
    bookmarks: Vec<Bookmark>,
    history: Vec<String>,
    history_index: usize,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            tabs: vec![Tab {
                id: "tab-0".to_string(),
                url: HOME_URL.to_string(),
                title: "Google".to_string(),
                favicon: format!("{HOME_URL}/favicon.ico"),
                is_active: true,
            }],
            bookmarks: Vec::new(),
            history: vec![HOME_URL.to_string()],
            history_index: 0,
        }
    }
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tabs and bookmarks persist; navigation history is per session.
    pub fn load<S: BlobStore + ?Sized>(store: &S, user_id: &str) -> Self {
        let mut state = Self::default();
        if let Some(tabs) = store.get_json::<Vec<Tab>>(&keys::browser_tabs(user_id)) {
            if !tabs.is_empty() {
                state.tabs = tabs;
                if !state.tabs.iter().any(|t| t.is_active) {
                    state.tabs[0].is_active = true;
                }
                if let Some(active) = state.tabs.iter().find(|t| t.is_active) {
                    state.history = vec![active.url.clone()];
                }
            }
        }
        if let Some(bookmarks) = store.get_json(&keys::browser_bookmarks(user_id)) {
            state.bookmarks = bookmarks;
        }
        state
    }

    pub fn save<S: BlobStore + ?Sized>(&self, store: &S, user_id: &str) {
        store.set_json(&keys::browser_tabs(user_id), &self.tabs);
        store.set_json(&keys::browser_bookmarks(user_id), &self.bookmarks);
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.is_active)
    }

    /// Open a fresh home-page tab and make it active.
    pub fn new_tab(&mut self, now_ms: u64) -> String {
        let mut id = format!("tab-{now_ms}");
        let mut bump = 1u64;
        while self.tabs.iter().any(|t| t.id == id) {
            id = format!("tab-{now_ms}-{bump}");
            bump += 1;
        }

        for tab in &mut self.tabs {
            tab.is_active = false;
        }
        self.tabs.push(Tab {
            id: id.clone(),
            url: HOME_URL.to_string(),
            title: "New Tab".to_string(),
            favicon: String::new(),
            is_active: true,
        });
        self.history = vec![HOME_URL.to_string()];
        self.history_index = 0;
        id
    }

    pub fn switch_tab(&mut self, id: &str) {
        if !self.tabs.iter().any(|t| t.id == id) {
            return;
        }
        for tab in &mut self.tabs {
            tab.is_active = tab.id == id;
        }
        if let Some(active) = self.active_tab() {
            self.history = vec![active.url.clone()];
            self.history_index = 0;
        }
    }

    /// Close a tab. The last tab stays open; closing the active tab
    /// activates its nearest remaining neighbour.
    pub fn close_tab(&mut self, id: &str) {
        if self.tabs.len() <= 1 {
            return;
        }
        let Some(index) = self.tabs.iter().position(|t| t.id == id) else {
            return;
        };
        let was_active = self.tabs[index].is_active;
        self.tabs.remove(index);
        if was_active {
            let next = index.min(self.tabs.len() - 1);
            self.tabs[next].is_active = true;
            self.history = vec![self.tabs[next].url.clone()];
            self.history_index = 0;
        }
    }

    /// Navigate the active tab, truncating any forward history.
    pub fn navigate(&mut self, input: &str) {
        let url = normalize_url(input);
        let title = domain(&url);
        let Some(tab) = self.tabs.iter_mut().find(|t| t.is_active) else {
            return;
        };
        tab.url = url.clone();
        tab.title = title;

        self.history.truncate(self.history_index + 1);
        self.history.push(url);
        self.history_index = self.history.len() - 1;
    }

    pub fn can_go_back(&self) -> bool {
        self.history_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }

    pub fn go_back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.history_index -= 1;
        self.apply_history_url()
    }

    pub fn go_forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.history_index += 1;
        self.apply_history_url()
    }

    fn apply_history_url(&mut self) -> Option<&str> {
        let url = self.history[self.history_index].clone();
        let title = domain(&url);
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.is_active) {
            tab.url = url;
            tab.title = title;
        }
        Some(&self.history[self.history_index])
    }

    pub fn go_home(&mut self) {
        self.navigate(HOME_URL);
    }

    /// Bookmark the active tab; duplicates (by URL) are ignored.
    pub fn add_bookmark(&mut self) -> bool {
        let Some(tab) = self.active_tab() else {
            return false;
        };
        if self.bookmarks.iter().any(|b| b.url == tab.url) {
            return false;
        }
        let bookmark = Bookmark {
            title: tab.title.clone(),
            url: tab.url.clone(),
        };
        self.bookmarks.push(bookmark);
        true
    }

    pub fn remove_bookmark(&mut self, url: &str) {
        self.bookmarks.retain(|b| b.url != url);
    }
}
