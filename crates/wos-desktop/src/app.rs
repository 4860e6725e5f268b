//! Application types hosted in desktop windows

use serde::{Deserialize, Serialize};

use crate::math::Size;

/// The set of applications a window can host.
///
/// The desktop treats the hosted pane as opaque; this tag only drives the
/// window title, the default geometry, and routing to the content host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AppType {
    #[default]
    FileExplorer,
    CodeEditor,
    Terminal,
    Settings,
    Calendar,
    Notes,
    Browser,
    Weather,
}

impl AppType {
    /// All known application types, in launcher order
    pub const ALL: [AppType; 8] = [
        AppType::FileExplorer,
        AppType::CodeEditor,
        AppType::Terminal,
        AppType::Settings,
        AppType::Calendar,
        AppType::Notes,
        AppType::Browser,
        AppType::Weather,
    ];

    /// Window title for this application
    pub fn title(&self) -> &'static str {
        match self {
            AppType::FileExplorer => "File Explorer",
            AppType::CodeEditor => "Code Editor",
            AppType::Terminal => "Terminal",
            AppType::Settings => "Settings",
            AppType::Calendar => "Calendar",
            AppType::Notes => "Notes",
            AppType::Browser => "Browser",
            AppType::Weather => "Weather",
        }
    }

    /// Default window size for this application
    pub fn default_size(&self) -> Size {
        match self {
            AppType::FileExplorer => Size::new(700.0, 500.0),
            AppType::CodeEditor => Size::new(900.0, 600.0),
            AppType::Terminal => Size::new(700.0, 500.0),
            AppType::Settings => Size::new(500.0, 400.0),
            AppType::Calendar => Size::new(800.0, 600.0),
            AppType::Notes => Size::new(800.0, 600.0),
            AppType::Browser => Size::new(900.0, 600.0),
            AppType::Weather => Size::new(320.0, 360.0),
        }
    }

    /// Stable tag used for routing to the content host
    pub fn tag(&self) -> &'static str {
        match self {
            AppType::FileExplorer => "fileExplorer",
            AppType::CodeEditor => "codeEditor",
            AppType::Terminal => "terminal",
            AppType::Settings => "settings",
            AppType::Calendar => "calendar",
            AppType::Notes => "notes",
            AppType::Browser => "browser",
            AppType::Weather => "weather",
        }
    }
}

impl core::str::FromStr for AppType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppType::ALL
            .into_iter()
            .find(|app| app.tag() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes() {
        assert_eq!(AppType::FileExplorer.default_size(), Size::new(700.0, 500.0));
        assert_eq!(AppType::CodeEditor.default_size(), Size::new(900.0, 600.0));
        assert_eq!(AppType::Settings.default_size(), Size::new(500.0, 400.0));
    }

    #[test]
    fn test_tag_round_trip() {
        for app in AppType::ALL {
            assert_eq!(app.tag().parse::<AppType>(), Ok(app));
        }
        assert!("solitaire".parse::<AppType>().is_err());
    }

    #[test]
    fn test_serde_tag_matches_str_tag() {
        for app in AppType::ALL {
            let json = serde_json::to_string(&app).unwrap();
            assert_eq!(json, format!("\"{}\"", app.tag()));
        }
    }
}
