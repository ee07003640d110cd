//! # UI Theme
//!
//! Light/dark presentation mode and the surface colours of the phone frame.
//!
//! The selected [`Theme`] is persisted by the settings handler; the
//! [`VisualMode`] flag is what the rendering layer polls each frame.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Presentation theme selected on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to durable storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// Shared dark-mode switch read by the rendering layer.
///
/// Cloning yields another handle to the same flag, so a renderer can keep
/// one while the controller flips it from `set_theme`.
#[derive(Debug, Clone, Default)]
pub struct VisualMode {
    dark: Arc<AtomicBool>,
}

impl VisualMode {
    pub fn new(theme: Theme) -> Self {
        let mode = Self::default();
        mode.apply(theme);
        mode
    }

    /// Apply a theme; visible to every handle immediately.
    pub fn apply(&self, theme: Theme) {
        self.dark.store(theme.is_dark(), Ordering::SeqCst);
    }

    pub fn is_dark(&self) -> bool {
        self.dark.load(Ordering::SeqCst)
    }

    pub fn theme(&self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Surface colours for one theme, as RGB triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Page background gradient (from, via, to)
    pub backdrop: [[u8; 3]; 3],
    /// Phone frame fill
    pub frame: [u8; 3],
    /// Phone frame bezel
    pub bezel: [u8; 3],
    /// Bottom tab bar fill
    pub tab_bar: [u8; 3],
    /// Tab bar top border
    pub tab_bar_border: [u8; 3],
    /// Active tab tint
    pub tab_active: [u8; 3],
    /// Inactive tab tint
    pub tab_inactive: [u8; 3],
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                backdrop: [[239, 246, 255], [238, 242, 255], [250, 245, 255]],
                frame: [255, 255, 255],
                bezel: [31, 41, 55],
                tab_bar: [255, 255, 255],
                tab_bar_border: [229, 231, 235],
                tab_active: [37, 99, 235],
                tab_inactive: [156, 163, 175],
            },
            Theme::Dark => Palette {
                backdrop: [[17, 24, 39], [23, 37, 84], [30, 27, 75]],
                frame: [17, 24, 39],
                bezel: [31, 41, 55],
                tab_bar: [31, 41, 55],
                tab_bar_border: [55, 65, 81],
                tab_active: [37, 99, 235],
                tab_inactive: [156, 163, 175],
            },
        }
    }
}
