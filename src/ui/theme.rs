use std::sync::{Mutex, OnceLock};

use crate::foundation::error::{FolioError, FolioResult};

/// Class set on the document body while the dark theme is active.
pub const DARK_THEME_CLASS: &str = "dark-theme";

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the toggle button: the moon while dark, the sun while light.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "image/sun.png",
            Self::Dark => "image/moon.png",
        }
    }

    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Self::Light => None,
            Self::Dark => Some(DARK_THEME_CLASS),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(FolioError::config(format!("unknown theme '{other}'"))),
        }
    }
}

/// Page-level UI state. Mutated only through [`UiState::set_theme`] / [`UiState::toggle_theme`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    theme: Theme,
    toggles: u64,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self { theme, toggles: 0 }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// How many times the theme has changed since initialization.
    pub fn toggles(&self) -> u64 {
        self.toggles
    }

    /// Returns the previous theme.
    pub fn set_theme(&mut self, theme: Theme) -> Theme {
        let prev = self.theme;
        if prev != theme {
            self.theme = theme;
            self.toggles += 1;
        }
        prev
    }

    /// Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }
}

static UI_STATE: OnceLock<Mutex<UiState>> = OnceLock::new();

/// Initialize the process-wide UI state. Fails if it was already initialized.
pub fn init_ui_state(theme: Theme) -> FolioResult<()> {
    UI_STATE
        .set(Mutex::new(UiState::new(theme)))
        .map_err(|_| FolioError::validation("UI state is already initialized"))?;
    tracing::debug!(%theme, "ui state initialized");
    Ok(())
}

/// Run `f` against the process-wide UI state.
pub fn with_ui_state<R>(f: impl FnOnce(&mut UiState) -> R) -> FolioResult<R> {
    let cell = UI_STATE
        .get()
        .ok_or_else(|| FolioError::validation("UI state is not initialized"))?;
    let mut guard = cell
        .lock()
        .map_err(|_| FolioError::validation("UI state lock is poisoned"))?;
    Ok(f(&mut *guard))
}

pub fn current_theme() -> FolioResult<Theme> {
    with_ui_state(|ui| ui.theme())
}

/// Flip the process-wide theme and return the new one.
pub fn toggle_theme() -> FolioResult<Theme> {
    let theme = with_ui_state(UiState::toggle_theme)?;
    tracing::debug!(%theme, "theme toggled");
    Ok(theme)
}

pub fn set_theme(theme: Theme) -> FolioResult<Theme> {
    with_ui_state(|ui| ui.set_theme(theme))
}

#[cfg(test)]
#[path = "../../tests/unit/ui/theme.rs"]
mod tests;
