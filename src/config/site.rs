use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{FolioError, FolioResult};
use crate::presets::counter::{Counter, CounterConfig};
use crate::presets::loading::{LoadingBar, LoadingConfig};
use crate::presets::rain::{MatrixRain, RainConfig};
use crate::presets::terminal::{TerminalConfig, TerminalScript};
use crate::presets::typewriter::{Typewriter, TypewriterConfig};
use crate::ui::theme::Theme;

/// A counter hosted by a page element.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CounterSpec {
    /// Host element id.
    pub id: String,
    /// Target as written in the element text, e.g. `"1,200"`.
    pub target: String,
    #[serde(flatten)]
    pub config: CounterConfig,
}

/// Everything the page scripts need, in one JSON document. Missing fields take defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: Theme,
    pub typewriter: TypewriterConfig,
    pub loading: LoadingConfig,
    pub counters: Vec<CounterSpec>,
    /// Fraction of a counter's element that must be visible before it starts.
    pub counter_threshold: f64,
    pub terminal: TerminalConfig,
    /// Lines shown by the terminal preset when played on its own.
    pub terminal_lines: Vec<String>,
    pub rain: RainConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            typewriter: TypewriterConfig::default(),
            loading: LoadingConfig::default(),
            counters: vec![
                CounterSpec {
                    id: "projects".to_string(),
                    target: "42".to_string(),
                    config: CounterConfig::default(),
                },
                CounterSpec {
                    id: "commits".to_string(),
                    target: "1,200".to_string(),
                    config: CounterConfig::default(),
                },
            ],
            counter_threshold: 0.5,
            terminal: TerminalConfig::default(),
            terminal_lines: vec![
                "$ whoami".to_string(),
                "> portfolio visitor".to_string(),
                "$ cat welcome.txt".to_string(),
                "> Thanks for stopping by!".to_string(),
            ],
            rain: RainConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FolioError::serde(format!("parse site config JSON: {e}")))
    }

    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| FolioError::serde(format!("parse site config JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::config(format!("open site config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn to_json_pretty(&self) -> FolioResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FolioError::serde(format!("serialize site config: {e}")))
    }

    /// Build every preset once so bad values surface before anything plays.
    pub fn validate(&self) -> FolioResult<()> {
        self.typewriter()?;
        self.loading_bar()?;
        self.rain()?;
        self.terminal_script()?;
        if !(0.0..=1.0).contains(&self.counter_threshold) {
            return Err(FolioError::validation(
                "counter_threshold must be within [0, 1]",
            ));
        }
        let mut seen = std::collections::BTreeSet::new();
        for spec in &self.counters {
            if !seen.insert(spec.id.as_str()) {
                return Err(FolioError::validation(format!(
                    "duplicate counter id '{}'",
                    spec.id
                )));
            }
            Counter::from_text(&spec.target, spec.config)?;
        }
        Ok(())
    }

    pub fn typewriter(&self) -> FolioResult<Typewriter> {
        Typewriter::new(self.typewriter.clone())
    }

    pub fn loading_bar(&self) -> FolioResult<LoadingBar> {
        LoadingBar::new(self.loading.clone())
    }

    pub fn rain(&self) -> FolioResult<MatrixRain> {
        MatrixRain::new(self.rain.clone())
    }

    pub fn terminal_script(&self) -> FolioResult<TerminalScript> {
        TerminalScript::new(&self.terminal_lines, self.terminal)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/site.rs"]
mod tests;
