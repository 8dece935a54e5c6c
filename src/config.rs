use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::error::{GameError, Result};
use crate::game::deck::DeckSize;

/// Allowed reveal durations in seconds.
pub const TIMER_RANGE: RangeInclusive<u32> = 1..=120;

pub const DEFAULT_TIMER_SECS: u32 = 60;

/// What the next round will look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RoundSettingsFile")]
pub struct RoundSettings {
    pub deck_size: DeckSize,
    pub card_count: usize,
    pub timer_secs: u32,
}

/// On-disk form of [`RoundSettings`]. A missing card count means the whole
/// configured deck, not the whole default deck.
#[derive(Deserialize)]
#[serde(default)]
struct RoundSettingsFile {
    deck_size: DeckSize,
    card_count: Option<usize>,
    timer_secs: u32,
}

impl Default for RoundSettingsFile {
    fn default() -> Self {
        Self {
            deck_size: DeckSize::default(),
            card_count: None,
            timer_secs: DEFAULT_TIMER_SECS,
        }
    }
}

impl From<RoundSettingsFile> for RoundSettings {
    fn from(file: RoundSettingsFile) -> Self {
        Self {
            deck_size: file.deck_size,
            card_count: file.card_count.unwrap_or(file.deck_size.count()),
            timer_secs: file.timer_secs,
        }
    }
}

impl Default for RoundSettings {
    fn default() -> Self {
        let deck_size = DeckSize::default();
        Self {
            deck_size,
            card_count: deck_size.count(),
            timer_secs: DEFAULT_TIMER_SECS,
        }
    }
}

impl RoundSettings {
    pub fn validate(&self) -> Result<()> {
        check_card_count(self.card_count as i64, self.deck_size)?;
        check_timer(self.timer_secs as i64)?;
        Ok(())
    }
}

pub(crate) fn check_card_count(value: i64, deck_size: DeckSize) -> Result<usize> {
    let max = deck_size.count();
    if value > 0 && (value as u64) <= max as u64 {
        Ok(value as usize)
    } else {
        Err(GameError::CardCountOutOfRange { value, max })
    }
}

pub(crate) fn check_timer(value: i64) -> Result<u32> {
    let (min, max) = (*TIMER_RANGE.start(), *TIMER_RANGE.end());
    if value >= min as i64 && value <= max as i64 {
        Ok(value as u32)
    } else {
        Err(GameError::TimerOutOfRange { value, min, max })
    }
}

/// Application configuration.
///
/// The browser build always runs with [`Config::default`]; the native launcher
/// reads it from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the card images live, as seen by egui's image loaders
    pub media_root: String,
    pub dark_mode: bool,
    pub round: RoundSettings,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            media_root: "media".to_string(),
            dark_mode: true,
            round: RoundSettings::default(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::Config;
    use anyhow::{Context, Result};
    use std::fs;
    use std::path::Path;

    impl Config {
        /// Load configuration from `path`. If the file does not exist, create it
        /// with defaults and return the default config.
        pub fn load_or_create(path: &Path) -> Result<Self> {
            if path.exists() {
                let s = fs::read_to_string(path)
                    .with_context(|| format!("reading config file '{}'", path.display()))?;
                let cfg: Config = toml::from_str(&s)
                    .with_context(|| format!("parsing TOML config '{}'", path.display()))?;
                cfg.round
                    .validate()
                    .with_context(|| format!("invalid round settings in '{}'", path.display()))?;
                Ok(cfg)
            } else {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() && !parent.exists() {
                        fs::create_dir_all(parent).with_context(|| {
                            format!("creating config directory '{}'", parent.display())
                        })?;
                    }
                }
                let cfg = Config::default();
                cfg.save(path)?;
                tracing::info!("wrote default config to {}", path.display());
                Ok(cfg)
            }
        }

        pub fn save(&self, path: &Path) -> Result<()> {
            let toml_text =
                toml::to_string_pretty(self).with_context(|| "serializing config to TOML")?;
            fs::write(path, toml_text)
                .with_context(|| format!("writing config to '{}'", path.display()))?;
            Ok(())
        }
    }
}
