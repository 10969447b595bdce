//! Startup defaults, read from `wavescope.toml`.
//!
//! Loading never fails: a missing file yields the built-in defaults,
//! missing keys fall back per field, and an unparseable document falls
//! back wholesale, so a hand-edited config can never stop the application
//! from starting.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dsp::waveform::WaveKind;
use crate::session::{Session, WaveformSpec};

/// Default configuration filename, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "wavescope.toml";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub session: SessionDefaults,
    pub waveform_defaults: WaveformDefaults,
    pub display: DisplayDefaults,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SessionDefaults {
    /// Wave duration in seconds (0.5 - 120.0).
    pub duration: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WaveformDefaults {
    /// sine, square, sawtooth or triangle; anything else resolves to sine.
    pub kind: String,
    pub frequency: f64,
    pub amplitude: f64,
    pub offset: f64,
    pub duty_cycle: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayDefaults {
    /// Y-axis label for the chart.
    pub y_axis_title: String,
    /// Fixed y bounds used when auto-scale is off.
    pub y_min: f64,
    pub y_max: f64,
    pub theme: Theme,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self { duration: 1.0 }
    }
}

impl Default for WaveformDefaults {
    fn default() -> Self {
        Self {
            kind: "sine".to_string(),
            frequency: 5.0,
            amplitude: 5.0,
            offset: 5.0,
            duty_cycle: 50.0,
        }
    }
}

impl Default for DisplayDefaults {
    fn default() -> Self {
        Self {
            y_axis_title: "Amplitude".to_string(),
            y_min: 0.0,
            y_max: 10.0,
            theme: Theme::Dark,
        }
    }
}

impl WaveformDefaults {
    /// The configured wave kind, with unknown names resolving to sine.
    pub fn wave_kind(&self) -> WaveKind {
        WaveKind::from_name(&self.kind)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not write config: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// Load from `path`, falling back to the built-in defaults when the
    /// file is missing or not valid TOML.
    pub fn load(path: impl AsRef<Path>) -> Config {
        match fs::read_to_string(path) {
            Ok(text) => toml::from_str(&text).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    }

    /// Write the full document to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Build the starting session from these defaults.
    pub fn initial_session(&self) -> Session {
        let mut session = Session::new();
        session.set_duration(self.session.duration);
        let defaults = &self.waveform_defaults;
        session.waveforms[0] = WaveformSpec::new(
            0,
            defaults.wave_kind(),
            defaults.frequency,
            defaults.amplitude,
            defaults.offset,
            defaults.duty_cycle,
        );
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let config = Config::load("/definitely/not/here/wavescope.toml");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_document_loads_defaults() {
        let config: Config = toml::from_str("this is not toml [").unwrap_or_default();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_keys_fall_back_per_field() {
        let config: Config = toml::from_str(
            "[waveform_defaults]\nfrequency = 2.5\n",
        )
        .unwrap();
        assert_eq!(config.waveform_defaults.frequency, 2.5);
        assert_eq!(config.waveform_defaults.amplitude, 5.0);
        assert_eq!(config.session.duration, 1.0);
        assert_eq!(config.display.theme, Theme::Dark);
    }

    #[test]
    fn unknown_kind_resolves_to_sine() {
        let config: Config = toml::from_str(
            "[waveform_defaults]\nkind = \"sinusoid\"\n",
        )
        .unwrap();
        assert_eq!(config.waveform_defaults.wave_kind(), WaveKind::Sine);
    }

    #[test]
    fn document_round_trips() {
        let mut config = Config::default();
        config.session.duration = 12.0;
        config.waveform_defaults.kind = "triangle".to_string();
        config.display.theme = Theme::Light;

        let text = toml::to_string_pretty(&config).unwrap();
        let reloaded: Config = toml::from_str(&text).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn initial_session_applies_defaults() {
        let mut config = Config::default();
        config.session.duration = 4.0;
        config.waveform_defaults.kind = "square".to_string();
        config.waveform_defaults.duty_cycle = 25.0;

        let session = config.initial_session();
        assert_eq!(session.duration(), 4.0);
        assert_eq!(session.waveforms.len(), 1);
        assert_eq!(session.waveforms[0].kind, WaveKind::Square);
        assert_eq!(session.waveforms[0].duty_cycle, 25.0);
    }

    #[test]
    fn initial_session_clamps_like_any_other_caller() {
        let mut config = Config::default();
        config.session.duration = 999.0;
        config.waveform_defaults.frequency = -3.0;

        let session = config.initial_session();
        assert_eq!(session.duration(), crate::session::DURATION_MAX);
        assert_eq!(session.waveforms[0].frequency, crate::session::FREQ_MIN);
    }
}
