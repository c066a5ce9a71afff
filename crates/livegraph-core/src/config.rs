// File: crates/livegraph-core/src/config.rs
// Summary: DrawConfig; styling pass-through plus margin, ticks, precision and crop settings, loadable from TOML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::buffer::DEFAULT_CAPACITY;
use crate::error::ChartError;
use crate::model::ExtremaPolicy;
use crate::theme::Theme;
use crate::ticks::{AxisTickSet, TickPrecision};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(#[from] ChartError),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    pub theme: Theme,
    pub show_grid: bool,
    pub show_border: bool,
    pub show_ticks: bool,
    pub show_tick_labels: bool,
    pub show_x_ticks: bool,
    pub show_y_ticks: bool,
    /// Full tick mark length in pixels; half is drawn on each side of the axis.
    pub tick_length: f32,
    pub margin: f64,
    /// Grow or shrink the margin to fit the widest tick label before each render.
    pub auto_margin: bool,
    pub line_thickness: f32,
    pub font_size: f32,
    pub precision: TickPrecision,
    pub crop_to_data: bool,
    pub capacity: usize,
    pub extrema_policy: ExtremaPolicy,
    pub x_ticks: AxisTickSet,
    pub y_ticks: AxisTickSet,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            theme: Theme::classic(),
            show_grid: false,
            show_border: true,
            show_ticks: true,
            show_tick_labels: true,
            show_x_ticks: true,
            show_y_ticks: true,
            tick_length: 10.0,
            margin: 32.0,
            auto_margin: false,
            line_thickness: 1.0,
            font_size: 12.0,
            precision: TickPrecision::Integer,
            crop_to_data: false,
            capacity: DEFAULT_CAPACITY,
            extrema_policy: ExtremaPolicy::AllTime,
            x_ticks: AxisTickSet::new(),
            y_ticks: AxisTickSet::new(),
        }
    }
}

impl DrawConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded draw config");
        Ok(config)
    }

    /// Parse and validate. Tick sets are brought to the configured precision.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let mut config: DrawConfig = toml::from_str(s)?;
        config.validate()?;
        config.normalize();
        Ok(config)
    }

    /// Serialize with both tick sets already in the configured precision.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        let mut config = self.clone();
        config.normalize();
        Ok(toml::to_string_pretty(&config)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if self.capacity == 0 {
            return Err(ChartError::InvalidCapacity(self.capacity));
        }
        validate_margin(self.margin)
    }

    /// Bring both tick sets to `precision`, the single precision for the whole chart.
    pub fn normalize(&mut self) -> &mut Self {
        self.x_ticks.set_precision(self.precision);
        self.y_ticks.set_precision(self.precision);
        self
    }

    pub fn half_tick(&self) -> f64 {
        (self.tick_length / 2.0) as f64
    }
}

pub(crate) fn validate_margin(margin: f64) -> Result<(), ChartError> {
    if margin.is_finite() && margin >= 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidMargin(margin))
    }
}
