//! Runtime configuration, read from an optional TOML file.
use std::path::{Path, PathBuf};

use bevy::prelude::Resource;
use serde::Deserialize;

use crate::utils::constants::cube_constants::{
    GRID_DECIMALS, PIECE_GAP, PIECE_SIZE, SLICE_TOLERANCE, TURN_SPEED_DEGREES,
};
use crate::utils::constants::game_constants::{SCRAMBLE_MOVES, SEED};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunable parameters of the cube. Missing keys take the compiled-in defaults.
#[derive(Resource, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CubeConfig {
    pub piece_size: f32,
    pub piece_gap: f32,
    pub slice_tolerance: f32,
    /// Degrees per second.
    pub turn_speed: f32,
    pub scramble_moves: u32,
    pub seed: u64,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            piece_size: PIECE_SIZE,
            piece_gap: PIECE_GAP,
            slice_tolerance: SLICE_TOLERANCE,
            turn_speed: TURN_SPEED_DEGREES,
            scramble_moves: SCRAMBLE_MOVES,
            seed: SEED,
        }
    }
}

impl CubeConfig {
    /// Center-to-center distance between neighbouring pieces.
    pub fn slice_spacing(&self) -> f32 {
        self.piece_size + self.piece_gap
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Loads `path` if it exists. A missing file silently yields the defaults,
    /// any other failure is logged before falling back to them.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::debug!("loaded {config:?} from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.piece_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "piece_size must be positive, got {}",
                self.piece_size
            )));
        }
        if !(self.piece_gap >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "piece_gap must not be negative, got {}",
                self.piece_gap
            )));
        }
        if !(self.turn_speed > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "turn_speed must be positive, got {}",
                self.turn_speed
            )));
        }
        let spacing = self.slice_spacing();
        if !(self.slice_tolerance > 0.0 && self.slice_tolerance < spacing / 2.0) {
            return Err(ConfigError::Invalid(format!(
                "slice_tolerance must lie in (0, {}), got {}",
                spacing / 2.0,
                self.slice_tolerance
            )));
        }
        // Committed positions are rounded, so the spacing itself must survive rounding.
        let scaled = spacing * 10f32.powi(GRID_DECIMALS);
        if (scaled - scaled.round()).abs() > 1e-3 {
            return Err(ConfigError::Invalid(format!(
                "piece_size + piece_gap must have at most {GRID_DECIMALS} decimals, got {spacing}"
            )));
        }
        Ok(())
    }
}
