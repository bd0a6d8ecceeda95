//! Configuration for the starweave background.
//!
//! Every value has a built-in default. A `config.toml` in the platform config
//! directory may override any subset of them:
//!
//! ```toml
//! [stars]
//! count = 1500
//!
//! [wave]
//! rings = 6
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

/// Name of the config file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Errors produced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Where a loaded [`Config`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file.
    File(PathBuf),
    /// No file at this path, the defaults are used.
    Missing(PathBuf),
    /// No home directory to look in, the defaults are used.
    NoHome,
}

/// Full application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub surface: SurfaceConfig,
    pub stars: StarConfig,
    pub triangle: TriangleConfig,
    pub wave: WaveConfig,
    pub animation: AnimationConfig,
    pub logging: LoggingConfig,
}

/// How the terminal is mapped onto the drawing surface.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurfaceConfig {
    /// Share of the terminal width and height given to the canvas.
    pub fraction: f64,
    /// Virtual pixels per terminal column.
    pub cell_width: f64,
    /// Virtual pixels per terminal row.
    pub cell_height: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            fraction: 0.8,
            cell_width: 8.0,
            cell_height: 16.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StarConfig {
    pub count: usize,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self { count: 400 }
    }
}

/// Triangle network layout and look.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TriangleConfig {
    /// Candidate samples per square virtual pixel of triangle area.
    pub density: f64,
    pub max_dist: f64,
    pub point_radius: f64,
    /// Vertices as fractions of the surface width and height.
    pub vertices: [[f64; 2]; 3],
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            density: 0.00005,
            max_dist: 70.0,
            point_radius: 1.2,
            vertices: [[0.4, 0.2], [0.65, 0.8], [0.15, 0.8]],
        }
    }
}

/// Radial wave layout and motion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaveConfig {
    pub rings: usize,
    pub points_per_ring: usize,
    pub radius_increment: f64,
    pub amplitude: f64,
    /// Phase advance per frame.
    pub speed: f64,
    /// Phase per virtual pixel of distance from the origin.
    pub frequency: f64,
    pub max_dist: f64,
    pub point_radius: f64,
    /// Origin as a fraction of the surface width and height.
    pub origin: [f64; 2],
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            rings: 10,
            points_per_ring: 60,
            radius_increment: 30.0,
            amplitude: 10.0,
            speed: 0.05,
            frequency: 0.02,
            max_dist: 30.0,
            point_radius: 1.0,
            origin: [0.85, 0.5],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    pub frame_interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Platform directories for starweave, if a home directory is known.
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "starweave")
    }

    /// Path of the user config file.
    pub fn default_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load the user config file, falling back to defaults when there is none.
    ///
    /// This runs before logging is set up, so the caller reports the
    /// returned [`ConfigSource`] once it can.
    pub fn load() -> Result<(Self, ConfigSource), ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok((Self::default(), ConfigSource::NoHome)),
        }
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok((Self::default(), ConfigSource::Missing(path.to_path_buf())));
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok((config, ConfigSource::File(path.to_path_buf())))
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<string>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the renderer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.surface;
        if !(s.fraction > 0.0 && s.fraction <= 1.0) {
            return invalid(format!("surface.fraction must be in (0, 1], got {}", s.fraction));
        }
        if !(s.cell_width > 0.0 && s.cell_height > 0.0) {
            return invalid("surface cell sizes must be positive".to_string());
        }

        let t = &self.triangle;
        if !(t.density >= 0.0 && t.density <= 1.0) {
            return invalid(format!("triangle.density must be in [0, 1], got {}", t.density));
        }
        check_distance("triangle.max_dist", t.max_dist)?;

        let w = &self.wave;
        check_distance("wave.max_dist", w.max_dist)?;
        if !(w.radius_increment > 0.0 && w.radius_increment.is_finite()) {
            return invalid(format!(
                "wave.radius_increment must be positive, got {}",
                w.radius_increment
            ));
        }

        if self.animation.frame_interval_ms == 0 {
            return invalid("animation.frame_interval_ms must be at least 1".to_string());
        }

        Ok(())
    }
}

fn check_distance(name: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        invalid(format!("{name} must be positive, got {value}"))
    }
}

fn invalid(msg: String) -> Result<(), ConfigError> {
    Err(ConfigError::Invalid(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_and_documented() {
        let c = Config::default();
        assert_eq!(c.surface.fraction, 0.8);
        assert_eq!(c.triangle.density, 0.00005);
        assert_eq!(c.triangle.max_dist, 70.0);
        assert_eq!(c.triangle.point_radius, 1.2);
        assert_eq!(c.wave.rings, 10);
        assert_eq!(c.wave.points_per_ring, 60);
        assert_eq!(c.wave.radius_increment, 30.0);
        assert_eq!(c.wave.amplitude, 10.0);
        assert_eq!(c.wave.speed, 0.05);
        assert_eq!(c.wave.frequency, 0.02);
        assert_eq!(c.wave.max_dist, 30.0);
        assert_eq!(c.wave.point_radius, 1.0);
        assert_eq!(c.wave.origin, [0.85, 0.5]);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn partial_override() {
        let c = Config::from_toml_str(
            r#"
            [stars]
            count = 2000000

            [wave]
            rings = 3
            "#,
        )
        .unwrap();
        assert_eq!(c.stars.count, 2_000_000);
        assert_eq!(c.wave.rings, 3);
        assert_eq!(c.wave.points_per_ring, 60);
        assert_eq!(c.triangle, TriangleConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml_str("[stars]\ncuont = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn density_of_one_is_accepted() {
        let c = Config::from_toml_str("[triangle]\ndensity = 1.0").unwrap();
        assert_eq!(c.triangle.density, 1.0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        for doc in [
            "[surface]\nfraction = 0.0",
            "[surface]\nfraction = 1.5",
            "[surface]\ncell_width = 0.0",
            "[triangle]\ndensity = -1.0",
            "[triangle]\ndensity = 1.5",
            "[triangle]\ndensity = 1e12",
            "[triangle]\ndensity = inf",
            "[triangle]\ndensity = nan",
            "[triangle]\nmax_dist = 0.0",
            "[wave]\nmax_dist = -3.0",
            "[wave]\nradius_increment = 0.0",
            "[animation]\nframe_interval_ms = 0",
        ] {
            let err = Config::from_toml_str(doc).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{doc}");
        }
    }

    #[test]
    fn missing_file_is_default() {
        let path = std::env::temp_dir().join("starweave-test-does-not-exist.toml");
        let (config, source) = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(source, ConfigSource::Missing(path));
    }

    #[test]
    fn load_from_reads_file() {
        let path = std::env::temp_dir().join(format!("starweave-test-{}.toml", std::process::id()));
        fs::write(&path, "[triangle]\ndensity = 0.001\n").unwrap();
        let loaded = Config::load_from(&path);
        let _ = fs::remove_file(&path);
        let (config, source) = loaded.unwrap();
        assert_eq!(config.triangle.density, 0.001);
        assert_eq!(source, ConfigSource::File(path));
    }
}
