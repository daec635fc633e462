//! Layered configuration resolution: built-in defaults, then an optional
//! `panchang.toml` in the working directory, then explicit CLI overrides.
//! Resolved once at startup into an immutable [`Config`] and threaded
//! explicitly through calls — never a process-global singleton.

use panchang_riseset::Location;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Empirical ayanamsa-compensation buffers used by the Tamil and Malayalam
/// critical-time rules (minutes). Carried here for documentation/display;
/// the literal spec values are kept as-is (see DESIGN.md) rather than
/// recalibrated, so these are informational rather than threaded into
/// `panchang_solar`'s critical-time computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBuffers {
    pub tamil_min: f64,
    pub malayalam_min: f64,
}

impl Default for RegionBuffers {
    fn default() -> Self {
        Self {
            tamil_min: 8.0,
            malayalam_min: 9.5,
        }
    }
}

/// The fully resolved configuration threaded through a single run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub default_location: Location,
    pub region_buffers: RegionBuffers,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_location: Location::NEW_DELHI,
            region_buffers: RegionBuffers::default(),
        }
    }
}

/// Shape of an optional `panchang.toml` file. Every field is optional;
/// absence of the file entirely is not an error.
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    location: Option<RawLocation>,
}

#[derive(Debug, Deserialize, Default)]
struct RawLocation {
    latitude_deg: Option<f64>,
    longitude_deg: Option<f64>,
    altitude_m: Option<f64>,
    utc_offset_hours: Option<f64>,
}

/// Explicit overrides parsed from CLI flags (`-l`, `-u`). `None` fields
/// fall through to `panchang.toml`, then the compiled-in default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CliOverrides {
    pub latitude_deg: Option<f64>,
    pub longitude_deg: Option<f64>,
    pub altitude_m: Option<f64>,
    pub utc_offset_hours: Option<f64>,
}

/// Error resolving configuration: a malformed `panchang.toml`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    message: String,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "config error: {}", self.message)
    }
}

impl Error for ConfigError {}

/// Resolve configuration from defaults, an optional `panchang.toml` at
/// `toml_path` (read only if it exists), and `overrides` (applied last).
pub fn resolve(toml_path: &Path, overrides: CliOverrides) -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    if toml_path.exists() {
        let text = std::fs::read_to_string(toml_path).map_err(|e| ConfigError {
            message: format!("reading {}: {e}", toml_path.display()),
        })?;
        let raw: RawConfig = toml::from_str(&text).map_err(|e| ConfigError {
            message: format!("parsing {}: {e}", toml_path.display()),
        })?;

        if let Some(loc) = raw.location {
            if let Some(v) = loc.latitude_deg {
                cfg.default_location.latitude_deg = v;
            }
            if let Some(v) = loc.longitude_deg {
                cfg.default_location.longitude_deg = v;
            }
            if let Some(v) = loc.altitude_m {
                cfg.default_location.altitude_m = v;
            }
            if let Some(v) = loc.utc_offset_hours {
                cfg.default_location.utc_offset_hours = v;
            }
        }
    }

    if let Some(v) = overrides.latitude_deg {
        cfg.default_location.latitude_deg = v;
    }
    if let Some(v) = overrides.longitude_deg {
        cfg.default_location.longitude_deg = v;
    }
    if let Some(v) = overrides.altitude_m {
        cfg.default_location.altitude_m = v;
    }
    if let Some(v) = overrides.utc_offset_hours {
        cfg.default_location.utc_offset_hours = v;
    }

    Ok(cfg)
}

/// Pretty-printed JSON view of a resolved config, for diagnostics.
pub fn to_json(cfg: &Config) -> String {
    let value = serde_json::json!({
        "default_location": {
            "latitude_deg": cfg.default_location.latitude_deg,
            "longitude_deg": cfg.default_location.longitude_deg,
            "altitude_m": cfg.default_location.altitude_m,
            "utc_offset_hours": cfg.default_location.utc_offset_hours,
        },
        "region_buffers": {
            "tamil_min": cfg.region_buffers.tamil_min,
            "malayalam_min": cfg.region_buffers.malayalam_min,
        },
    });
    serde_json::to_string_pretty(&value).unwrap_or_default()
}
