//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use std::str::FromStr;

use ini::{Ini, Properties};

use super::defaults::expand_tilde;
use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::coord::{MAX_LAT, MAX_LON, MAX_ZOOM, MIN_LAT, MIN_LON};

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
/// Unknown sections and keys are ignored.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [source] section
    if let Some(section) = ini.section(Some("source")) {
        if let Some(v) = section.get("url") {
            let v = v.trim();
            if v.is_empty() {
                return Err(invalid("source", "url", v, "must not be empty"));
            }
            config.source.url = v.to_string();
        }
    }

    // [view] section
    if let Some(section) = ini.section(Some("view")) {
        if let Some(lat) = parse_value::<f64>(section, "view", "latitude", "must be a number")? {
            if !(MIN_LAT..=MAX_LAT).contains(&lat) {
                return Err(invalid(
                    "view",
                    "latitude",
                    &lat.to_string(),
                    "must be between -85.0511 and 85.0511",
                ));
            }
            config.view.latitude = lat;
        }
        if let Some(lon) = parse_value::<f64>(section, "view", "longitude", "must be a number")? {
            if !(MIN_LON..=MAX_LON).contains(&lon) {
                return Err(invalid(
                    "view",
                    "longitude",
                    &lon.to_string(),
                    "must be between -180 and 180",
                ));
            }
            config.view.longitude = lon;
        }
        if let Some(zoom) = parse_value::<u8>(section, "view", "zoom", "must be an integer 0-31")? {
            if zoom > MAX_ZOOM {
                return Err(invalid("view", "zoom", &zoom.to_string(), "must be an integer 0-31"));
            }
            config.view.zoom = zoom;
        }
        if let Some(blocks) =
            parse_value::<u32>(section, "view", "blocks", "must be a non-negative integer")?
        {
            config.view.blocks = blocks;
        }
    }

    // [cache] section
    if let Some(section) = ini.section(Some("cache")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.cache.directory = expand_tilde(v);
            }
        }
    }

    // [download] section
    if let Some(section) = ini.section(Some("download")) {
        if let Some(timeout) = parse_value::<u64>(
            section,
            "download",
            "timeout",
            "must be a positive integer (seconds)",
        )? {
            if timeout == 0 {
                return Err(invalid(
                    "download",
                    "timeout",
                    "0",
                    "must be a positive integer (seconds)",
                ));
            }
            config.download.timeout = timeout;
        }
        if let Some(parallel) =
            parse_value::<usize>(section, "download", "parallel", "must be a positive integer")?
        {
            if parallel == 0 {
                return Err(invalid(
                    "download",
                    "parallel",
                    "0",
                    "must be a positive integer",
                ));
            }
            config.download.parallel = parallel;
        }
    }

    Ok(config)
}

/// Parse an optional key, mapping parse failures to `InvalidValue`.
fn parse_value<T: FromStr>(
    section: &Properties,
    section_name: &str,
    key: &str,
    reason: &str,
) -> Result<Option<T>, ConfigFileError> {
    match section.get(key) {
        None => Ok(None),
        Some(v) => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| invalid(section_name, key, v, reason)),
    }
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
