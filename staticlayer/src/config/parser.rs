//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use std::path::PathBuf;

use ini::{Ini, Properties};

use super::file::{ConfigFile, ConfigFileError};
use crate::layer::LayerConfig;

/// Prefix of per-layer section names, e.g. `[layer.ortho]`.
const LAYER_SECTION_PREFIX: &str = "layer.";

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [http] section
    if let Some(section) = ini.section(Some("http")) {
        if let Some(v) = section.get("timeout_secs") {
            config.http.timeout_secs = match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(invalid("http", "timeout_secs", v, "must be a positive integer"));
                }
            };
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
    }

    // [layer.<id>] sections
    for (name, section) in ini.iter() {
        let Some(id) = name.and_then(|n| n.strip_prefix(LAYER_SECTION_PREFIX)) else {
            continue;
        };
        let layer = parse_layer(name.unwrap_or_default(), id, section)?;
        if config.layer(&layer.id).is_some() {
            return Err(invalid(name.unwrap_or_default(), "id", id, "duplicate layer"));
        }
        config.layers.push(layer);
    }

    Ok(config)
}

fn parse_layer(section_name: &str, id: &str, section: &Properties) -> Result<LayerConfig, ConfigFileError> {
    if id.trim().is_empty() {
        return Err(invalid(section_name, "id", id, "layer id must not be empty"));
    }

    let url = section
        .get("url")
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigFileError::MissingValue {
            section: section_name.to_string(),
            key: "url".to_string(),
        })?;

    let mut layer = LayerConfig::new(id.trim(), url);

    if let Some(v) = section.get("projection") {
        let v = v.trim();
        if !v.is_empty() {
            layer.projection = v.to_string();
        }
    }

    if let Some(v) = section.get("extent") {
        layer.extent = Some(parse_bounds(v).ok_or_else(|| {
            invalid(
                section_name,
                "extent",
                v,
                "must be four comma-separated numbers: west, east, south, north",
            )
        })?);
    }

    Ok(layer)
}

/// Parse `"w, e, s, n"` into four numbers.
pub fn parse_bounds(value: &str) -> Option<[f64; 4]> {
    let numbers = value
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect::<Option<Vec<_>>>()?;
    numbers.try_into().ok()
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<ConfigFile, ConfigFileError> {
        ConfigFile::parse(content)
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse(
            r#"
[http]
timeout_secs = 12

[logging]
directory = /var/log/staticlayer
file = tiles.log

[layer.ortho]
projection = EPSG:2154
extent = 0, 10, 0, 10
url = https://host/ortho/metadata.json

[layer.scan]
url = https://host/scan/metadata.json
"#,
        )
        .unwrap();

        assert_eq!(config.http.timeout_secs, 12);
        assert_eq!(config.logging.directory, PathBuf::from("/var/log/staticlayer"));
        assert_eq!(config.logging.file, "tiles.log");

        let ids: Vec<_> = config.layers.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["ortho", "scan"]);

        let ortho = config.layer("ortho").unwrap();
        assert_eq!(ortho.projection, "EPSG:2154");
        assert_eq!(ortho.extent, Some([0.0, 10.0, 0.0, 10.0]));

        let scan = config.layer("scan").unwrap();
        assert_eq!(scan.projection, "EPSG:4326");
        assert_eq!(scan.extent, None);
    }

    #[test]
    fn test_missing_url() {
        let result = parse("[layer.ortho]\nextent = 0, 1, 0, 1\n");
        assert!(matches!(
            result,
            Err(ConfigFileError::MissingValue { ref key, .. }) if key == "url"
        ));
    }

    #[test]
    fn test_invalid_extent() {
        let result = parse("[layer.ortho]\nurl = http://h/metadata.json\nextent = 0, 1, 0\n");
        assert!(matches!(
            result,
            Err(ConfigFileError::InvalidValue { ref key, .. }) if key == "extent"
        ));
    }

    #[test]
    fn test_invalid_timeout() {
        for value in ["0", "-3", "soon"] {
            let result = parse(&format!("[http]\ntimeout_secs = {}\n", value));
            assert!(matches!(result, Err(ConfigFileError::InvalidValue { .. })));
        }
    }

    #[test]
    fn test_unrelated_sections_are_ignored() {
        let config = parse("[cache]\nsize = 2GB\n[layers]\nurl = x\n").unwrap();
        assert!(config.layers.is_empty());
    }

    #[test]
    fn test_parse_bounds() {
        assert_eq!(parse_bounds("1,2,3,4"), Some([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(parse_bounds(" -1.5 , 2 , 3e2, 4 "), Some([-1.5, 2.0, 300.0, 4.0]));
        assert_eq!(parse_bounds("1,2,3"), None);
        assert_eq!(parse_bounds("1,2,3,4,5"), None);
        assert_eq!(parse_bounds("a,b,c,d"), None);
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/logs"), home.join("logs"));
        }
    }
}
