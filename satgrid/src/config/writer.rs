//! INI serialization logic for converting `ConfigFile` → INI string.

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[source]
; Tile URL template. {{x}}, {{y}} and {{z}} are replaced (case-insensitively)
; with the tile column, row and zoom level.
url = {}

[view]
; Center of the loaded area in degrees (latitude -85.0511 to 85.0511)
latitude = {}
longitude = {}
; Zoom level (0-31)
zoom = {}
; Number of tile rings loaded around the center tile
blocks = {}

[cache]
; Base directory for cached tiles. Each tile source gets its own subdirectory.
directory = {}

[download]
; HTTP request timeout in seconds
timeout = {}
; Maximum concurrent tile downloads (1 = one at a time)
parallel = {}
"#,
        config.source.url,
        config.view.latitude,
        config.view.longitude,
        config.view.zoom,
        config.view.blocks,
        config.cache.directory.to_string_lossy(),
        config.download.timeout,
        config.download.parallel,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_contains_all_sections() {
        let output = to_config_string(&ConfigFile::default());

        for section in ["[source]", "[view]", "[cache]", "[download]"] {
            assert!(output.contains(section), "missing {section}");
        }
        assert!(output.contains("{z}/{x}/{y}"));
    }

    #[test]
    fn test_output_parses_back() {
        let mut config = ConfigFile::default();
        config.view.latitude = -12.5;
        config.download.parallel = 3;

        let ini = ini::Ini::load_from_str(&to_config_string(&config)).unwrap();
        let parsed = super::super::parser::parse_ini(&ini).unwrap();

        assert_eq!(parsed, config);
    }
}
