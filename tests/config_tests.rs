use std::io::Write;

use bluemarble::config::DemoConfig;

#[cfg(test)]
mod config_file_tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_partial_file() {
        let path = write_temp(
            "bluemarble_config_partial.json",
            r#"{ "cube": { "color": 16711680 }, "display": { "width": 320, "height": 240 } }"#,
        );
        let config = DemoConfig::load(&path).unwrap();

        assert_eq!(config.cube.color, 0xFF0000);
        assert_eq!(config.cube.fov_deg, 70.0);
        assert_eq!((config.display.width, config.display.height), (320, 240));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = DemoConfig::load(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let path = write_temp("bluemarble_config_bad.json", "{ \"globe\": ");
        assert!(DemoConfig::load(&path).is_err());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(DemoConfig::from_json(r#"{ "globe": { "fov_deg": 0.0 } }"#).is_err());
        assert!(DemoConfig::from_json(r#"{ "display": { "width": 0 } }"#).is_err());
        assert!(DemoConfig::from_json(r#"{ "cube": { "size": -1.0 } }"#).is_err());
    }

    #[test]
    fn test_default_config_round_trips_through_json() {
        let text = serde_json::to_string(&DemoConfig::default()).unwrap();
        assert_eq!(DemoConfig::from_json(&text).unwrap(), DemoConfig::default());
    }
}
