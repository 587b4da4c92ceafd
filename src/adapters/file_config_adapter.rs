//! INI file configuration adapter.

use crate::domain::config_validation::parse_bool;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

#[derive(Debug)]
pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }

    /// An adapter with no sections, so every lookup falls back to defaults.
    pub fn empty() -> Self {
        Self { config: Ini::new() }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.config
            .get(section, key)
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn from_string_parses_sections() {
        let content = r#"
[display]
currency_symbol = €

[overview]
weight_by_units = true

[log]
level = info
"#;
        let adapter = FileConfigAdapter::from_string(content).unwrap();
        assert_eq!(
            adapter.get_string("display", "currency_symbol"),
            Some("€".to_string())
        );
        assert!(adapter.get_bool("overview", "weight_by_units", false));
        assert_eq!(adapter.get_string("log", "level"), Some("info".to_string()));
    }

    #[test]
    fn get_string_returns_none_for_missing_key() {
        let adapter = FileConfigAdapter::from_string("[display]\ncurrency_symbol = $\n").unwrap();
        assert_eq!(adapter.get_string("display", "missing"), None);
        assert_eq!(adapter.get_string("missing_section", "key"), None);
    }

    #[test]
    fn get_bool_true_and_false_spellings() {
        let adapter =
            FileConfigAdapter::from_string("[form]\na = true\nb = yes\nc = 0\nd = No\n").unwrap();
        assert!(adapter.get_bool("form", "a", false));
        assert!(adapter.get_bool("form", "b", false));
        assert!(!adapter.get_bool("form", "c", true));
        assert!(!adapter.get_bool("form", "d", true));
    }

    #[test]
    fn get_bool_returns_default_for_missing_or_garbage() {
        let adapter = FileConfigAdapter::from_string("[form]\nreject_negative = perhaps\n").unwrap();
        assert!(adapter.get_bool("form", "reject_negative", true));
        assert!(!adapter.get_bool("form", "missing", false));
    }

    #[test]
    fn empty_adapter_has_no_values() {
        let adapter = FileConfigAdapter::empty();
        assert_eq!(adapter.get_string("display", "currency_symbol"), None);
        assert!(adapter.get_bool("overview", "weight_by_units", true));
    }

    #[test]
    fn from_file_reads_config() {
        let file = create_temp_config("[form]\nreject_negative = yes\n");
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert!(adapter.get_bool("form", "reject_negative", false));
    }

    #[test]
    fn from_file_returns_error_for_missing_file() {
        let result = FileConfigAdapter::from_file("/nonexistent/path/gaintracker.ini");
        assert!(result.is_err());
    }
}
