//! Export options
//!
//! Metadata the exporters stamp into their documents: the producing
//! application, its version and homepage, and the TCX author block. Options
//! load from YAML; every key is optional.
//!
//! ```rust
//! use pulsetrail::ExportOptions;
//!
//! let yaml = "application_version: '2.1'\nbuild_time: fixed";
//! let options = ExportOptions::from_yaml_str(yaml).unwrap();
//! assert_eq!(options.version_parts(), ["2", "1", "0", "0"]);
//! assert_eq!(options.build_time.as_deref(), Some("fixed"));
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::{ConvertError, Result};

/// Build time embedded when no override is configured.
const DEFAULT_BUILD_TIME: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportOptions {
    pub application_name: String,
    pub application_version: String,
    pub homepage: String,
    /// TCX `Build/Builder`
    pub builder: String,
    /// TCX `Build/Type`
    pub build_type: String,
    /// TCX `Build/Time`; set it for reproducible output
    pub build_time: Option<String>,
    pub lang_id: String,
    pub part_number: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            application_name: env!("CARGO_PKG_NAME").to_string(),
            application_version: env!("CARGO_PKG_VERSION").to_string(),
            homepage: "https://github.com/pulsetrail/pulsetrail".to_string(),
            builder: "Pulsetrail Contributors".to_string(),
            build_type: "Release".to_string(),
            build_time: None,
            lang_id: "EN".to_string(),
            part_number: "434-F4C42-59".to_string(),
        }
    }
}

impl ExportOptions {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let options: Self = serde_yaml_ng::from_str(yaml)?;
        debug!(application = %options.application_name, "Loaded export options");
        Ok(options)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| ConvertError::file_error(path.to_path_buf(), e))?;
        Self::from_yaml_str(&yaml)
    }

    /// `"<name> <version>"`, as used in notes and creator strings.
    pub fn application(&self) -> String {
        format!("{} {}", self.application_name, self.application_version)
    }

    /// The application version split on `.`, padded with `"0"` to four parts.
    ///
    /// Parts beyond the fourth are dropped.
    pub fn version_parts(&self) -> [String; 4] {
        let mut parts = self.application_version.split('.').map(str::to_string);
        std::array::from_fn(|_| parts.next().unwrap_or_else(|| "0".to_string()))
    }

    pub fn build_time(&self) -> &str {
        self.build_time.as_deref().unwrap_or(DEFAULT_BUILD_TIME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_this_crate() {
        let options = ExportOptions::default();
        assert_eq!(options.application_name, "pulsetrail");
        assert_eq!(options.lang_id, "EN");
        assert_eq!(options.build_time(), DEFAULT_BUILD_TIME);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let options =
            ExportOptions::from_yaml_str("application_name: Bipolar\nbuilder: Someone\n").unwrap();
        assert_eq!(options.application_name, "Bipolar");
        assert_eq!(options.builder, "Someone");
        assert_eq!(options.build_type, "Release");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = ExportOptions::from_yaml_str("colour: blue\n");
        assert!(matches!(result, Err(ConvertError::Config { .. })));
    }

    #[test]
    fn version_parts_pad_and_truncate() {
        let mut options = ExportOptions { application_version: "0.5".into(), ..Default::default() };
        assert_eq!(options.version_parts(), ["0", "5", "0", "0"]);
        options.application_version = "1.2.3.4.5".into();
        assert_eq!(options.version_parts(), ["1", "2", "3", "4"]);
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.yaml");
        std::fs::write(&path, "homepage: https://example.org\nbuild_time: '2014-07-21'\n").unwrap();
        let options = ExportOptions::from_yaml_file(&path).unwrap();
        assert_eq!(options.homepage, "https://example.org");
        assert_eq!(options.build_time(), "2014-07-21");

        let missing = ExportOptions::from_yaml_file(dir.path().join("missing.yaml"));
        assert!(matches!(missing, Err(ConvertError::File { .. })));
    }
}
