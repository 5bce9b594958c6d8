//! Generator configuration and the `icicle.toml` loader.
//!
//! Every field is defaulted so an absent or empty file yields the stock
//! Android setup.

use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Default file name looked up by [`load`].
pub const CONFIG_FILE: &str = "icicle.toml";

/// Default artifact suffix appended to the owner's name.
pub const DEFAULT_SUFFIX: &str = "$$Icicle";

/// Default base type selecting the view lifecycle template.
pub const DEFAULT_VIEW_BASE: &str = "android.view.View";

/// Default base type marking a class as parcelable.
pub const DEFAULT_PARCELABLE_BASE: &str = "android.os.Parcelable";

/// Default output directory for generated sources.
pub const DEFAULT_OUT_DIR: &str = "generated";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

///
/// Config
/// top-level `icicle.toml` document
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()
    }
}

///
/// GeneratorConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Appended to the owner's class path to name the companion.
    pub suffix: String,

    /// Prefix every bundle key with the companion's qualified name.
    pub namespace_keys: bool,

    /// Owners assignable to any of these use the view template.
    pub view_bases: Vec<String>,

    pub parcelable_base: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            namespace_keys: false,
            view_bases: vec![DEFAULT_VIEW_BASE.to_string()],
            parcelable_base: DEFAULT_PARCELABLE_BASE.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suffix.is_empty() {
            return Err(ConfigError::Invalid("generator.suffix is empty".to_string()));
        }
        if !self
            .suffix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '$' || c == '_')
        {
            return Err(ConfigError::Invalid(format!(
                "generator.suffix '{}' is not a valid identifier fragment",
                self.suffix
            )));
        }
        if self.view_bases.is_empty() {
            return Err(ConfigError::Invalid(
                "generator.view_bases must name at least one type".to_string(),
            ));
        }
        if let Some(base) = self.view_bases.iter().find(|base| base.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "generator.view_bases contains an empty entry: '{base}'"
            )));
        }
        if self.parcelable_base.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "generator.parcelable_base is empty".to_string(),
            ));
        }

        Ok(())
    }
}

///
/// OutputConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub out_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

/// Parse and validate a config document.
pub fn parse(source: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(source).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;

    Ok(config)
}

/// Load a config file, falling back to defaults when it does not exist.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    parse(&source, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse("", Path::new(CONFIG_FILE)).expect("empty config parses");

        assert_eq!(config, Config::default());
        assert_eq!(config.generator.suffix, "$$Icicle");
        assert_eq!(config.generator.view_bases, vec!["android.view.View"]);
    }

    #[test]
    fn partial_document_keeps_remaining_defaults() {
        let config = parse(
            "[generator]\nnamespace_keys = true\n\n[output]\nout_dir = \"build/gen\"\n",
            Path::new(CONFIG_FILE),
        )
        .expect("partial config parses");

        assert!(config.generator.namespace_keys);
        assert_eq!(config.generator.suffix, DEFAULT_SUFFIX);
        assert_eq!(config.output.out_dir, PathBuf::from("build/gen"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = parse("[generator]\nsufix = \"X\"\n", Path::new(CONFIG_FILE))
            .expect_err("typo must be rejected");

        assert!(matches!(err, ConfigError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn rejects_invalid_suffix_and_empty_view_bases() {
        let err = parse("[generator]\nsuffix = \"\"\n", Path::new(CONFIG_FILE))
            .expect_err("empty suffix must be rejected");
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = parse("[generator]\nsuffix = \"$$Ice-Cold\"\n", Path::new(CONFIG_FILE))
            .expect_err("dash is not an identifier character");
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = parse("[generator]\nview_bases = []\n", Path::new(CONFIG_FILE))
            .expect_err("view bases must be non-empty");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load(&dir.path().join(CONFIG_FILE)).expect("missing file is not an error");

        assert_eq!(config, Config::default());
    }

    #[test]
    fn loads_file_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[generator]\nview_bases = [\"android.view.View\", \"com.example.Widget\"]\n",
        )
        .expect("write config");

        let config = load(&path).expect("config loads");
        assert_eq!(config.generator.view_bases.len(), 2);
    }
}
