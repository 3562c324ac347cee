//! Providers configuration for declaring input files.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::InputError;
use crate::format::FormatRegistry;
use crate::provider::InputProvider;

/// Id reported for errors that concern the configuration as a whole.
const CONFIG_ID: &str = "<config>";

/// Configuration for a set of input providers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProvidersConfig {
    /// Input configurations
    #[serde(default)]
    pub inputs: Vec<InputConfig>,
}

/// Configuration for a single input file.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Unique identifier for this input
    pub id: String,
    /// Path of the input file
    pub path: PathBuf,
    /// Explicit mode: "jsonl", "yaml", etc. Inferred from the extension when absent.
    #[serde(default)]
    pub mode: Option<String>,
}

impl InputConfig {
    /// Create a new input configuration.
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            mode: None,
        }
    }

    /// Set the explicit mode.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// The mode to construct this input with.
    pub fn resolve_mode(&self, registry: &FormatRegistry) -> Result<String, InputError> {
        if let Some(mode) = &self.mode {
            return Ok(mode.clone());
        }
        registry
            .kind_for_path(&self.path)
            .map(|kind| kind.to_string())
            .ok_or_else(|| InputError::Config {
                id: self.id.clone(),
                message: format!(
                    "no mode given and none matches the extension of {}",
                    self.path.display()
                ),
                source: None,
            })
    }

    /// Build the provider for this input.
    pub fn build(&self, registry: &FormatRegistry) -> Result<InputProvider, InputError> {
        let mode = self.resolve_mode(registry)?;
        InputProvider::with_registry(&self.path, &mode, registry).map_err(|e| {
            InputError::Config {
                id: self.id.clone(),
                message: "could not create input provider".into(),
                source: Some(Box::new(e)),
            }
        })
    }
}

impl ProvidersConfig {
    /// Create a new empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an input configuration.
    pub fn add_input(mut self, input: InputConfig) -> Self {
        self.inputs.push(input);
        self
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self, InputError> {
        serde_json::from_str(s).map_err(|e| config_error(e.to_string()))
    }

    /// Parse a configuration from YAML text.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self, InputError> {
        serde_yaml::from_str(s).map_err(|e| config_error(e.to_string()))
    }

    /// Load a configuration file, choosing the parser by extension.
    ///
    /// Relative input paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| config_error(format!("cannot read {}: {e}", path.display())))?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let mut config = match ext.as_str() {
            "json" => Self::from_json_str(&text)?,
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Self::from_yaml_str(&text)?,
            other => {
                return Err(config_error(format!(
                    "unsupported configuration extension '{other}'"
                )));
            }
        };

        if let Some(base) = path.parent() {
            for input in &mut config.inputs {
                if input.path.is_relative() {
                    input.path = base.join(&input.path);
                }
            }
        }
        Ok(config)
    }

    /// Build every configured provider, stopping at the first failure.
    pub fn build_providers(
        &self,
        registry: &FormatRegistry,
    ) -> Result<Vec<(String, InputProvider)>, InputError> {
        self.inputs
            .iter()
            .map(|input| input.build(registry).map(|p| (input.id.clone(), p)))
            .collect()
    }
}

fn config_error(message: String) -> InputError {
    InputError::Config {
        id: CONFIG_ID.into(),
        message,
        source: None,
    }
}
