//! Configuration file loading utilities for the reflow pipeline.
//!
//! This module loads and saves [`PipelineConfig`] as TOML or JSON. Every
//! loaded configuration is validated before it is returned.

use crate::core::config::ConfigValidator;
use crate::core::errors::ReflowError;
use crate::pipeline::PipelineConfig;
use std::path::Path;

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Configuration loader for the reflow pipeline
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a file, auto-detecting the format from the extension
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// A Result containing the validated PipelineConfig or a ReflowError.
    /// A file that cannot be read surfaces as [`ReflowError::Io`].
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ocr_reflow::pipeline::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load_from_file(Path::new("reflow.toml"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load_from_file(path: &Path) -> Result<PipelineConfig, ReflowError> {
        let format = Self::format_of(path)?;

        let content = std::fs::read_to_string(path)?;

        Self::load_from_string(&content, format)
    }

    /// Load configuration from a string with specified format
    ///
    /// # Arguments
    ///
    /// * `content` - Configuration content as string
    /// * `format` - Configuration format
    ///
    /// # Returns
    ///
    /// A Result containing the validated PipelineConfig or a ReflowError
    pub fn load_from_string(
        content: &str,
        format: ConfigFormat,
    ) -> Result<PipelineConfig, ReflowError> {
        let config = match format {
            ConfigFormat::Toml => Self::load_from_toml(content)?,
            ConfigFormat::Json => Self::load_from_json(content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML string without validating it
    pub fn load_from_toml(content: &str) -> Result<PipelineConfig, ReflowError> {
        toml::from_str(content)
            .map_err(|e| ReflowError::config_error(format!("Failed to parse TOML config: {e}")))
    }

    /// Load configuration from JSON string without validating it
    pub fn load_from_json(content: &str) -> Result<PipelineConfig, ReflowError> {
        serde_json::from_str(content)
            .map_err(|e| ReflowError::config_error(format!("Failed to parse JSON config: {e}")))
    }

    /// Save configuration to a file, auto-detecting the format from the extension
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration to save
    /// * `path` - Path to save the configuration file
    ///
    /// # Returns
    ///
    /// A Result indicating success or a ReflowError; write failures surface
    /// as [`ReflowError::Io`].
    pub fn save_to_file(config: &PipelineConfig, path: &Path) -> Result<(), ReflowError> {
        let format = Self::format_of(path)?;

        let content = Self::save_to_string(config, format)?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save configuration to string with specified format
    pub fn save_to_string(
        config: &PipelineConfig,
        format: ConfigFormat,
    ) -> Result<String, ReflowError> {
        match format {
            ConfigFormat::Toml => Self::save_to_toml(config),
            ConfigFormat::Json => Self::save_to_json(config),
        }
    }

    /// Save configuration to TOML string
    pub fn save_to_toml(config: &PipelineConfig) -> Result<String, ReflowError> {
        toml::to_string_pretty(config).map_err(|e| {
            ReflowError::config_error(format!("Failed to serialize config to TOML: {e}"))
        })
    }

    /// Save configuration to JSON string
    pub fn save_to_json(config: &PipelineConfig) -> Result<String, ReflowError> {
        serde_json::to_string_pretty(config).map_err(|e| {
            ReflowError::config_error(format!("Failed to serialize config to JSON: {e}"))
        })
    }

    fn format_of(path: &Path) -> Result<ConfigFormat, ReflowError> {
        ConfigFormat::from_extension(path).ok_or_else(|| {
            ReflowError::config_error(format!(
                "Unsupported config file extension: {:?}",
                path.extension()
            ))
        })
    }
}
