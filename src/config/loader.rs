//! Configuration loading functionality.

use std::fs;
use std::path::Path;

use crate::calculation::SplitMode;
use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

impl EngineConfig {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/allocation.yaml")
    ///
    /// # Returns
    ///
    /// Returns an `EngineConfig` on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - Tip or gratuity is configured with a split mode other than `even`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use split_engine::config::EngineConfig;
    ///
    /// let config = EngineConfig::load("./config/allocation.yaml")?;
    /// # Ok::<(), split_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;

        let config: EngineConfig =
            serde_yaml::from_str(&contents).map_err(|err| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects split modes the engine does not implement.
    ///
    /// Tip and gratuity are always divided per head; only the tax split
    /// is selectable.
    pub fn validate(&self) -> EngineResult<()> {
        if self.splits.tip != SplitMode::Even {
            return Err(EngineError::UnsupportedSplitMode {
                field: "splits.tip".to_string(),
                mode: split_mode_name(self.splits.tip).to_string(),
            });
        }

        if self.splits.gratuity != SplitMode::Even {
            return Err(EngineError::UnsupportedSplitMode {
                field: "splits.gratuity".to_string(),
                mode: split_mode_name(self.splits.gratuity).to_string(),
            });
        }

        Ok(())
    }
}

fn split_mode_name(mode: SplitMode) -> &'static str {
    match mode {
        SplitMode::Even => "even",
        SplitMode::Proportional => "proportional",
    }
}
