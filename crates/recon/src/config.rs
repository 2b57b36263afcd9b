use serde::Deserialize;

use crate::error::ReconError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CompareConfig {
    pub name: String,
    pub left: SourceConfig,
    pub right: SourceConfig,
    #[serde(default)]
    pub checks: CheckConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

// ---------------------------------------------------------------------------
// Source
// ---------------------------------------------------------------------------

/// One neighbor-finding run: a particle file and its neighbor file.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub label: String,
    pub particles: String,
    pub neighbors: String,
}

impl SourceConfig {
    /// File names the simulation writes for a method label:
    /// `particles<LABEL>.txt` and `neighbors<LABEL>.txt`.
    pub fn conventional(label: &str) -> Self {
        Self {
            label: label.to_string(),
            particles: format!("particles{label}.txt"),
            neighbors: format!("neighbors{label}.txt"),
        }
    }
}

// ---------------------------------------------------------------------------
// Checks + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckConfig {
    /// Fail when a neighbor entry is not mirrored by its counterpart.
    #[serde(default)]
    pub require_symmetric: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub json: Option<String>,
    #[serde(default)]
    pub links_csv: Option<String>,
    #[serde(default)]
    pub scene: Option<String>,
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl CompareConfig {
    pub fn from_toml(input: &str) -> Result<Self, ReconError> {
        let config: CompareConfig =
            toml::from_str(input).map_err(|e| ReconError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Config for the simulation's default output names, as used when no
    /// config file is given.
    pub fn conventional(left_label: &str, right_label: &str) -> Result<Self, ReconError> {
        let config = Self {
            name: format!("{left_label} vs {right_label}"),
            left: SourceConfig::conventional(left_label),
            right: SourceConfig::conventional(right_label),
            checks: CheckConfig::default(),
            output: OutputConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReconError> {
        if self.name.trim().is_empty() {
            return Err(ReconError::ConfigValidation("name must not be empty".into()));
        }

        for (side, source) in [("left", &self.left), ("right", &self.right)] {
            if source.label.trim().is_empty() {
                return Err(ReconError::ConfigValidation(format!("{side}: label must not be empty")));
            }
            if source.particles.trim().is_empty() {
                return Err(ReconError::ConfigValidation(format!(
                    "{side} '{}': particles path must not be empty",
                    source.label
                )));
            }
            if source.neighbors.trim().is_empty() {
                return Err(ReconError::ConfigValidation(format!(
                    "{side} '{}': neighbors path must not be empty",
                    source.label
                )));
            }
        }

        if self.left.label == self.right.label {
            return Err(ReconError::ConfigValidation(format!(
                "left and right share the label '{}'",
                self.left.label
            )));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
