use crate::error::ConfigError;
use bms_core::{Normalization, SaliencyOptions, StructuringElement};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "SALMAP_CONFIG";

/// Config file written by `salmap init`.
pub const DEFAULT_CONFIG_YAML: &str = "\
# salmap configuration
#
# Every key is optional; missing keys take the values shown here.

# Distance between consecutive thresholds on the 8-bit Lab scale
threshold_step: 8.0

# Erode/dilate iterations applied to each boolean map (0 disables)
opening_width: 2

# Dilation iterations applied to each attention map (0 disables)
dilation_width: 3

# Attention map normalization: l2 or min-max
normalize: l2

# Jitter flood-fill seeds inward to tolerate frames and borders
handle_border: false

# 3x3 structuring element for morphology: square or cross
structuring_element: square

# Fixed RNG seed; omit to seed from entropy
# seed: 42

# Process (channel, threshold, polarity) units on all cores
parallel: false

# Write every intermediate grid into this directory
# artifacts_dir: ./artifacts
";

/// How each attention map is normalized before accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizeMode {
    #[default]
    L2,
    MinMax,
}

impl From<NormalizeMode> for Normalization {
    fn from(mode: NormalizeMode) -> Self {
        match mode {
            NormalizeMode::L2 => Normalization::L2,
            NormalizeMode::MinMax => Normalization::MinMax,
        }
    }
}

/// Structuring element used by opening and dilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ElementShape {
    #[default]
    Square,
    Cross,
}

impl From<ElementShape> for StructuringElement {
    fn from(shape: ElementShape) -> Self {
        match shape {
            ElementShape::Square => StructuringElement::Square,
            ElementShape::Cross => StructuringElement::Cross,
        }
    }
}

/// Saliency configuration loaded from config.yaml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SaliencyConfig {
    pub threshold_step: f32,
    pub opening_width: u32,
    pub dilation_width: u32,
    pub normalize: NormalizeMode,
    pub handle_border: bool,
    pub structuring_element: ElementShape,
    pub seed: Option<u64>,
    pub parallel: bool,
    pub artifacts_dir: Option<PathBuf>,
}

impl Default for SaliencyConfig {
    fn default() -> Self {
        Self {
            threshold_step: 8.0,
            opening_width: 2,
            dilation_width: 3,
            normalize: NormalizeMode::L2,
            handle_border: false,
            structuring_element: ElementShape::Square,
            seed: None,
            parallel: false,
            artifacts_dir: None,
        }
    }
}

/// Values given on the command line. `None` keeps the file value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub threshold_step: Option<f32>,
    pub opening_width: Option<u32>,
    pub dilation_width: Option<u32>,
    pub normalize: Option<NormalizeMode>,
    pub handle_border: bool,
    pub structuring_element: Option<ElementShape>,
    pub seed: Option<u64>,
    pub parallel: bool,
    pub artifacts_dir: Option<PathBuf>,
}

impl SaliencyConfig {
    /// Load from `path`, else from `$SALMAP_CONFIG`, else use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match path.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::from_file(&path),
            None => {
                tracing::debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read and parse one YAML file. A missing file is an error.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let shown = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::NotFound(shown));
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: shown.clone(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: shown.clone(),
            source,
        })?;
        tracing::info!(path = %shown, "Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to a defaulted struct
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Apply command line overrides on top of the loaded values.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(step) = overrides.threshold_step {
            self.threshold_step = step;
        }
        if let Some(width) = overrides.opening_width {
            self.opening_width = width;
        }
        if let Some(width) = overrides.dilation_width {
            self.dilation_width = width;
        }
        if let Some(mode) = overrides.normalize {
            self.normalize = mode;
        }
        if let Some(shape) = overrides.structuring_element {
            self.structuring_element = shape;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.artifacts_dir.is_some() {
            self.artifacts_dir = overrides.artifacts_dir;
        }
        self.handle_border |= overrides.handle_border;
        self.parallel |= overrides.parallel;
    }

    /// Algorithm options for the detector.
    pub fn to_options(&self) -> SaliencyOptions {
        SaliencyOptions::new()
            .threshold_step(self.threshold_step)
            .opening_width(self.opening_width)
            .dilation_width(self.dilation_width)
            .normalization(self.normalize.into())
            .handle_border(self.handle_border)
            .structuring_element(self.structuring_element.into())
    }
}
