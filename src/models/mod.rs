pub mod config;

pub use config::{
    ConfigOverrides, ElementShape, NormalizeMode, SaliencyConfig, CONFIG_ENV, DEFAULT_CONFIG_YAML,
};
