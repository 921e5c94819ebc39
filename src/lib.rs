//! salmap - Boolean Map saliency
//!
//! Command line front end for the `bms-core` saliency detector: PNG I/O,
//! YAML configuration and on-disk diagnostic artifacts.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
