//! Configuration management for routesync
//!
//! Command-line arguments (with environment fallbacks) are parsed into
//! [`Cli`], then split into the [`SyncConfig`] that drives a run and the
//! [`TelemetryConfig`] used to set up logging.

pub mod desired_paths;

pub use desired_paths::DesiredPaths;

use crate::error::{Result, SyncError};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Name of the per-module route file
pub const MODULE_CONFIG_FILE: &str = "config.json";

/// Sync API Gateway routes with a module's config.json
#[derive(Debug, Clone, Parser)]
#[command(name = "routesync")]
#[command(about = "Sync API Gateway routes with a module's config.json")]
#[command(version)]
pub struct Cli {
    /// Module name, e.g. users or orders
    #[arg(long)]
    pub module: String,

    /// Deployment stage to publish
    #[arg(long, env = "STAGE", default_value = "prod")]
    pub stage: String,

    /// Display name of the shared REST API
    #[arg(long, default_value = "MainApiGateway")]
    pub api_name: String,

    /// Handler name prefix; the handler is `<prefix><module>`
    #[arg(long, default_value = "project-")]
    pub lambda_name_prefix: String,

    /// Directory holding one sub-directory per module
    #[arg(long, env = "MODULES_DIR", default_value = "modules")]
    pub modules_dir: PathBuf,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value = "text")]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum LogFormat {
    /// Compact single-line human-readable output
    #[default]
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default)]
pub struct TelemetryConfig {
    pub log_format: LogFormat,
}

/// Settings for one sync run
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub module: String,
    pub stage: String,
    pub api_name: String,
    pub lambda_name_prefix: String,
    pub modules_dir: PathBuf,
}

impl SyncConfig {
    /// Conventional handler name for the module
    pub fn handler_name(&self) -> String {
        format!("{}{}", self.lambda_name_prefix, self.module)
    }

    /// `<modules_dir>/<module>/config.json`
    pub fn config_path(&self) -> PathBuf {
        self.modules_dir.join(&self.module).join(MODULE_CONFIG_FILE)
    }
}

impl Cli {
    pub fn telemetry(&self) -> TelemetryConfig {
        TelemetryConfig {
            log_format: self.log_format,
        }
    }

    pub fn into_sync_config(self) -> Result<SyncConfig> {
        let module = self.module.trim().to_string();
        if module.is_empty() || module.contains(['/', '\\']) {
            return Err(SyncError::Config(format!(
                "invalid module name '{}'",
                self.module
            )));
        }
        if self.stage.trim().is_empty() {
            return Err(SyncError::Config("stage must not be empty".to_string()));
        }

        let modules_dir = std::path::absolute(&self.modules_dir).unwrap_or(self.modules_dir);

        Ok(SyncConfig {
            module,
            stage: self.stage,
            api_name: self.api_name,
            lambda_name_prefix: self.lambda_name_prefix,
            modules_dir,
        })
    }
}
