use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

/// Startup configuration. Every field has a default, so the service runs with
/// no settings file at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub segmentation: SegmentationSettings,
    pub conversion: ConversionSettings,
    pub logging: LoggingSettings,
    pub limits: LimitSettings,
}

impl Settings {
    /// Layers `appsettings.<env>` (optional) under `APP_*` environment
    /// variables, e.g. `APP_SERVER__PORT=8080`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(" ")
                    .with_list_parse_key("conversion.args")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub artifact_dir: String,
    /// Artifacts older than this are deleted. `None` keeps everything.
    pub retention_secs: Option<u64>,
    pub sweep_interval_secs: u64,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            artifact_dir: "cloned_audio_files".to_string(),
            retention_secs: None,
            sweep_interval_secs: 3600,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SegmentationSettings {
    /// Granularity of segment boundaries. 1 cuts on milliseconds, 1000 on
    /// whole seconds.
    pub resolution_ms: u64,
}

impl Default for SegmentationSettings {
    fn default() -> Self {
        Self { resolution_ms: 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConverterProvider {
    Command,
    Passthrough,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConversionSettings {
    pub provider: ConverterProvider,
    pub program: String,
    pub args: Vec<String>,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        let args = [
            "-m", "rvc_python", "cli", "-i", "{input}", "-o", "{output}", "-mp", "{model}",
            "-ip", "{index}", "-pi", "{pitch}", "-me", "{f0_method}", "-ir", "{index_rate}",
            "-fr", "{filter_radius}", "-rsr", "{resample_sr}", "-rmr", "{rms_mix_rate}", "-pr",
            "{protect}",
        ];

        Self {
            provider: ConverterProvider::Command,
            program: "python".to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitSettings {
    pub max_upload_mb: usize,
}

impl LimitSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self { max_upload_mb: 512 }
    }
}
