mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ConversionSettings, ConverterProvider, LimitSettings, LoggingSettings, SegmentationSettings,
    ServerSettings, Settings, StorageSettings,
};
