use std::sync::Arc;

use crate::application::ports::{ConverterError, InferenceEngine};
use crate::presentation::config::{ConversionSettings, ConverterProvider};

use super::command_converter::CommandEngine;
use super::passthrough_converter::PassthroughEngine;

pub struct InferenceEngineFactory;

impl InferenceEngineFactory {
    pub fn create(
        settings: &ConversionSettings,
    ) -> Result<Arc<dyn InferenceEngine>, ConverterError> {
        match settings.provider {
            ConverterProvider::Command => {
                if settings.program.trim().is_empty() {
                    return Err(ConverterError::ModelLoad(
                        "conversion.program is required for the command provider".to_string(),
                    ));
                }
                let engine = CommandEngine::new(settings.program.clone(), settings.args.clone());
                Ok(Arc::new(engine))
            }
            ConverterProvider::Passthrough => Ok(Arc::new(PassthroughEngine)),
        }
    }
}
