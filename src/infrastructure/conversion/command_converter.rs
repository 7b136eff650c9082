use std::path::Path;
use std::process::{Command, Output};

use crate::application::ports::{Converter, ConverterError, InferenceEngine, ModelPaths};
use crate::domain::{ConversionParams, Waveform};
use crate::infrastructure::audio::wav_io::read_wav_file;

use super::model_check::ensure_model_readable;

/// Runs an external inference CLI once per segment.
///
/// Each argument is a template; `{model}`, `{index}`, `{input}`, `{output}`,
/// `{pitch}`, `{f0_method}`, `{index_rate}`, `{filter_radius}`,
/// `{resample_sr}`, `{rms_mix_rate}` and `{protect}` are substituted per call.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: String,
    args: Vec<String>,
}

impl CommandEngine {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl InferenceEngine for CommandEngine {
    fn name(&self) -> &str {
        "command"
    }

    fn new_session(&self) -> Box<dyn Converter> {
        Box::new(CommandConverter {
            program: self.program.clone(),
            args: self.args.clone(),
            model: None,
            params: ConversionParams::default(),
        })
    }
}

pub struct CommandConverter {
    program: String,
    args: Vec<String>,
    model: Option<ModelPaths>,
    params: ConversionParams,
}

impl CommandConverter {
    fn render_args(&self, model: &ModelPaths, input: &Path, output: &Path) -> Vec<String> {
        let index = model
            .index
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        let values = [
            ("{model}", model.checkpoint.display().to_string()),
            ("{index}", index),
            ("{input}", input.display().to_string()),
            ("{output}", output.display().to_string()),
            ("{pitch}", self.params.pitch_shift.to_string()),
            ("{f0_method}", self.params.f0_method.to_string()),
            ("{index_rate}", self.params.index_rate.to_string()),
            ("{filter_radius}", self.params.filter_radius.to_string()),
            ("{resample_sr}", self.params.resample_sr.to_string()),
            ("{rms_mix_rate}", self.params.rms_mix_rate.to_string()),
            ("{protect}", self.params.protect.to_string()),
        ];

        self.args
            .iter()
            .map(|arg| {
                values
                    .iter()
                    .fold(arg.clone(), |acc, (key, value)| acc.replace(key, value))
            })
            .collect()
    }
}

impl Converter for CommandConverter {
    fn load(&mut self, model: &ModelPaths) -> Result<(), ConverterError> {
        ensure_model_readable(model)?;
        self.model = Some(model.clone());
        Ok(())
    }

    fn configure(&mut self, params: &ConversionParams) {
        self.params = *params;
    }

    fn convert_file(&mut self, input: &Path, output: &Path) -> Result<Waveform, ConverterError> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| ConverterError::Inference("model not loaded".to_string()))?;

        let args = self.render_args(model, input, output);
        tracing::debug!(program = %self.program, args = ?args, "Running inference command");

        let result = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| {
                ConverterError::Inference(format!("failed to start {}: {}", self.program, e))
            })?;

        if !result.status.success() {
            return Err(ConverterError::Inference(format!(
                "{} exited with {}: {}",
                self.program,
                result.status,
                command_output_message(&result)
            )));
        }

        read_wav_file(output).map_err(|e| ConverterError::Inference(e.to_string()))
    }
}

fn command_output_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !stderr.is_empty() {
        return stderr;
    }
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
