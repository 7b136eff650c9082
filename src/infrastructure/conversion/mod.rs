mod command_converter;
mod inference_engine_factory;
mod model_check;
mod passthrough_converter;

pub use command_converter::{CommandConverter, CommandEngine};
pub use inference_engine_factory::InferenceEngineFactory;
pub use passthrough_converter::{PassthroughConverter, PassthroughEngine};
