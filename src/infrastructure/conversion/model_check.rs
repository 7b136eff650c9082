use std::path::Path;

use crate::application::ports::{ConverterError, ModelPaths};

/// Rejects checkpoints (and index files, when given) that are missing or empty.
pub fn ensure_model_readable(model: &ModelPaths) -> Result<(), ConverterError> {
    ensure_non_empty(&model.checkpoint, "checkpoint")?;
    if let Some(index) = &model.index {
        ensure_non_empty(index, "index")?;
    }
    Ok(())
}

fn ensure_non_empty(path: &Path, what: &str) -> Result<(), ConverterError> {
    let meta = std::fs::metadata(path)
        .map_err(|e| ConverterError::ModelLoad(format!("{} {}: {}", what, path.display(), e)))?;
    if !meta.is_file() || meta.len() == 0 {
        return Err(ConverterError::ModelLoad(format!(
            "{} {} is empty or not a file",
            what,
            path.display()
        )));
    }
    Ok(())
}
