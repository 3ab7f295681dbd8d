//! Serialization of the final document and the all-or-nothing file write.

use crate::config::FileFormat;
use crate::error::{Error, Result};
use crate::swagger_builder::SwaggerDocument;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Serializes a swagger document to YAML.
///
/// # Errors
///
/// Returns [`Error::Serialization`] wrapping the underlying cause.
pub fn serialize_yaml(doc: &SwaggerDocument) -> Result<String> {
    debug!("Serializing swagger document to YAML");
    Ok(serde_yaml::to_string(doc)?)
}

/// Serializes a swagger document to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`Error::Serialization`] wrapping the underlying cause.
pub fn serialize_json(doc: &SwaggerDocument) -> Result<String> {
    debug!("Serializing swagger document to JSON");
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Writes the final document to `<output_dir>/<filename>` in the selected
/// format, returning the path of the written file.
///
/// The output directory is created immediately before the write if it does
/// not exist. The document is serialized fully in memory first and written
/// in a single call, so a failure never leaves a partial file behind.
///
/// # Arguments
///
/// * `doc` - The final document to write
/// * `output_dir` - Target directory for the generated file
/// * `filename` - Explicit filename override; defaults by format when `None`
/// * `format` - Output format selector
///
/// # Errors
///
/// Returns [`Error::OutputDirectory`] if the target exists as a
/// non-directory or cannot be created, and [`Error::Serialization`] if
/// encoding or the write itself fails.
pub fn write_swagger_file(
    doc: &SwaggerDocument,
    output_dir: &Path,
    filename: Option<&str>,
    format: FileFormat,
) -> Result<PathBuf> {
    if output_dir.exists() {
        if !output_dir.is_dir() {
            return Err(Error::OutputDirectory {
                path: output_dir.to_path_buf(),
                reason: "exists but is not a directory".to_string(),
            });
        }
    } else {
        debug!("Creating output directory {}", output_dir.display());
        fs::create_dir_all(output_dir).map_err(|e| Error::OutputDirectory {
            path: output_dir.to_path_buf(),
            reason: format!("could not be created: {}", e),
        })?;
    }

    let filename = filename.unwrap_or_else(|| format.default_filename());
    let target = output_dir.join(filename);

    let content = match format {
        FileFormat::Yaml => serialize_yaml(doc)?,
        FileFormat::Json => serialize_json(doc)?,
    };

    debug!("Writing {} bytes to {}", content.len(), target.display());
    fs::write(&target, &content).map_err(|e| Error::Serialization {
        message: format!("failed to write {}: {}", target.display(), e),
        source: Some(Box::new(e)),
    })?;

    Ok(target)
}
