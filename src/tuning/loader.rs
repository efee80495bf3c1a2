//! Tuning domain: optional RON override file loaded at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::GameTuning;

/// Location of the optional tuning override file.
pub const TUNING_PATH: &str = "assets/data/tuning.ron";

/// Error type for tuning load failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load the tuning override if present. A missing file means "use defaults";
/// a file that fails to read or parse is an error the caller must not
/// recover from.
pub fn load_tuning(path: &Path) -> Result<Option<GameTuning>, TuningLoadError> {
    if !path.exists() {
        return Ok(None);
    }

    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&contents)
        .map(Some)
        .map_err(|message| TuningLoadError {
            file: file_name,
            message,
        })
}

/// Parse a tuning document from RON text.
pub fn parse_tuning(contents: &str) -> Result<GameTuning, String> {
    ron_options()
        .from_str(contents)
        .map_err(|e| format!("Parse error: {}", e))
}
