//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{GameplayDefaults, SUPPORTED_SCHEMA_VERSION};

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse gameplay defaults from RON text.
///
/// `file` is only used for error reporting.
pub fn parse_gameplay_defaults(
    contents: &str,
    file: &str,
) -> Result<GameplayDefaults, ContentLoadError> {
    let defaults: GameplayDefaults =
        ron_options()
            .from_str(contents)
            .map_err(|e| ContentLoadError {
                file: file.to_string(),
                message: format!("Parse error: {}", e),
            })?;

    if defaults.schema_version != SUPPORTED_SCHEMA_VERSION {
        return Err(ContentLoadError {
            file: file.to_string(),
            message: format!(
                "unsupported schema_version {} (expected {})",
                defaults.schema_version, SUPPORTED_SCHEMA_VERSION
            ),
        });
    }

    if let Some(field) = first_non_positive_duration(&defaults) {
        return Err(ContentLoadError {
            file: file.to_string(),
            message: format!("{} must be greater than zero", field),
        });
    }

    Ok(defaults)
}

/// Name of the first duration field that is zero or negative, if any.
///
/// Timers built from these values must have a non-zero period.
fn first_non_positive_duration(defaults: &GameplayDefaults) -> Option<&'static str> {
    let durations = [
        ("movement.run_frame_duration", defaults.movement.run_frame_duration),
        ("movement.idle_frame_duration", defaults.movement.idle_frame_duration),
        ("crouch.duration", defaults.crouch.duration),
        ("obstacles.spawn_interval", defaults.obstacles.spawn_interval),
        ("pursuit.recovery_seconds", defaults.pursuit.recovery_seconds),
        ("pursuit.hit_cooldown", defaults.pursuit.hit_cooldown),
    ];

    durations
        .into_iter()
        .find(|(_, seconds)| seconds.is_nan() || *seconds <= 0.0)
        .map(|(field, _)| field)
}

/// Load gameplay defaults from disk.
///
/// Returns `Ok(None)` when the file does not exist so callers can fall back
/// to built-in tuning.
pub fn load_gameplay_defaults(path: &Path) -> Result<Option<GameplayDefaults>, ContentLoadError> {
    if !path.exists() {
        return Ok(None);
    }

    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_gameplay_defaults(&contents, &file_name).map(Some)
}
