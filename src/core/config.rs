//! core/config.rs
//!
//! There is no config file. Every knob the core uses lives here so the GUI and
//! the tests read them from one place.

use super::types::UNKNOWN_ARTIST;

/// Supported audio file extensions (compared case-insensitively).
pub const AUDIO_EXTENSIONS: [&str; 4] = ["mp3", "flac", "wav", "m4a"];

pub const PLAN_FILE_NAME: &str = "music_organization_plan.txt";
pub const OUTPUT_DIR_NAME: &str = "Organized";

#[derive(Debug, Clone)]
pub struct Settings {
    pub extensions: Vec<String>,
    pub plan_file_name: String,
    pub output_dir_name: String,
    pub unknown_artist: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            extensions: AUDIO_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            plan_file_name: PLAN_FILE_NAME.to_string(),
            output_dir_name: OUTPUT_DIR_NAME.to_string(),
            unknown_artist: UNKNOWN_ARTIST.to_string(),
        }
    }
}

impl Settings {
    pub fn is_supported_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}
