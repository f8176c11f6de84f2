//! Game configuration
//!
//! Settings are read from JSON. Every field has a default, so a config file
//! only needs the keys it wants to change:
//!
//! ```json
//! { "board_rows": 2, "board_columns": 2, "mismatch_delay_ms": 800 }
//! ```

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Config shipped next to the assets, used when no user config exists
const BUNDLED_CONFIG_PATH: &str = "assets/config/memory.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub title: String,
    pub board_rows: usize,
    pub board_columns: usize,
    /// How long a mismatched pair stays face up before flipping back
    pub mismatch_delay_ms: u64,
    /// Directory holding `image0.bmp`, `image1.bmp`, ...
    pub asset_dir: PathBuf,
    pub border_width: u32,
    /// Bitmap font scale for the score (1 = 5x7 pixel glyphs)
    pub score_scale: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_width: 500,
            window_height: 400,
            title: "Memory".to_string(),
            board_rows: 4,
            board_columns: 4,
            mismatch_delay_ms: 500,
            asset_dir: PathBuf::from("assets/images"),
            border_width: 3,
            score_scale: 8,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load the user's config, then the bundled one, then fall back to defaults
    pub fn load() -> Result<Self, GameError> {
        let user_config = dirs::config_dir().map(|p| p.join("memory/config.json"));

        let candidates = user_config
            .into_iter()
            .chain(std::iter::once(PathBuf::from(BUNDLED_CONFIG_PATH)));

        for path in candidates {
            if path.exists() {
                info!("Loading config from {}", path.display());
                return Self::load_from_file(&path);
            }
        }

        warn!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Number of distinct content images the board needs
    pub fn pair_count(&self) -> usize {
        self.board_rows * self.board_columns / 2
    }

    /// Total images to load: the hidden placeholder plus one per pair
    pub fn image_count(&self) -> usize {
        self.pair_count() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_loads_nine_images() {
        let config = GameConfig::default();
        assert_eq!(config.pair_count(), 8);
        // 2 x board_size + 1 for the classic 4x4 board
        assert_eq!(config.image_count(), 2 * 4 + 1);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "board_rows": 2, "board_columns": 2 }"#).unwrap();

        assert_eq!(config.board_rows, 2);
        assert_eq!(config.board_columns, 2);
        assert_eq!(config.mismatch_delay_ms, 500);
        assert_eq!(config.title, "Memory");
        assert_eq!(config.image_count(), 3);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let path = std::env::temp_dir().join(format!("memory_bad_config_{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();

        let result = GameConfig::load_from_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = GameConfig::load_from_file("definitely/not/here.json");
        assert!(matches!(result, Err(GameError::Io(_))));
    }
}
